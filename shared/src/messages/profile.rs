use std::fmt;

/// Spatial dimensionality of a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// 2D: x and y only
    Planar,
    /// 2.5D: adds a depth coordinate but no extra rotation axes
    Layered,
    /// 3D: full roll/pitch/yaw and spatial extent
    Spatial,
}

impl Dimension {
    pub fn has_depth(&self) -> bool {
        !matches!(self, Dimension::Planar)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Cursor,
    Object,
    Blob,
}

/// One of the nine tracked-entity profiles, each carried on its own address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Profile {
    Cursor2D,
    Cursor25D,
    Cursor3D,
    Object2D,
    Object25D,
    Object3D,
    Blob2D,
    Blob25D,
    Blob3D,
}

impl Profile {
    pub const ALL: [Profile; 9] = [
        Profile::Cursor2D,
        Profile::Cursor25D,
        Profile::Cursor3D,
        Profile::Object2D,
        Profile::Object25D,
        Profile::Object3D,
        Profile::Blob2D,
        Profile::Blob25D,
        Profile::Blob3D,
    ];

    pub fn address(&self) -> &'static str {
        match self {
            Profile::Cursor2D => "/tuio/2Dcur",
            Profile::Cursor25D => "/tuio/25Dcur",
            Profile::Cursor3D => "/tuio/3Dcur",
            Profile::Object2D => "/tuio/2Dobj",
            Profile::Object25D => "/tuio/25Dobj",
            Profile::Object3D => "/tuio/3Dobj",
            Profile::Blob2D => "/tuio/2Dblb",
            Profile::Blob25D => "/tuio/25Dblb",
            Profile::Blob3D => "/tuio/3Dblb",
        }
    }

    pub fn from_address(address: &str) -> Option<Profile> {
        Profile::ALL
            .iter()
            .copied()
            .find(|profile| profile.address() == address)
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Profile::Cursor2D | Profile::Object2D | Profile::Blob2D => Dimension::Planar,
            Profile::Cursor25D | Profile::Object25D | Profile::Blob25D => Dimension::Layered,
            Profile::Cursor3D | Profile::Object3D | Profile::Blob3D => Dimension::Spatial,
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Profile::Cursor2D | Profile::Cursor25D | Profile::Cursor3D => Family::Cursor,
            Profile::Object2D | Profile::Object25D | Profile::Object3D => Family::Object,
            Profile::Blob2D | Profile::Blob25D | Profile::Blob3D => Family::Blob,
        }
    }

    /// Short label used in logs, e.g. `2Dcur`.
    pub fn label(&self) -> &'static str {
        &self.address()["/tuio/".len()..]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
