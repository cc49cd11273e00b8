/// Planar extent of a blob.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
    pub area: f32,
}

impl Shape {
    pub fn new(width: f32, height: f32, area: f32) -> Self {
        Self { width, height, area }
    }

    /// Whether width or height differ. Area alone does not count as a resize.
    pub fn is_resized(&self, other: &Shape) -> bool {
        self.width != other.width || self.height != other.height
    }
}

/// Spatial extent of a 3D blob.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shape3 {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub volume: f32,
}

impl Shape3 {
    pub fn new(width: f32, height: f32, depth: f32, volume: f32) -> Self {
        Self {
            width,
            height,
            depth,
            volume,
        }
    }

    /// Whether any dimension differs. Volume alone does not count as a resize.
    pub fn is_resized(&self, other: &Shape3) -> bool {
        self.width != other.width || self.height != other.height || self.depth != other.depth
    }
}
