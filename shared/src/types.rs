/// Globally unique identity of one tracked instance for its whole lifetime.
pub type SessionId = i64;
/// Compact, recyclable index given to anonymous entities (cursors, blobs).
pub type ComponentId = i32;
/// Stable externally provided tag identity of a tangible object.
pub type SymbolId = i32;
/// Frame sequence number carried by `fseq`, `0` meaning "unsequenced".
pub type FrameSequence = i32;

/// Component id carried by pending entities before their first commit.
pub const UNASSIGNED_COMPONENT_ID: ComponentId = -1;
