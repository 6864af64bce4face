//! Placed objects: trees, buildings, tee boxes and pins

/// Maximum number of objects a plot or hole record can store.
pub const OBJECT_CAPACITY: usize = 241;

/// An object placed on a plot or hole grid.
///
/// Tee and pin descriptors share this shape. Coordinates are grid cells;
/// `kind` is the game's object code, kept verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlacedObject {
    pub kind: u8,
    pub x: u8,
    pub y: u8,
}

impl PlacedObject {
    /// Create a new placed object
    pub const fn new(kind: u8, x: u8, y: u8) -> Self {
        PlacedObject { kind, x, y }
    }
}
