//! Playable hole

use super::codes::WallStyle;
use super::objects::PlacedObject;
use crate::types::Grid;

/// Hole grid width in cells
pub const HOLE_WIDTH: usize = 240;
/// Hole grid height in cells
pub const HOLE_HEIGHT: usize = 80;
/// Tee positions per hole
pub const TEE_COUNT: usize = 4;
/// Pin positions per hole
pub const PIN_COUNT: usize = 5;

/// One of the 18 playable areas, with its own grids, objects, tees and pins.
///
/// Where the hole sits on the course plot is stored separately, in the
/// course's [`HoleRouting`](crate::routing::HoleRouting) for this hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    /// Hole quote (at most [`QUOTE_CAPACITY`](super::QUOTE_CAPACITY) characters)
    pub quote: String,
    /// Raw wall style code
    pub wall_style: u8,
    /// Placed objects (at most 241)
    pub objects: Vec<PlacedObject>,
    /// Tee descriptors; `kind` is usually 1..=4 but not consistently set
    pub tees: [PlacedObject; TEE_COUNT],
    /// Pin descriptors; `kind` is usually 1..=5 but not consistently set
    pub pins: [PlacedObject; PIN_COUNT],
    /// Terrain code per cell
    pub terrain: Grid,
    /// Elevation per cell
    pub elevation: Grid,
    /// Bytes 1..9, meaning unknown
    pub unknown_header: [u8; 8],
    /// Bytes 10..20, meaning unknown
    pub unknown_flags: [u8; 10],
    /// Bytes 891..1011, meaning unknown
    pub unknown_tail: [u8; 120],
}

impl Hole {
    /// Create an empty hole
    pub fn new() -> Self {
        Hole {
            quote: String::new(),
            wall_style: 0,
            objects: Vec::new(),
            tees: [PlacedObject::default(); TEE_COUNT],
            pins: [PlacedObject::default(); PIN_COUNT],
            terrain: Grid::filled(HOLE_WIDTH, HOLE_HEIGHT, 0),
            elevation: Grid::filled(HOLE_WIDTH, HOLE_HEIGHT, 128),
            unknown_header: [0; 8],
            unknown_flags: [0; 10],
            unknown_tail: [0; 120],
        }
    }

    pub fn wall_style(&self) -> WallStyle {
        WallStyle::from(self.wall_style)
    }

    pub fn set_wall_style(&mut self, style: WallStyle) {
        self.wall_style = style.into();
    }
}

impl Default for Hole {
    fn default() -> Self {
        Self::new()
    }
}
