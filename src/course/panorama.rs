//! Background skyline strip

use crate::types::Grid;

/// Panorama width in pixel columns
pub const PANORAMA_WIDTH: usize = 1200;
/// Panorama height in pixel rows
pub const PANORAMA_HEIGHT: usize = 47;

/// Skyline image drawn behind the course, one palette index per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panorama {
    pub image: Grid,
}

impl Panorama {
    pub fn new() -> Self {
        Panorama {
            image: Grid::filled(PANORAMA_WIDTH, PANORAMA_HEIGHT, 128),
        }
    }
}

impl Default for Panorama {
    fn default() -> Self {
        Self::new()
    }
}
