//! Course land plot

use super::codes::{WindDirection, WindSpeed};
use super::objects::PlacedObject;
use crate::types::Grid;

/// Plot grid width in cells
pub const PLOT_WIDTH: usize = 240;
/// Plot grid height in cells
pub const PLOT_HEIGHT: usize = 120;

/// The whole land parcel: course quote, wind, placed objects and the
/// terrain/elevation grids every hole is cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    /// Course quote shown in the game (at most [`QUOTE_CAPACITY`](super::QUOTE_CAPACITY) characters)
    pub quote: String,
    /// Raw wind direction code
    pub wind_direction: u8,
    /// Raw wind speed code
    pub wind_speed: u8,
    /// Placed objects (at most 241)
    pub objects: Vec<PlacedObject>,
    /// Terrain code per cell
    pub terrain: Grid,
    /// Elevation per cell
    pub elevation: Grid,
    /// Bytes 3..20, meaning unknown
    pub unknown_header: [u8; 17],
    /// Bytes 382..391, meaning unknown
    pub unknown_after_kinds: [u8; 9],
    /// Bytes 632..641, meaning unknown
    pub unknown_after_x: [u8; 9],
    /// Bytes 882..1011, meaning unknown
    pub unknown_tail: [u8; 129],
}

impl Plot {
    /// Create an empty plot: flat ground at mid elevation, no objects
    pub fn new() -> Self {
        Plot {
            quote: String::new(),
            wind_direction: 0,
            wind_speed: 0,
            objects: Vec::new(),
            terrain: Grid::filled(PLOT_WIDTH, PLOT_HEIGHT, 0),
            elevation: Grid::filled(PLOT_WIDTH, PLOT_HEIGHT, 128),
            unknown_header: [0; 17],
            unknown_after_kinds: [0; 9],
            unknown_after_x: [0; 9],
            unknown_tail: [0; 129],
        }
    }

    pub fn wind_speed(&self) -> WindSpeed {
        WindSpeed::from(self.wind_speed)
    }

    pub fn set_wind_speed(&mut self, speed: WindSpeed) {
        self.wind_speed = speed.into();
    }

    pub fn wind_direction(&self) -> WindDirection {
        WindDirection::from(self.wind_direction)
    }

    pub fn set_wind_direction(&mut self, direction: WindDirection) {
        self.wind_direction = direction.into();
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}
