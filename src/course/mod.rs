//! Course entities
//!
//! A [`Course`] owns everything the game loads for one course: the routing
//! summary of each hole, the palette, the [`Plot`], 18 [`Hole`]s and the
//! [`Panorama`]. Each of those maps onto one game file; see
//! [`crate::io::game_files`] for the file-name convention.

pub mod codes;
pub mod hole;
pub mod objects;
pub mod panorama;
pub mod plot;

pub use codes::{BoundsStyle, WallStyle, WindDirection, WindSpeed};
pub use hole::{Hole, HOLE_HEIGHT, HOLE_WIDTH, PIN_COUNT, TEE_COUNT};
pub use objects::{PlacedObject, OBJECT_CAPACITY};
pub use panorama::{Panorama, PANORAMA_HEIGHT, PANORAMA_WIDTH};
pub use plot::{Plot, PLOT_HEIGHT, PLOT_WIDTH};

use crate::routing::HoleRouting;
use crate::types::{Frame, Grid, Palette, TerrainPalette, Vector2, HOLE_SCALE, PLOT_SCALE};

/// Holes per course
pub const HOLE_COUNT: usize = 18;

/// Course name field width in the record
pub const NAME_FIELD_LEN: usize = 22;

/// Maximum course name length in characters; the field always keeps room
/// for the terminating null
pub const NAME_CAPACITY: usize = NAME_FIELD_LEN - 1;

/// Quote field width (plot and hole quotes)
pub const QUOTE_FIELD_LEN: usize = 121;

/// Maximum quote length in characters
pub const QUOTE_CAPACITY: usize = QUOTE_FIELD_LEN - 1;

/// Overlay flag bytes stored in the course record
pub const OVERLAY_COUNT: usize = 8;

/// A complete course.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Course name (at most [`NAME_CAPACITY`] characters)
    pub name: String,
    /// Where the course plot sits in the shared reference space.
    ///
    /// Editor state only; the course record has no field for it.
    pub placement: Frame,
    /// Par, frame and routing polyline of each hole
    pub routings: [HoleRouting; HOLE_COUNT],
    /// Record byte 40, meaning unknown
    pub unknown_40: u8,
    /// Raw out-of-bounds / rough byte, see [`BoundsStyle`]
    pub out_of_bounds: u8,
    /// Raw overlay bytes; their interpretation is left to the caller
    pub overlay: [u8; OVERLAY_COUNT],
    /// Colour table
    pub palette: Palette,
    /// Land plot
    pub plot: Plot,
    /// Hole grids and objects
    pub holes: [Hole; HOLE_COUNT],
    /// Background skyline
    pub panorama: Panorama,
}

impl Course {
    /// Create a new, empty course
    pub fn new() -> Self {
        Course {
            name: "Unnamed Course".to_string(),
            placement: Frame::default(),
            routings: std::array::from_fn(|_| HoleRouting::default()),
            unknown_40: 0,
            out_of_bounds: 0,
            overlay: [0; OVERLAY_COUNT],
            palette: Palette::new(),
            plot: Plot::new(),
            holes: std::array::from_fn(|_| Hole::new()),
            panorama: Panorama::new(),
        }
    }

    pub fn bounds_style(&self) -> BoundsStyle {
        BoundsStyle::from(self.out_of_bounds)
    }

    pub fn set_bounds_style(&mut self, style: BoundsStyle) {
        self.out_of_bounds = style.into();
    }

    /// Sum of all hole pars
    pub fn total_par(&self) -> u32 {
        self.routings.iter().map(|r| r.par as u32).sum()
    }

    /// Map a point from hole `index`'s pixel grid onto the course plot.
    ///
    /// Returns `None` if `index` is not a hole number (0-based).
    pub fn hole_to_plot(&self, index: usize, p: Vector2) -> Option<Vector2> {
        let routing = self.routings.get(index)?;
        Some(routing.frame.to_parent(p, HOLE_SCALE))
    }

    /// Map a course-plot point into hole `index`'s pixel grid.
    pub fn plot_to_hole(&self, index: usize, p: Vector2) -> Option<Vector2> {
        let routing = self.routings.get(index)?;
        Some(routing.frame.from_parent(p, HOLE_SCALE))
    }

    /// Map a course-plot point into the shared reference space
    pub fn plot_to_reference(&self, p: Vector2) -> Vector2 {
        self.placement.to_parent(p, PLOT_SCALE)
    }

    /// Map a reference-space point onto the course plot
    pub fn reference_to_plot(&self, p: Vector2) -> Vector2 {
        self.placement.from_parent(p, PLOT_SCALE)
    }

    /// Map a point from hole `index`'s pixel grid into the reference space
    pub fn hole_to_reference(&self, index: usize, p: Vector2) -> Option<Vector2> {
        self.hole_to_plot(index, p).map(|q| self.plot_to_reference(q))
    }

    /// Render a terrain grid to an RGBA buffer, four bytes per cell.
    pub fn render_terrain(grid: &Grid, palette: &impl TerrainPalette) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(grid.len() * 4);
        for &code in grid.as_bytes() {
            rgba.extend_from_slice(&palette.rgba_for(code));
        }
        rgba
    }
}

impl Default for Course {
    fn default() -> Self {
        Self::new()
    }
}
