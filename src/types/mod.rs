//! Core value types: geometry, frames, grids and palettes

pub mod frame;
pub mod grid;
pub mod palette;
pub mod vector;

pub use frame::{Frame, HOLE_SCALE, PLOT_SCALE, TURN_UNITS};
pub use grid::Grid;
pub use palette::{Palette, TerrainPalette, PALETTE_BYTES};
pub use vector::{GridPoint, Vector2};
