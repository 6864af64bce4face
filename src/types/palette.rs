//! Course colour palette

use std::fmt;

/// Number of palette entries.
pub const PALETTE_ENTRIES: usize = 256;

/// Size of the raw palette table in bytes (256 RGB triples).
pub const PALETTE_BYTES: usize = PALETTE_ENTRIES * 3;

/// Maps a terrain code to a display colour.
///
/// The editor front end owns the real terrain-to-colour mapping; this
/// crate only needs something it can ask for RGBA values.
pub trait TerrainPalette {
    /// RGBA colour for a terrain cell value
    fn rgba_for(&self, terrain_code: u8) -> [u8; 4];
}

/// The 256-entry RGB table stored at the end of a course record.
///
/// Values are kept byte-for-byte as found on disk.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    values: [u8; PALETTE_BYTES],
}

impl Palette {
    /// All-black palette
    pub fn new() -> Self {
        Palette {
            values: [0; PALETTE_BYTES],
        }
    }

    /// Build from the raw 768-byte table
    pub fn from_bytes(values: [u8; PALETTE_BYTES]) -> Self {
        Palette { values }
    }

    /// Raw 768-byte table
    pub fn as_bytes(&self) -> &[u8; PALETTE_BYTES] {
        &self.values
    }

    /// Mutable access to the raw table
    pub fn as_bytes_mut(&mut self) -> &mut [u8; PALETTE_BYTES] {
        &mut self.values
    }

    /// RGB triple of entry `index`
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        let i = index as usize * 3;
        [self.values[i], self.values[i + 1], self.values[i + 2]]
    }

    /// Replace entry `index`
    pub fn set_rgb(&mut self, index: u8, rgb: [u8; 3]) {
        let i = index as usize * 3;
        self.values[i..i + 3].copy_from_slice(&rgb);
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("entries", &PALETTE_ENTRIES)
            .finish_non_exhaustive()
    }
}

impl TerrainPalette for Palette {
    /// Direct index lookup, fully opaque.
    fn rgba_for(&self, terrain_code: u8) -> [u8; 4] {
        let [r, g, b] = self.rgb(terrain_code);
        [r, g, b, 255]
    }
}
