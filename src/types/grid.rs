//! Fixed-size byte grids (terrain, elevation, panorama strips)

use crate::error::{JnseError, Result};

/// A `width × height` grid of one-byte cells stored row-major.
///
/// The cell count is fixed at construction; nothing can grow or shrink it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn filled(width: usize, height: usize, fill: u8) -> Self {
        Grid {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Wrap an existing buffer, which must hold exactly `width × height` bytes
    pub fn from_vec(width: usize, height: usize, cells: Vec<u8>) -> Result<Self> {
        if cells.len() != width * height {
            return Err(JnseError::MalformedRecord(format!(
                "grid of {width}x{height} needs {} bytes, got {}",
                width * height,
                cells.len()
            )));
        }
        Ok(Grid { width, height, cells })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Set the cell at column `x`, row `y`. Returns `false` if out of range.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> bool {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = value;
            true
        } else {
            false
        }
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Overwrite every cell from `src`, which must match the grid length
    pub fn copy_from(&mut self, src: &[u8]) -> Result<()> {
        if src.len() != self.cells.len() {
            return Err(JnseError::MalformedRecord(format!(
                "grid of {}x{} needs {} bytes, got {}",
                self.width,
                self.height,
                self.cells.len(),
                src.len()
            )));
        }
        self.cells.copy_from_slice(src);
        Ok(())
    }

    /// Set every cell to `value`
    pub fn fill(&mut self, value: u8) {
        self.cells.fill(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let g = Grid::filled(240, 80, 128);
        assert_eq!(g.len(), 19200);
        assert_eq!(g.get(239, 79), Some(128));
        assert_eq!(g.get(240, 0), None);
    }

    #[test]
    fn test_from_vec_rejects_mismatch() {
        assert!(Grid::from_vec(4, 2, vec![0; 8]).is_ok());
        assert!(matches!(
            Grid::from_vec(4, 2, vec![0; 7]),
            Err(JnseError::MalformedRecord(_))
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let mut g = Grid::filled(3, 2, 0);
        assert!(g.set(2, 1, 9));
        assert!(!g.set(3, 1, 9));
        assert_eq!(g.as_bytes(), &[0, 0, 0, 0, 0, 9]);
        assert_eq!(g.row(1), Some(&[0, 0, 9][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn test_copy_from() {
        let mut g = Grid::filled(2, 2, 0);
        g.copy_from(&[1, 2, 3, 4]).unwrap();
        assert_eq!(g.get(1, 1), Some(4));
        assert!(g.copy_from(&[1, 2, 3]).is_err());
    }
}
