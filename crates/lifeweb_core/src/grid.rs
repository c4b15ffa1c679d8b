//! Toroidal cell grid and the Life rule.

use crate::error::{LifeError, Result};
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Offsets of the 8 neighbours around a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// A single generation: `height` rows of `width` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    pub(crate) cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be non-zero and the
    /// cell count must fit in an `isize`.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let total = height
            .checked_mul(width)
            .filter(|&n| n > 0 && n <= isize::MAX as usize)
            .ok_or(LifeError::InvalidDimension { height, width })?;
        Ok(Self {
            height,
            width,
            cells: vec![false; total],
        })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the cell at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[self.index(x, y)]
    }

    /// Sets the cell at column `x`, row `y`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// 1 if the cell at the wrapped position is alive, else 0.
    ///
    /// Coordinates wrap with Euclidean remainder, so `-1` maps to the last
    /// column/row rather than staying negative.
    #[inline]
    pub fn neighbor_value(&self, x: isize, y: isize) -> u8 {
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        u8::from(self.cells[self.index(wx, wy)])
    }

    /// Live neighbours of `(x, y)` on the torus, excluding the cell itself.
    pub fn neighbor_count(&self, x: isize, y: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.neighbor_value(x.wrapping_add(dx), y.wrapping_add(dy)))
            .sum()
    }

    /// State of `(x, y)` in the following generation under B3/S23.
    pub fn next_cell_state(&self, x: usize, y: usize) -> bool {
        let n = self.neighbor_count(x as isize, y as isize);
        matches!((self.get(x, y), n), (true, 2) | (true, 3) | (false, 3))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Builds a grid from nested rows. All rows must share the first row's length.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(height, width)?;
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(LifeError::mismatch((height, width), (height, row.len())));
            }
            for (x, &alive) in row.iter().enumerate() {
                grid.set(x, y, alive);
            }
        }
        Ok(grid)
    }

    /// Debug text: one line per row, `'1'` for alive and `'0'` for dead.
    pub fn serialize_debug(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|&alive| if alive { '1' } else { '0' }).collect())
            .collect()
    }
}

/// Serialises as an array of rows, each an array of booleans.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
