//! Board module - the 4x4 tile grid
//!
//! The grid is a plain `Copy` value: moves produce a new grid instead of
//! mutating a shared one, so the live grid and the undo checkpoint can never
//! alias each other.
//! Coordinates: `(row, col)` where row 0 is the top and col 0 is the left.

use arrayvec::ArrayVec;

use crate::error::{ErrorKind, Result};
use crate::types::{is_valid_tile, Row, Tile, CELL_COUNT, GRID_SIZE};

/// The game grid - 4 rows x 4 columns of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    rows: [Row; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from raw rows, validating every cell.
    pub fn from_rows(rows: [Row; GRID_SIZE]) -> Result<Self> {
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(ErrorKind::InvalidTile {
                        row: r,
                        col: c,
                        value,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    pub(crate) fn from_rows_unchecked(rows: [Row; GRID_SIZE]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row; GRID_SIZE] {
        &self.rows
    }

    pub fn row(&self, r: usize) -> Option<Row> {
        self.rows.get(r).copied()
    }

    /// Get the tile at `(row, col)`; `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set the tile at `(row, col)`
    /// Returns false if out of bounds or the value is not a legal tile
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        if !is_valid_tile(value) {
            return false;
        }
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                out[c][r] = value;
            }
        }
        Self { rows: out }
    }

    /// Mirror every row left-to-right.
    pub fn reverse_rows(&self) -> Self {
        let mut out = self.rows;
        for row in &mut out {
            row.reverse();
        }
        Self { rows: out }
    }

    /// Coordinates of every empty cell, in row-major order.
    ///
    /// Stack-only, no allocation.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|v| v != 0)
    }

    pub fn contains(&self, value: Tile) -> bool {
        self.cells().any(|v| v == value)
    }

    /// Largest tile on the grid (0 when empty).
    pub fn max_tile(&self) -> Tile {
        self.cells().max().unwrap_or(0)
    }

    /// Sum of every tile.
    pub fn total(&self) -> u64 {
        self.cells().map(u64::from).sum()
    }

    /// True if two horizontally or vertically adjacent cells hold the same
    /// non-zero tile.
    #[cfg(test)]
    pub(crate) fn has_adjacent_pair(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.rows[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < GRID_SIZE && self.rows[r][c + 1] == v {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.rows[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Export as plain nested arrays (for rendering and assertions).
    pub fn to_array(&self) -> [Row; GRID_SIZE] {
        self.rows
    }
}
