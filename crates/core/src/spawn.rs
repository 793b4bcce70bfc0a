//! Tile spawning
//!
//! After every accepted move one new tile appears in a uniformly chosen empty
//! cell: a 2 with weight [`SPAWN_TWO_WEIGHT`], a 4 with weight
//! [`SPAWN_FOUR_WEIGHT`].

use crate::board::Grid;
use crate::error::{ErrorKind, Result};
use crate::rng::SimpleRng;
use crate::types::{Tile, SPAWN_FOUR_WEIGHT, SPAWN_TWO_WEIGHT};

const SPAWN_VALUES: [Tile; 2] = [2, 4];
const SPAWN_WEIGHTS: [u32; 2] = [SPAWN_TWO_WEIGHT, SPAWN_FOUR_WEIGHT];

/// Where a tile was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawned {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Draw the value of a new tile (2 or 4, 20:1).
pub fn spawn_value(rng: &mut SimpleRng) -> Tile {
    rng.weighted_index(&SPAWN_WEIGHTS)
        .map(|i| SPAWN_VALUES[i])
        .unwrap_or(SPAWN_VALUES[0])
}

/// Place one random tile into an empty cell of `grid`.
///
/// Fails with [`ErrorKind::BoardFull`] and leaves the grid untouched when no
/// cell is empty.
pub fn spawn_tile(grid: &mut Grid, rng: &mut SimpleRng) -> Result<Spawned> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return Err(ErrorKind::BoardFull);
    }

    let (row, col) = empty[rng.next_range(empty.len() as u32) as usize];
    let value = spawn_value(rng);
    grid.set(row, col, value);

    log::debug!("spawned {} at ({}, {})", value, row, col);
    Ok(Spawned { row, col, value })
}
