use crate::board::Grid;

/// Undo checkpoint: a by-value copy of everything a move changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub moves: u32,
}

impl GameSnapshot {
    pub fn new(grid: Grid, score: u32, moves: u32) -> Self {
        Self { grid, score, moves }
    }
}
