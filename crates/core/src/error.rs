//! Error types for the game core.

use thiserror::Error;

use crate::types::Tile;

/// Failures raised by core operations.
///
/// Neither variant is recoverable within a move: [`ErrorKind::BoardFull`] is
/// the loss signal of the spawn step, and [`ErrorKind::InvalidTile`] rejects
/// a grid before it ever reaches a game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No empty cell is left to spawn a tile into.
    #[error("board is full: no empty cell to spawn into")]
    BoardFull,

    /// A cell value that is neither 0 nor a power of two >= 2.
    #[error("invalid tile {value} at row {row}, col {col}")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

pub type Result<T> = std::result::Result<T, ErrorKind>;
