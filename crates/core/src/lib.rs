//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the 4x4 sliding-tile puzzle: how rows
//! compact and merge, how the four directions map onto that one primitive,
//! where new tiles appear, and when the game is over. It has **no
//! dependencies** on terminals, input devices or any other I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a `Copy` grid
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the 4x4 [`Grid`] value with transpose/reflect helpers
//! - [`reduce`]: single-row compaction and merge (the only merge logic)
//! - [`moves`]: all four directions via transpose/reverse composition
//! - [`spawn`]: random 2/4 tile placement (20:1)
//! - [`detect`]: win and no-moves-left detection
//! - [`game_state`]: turn pipeline, score, move counter, undo checkpoint
//! - [`rng`]: seedable LCG used by the spawner
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, Grid};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut game = GameState::with_grid(grid, 12345);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.moves(), 1);
//! assert_eq!(outcome.status, GameStatus::Playing);
//! ```

pub mod board;
pub mod detect;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod reduce;
pub mod rng;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use detect::{evaluate, has_won, is_stuck};
pub use error::ErrorKind;
pub use game_state::{GameState, MoveOutcome};
pub use moves::{can_move, slide, MoveResult};
pub use reduce::reduce_row;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawn::{spawn_tile, spawn_value, Spawned};
