//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, key mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid addressed as `(row, col)`, both in `0..4`,
//! with row 0 at the top and column 0 at the left.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns of the grid |
//! | `TARGET_TILE` | 2048 | Reaching this tile wins the game |
//! | `SPAWN_TWO_WEIGHT` | 20 | Relative weight of spawning a 2 |
//! | `SPAWN_FOUR_WEIGHT` | 1 | Relative weight of spawning a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, GRID_SIZE, TARGET_TILE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Slide(Direction::Up));
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(TARGET_TILE, 2048);
//! ```

/// Grid width and height in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game
pub const TARGET_TILE: Tile = 2048;

/// Relative weight of spawning a 2
pub const SPAWN_TWO_WEIGHT: u32 = 20;

/// Relative weight of spawning a 4
pub const SPAWN_FOUR_WEIGHT: u32 = 1;

/// A single cell value: 0 is empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// One row (or column, after transposition) of the grid.
pub type Row = [Tile; GRID_SIZE];

/// Returns true when `value` may legally sit in a cell.
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(1));
/// assert!(!is_valid_tile(6));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_game_constants() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(TARGET_TILE, 2048);
        assert_eq!(SPAWN_TWO_WEIGHT, 20);
        assert_eq!(SPAWN_FOUR_WEIGHT, 1);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("diagonal"), None);
    }

    #[test]
    fn status_messages() {
        assert_eq!(GameStatus::Won.message(), Some("You are win!"));
        assert_eq!(GameStatus::Lost.message(), Some("Game over"));
        assert_eq!(GameStatus::Quit.message(), Some("Bye!"));
        assert_eq!(GameStatus::Playing.message(), None);
        assert_eq!(GameStatus::Initializing.message(), None);
    }

    #[test]
    fn only_won_lost_quit_are_terminal() {
        assert!(!GameStatus::Initializing.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert!(GameStatus::Quit.is_terminal());
    }
}

/// Slide directions
///
/// Every direction is reduced to a left slide by reflecting and/or
/// transposing the grid:
/// - **Left**: rows as-is
/// - **Right**: rows reversed
/// - **Up**: grid transposed
/// - **Down**: grid transposed, then rows reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for the directions that work on columns (via transposition).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for the directions that reverse lines before reducing them.
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Player actions consumed by the game state one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in a direction
    Slide(Direction),
    /// Restore the single saved checkpoint
    Undo,
    /// End the game immediately
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("right"), Some(GameAction::Slide(Direction::Right)));
    /// assert_eq!(GameAction::from_str("undo"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("QUIT"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "undo" => Some(GameAction::Undo),
            "quit" => Some(GameAction::Quit),
            other => Direction::from_str(other).map(GameAction::Slide),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Slide(dir) => dir.as_str(),
            GameAction::Undo => "undo",
            GameAction::Quit => "quit",
        }
    }
}

/// Lifecycle of a single game
///
/// `Won`, `Lost` and `Quit` are terminal: once reached, the game ignores
/// every further action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Grid created, initial tiles not yet spawned
    Initializing,
    /// Accepting moves
    Playing,
    /// A tile reached [`TARGET_TILE`]
    Won,
    /// No direction changes the grid
    Lost,
    /// The player asked to leave
    Quit,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost | GameStatus::Quit)
    }

    /// Final message shown by the shell once the game ends.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::Won => Some("You are win!"),
            GameStatus::Lost => Some("Game over"),
            GameStatus::Quit => Some("Bye!"),
            GameStatus::Initializing | GameStatus::Playing => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Initializing => "initializing",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::Quit => "quit",
        }
    }
}
