//! Game state module - owns one game from setup to its terminal state
//!
//! This module ties together the grid, directional moves, tile spawning and
//! terminal detection. Every accepted move runs the same pipeline:
//! slide, commit, win check, spawn, loss check.

use crate::board::Grid;
use crate::detect::{evaluate, has_won, is_stuck};
use crate::moves::slide;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::spawn::{spawn_tile, Spawned};
use crate::types::{Direction, GameAction, GameStatus, Tile, TARGET_TILE};

/// What a single action did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// False for rejected actions (no-op slides, unavailable undo, any action
    /// after the game ended). A rejected action has no side effects.
    pub changed: bool,
    /// Score gained by merges during this action
    pub score_delta: u32,
    /// Tile added after the move, if one was placed
    pub spawned: Option<Spawned>,
    /// Status after the action; callers stop on a terminal status
    pub status: GameStatus,
}

impl MoveOutcome {
    fn rejected(status: GameStatus) -> Self {
        Self {
            changed: false,
            score_delta: 0,
            spawned: None,
            status,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Single undo level; overwritten, never stacked.
    checkpoint: Option<GameSnapshot>,
    score: u32,
    moves: u32,
    status: GameStatus,
    rng: SimpleRng,
    seed: u32,
    target: Tile,
    undo_enabled: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The grid starts empty; call [`GameState::start`] to place the first
    /// two tiles.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            checkpoint: None,
            score: 0,
            moves: 0,
            status: GameStatus::Initializing,
            rng: SimpleRng::new(seed),
            seed,
            target: TARGET_TILE,
            undo_enabled: true,
        }
    }

    /// Start playing from an arbitrary grid (puzzles, tests, benches).
    ///
    /// A grid that already holds the target starts as `Won`, one that no
    /// direction can change starts as `Lost`.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let mut state = Self::new(seed);
        state.grid = grid;
        state.checkpoint = Some(state.snapshot());
        state.status = evaluate(&grid, state.target).unwrap_or(GameStatus::Playing);
        state
    }

    /// Enable or disable undo.
    ///
    /// With undo disabled the checkpoint is still written once after setup,
    /// but it is never refreshed or restored.
    pub fn with_undo(mut self, enabled: bool) -> Self {
        self.undo_enabled = enabled;
        self
    }

    /// Spawn the two opening tiles and begin play
    pub fn start(&mut self) {
        if self.status != GameStatus::Initializing {
            return;
        }

        for _ in 0..2 {
            if spawn_tile(&mut self.grid, &mut self.rng).is_err() {
                self.finish(GameStatus::Lost);
                return;
            }
        }

        self.checkpoint = Some(self.snapshot());
        self.status = GameStatus::Playing;
        log::info!("game started (seed {})", self.seed);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn target(&self) -> Tile {
        self.target
    }

    pub fn undo_enabled(&self) -> bool {
        self.undo_enabled
    }

    pub fn checkpoint(&self) -> Option<&GameSnapshot> {
        self.checkpoint.as_ref()
    }

    /// Current grid, score and move count by value
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.grid, self.score, self.moves)
    }

    /// True if [`GameState::undo`] would change the game right now.
    pub fn can_undo(&self) -> bool {
        self.undo_enabled
            && self.status == GameStatus::Playing
            && self
                .checkpoint
                .is_some_and(|snap| snap != self.snapshot())
    }

    /// Slide in `direction` and run the rest of the turn.
    ///
    /// A slide that leaves the grid unchanged is rejected: no spawn, no
    /// score, no move counted.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome::rejected(self.status);
        }

        let result = slide(&self.grid, direction);
        if !result.changed(&self.grid) {
            return MoveOutcome::rejected(self.status);
        }

        if self.undo_enabled {
            self.checkpoint = Some(self.snapshot());
        }

        self.grid = result.grid;
        self.score += result.score;
        self.moves += 1;
        log::debug!(
            "move {} {}: +{} (score {})",
            self.moves,
            direction.as_str(),
            result.score,
            self.score
        );

        let spawned = self.spawn_or_finish();

        MoveOutcome {
            changed: true,
            score_delta: result.score,
            spawned,
            status: self.status,
        }
    }

    /// Restore the checkpoint. Returns true if anything changed.
    ///
    /// The checkpoint is consumed, so a second undo in a row does nothing.
    pub fn undo(&mut self) -> bool {
        if !self.undo_enabled || self.status != GameStatus::Playing {
            return false;
        }
        let Some(snap) = self.checkpoint.take() else {
            return false;
        };
        if snap == self.snapshot() {
            return false;
        }

        self.grid = snap.grid;
        self.score = snap.score;
        self.moves = snap.moves;
        log::debug!("undo to move {} (score {})", self.moves, self.score);
        true
    }

    /// End the game at the player's request.
    pub fn quit(&mut self) {
        if !self.status.is_terminal() {
            self.finish(GameStatus::Quit);
        }
    }

    /// Apply one player action
    pub fn apply_action(&mut self, action: GameAction) -> MoveOutcome {
        match action {
            GameAction::Slide(direction) => self.apply_move(direction),
            GameAction::Undo => {
                let changed = self.undo();
                MoveOutcome {
                    changed,
                    score_delta: 0,
                    spawned: None,
                    status: self.status,
                }
            }
            GameAction::Quit => {
                let changed = !self.status.is_terminal();
                self.quit();
                MoveOutcome {
                    changed,
                    score_delta: 0,
                    spawned: None,
                    status: self.status,
                }
            }
        }
    }

    /// Win is checked before a tile is placed; a full grid or a grid no
    /// direction can change afterwards is a loss.
    fn spawn_or_finish(&mut self) -> Option<Spawned> {
        if has_won(&self.grid, self.target) {
            self.finish(GameStatus::Won);
            return None;
        }

        match spawn_tile(&mut self.grid, &mut self.rng) {
            Ok(spawned) => {
                if is_stuck(&self.grid) {
                    self.finish(GameStatus::Lost);
                }
                Some(spawned)
            }
            Err(_) => {
                self.finish(GameStatus::Lost);
                None
            }
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        log::info!(
            "game {} after {} moves, score {}, best tile {}",
            status.as_str(),
            self.moves,
            self.score,
            self.grid.max_tile()
        );
    }

    #[cfg(test)]
    fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
