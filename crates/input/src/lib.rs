//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into
//! [`crate::types::GameAction`] values; there is no key-repeat handling
//! because the game is strictly turn-based.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
