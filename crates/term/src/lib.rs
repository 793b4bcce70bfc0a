//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders into a simple
//! framebuffer that is flushed to a terminal backend, without any widget or
//! layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable (the view only reads a `GameState`)
//! - Keep the output sink injectable so rendering can be tested without a tty

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardRect, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
