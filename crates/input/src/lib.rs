//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] through the
//! player's [`KeyBindings`](crate::core::KeyBindings). Key repeat is left to
//! the terminal.

pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use map::{key_name, map_key, should_quit};
