//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer, and the renderer flushes it to the terminal with row diffs.
//! Board cells are two columns wide to offset the terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{dirty_span, encode_full_into, encode_rows_into, TerminalRenderer};
