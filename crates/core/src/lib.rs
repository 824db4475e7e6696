//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is synchronous and free of I/O. A game is a single
//! [`GameState`] value; [`GameState::reduce`] turns it and one
//! [`GameAction`](types::GameAction) into the next value.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells and row clearing
//! - [`pieces`]: tetromino shapes for the four rotation states, spawn positions
//! - [`collision`]: the placement validity rule
//! - [`srs`]: rotation with ordered wall kicks
//! - [`rng`]: uniform piece generator and the five-piece next queue
//! - [`scoring`]: points, levels and the gravity speed curve
//! - [`game_state`]: the reducer
//! - [`scheduler`] / [`session`]: frame-driven gravity
//! - [`stats`], [`achievements`], [`shop`], [`settings`]: player progress
//! - [`snapshot`]: serializable view for storage
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece is drawn independently from the seven kinds
//! - **SRS rotation**: the first legal kick wins, a blocked rotation is a no-op
//! - **Immediate lock**: a piece locks as soon as it cannot fall further
//! - **Hold**: once per piece, reset on every lock
//! - **Scoring**: 40 / 100 / 300 / 1200 times the level, plus drop bonuses
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, Settings};
//! use blockfall_core::types::GameAction;
//!
//! let game = GameState::new(12345, Settings::default())
//!     .reduce(GameAction::Start)
//!     .reduce(GameAction::MoveRight)
//!     .reduce(GameAction::HardDrop);
//!
//! assert!(game.stats().score > 0); // hard drop awards points
//! ```

pub mod achievements;
pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scheduler;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod shop;
pub mod snapshot;
pub mod srs;
pub mod stats;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use achievements::Achievement;
pub use board::{Board, BoardGrid};
pub use collision::is_valid;
pub use game_state::{reduce, GameState, LockEvent, Tetromino};
pub use pieces::get_shape;
pub use rng::{NextQueue, SimpleRng};
pub use scheduler::{Clock, ManualClock, MonotonicClock, Scheduler};
pub use session::Session;
pub use settings::{AudioSettings, KeyBindings, Settings, Theme};
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use srs::try_rotate;
pub use stats::Stats;
