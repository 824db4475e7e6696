//! Serializable view of a game, for storage collaborators.
//!
//! A snapshot is write-mostly: [`GameState::restore`] reads back only the
//! stats and settings and always rebuilds the board, active piece and queue.

use serde::{Deserialize, Serialize};

use crate::board::BoardGrid;
use crate::game_state::{GameState, Tetromino};
use crate::settings::Settings;
use crate::stats::Stats;
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for PieceSnapshot {
    fn from(t: Tetromino) -> Self {
        Self {
            kind: t.kind,
            rotation: t.rotation,
            x: t.x,
            y: t.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub current_piece: Option<PieceSnapshot>,
    pub next_pieces: Vec<PieceKind>,
    pub hold_piece: Option<PieceKind>,
    pub can_hold: bool,
    pub game_over: bool,
    pub is_paused: bool,
    pub is_started: bool,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub settings: Settings,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board().to_grid(),
            current_piece: self.active().map(PieceSnapshot::from),
            next_pieces: self.next_queue().to_vec(),
            hold_piece: self.hold_piece(),
            can_hold: self.can_hold(),
            game_over: self.game_over(),
            is_paused: self.paused(),
            is_started: self.started(),
            stats: self.stats().clone(),
            settings: self.settings().clone(),
        }
    }

    /// Fresh not-started game seeded from a saved one: progress that survives
    /// a reset and the settings are kept, everything else starts over.
    pub fn restore(snapshot: &GameSnapshot, seed: u32) -> Self {
        GameState::new(seed, snapshot.settings.clone()).with_stats(snapshot.stats.carry_over())
    }
}
