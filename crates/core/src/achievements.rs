//! Achievements unlocked by play. Once unlocked they are never removed.

use serde::{Deserialize, Serialize};

use crate::stats::Stats;
use crate::types::MAX_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// Clear a line.
    FirstClear,
    /// Clear four lines at once.
    FirstTetris,
    /// 100 lines in one game.
    Centurion,
    /// 10 000 points in one game.
    HighRoller,
    /// Reach the last speed tier.
    TopSpeed,
    /// 500 pieces in one game.
    Marathon,
}

impl Achievement {
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstClear,
        Achievement::FirstTetris,
        Achievement::Centurion,
        Achievement::HighRoller,
        Achievement::TopSpeed,
        Achievement::Marathon,
    ];

    pub fn is_met(self, stats: &Stats) -> bool {
        match self {
            Achievement::FirstClear => stats.lines_cleared >= 1,
            Achievement::FirstTetris => stats.tetrises >= 1,
            Achievement::Centurion => stats.lines_cleared >= 100,
            Achievement::HighRoller => stats.score >= 10_000,
            Achievement::TopSpeed => stats.level >= MAX_LEVEL,
            Achievement::Marathon => stats.pieces_spawned >= 500,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstClear => "First Clear",
            Achievement::FirstTetris => "Four at Once",
            Achievement::Centurion => "Centurion",
            Achievement::HighRoller => "High Roller",
            Achievement::TopSpeed => "Top Speed",
            Achievement::Marathon => "Marathon",
        }
    }
}

/// Add every newly met achievement to `stats`, returning how many were new.
pub fn unlock_met(stats: &mut Stats) -> usize {
    let mut unlocked = 0;
    for a in Achievement::ALL {
        if !stats.achievements.contains(&a) && a.is_met(stats) {
            log::info!("achievement unlocked: {}", a.title());
            stats.achievements.insert(a);
            unlocked += 1;
        }
    }
    unlocked
}
