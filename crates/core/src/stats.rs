//! Per-game counters plus the long-lived progress that survives a reset.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::types::ShopItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub score: u32,
    /// Starts at 1, never decreases within a game.
    pub level: u32,
    pub lines_cleared: u32,
    /// Number of 4-line clears.
    pub tetrises: u32,
    pub pieces_spawned: u32,
    /// Simulated play time: the sum of the gravity intervals ticked so far.
    pub elapsed_ms: u64,
    pub high_score: u32,
    pub achievements: BTreeSet<Achievement>,
    pub inventory: BTreeMap<ShopItem, u32>,
    pub currency: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines_cleared: 0,
            tetrises: 0,
            pieces_spawned: 0,
            elapsed_ms: 0,
            high_score: 0,
            achievements: BTreeSet::new(),
            inventory: BTreeMap::new(),
            currency: 0,
        }
    }
}

impl Stats {
    /// Stats for the next game: per-game counters zeroed, high score,
    /// achievements, inventory and currency kept.
    pub fn carry_over(&self) -> Self {
        Self {
            high_score: self.high_score.max(self.score),
            achievements: self.achievements.clone(),
            inventory: self.inventory.clone(),
            currency: self.currency,
            ..Self::default()
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn record_high_score(&mut self) {
        self.high_score = self.high_score.max(self.score);
    }

    pub fn owned(&self, item: ShopItem) -> u32 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }
}
