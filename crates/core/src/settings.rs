//! Player settings threaded through the game state so they persist with it.
//!
//! The engine reads only `hold_enabled`. Everything else is for renderers
//! and input collaborators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{Binding, ShopItem, NEXT_QUEUE_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Neon,
    Retro,
}

impl Theme {
    /// Shop item that unlocks the theme. Classic is always available.
    pub fn unlocked_by(self) -> Option<ShopItem> {
        match self {
            Theme::Classic => None,
            Theme::Neon => Some(ShopItem::NeonTheme),
            Theme::Retro => Some(ShopItem::RetroTheme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub enabled: bool,
    /// 0..=100
    pub volume: u8,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 70,
        }
    }
}

/// Physical key name -> action. Key names are lowercase: single characters
/// (`"a"`, `" "` is written `"space"`) or named keys (`"left"`, `"enter"`, ...).
/// Names are lowercased on the way in, including when read from a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Binding>")]
pub struct KeyBindings(BTreeMap<String, Binding>);

impl From<BTreeMap<String, Binding>> for KeyBindings {
    fn from(raw: BTreeMap<String, Binding>) -> Self {
        let mut map = Self::empty();
        for (key, binding) in raw {
            map.bind(key, binding);
        }
        map
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<Binding> {
        self.0.get(key).copied()
    }

    pub fn bind(&mut self, key: impl Into<String>, binding: Binding) {
        self.0.insert(key.into().to_lowercase(), binding);
    }

    pub fn unbind(&mut self, key: &str) -> Option<Binding> {
        self.0.remove(&key.to_lowercase())
    }

    /// Keys bound to `binding`, in key order.
    pub fn keys_for(&self, binding: Binding) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(move |(_, b)| **b == binding)
            .map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = Self::empty();
        for key in ["left", "h", "a"] {
            map.bind(key, Binding::MoveLeft);
        }
        for key in ["right", "l", "d"] {
            map.bind(key, Binding::MoveRight);
        }
        for key in ["down", "j", "s"] {
            map.bind(key, Binding::SoftDrop);
        }
        for key in ["up", "k", "w", "x"] {
            map.bind(key, Binding::RotateCw);
        }
        for key in ["z", "y"] {
            map.bind(key, Binding::RotateCcw);
        }
        map.bind("space", Binding::HardDrop);
        map.bind("c", Binding::Hold);
        map.bind("p", Binding::Pause);
        map.bind("esc", Binding::Pause);
        map.bind("r", Binding::Reset);
        map.bind("enter", Binding::Start);
        map
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub ghost_piece: bool,
    pub hold_enabled: bool,
    /// How many queued pieces to display (1..=5).
    pub next_count: u8,
    pub theme: Theme,
    pub audio: AudioSettings,
    pub key_bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ghost_piece: true,
            hold_enabled: true,
            next_count: NEXT_QUEUE_LEN as u8,
            theme: Theme::Classic,
            audio: AudioSettings::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// `next_count` clamped to what the queue can show.
    pub fn visible_next(&self) -> usize {
        (self.next_count as usize).clamp(1, NEXT_QUEUE_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_every_action() {
        let keys = KeyBindings::default();
        for b in [
            Binding::MoveLeft,
            Binding::MoveRight,
            Binding::RotateCw,
            Binding::RotateCcw,
            Binding::SoftDrop,
            Binding::HardDrop,
            Binding::Hold,
            Binding::Pause,
            Binding::Reset,
            Binding::Start,
        ] {
            assert!(keys.keys_for(b).next().is_some(), "{b:?} unbound");
        }
        assert_eq!(keys.get("space"), Some(Binding::HardDrop));
    }

    #[test]
    fn bind_normalizes_case() {
        let mut keys = KeyBindings::empty();
        keys.bind("Q", Binding::Hold);
        assert_eq!(keys.get("q"), Some(Binding::Hold));
        assert_eq!(keys.unbind("q"), Some(Binding::Hold));
        assert!(keys.is_empty());
    }

    #[test]
    fn saved_key_names_are_lowercased() {
        let keys: KeyBindings =
            serde_json::from_str(r#"{"Space": "hardDrop", "LEFT": "moveLeft", "q": "hold"}"#)
                .unwrap();
        assert_eq!(keys.get("space"), Some(Binding::HardDrop));
        assert_eq!(keys.get("left"), Some(Binding::MoveLeft));
        assert_eq!(keys.get("q"), Some(Binding::Hold));
        assert_eq!(keys.get("Space"), None);

        let json = serde_json::to_value(&keys).unwrap();
        assert_eq!(json["space"], "hardDrop");
    }

    #[test]
    fn settings_json_shape() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["ghostPiece"], true);
        assert_eq!(json["nextCount"], 5);
        assert_eq!(json["theme"], "classic");
        assert_eq!(json["keyBindings"]["space"], "hardDrop");

        let partial: Settings = serde_json::from_str(r#"{"holdEnabled": false}"#).unwrap();
        assert!(!partial.hold_enabled);
        assert!(partial.ghost_piece);
    }

    #[test]
    fn visible_next_is_clamped() {
        let mut s = Settings::default();
        s.next_count = 0;
        assert_eq!(s.visible_next(), 1);
        s.next_count = 9;
        assert_eq!(s.visible_next(), NEXT_QUEUE_LEN);
    }
}
