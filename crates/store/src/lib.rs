//! On-disk persistence of [`GameSnapshot`]s as JSON.
//!
//! Writes go to a sibling temp file that is then renamed over the save, so a
//! crash mid-write leaves the previous save intact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

pub use blockfall_core as core;
pub use blockfall_types as types;

use crate::core::{GameSnapshot, GameState};

/// Overrides the default save location.
pub const SAVE_PATH_ENV: &str = "BLOCKFALL_SAVE";

const SAVE_FILE_NAME: &str = "save.json";
const FALLBACK_PATH: &str = "blockfall-save.json";

#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$BLOCKFALL_SAVE`, else `<data dir>/blockfall/save.json`, else a file
    /// in the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var(SAVE_PATH_ENV) {
            return PathBuf::from(path);
        }
        match dirs::data_dir() {
            Some(dir) => dir.join("blockfall").join(SAVE_FILE_NAME),
            None => PathBuf::from(FALLBACK_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the save. `Ok(None)` when there is none yet.
    pub fn load(&self) -> Result<Option<GameSnapshot>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let snapshot = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    pub fn save(&self, snapshot: &GameSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(snapshot).context("serializing snapshot")?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        debug!("saved to {}", self.path.display());
        Ok(())
    }

    /// Restore a fresh game from the save, or start from scratch when it is
    /// missing or unreadable.
    pub fn load_or_default(&self, seed: u32) -> GameState {
        match self.load() {
            Ok(Some(snapshot)) => GameState::restore(&snapshot, seed),
            Ok(None) => GameState::new(seed, Default::default()),
            Err(e) => {
                warn!("ignoring save file: {e:#}");
                GameState::new(seed, Default::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Settings;
    use crate::types::GameAction;
    use tempfile::tempdir;

    fn played() -> GameState {
        GameState::new(12345, Settings::default())
            .reduce(GameAction::Start)
            .reduce(GameAction::HardDrop)
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = SaveStore::new(dir.path().join("save.json"));
        assert!(store.load().unwrap().is_none());

        let state = store.load_or_default(1);
        assert!(!state.started());
        assert_eq!(state.stats().high_score, 0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = SaveStore::new(dir.path().join("nested").join("save.json"));
        let snapshot = played().snapshot();

        store.save(&snapshot).expect("Failed to save");
        assert_eq!(store.load().unwrap(), Some(snapshot.clone()));
        assert!(!dir.path().join("nested").join("save.json.tmp").exists());

        let restored = store.load_or_default(2);
        assert_eq!(restored.stats().high_score, snapshot.stats.score);
    }

    #[test]
    fn test_malformed_save_falls_back() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json").expect("Failed to write invalid save");

        let store = SaveStore::new(&path);
        assert!(store.load().is_err());
        let state = store.load_or_default(3);
        assert_eq!(state.stats().score, 0);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_overwrite_replaces_previous_save() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = SaveStore::new(dir.path().join("save.json"));
        let first = GameState::default().snapshot();
        let second = played().snapshot();

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
    }
}
