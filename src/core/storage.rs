/// Saved games on disk, one JSON file per name
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::games::hangman::{HangmanError, Snapshot};

/// Name used when the player doesn't pick one
pub const DEFAULT_SAVE_NAME: &str = "saved_game";

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct SaveStore {
    dir: PathBuf,
}

impl SaveStore {
    /// Open (and create if needed) the save directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create save directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saved game names, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("failed to list {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.locate(name).is_file()
    }

    /// Write a snapshot, returning the name it was stored under
    pub fn save(&self, name: &str, snapshot: &Snapshot) -> Result<String> {
        let name = normalize_name(name);
        let path = self.path_for(&name);
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
        info!(name = %name, path = %path.display(), "game saved");
        Ok(name)
    }

    /// Unparseable files surface as `HangmanError::CorruptSnapshot`
    pub fn load(&self, name: &str) -> Result<Snapshot> {
        let path = self.locate(name);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let snapshot = serde_json::from_str(&raw)
            .map_err(|e| HangmanError::CorruptSnapshot { reason: e.to_string() })
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), "snapshot loaded");
        Ok(snapshot)
    }

    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.locate(name);
        fs::remove_file(&path).with_context(|| format!("failed to delete {}", path.display()))?;
        info!(path = %path.display(), "save deleted");
        Ok(())
    }

    /// A name exactly as listed by `names` (saves written by hand or by older
    /// versions keep their stem), otherwise the normalized form `save` uses.
    /// Listed stems come from the directory itself, so they stay inside it.
    fn locate(&self, name: &str) -> PathBuf {
        let exact = name.trim();
        let listed = self
            .names()
            .map(|names| names.iter().any(|n| n == exact))
            .unwrap_or(false);
        if listed {
            self.path_for(exact)
        } else {
            self.path_for(&normalize_name(name))
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, EXTENSION))
    }
}

/// Trimmed and lower-cased; anything but letters, digits, `-` and `_`
/// becomes `_` so a name can never leave the save directory.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    if trimmed.is_empty() {
        return DEFAULT_SAVE_NAME.to_string();
    }
    trimmed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
