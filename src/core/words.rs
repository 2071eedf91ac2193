/// Candidate secret words
use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::info;

pub const MIN_WORD_LEN: usize = 5;
pub const MAX_WORD_LEN: usize = 12;

/// Used when no word file is configured
const BUILTIN_WORDS: &[&str] = &[
    "banana", "terminal", "network", "socket", "hangman", "example", "keyboard", "library",
    "compiler", "function", "variable", "pattern", "message", "journey", "thunder", "blanket",
    "lantern", "puzzle", "whisper", "garden", "picture", "harvest", "balloon", "capture",
    "diamond", "elephant", "festival", "quantity", "mountain", "notebook", "orchestra",
    "pyramid", "question", "rainbow", "sandwich", "triangle", "umbrella", "vacation",
    "wardrobe", "yesterday", "zeppelin", "chocolate", "adventure", "lighthouse",
];

#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Keep only words the game can use: 5 to 12 lower-case letters
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| is_playable(w))
            .collect();

        if words.is_empty() {
            bail!("no playable words ({}-{} lower-case letters)", MIN_WORD_LEN, MAX_WORD_LEN);
        }
        Ok(Self { words })
    }

    /// Whitespace-separated words, one file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        let list = Self::from_words(raw.split_whitespace())
            .with_context(|| format!("word list {} is unusable", path.display()))?;
        info!(path = %path.display(), count = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Never empty, from_words refuses that
        self.words.choose(rng).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_playable(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) && word.chars().all(|c| c.is_ascii_lowercase())
}
