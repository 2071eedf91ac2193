use std::fmt;

use tracing::debug;

use crate::games::hangman::error::HangmanError;

/// Wrong guesses a fresh game starts with
pub const WRONG_GUESS_ALLOWANCE: u8 = 5;

/// Shown for every position that has not been revealed yet
pub const PLACEHOLDER: char = '_';

/// Typed instead of a letter to suspend the game
pub const SAVE_COMMAND: &str = "save";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        self != Status::InProgress
    }
}

/// A single lower-case Latin letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Folds upper case; anything outside `a`-`z` gives `None`.
    pub fn new(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then_some(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a line of player input means for the current game.
///
/// Only `Accepted` may be passed on to [`HangmanState::apply_guess`]; the
/// rejections carry the offending input so the renderer can quote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    SaveRequested,
    AlreadyGuessed(Letter),
    NotALetter(String),
    TooLong(String),
    Accepted(Letter),
}

/// Result of applying an accepted letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal {
    /// Indices of the mask that were uncovered
    Hit { positions: Vec<usize> },
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanState {
    pub(crate) secret: Vec<char>,
    pub(crate) mask: Vec<char>,
    pub(crate) guessed: Vec<Letter>,
    pub(crate) wrong_remaining: u8,
    pub(crate) turns_used: u32,
    pub(crate) status: Status,
}

impl HangmanState {
    pub fn new(secret: &str) -> Result<Self, HangmanError> {
        let secret = parse_secret(secret)?;
        let mask = vec![PLACEHOLDER; secret.len()];
        debug!(len = secret.len(), "new hangman game");

        Ok(Self {
            secret,
            mask,
            guessed: Vec::new(),
            wrong_remaining: WRONG_GUESS_ALLOWANCE,
            turns_used: 0,
            status: Status::InProgress,
        })
    }

    /// Pure: never touches the state, only reads guessed letters.
    pub fn classify(&self, input: &str) -> GuessOutcome {
        let normalized = input.to_lowercase();

        if normalized == SAVE_COMMAND {
            return GuessOutcome::SaveRequested;
        }

        let mut chars = normalized.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(letter) = Letter::new(c) {
                if self.guessed.contains(&letter) {
                    return GuessOutcome::AlreadyGuessed(letter);
                }
            }
        }

        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return GuessOutcome::NotALetter(input.to_string());
        }

        if normalized.chars().count() != 1 {
            return GuessOutcome::TooLong(input.to_string());
        }

        match normalized.chars().next().and_then(Letter::new) {
            Some(letter) => GuessOutcome::Accepted(letter),
            None => GuessOutcome::NotALetter(input.to_string()),
        }
    }

    /// Apply a letter that `classify` accepted.
    ///
    /// A hit uncovers every matching position and costs nothing; a miss costs
    /// one wrong guess. Status is recomputed afterwards with Won checked first.
    pub fn apply_guess(&mut self, letter: Letter) -> Result<Reveal, HangmanError> {
        if self.status.is_over() {
            return Err(HangmanError::GameFinished { status: self.status });
        }

        self.guessed.push(letter);
        self.turns_used = self.turns_used.saturating_add(1);

        let positions: Vec<usize> = self
            .secret
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == letter.as_char())
            .map(|(i, _)| i)
            .collect();

        let reveal = if positions.is_empty() {
            self.wrong_remaining = self.wrong_remaining.saturating_sub(1);
            Reveal::Miss
        } else {
            for &i in &positions {
                self.mask[i] = letter.as_char();
            }
            Reveal::Hit { positions }
        };

        self.status = self.derive_status();
        debug!(%letter, ?reveal, wrong_remaining = self.wrong_remaining, status = ?self.status, "guess applied");
        Ok(reveal)
    }

    pub(crate) fn derive_status(&self) -> Status {
        if self.mask == self.secret {
            Status::Won
        } else if self.wrong_remaining == 0 {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn mask(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn wrong_remaining(&self) -> u8 {
        self.wrong_remaining
    }

    pub fn turns_used(&self) -> u32 {
        self.turns_used
    }

    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// The secret, but only once there is nothing left to guess
    pub fn revealed_secret(&self) -> Option<String> {
        self.status.is_over().then(|| self.secret.iter().collect())
    }
}

pub(crate) fn parse_secret(word: &str) -> Result<Vec<char>, HangmanError> {
    if word.is_empty() {
        return Err(HangmanError::InvalidWord {
            word: word.to_string(),
            reason: "word is empty",
        });
    }
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(HangmanError::InvalidWord {
            word: word.to_string(),
            reason: "only lower-case letters a-z are allowed",
        });
    }
    Ok(word.chars().collect())
}
