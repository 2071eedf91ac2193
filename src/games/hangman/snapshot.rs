/// Flat save/resume form of a hangman game
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::games::hangman::error::HangmanError;
use crate::games::hangman::game::{
    parse_secret, HangmanState, Letter, Status, PLACEHOLDER, WRONG_GUESS_ALLOWANCE,
};

/// Persisted fields only. Status is never stored, restore always derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub word: String,
    pub guesses_used: u32,
    /// Signed so an out-of-range hand edit reports as corrupt, not as a parse error
    pub wrong_guesses_remaining: i64,
    pub guessed_word: String,
    pub letters_already_guessed: Vec<String>,
}

impl HangmanState {
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            word: self.secret.iter().collect(),
            guesses_used: self.turns_used,
            wrong_guesses_remaining: i64::from(self.wrong_remaining),
            guessed_word: self.mask(),
            letters_already_guessed: self.guessed.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Rebuild a game from a snapshot, checking it against itself first.
    ///
    /// Beyond the length and range checks, every mask position must agree with
    /// the guessed letters, so a restored game upholds the same invariants as
    /// one that was played up to this point.
    pub fn restore(snapshot: Snapshot) -> Result<Self, HangmanError> {
        let secret = parse_secret(&snapshot.word)
            .map_err(|e| HangmanError::corrupt(format!("bad word: {e}")))?;
        let mask: Vec<char> = snapshot.guessed_word.chars().collect();

        if mask.len() != secret.len() {
            return Err(HangmanError::corrupt(format!(
                "guessed_word has {} letters but word has {}",
                mask.len(),
                secret.len()
            )));
        }

        let wrong_remaining = u8::try_from(snapshot.wrong_guesses_remaining)
            .ok()
            .filter(|&n| n <= WRONG_GUESS_ALLOWANCE)
            .ok_or_else(|| {
                HangmanError::corrupt(format!(
                    "wrong_guesses_remaining {} is outside 0..={}",
                    snapshot.wrong_guesses_remaining, WRONG_GUESS_ALLOWANCE
                ))
            })?;

        let mut guessed: Vec<Letter> = Vec::with_capacity(snapshot.letters_already_guessed.len());
        for entry in &snapshot.letters_already_guessed {
            let mut chars = entry.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_lowercase() => Letter::new(c),
                _ => None,
            }
            .ok_or_else(|| HangmanError::corrupt(format!("{entry:?} is not a single letter")))?;

            if guessed.contains(&letter) {
                return Err(HangmanError::corrupt(format!("{letter} was guessed twice")));
            }
            guessed.push(letter);
        }

        for (i, (&s, &m)) in secret.iter().zip(&mask).enumerate() {
            let was_guessed = guessed.iter().any(|l| l.as_char() == s);
            let expected = if was_guessed { s } else { PLACEHOLDER };
            if m != expected {
                return Err(HangmanError::corrupt(format!(
                    "guessed_word position {i} is {m:?}, expected {expected:?}"
                )));
            }
        }

        let mut state = Self {
            secret,
            mask,
            guessed,
            wrong_remaining,
            turns_used: snapshot.guesses_used,
            status: Status::InProgress,
        };
        state.status = state.derive_status();
        debug!(status = ?state.status, wrong_remaining, "restored hangman game");
        Ok(state)
    }
}

impl From<&HangmanState> for Snapshot {
    fn from(state: &HangmanState) -> Self {
        state.to_snapshot()
    }
}

impl TryFrom<Snapshot> for HangmanState {
    type Error = HangmanError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        Self::restore(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::game::GuessOutcome;

    fn kiwi_snapshot() -> Snapshot {
        Snapshot {
            word: "kiwi".into(),
            guesses_used: 1,
            wrong_guesses_remaining: 4,
            guessed_word: "____".into(),
            letters_already_guessed: vec!["z".into()],
        }
    }

    #[test]
    fn restores_in_progress_kiwi() {
        let state = HangmanState::restore(kiwi_snapshot()).unwrap();
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.wrong_remaining(), 4);
        assert_eq!(state.turns_used(), 1);
        assert_eq!(state.mask(), "____");
        assert_eq!(state.classify("z"), GuessOutcome::AlreadyGuessed(Letter::new('z').unwrap()));
    }

    #[test]
    fn status_is_derived_not_trusted() {
        let won = Snapshot {
            guessed_word: "kiwi".into(),
            letters_already_guessed: vec!["k".into(), "i".into(), "w".into()],
            wrong_guesses_remaining: 0,
            ..kiwi_snapshot()
        };
        assert_eq!(HangmanState::restore(won).unwrap().status(), Status::Won);

        let lost = Snapshot { wrong_guesses_remaining: 0, ..kiwi_snapshot() };
        assert_eq!(HangmanState::restore(lost).unwrap().status(), Status::Lost);
    }

    #[test]
    fn rejects_inconsistent_snapshots() {
        let cases = [
            Snapshot { guessed_word: "___".into(), ..kiwi_snapshot() },
            Snapshot { wrong_guesses_remaining: 6, ..kiwi_snapshot() },
            Snapshot { wrong_guesses_remaining: -1, ..kiwi_snapshot() },
            Snapshot { word: "".into(), guessed_word: "".into(), ..kiwi_snapshot() },
            Snapshot { word: "KIWI".into(), ..kiwi_snapshot() },
            Snapshot { letters_already_guessed: vec!["zz".into()], ..kiwi_snapshot() },
            Snapshot { letters_already_guessed: vec!["z".into(), "z".into()], ..kiwi_snapshot() },
            Snapshot { guessed_word: "k___".into(), ..kiwi_snapshot() },
            Snapshot {
                letters_already_guessed: vec!["z".into(), "k".into()],
                ..kiwi_snapshot()
            },
        ];

        for snapshot in cases {
            assert!(
                matches!(
                    HangmanState::restore(snapshot.clone()),
                    Err(HangmanError::CorruptSnapshot { .. })
                ),
                "{snapshot:?} should be rejected"
            );
        }
    }

    #[test]
    fn huge_turn_count_does_not_overflow_on_next_guess() {
        let snapshot = Snapshot {
            guesses_used: u32::MAX,
            wrong_guesses_remaining: 5,
            letters_already_guessed: vec![],
            ..kiwi_snapshot()
        };
        let mut state = HangmanState::restore(snapshot).unwrap();

        let k = Letter::new('k').unwrap();
        state.apply_guess(k).unwrap();
        assert_eq!(state.turns_used(), u32::MAX);
        assert_eq!(state.mask(), "k___");
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn json_uses_flat_field_names() {
        let json = serde_json::to_value(kiwi_snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "kiwi",
                "guesses_used": 1,
                "wrong_guesses_remaining": 4,
                "guessed_word": "____",
                "letters_already_guessed": ["z"]
            })
        );
    }

    #[test]
    fn missing_fields_do_not_parse() {
        let raw = r#"{"word":"kiwi","guesses_used":1,"guessed_word":"____","letters_already_guessed":[]}"#;
        assert!(serde_json::from_str::<Snapshot>(raw).is_err());
    }
}
