/// Errors raised by the hangman engine
use derive_more::{Display, Error};

use crate::games::hangman::game::Status;

/// Fatal to the single construction/restore/apply attempt that raised it.
/// Rejected guesses are not errors, see `GuessOutcome`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HangmanError {
    /// The secret handed to `HangmanState::new` is unusable.
    #[display("invalid secret word {word:?}: {reason}")]
    InvalidWord { word: String, reason: &'static str },

    /// A snapshot could not be turned back into a consistent game.
    #[display("corrupt snapshot: {reason}")]
    CorruptSnapshot { reason: String },

    /// Won and Lost are terminal.
    #[display("game is already over ({status:?})")]
    GameFinished { status: Status },
}

impl HangmanError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::CorruptSnapshot { reason: reason.into() }
    }
}
