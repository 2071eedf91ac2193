pub mod core {
	pub mod renderer;
	pub mod session;
	pub mod storage;
	pub mod terminal;
	pub mod words;
}

pub mod cli;
pub mod games;

// Re-export for convenience
pub use crate::games::hangman::{GuessOutcome, HangmanError, HangmanState, Letter, Reveal, Snapshot, Status};
