/// Hangman game module - pure state machine plus its renderer
pub mod error;
pub mod game;
pub mod renderer;
pub mod snapshot;

pub use error::HangmanError;
pub use game::{GuessOutcome, HangmanState, Letter, Reveal, Status};
pub use renderer::HangmanRenderer;
pub use snapshot::Snapshot;
