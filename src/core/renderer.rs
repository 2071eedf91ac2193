/// Game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Draws a game state; the engine never formats text itself.
pub trait GameRenderer<State> {
    /// Render the board for the current state
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
