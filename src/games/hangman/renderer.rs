/// Hangman-specific renderer - all player-facing wording lives here
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::game::{
    GuessOutcome, HangmanState, Letter, Reveal, Status, SAVE_COMMAND, WRONG_GUESS_ALLOWANCE,
};

#[derive(Debug, Default)]
pub struct HangmanRenderer;

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn render<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print_colored_line(&spaced(&state.mask()), TerminalColor::Yellow)?;
        ctx.empty_line()?;
        ctx.print("Wrong guesses left: ")?;
        ctx.print_colored_line(&state.wrong_remaining().to_string(), TerminalColor::Red)?;
        ctx.empty_line()
    }
}

impl HangmanRenderer {
    /// Rules and the save tip, shown before the first turn of a new game
    pub fn introduction<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print_colored_line(" <<>> Welcome to Hangman! <<>>", TerminalColor::Blue)?;
        ctx.empty_line()?;
        ctx.print_line("Your goal is to guess the word, one letter at a time:")?;
        ctx.print_colored(" - To win,", TerminalColor::Cyan)?;
        ctx.print_line(" guess the word before you run out of guesses")?;
        ctx.print(" - If you guess incorrectly ")?;
        ctx.print_colored(&WRONG_GUESS_ALLOWANCE.to_string(), TerminalColor::Red)?;
        ctx.print_line(" times, you lose")?;
        ctx.empty_line()?;
        ctx.print_colored_line(
            &format!("A tip before we start: type '{}' when asked for a letter to save your game.", SAVE_COMMAND),
            TerminalColor::Magenta,
        )?;
        ctx.empty_line()?;
        ctx.print_line(&format!("The word has {} letters.", state.secret_len()))
    }

    /// Where a resumed game left off
    pub fn recap<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print_line("Great! Picking up where you left off:")?;
        ctx.empty_line()?;
        ctx.print("  - Your word has ")?;
        ctx.print_colored_line(&format!("{} letters", state.secret_len()), TerminalColor::Green)?;
        ctx.print("  - Here are the letters you've already guessed: ")?;
        ctx.print_colored_line(&joined(state.guessed_letters()), TerminalColor::Cyan)?;
        ctx.print("  - You have ")?;
        ctx.print_colored(&format!("{} wrong guesses", state.wrong_remaining()), TerminalColor::Red)?;
        ctx.print_line(" left.")?;
        ctx.print("  - Here's your word so far: ")?;
        ctx.print_colored_line(&spaced(&state.mask()), TerminalColor::Yellow)?;
        ctx.empty_line()?;
        ctx.print_line(" You've got this!")
    }

    pub fn prompt<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print("Pick a letter... ")?;
        ctx.flush()
    }

    /// Explain why a guess was not taken. Accepted and save are no-ops here.
    pub fn rejection<W: Write>(
        &self,
        outcome: &GuessOutcome,
        state: &HangmanState,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        match outcome {
            GuessOutcome::AlreadyGuessed(letter) => {
                ctx.print_line(&format!(
                    "You already guessed {}. Here are all the letters you've guessed so far: {}",
                    letter,
                    joined(state.guessed_letters())
                ))
            }
            GuessOutcome::NotALetter(input) => {
                ctx.print_line(&format!("Ope, '{}' is not an option. You need to guess a letter.", input))
            }
            GuessOutcome::TooLong(input) => ctx.print_line(&format!(
                "Oops! that's {} letters. You need to choose just one letter.",
                input.chars().count()
            )),
            GuessOutcome::SaveRequested | GuessOutcome::Accepted(_) => Ok(()),
        }
    }

    pub fn reveal<W: Write>(
        &self,
        letter: Letter,
        reveal: &Reveal,
        state: &HangmanState,
        ctx: &mut TerminalContext<W>,
    ) -> io::Result<()> {
        ctx.empty_line()?;
        match reveal {
            Reveal::Hit { .. } => ctx.print_colored_line("That letter is in the word!", TerminalColor::Green),
            Reveal::Miss => {
                ctx.print_line(&format!("...  Hm, no {}'s.", letter))?;
                ctx.print("You have ")?;
                ctx.print_colored(&state.wrong_remaining().to_string(), TerminalColor::Red)?;
                ctx.print_line(" wrong guesses left.")
            }
        }
    }

    /// Final words for a finished game; nothing for one still in progress
    pub fn finale<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        let word = state.revealed_secret().unwrap_or_default();
        match state.status() {
            Status::Won => ctx.print_colored_line(
                &format!("You guessed it - great job! The word was '{}'.", word),
                TerminalColor::Green,
            ),
            Status::Lost => {
                ctx.print_colored_line(&format!("You ran out of turns. The word was '{}'.", word), TerminalColor::Red)?;
                ctx.print_line("Better luck next time!")
            }
            Status::InProgress => Ok(()),
        }
    }
}

fn spaced(mask: &str) -> String {
    mask.chars().map(String::from).collect::<Vec<_>>().join(" ")
}

fn joined(letters: &[Letter]) -> String {
    letters.iter().map(Letter::to_string).collect::<Vec<_>>().join(", ")
}
