/// Session driver: picks or resumes a game, runs the turn loop, saves on request
use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::core::renderer::GameRenderer;
use crate::core::storage::{normalize_name, SaveStore};
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::core::words::WordList;
use crate::games::hangman::{GuessOutcome, HangmanRenderer, HangmanState, Status};

/// Give up on the word list after this many rejected picks
const MAX_WORD_ATTEMPTS: usize = 100;

/// Answer to "play again?" that means yes
const PLAY_AGAIN: &str = "1";

/// How a single game handed control back to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Status),
    Saved(String),
    /// Input ran out mid-game
    Quit,
}

pub struct Session<R: BufRead, W: Write> {
    input: R,
    ctx: TerminalContext<W>,
    renderer: HangmanRenderer,
    store: SaveStore,
    words: WordList,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, ctx: TerminalContext<W>, store: SaveStore, words: WordList, rng: StdRng) -> Self {
        Self {
            input,
            ctx,
            renderer: HangmanRenderer,
            store,
            words,
            rng,
        }
    }

    /// Keep playing until the player saves, declines another round, or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(saves = %self.store.dir().display(), words = self.words.len(), "session started");
        loop {
            let Some((state, resumed)) = self.start_game()? else {
                return self.goodbye();
            };

            match self.play(state, resumed)? {
                GameEnd::Finished(status) => {
                    debug!(?status, "asking to play again");
                    if !self.play_again()? {
                        return self.goodbye();
                    }
                }
                GameEnd::Saved(name) => {
                    info!(%name, "session ended with a save");
                    return Ok(());
                }
                GameEnd::Quit => {
                    info!("input closed mid-game");
                    return self.goodbye();
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.ctx.into_inner()
    }

    /// New game, or resume one when saves exist. `None` when input ran out.
    fn start_game(&mut self) -> Result<Option<(HangmanState, bool)>> {
        let names = self.store.names()?;
        if names.is_empty() {
            return Ok(Some((self.new_game()?, false)));
        }

        self.ctx.empty_line()?;
        self.ctx.print_line("You have saved games. Choose a game to play:")?;
        self.ctx.empty_line()?;
        for (i, name) in names.iter().enumerate() {
            self.ctx.print_line(&format!("  - [{}] {}", i + 1, name))?;
        }

        loop {
            self.ctx.empty_line()?;
            self.ctx.print("Pick a number or a name, or press [ENTER] for a new game... ")?;
            self.ctx.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some((self.new_game()?, false)));
            }

            let Some(name) = pick_saved(&names, &answer) else {
                self.ctx.print_line(&format!("I don't have any games saved for '{}'.", answer))?;
                self.ctx.print_line("Please choose from the games shown - or press [ENTER] to start a new game.")?;
                continue;
            };

            return match self.resume(&name) {
                Ok(state) => Ok(Some((state, true))),
                Err(err) => {
                    warn!(%name, error = ?err, "could not resume saved game");
                    self.ctx.print_colored_line(
                        &format!("Couldn't load '{}' ({:#}). Starting a new game instead.", name, err),
                        TerminalColor::Red,
                    )?;
                    Ok(Some((self.new_game()?, false)))
                }
            };
        }
    }

    fn resume(&self, name: &str) -> Result<HangmanState> {
        let snapshot = self.store.load(name)?;
        let state = HangmanState::restore(snapshot)
            .with_context(|| format!("saved game '{}' is inconsistent", name))?;
        info!(%name, status = ?state.status(), "resumed saved game");
        Ok(state)
    }

    fn new_game(&mut self) -> Result<HangmanState> {
        for _ in 0..MAX_WORD_ATTEMPTS {
            let word = self.words.pick(&mut self.rng);
            match HangmanState::new(word) {
                Ok(state) => {
                    info!(len = state.secret_len(), "new game started");
                    return Ok(state);
                }
                Err(err) => warn!(error = %err, "secret rejected, picking another"),
            }
        }
        bail!("no usable secret word after {} attempts", MAX_WORD_ATTEMPTS)
    }

    /// The turn loop for one game
    pub fn play(&mut self, mut state: HangmanState, resumed: bool) -> Result<GameEnd> {
        if resumed {
            self.renderer.recap(&state, &mut self.ctx)?;
        } else if state.turns_used() == 0 {
            self.renderer.introduction(&state, &mut self.ctx)?;
        }
        self.renderer.render(&state, &mut self.ctx)?;

        while !state.status().is_over() {
            self.renderer.prompt(&mut self.ctx)?;
            let Some(input) = self.read_answer()? else {
                return Ok(GameEnd::Quit);
            };

            let outcome = state.classify(&input);
            debug!(?outcome, "classified input");
            match outcome {
                GuessOutcome::SaveRequested => {
                    let name = self.save(&state)?;
                    return Ok(GameEnd::Saved(name));
                }
                GuessOutcome::Accepted(letter) => {
                    let reveal = state.apply_guess(letter)?;
                    self.renderer.reveal(letter, &reveal, &state, &mut self.ctx)?;
                    self.renderer.render(&state, &mut self.ctx)?;
                }
                rejected => {
                    self.ctx.empty_line()?;
                    self.renderer.rejection(&rejected, &state, &mut self.ctx)?;
                    self.ctx.empty_line()?;
                }
            }
        }

        self.renderer.finale(&state, &mut self.ctx)?;
        info!(status = ?state.status(), turns = state.turns_used(), "game over");
        Ok(GameEnd::Finished(state.status()))
    }

    fn save(&mut self, state: &HangmanState) -> Result<String> {
        self.ctx.empty_line()?;
        self.ctx.print_line("What would you like to call this game? For example, your name.")?;
        self.ctx.print("> ")?;
        self.ctx.flush()?;

        let answer = self.read_answer()?.unwrap_or_default();
        let target = normalize_name(&answer);
        if self.store.exists(&target) {
            self.ctx.print_line(&format!("Replacing the earlier game called {}.", target))?;
        }
        let name = self.store.save(&answer, &state.to_snapshot())?;

        self.ctx.empty_line()?;
        self.ctx.print_line(&format!(
            "Got it! Your game will be called {}. Let's call it a day for now!",
            name
        ))?;
        Ok(name)
    }

    fn play_again(&mut self) -> Result<bool> {
        self.ctx.empty_line()?;
        self.ctx.print_line("Would you like to play again? Press '1' for yes and any other key to exit.")?;
        self.ctx.flush()?;
        Ok(self.read_answer()?.as_deref() == Some(PLAY_AGAIN))
    }

    fn goodbye(&mut self) -> Result<()> {
        self.ctx.empty_line()?;
        self.ctx.print_line("Ok, let's call it a day. Have a good one!")?;
        self.ctx.flush()?;
        Ok(())
    }

    /// One trimmed line, `None` on end of input
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// By exact name, then by normalized name, then by 1-based number
fn pick_saved(names: &[String], answer: &str) -> Option<String> {
    let wanted = normalize_name(answer);
    names
        .iter()
        .find(|n| n.as_str() == answer)
        .or_else(|| names.iter().find(|n| **n == wanted))
        .or_else(|| {
            answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| names.get(i))
        })
        .cloned()
}
