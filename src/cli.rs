use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::session::Session;
use crate::core::storage::SaveStore;
use crate::core::terminal::TerminalContext;
use crate::core::words::WordList;

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "🎩 Hangman in your terminal, with save and resume")]
#[command(version)]
pub struct Cli {
    /// Word list file, whitespace separated (defaults to a built-in list)
    #[arg(short, long, global = true)]
    pub words: Option<PathBuf>,

    /// Directory holding saved games
    #[arg(short, long, global = true, default_value = "saved")]
    pub saves: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Where logs go (RUST_LOG controls the level)
    #[arg(long, global = true, default_value = "hangterm.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play, resuming a saved game if you like (the default)
    Play,
    /// List saved games
    List,
    /// Delete a saved game
    Delete {
        /// Name of the saved game
        name: String,
    },
}

/// Everything the game needs to know about its environment
#[derive(Debug, Clone)]
pub struct Settings {
    pub words: Option<PathBuf>,
    pub saves: PathBuf,
    pub color: bool,
    pub log_file: PathBuf,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            words: cli.words.clone(),
            saves: cli.saves.clone(),
            color: !cli.no_color,
            log_file: cli.log_file.clone(),
        }
    }
}

impl Settings {
    pub fn word_list(&self) -> Result<WordList> {
        match &self.words {
            Some(path) => WordList::load(path),
            None => Ok(WordList::builtin()),
        }
    }
}

pub fn run_cli(cli: Cli) -> Result<()> {
    let settings = Settings::from(&cli);
    let store = SaveStore::open(&settings.saves)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let words = settings.word_list()?;
            let stdin = io::stdin();
            let mut session = Session::new(
                stdin.lock(),
                TerminalContext::stdout(settings.color),
                store,
                words,
                StdRng::from_os_rng(),
            );
            session.run()
        }

        Commands::List => {
            let names = store.names()?;
            if names.is_empty() {
                println!("No saved games in {}", store.dir().display());
            } else {
                println!("🎮 Saved games:");
                for name in names {
                    println!("  • {}", name);
                }
            }
            Ok(())
        }

        Commands::Delete { name } => {
            if !store.exists(&name) {
                bail!("no saved game called '{}'", name);
            }
            store.remove(&name)?;
            info!(%name, "deleted from cli");
            println!("🗑️  Deleted {}", name);
            Ok(())
        }
    }
}
