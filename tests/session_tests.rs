//! Whole sessions driven by scripted input.

use hangterm::core::session::{GameEnd, Session};
use hangterm::core::storage::SaveStore;
use hangterm::core::terminal::TerminalContext;
use hangterm::core::words::WordList;
use hangterm::{HangmanState, Snapshot, Status};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

struct Fixture {
    _dir: TempDir,
    store: SaveStore,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::open(dir.path().join("saved")).unwrap();
        Self { _dir: dir, store }
    }

    /// Run a session over `script` with "banana" as the only word
    fn run(&self, script: &str) -> String {
        let words = WordList::from_words(["banana"]).unwrap();
        let mut session = Session::new(
            script.as_bytes(),
            TerminalContext::new(Vec::new(), false),
            self.store.clone(),
            words,
            StdRng::seed_from_u64(42),
        );
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }
}

#[test]
fn test_new_game_won_then_declined() {
    let fx = Fixture::new();
    let out = fx.run("b\na\nn\nno\n");

    assert!(out.contains("Welcome to Hangman!"));
    assert!(out.contains("The word has 6 letters."));
    assert!(out.contains("b _ _ _ _ _"));
    assert!(out.contains("b a _ a _ a"));
    assert!(out.contains("You guessed it - great job! The word was 'banana'."));
    assert!(out.contains("Would you like to play again?"));
    assert!(out.ends_with("Ok, let's call it a day. Have a good one!\n"));
}

#[test]
fn test_rejections_are_reported_and_turn_is_retried() {
    let fx = Fixture::new();
    let out = fx.run("ab\n3\nb\nB\na\nn\n\n");

    assert!(out.contains("Oops! that's 2 letters."));
    assert!(out.contains("Ope, '3' is not an option."));
    assert!(out.contains("You already guessed b."));
    assert!(out.contains("great job"));
}

#[test]
fn test_lost_game_reveals_the_word() {
    let fx = Fixture::new();
    let out = fx.run("z\nq\nx\ny\nv\n2\n");

    assert!(out.contains("Hm, no z's."));
    assert!(out.contains("You ran out of turns. The word was 'banana'."));
    assert!(!out.contains("great job"));
}

#[test]
fn test_play_again_starts_a_fresh_game() {
    let fx = Fixture::new();
    let out = fx.run("b\na\nn\n1\nb\na\nn\nx\n");
    assert_eq!(out.matches("great job").count(), 2);
}

#[test]
fn test_save_then_resume_by_number() {
    let fx = Fixture::new();
    let out = fx.run("z\nb\nsave\nAlice\n");
    assert!(out.contains("Got it! Your game will be called alice."));
    assert!(!out.contains("Have a good one"));

    let saved = HangmanState::restore(fx.store.load("alice").unwrap()).unwrap();
    assert_eq!(saved.mask(), "b_____");
    assert_eq!(saved.wrong_remaining(), 4);
    assert_eq!(saved.turns_used(), 2);

    let out = fx.run("1\na\nn\n\n");
    assert!(out.contains("[1] alice"));
    assert!(out.contains("Picking up where you left off"));
    assert!(out.contains("z, b"));
    assert!(!out.contains("Welcome to Hangman!"));
    assert!(out.contains("great job"));
}

#[test]
fn test_unknown_save_asks_again_then_blank_starts_new() {
    let fx = Fixture::new();
    let state = HangmanState::new("kiwis").unwrap();
    fx.store.save("bob", &state.to_snapshot()).unwrap();

    let out = fx.run("carol\n\nb\na\nn\n\n");
    assert!(out.contains("I don't have any games saved for 'carol'."));
    assert!(out.contains("Welcome to Hangman!"));
    assert!(out.contains("The word was 'banana'"));
}

#[test]
fn test_corrupt_save_falls_back_to_new_game() {
    let fx = Fixture::new();
    let broken = Snapshot {
        word: "kiwi".into(),
        guesses_used: 0,
        wrong_guesses_remaining: 9,
        guessed_word: "____".into(),
        letters_already_guessed: vec![],
    };
    fx.store.save("broken", &broken).unwrap();

    let out = fx.run("broken\nb\na\nn\n\n");
    assert!(out.contains("Couldn't load 'broken'"));
    assert!(out.contains("Starting a new game instead."));
    assert!(out.contains("The word was 'banana'"));
}

#[test]
fn test_finished_save_is_announced_without_prompting() {
    let fx = Fixture::new();
    let won = Snapshot {
        word: "kiwi".into(),
        guesses_used: 3,
        wrong_guesses_remaining: 5,
        guessed_word: "kiwi".into(),
        letters_already_guessed: vec!["k".into(), "i".into(), "w".into()],
    };
    fx.store.save("done", &won).unwrap();

    let out = fx.run("done\n\n");
    assert!(out.contains("The word was 'kiwi'."));
    assert!(!out.contains("Pick a letter"));
}

#[test]
fn test_end_of_input_mid_game_quits_cleanly() {
    let fx = Fixture::new();
    let out = fx.run("b\n");
    assert!(out.contains("b _ _ _ _ _"));
    assert!(out.contains("Have a good one"));
    assert!(fx.store.names().unwrap().is_empty());
}

#[test]
fn test_play_returns_how_the_game_ended() {
    let fx = Fixture::new();
    let words = WordList::from_words(["banana"]).unwrap();
    let mut session = Session::new(
        "n\na\nb\n".as_bytes(),
        TerminalContext::new(Vec::new(), false),
        fx.store.clone(),
        words,
        StdRng::seed_from_u64(1),
    );

    let state = HangmanState::new("banana").unwrap();
    assert_eq!(session.play(state, false).unwrap(), GameEnd::Finished(Status::Won));
}

#[test]
fn test_hand_named_save_is_resumed_by_its_listed_name() {
    let fx = Fixture::new();
    let mut state = HangmanState::new("banana").unwrap();
    state.apply_guess(hangterm::Letter::new('b').unwrap()).unwrap();
    let json = serde_json::to_string(&state.to_snapshot()).unwrap();
    std::fs::write(fx.store.dir().join("Alice.json"), json).unwrap();

    let out = fx.run("Alice\na\nn\n\n");
    assert!(out.contains("[1] Alice"));
    assert!(out.contains("Picking up where you left off"));
    assert!(!out.contains("Couldn't load"));
    assert!(out.contains("great job"));
}
