//! Main menu tests.

use byd_cli::console::Key;
use byd_core::MemoryStore;

use crate::common::{FailingStore, ScriptedConsole, app, dictionary};

#[test]
fn test_menu_quits_on_q() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new().key('q');
    let mut app = app(console, &store, dictionary(27, &[]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("====== Welcome to BYD! ======"));
    assert!(output.contains("=== Build Your Dictionary ==="));
    assert!(output.contains("1. Search/Add word"));
    assert!(output.contains("Q. Exit"));
    assert_eq!(app.console().pending(), 0);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_menu_escape_is_not_a_choice() {
    let console = ScriptedConsole::new().special(Key::Esc).any_key().key('q');
    let mut app = app(console, MemoryStore::new(), dictionary(27, &[]));

    app.run().unwrap();

    assert!(
        app.console()
            .output()
            .contains("Invalid choice. Please enter 1, 2, 3 or Q.")
    );
    assert_eq!(app.console().pending(), 0);
}

#[test]
fn test_menu_rejects_unknown_key() {
    let console = ScriptedConsole::new().key('7').any_key().key('q');
    let mut app = app(console, MemoryStore::new(), dictionary(27, &[]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("Invalid choice. Please enter 1, 2, 3 or Q."));
    assert!(output.contains("Press any key to continue..."));
}

#[test]
fn test_interrupt_at_menu_ends_session() {
    let mut app = app(ScriptedConsole::new(), MemoryStore::new(), dictionary(27, &[]));

    assert!(app.run().is_ok());
}

#[test]
fn test_mode_error_is_reported_and_menu_resumes() {
    let console = ScriptedConsole::new()
        .key('1')
        .line("cherry")
        .line("체리")
        .any_key()
        .key('q');
    let mut app = app(console, FailingStore, dictionary(27, &[]));

    app.run().unwrap();

    let screens = app.console().screens();
    let report = screens
        .iter()
        .find(|s| s.contains("An error occurred:"))
        .expect("error screen");
    assert!(report.contains("I/O error on /data/dictionary.csv: disk full"));
    assert!(screens.last().unwrap().is_empty(), "screen is cleared on exit");
    assert_eq!(app.console().pending(), 0);
}
