//! Search/Add mode tests.

use byd_core::MemoryStore;

use crate::common::{ScriptedConsole, app, dictionary, today};

#[test]
fn test_lookup_known_word() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('1')
        .line("Apple")
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[("apple", "사과; 능금", 4)]));

    app.run().unwrap();

    let screen = app
        .console()
        .screens()
        .iter()
        .find(|s| s.contains("=== Search Word ==="))
        .cloned()
        .unwrap();
    assert!(screen.contains("Apple => 사과; 능금"));
    assert!(screen.contains("Memory level: 4/27"));
    assert!(!screen.contains("Mastered!"));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_lookup_mastered_word() {
    let console = ScriptedConsole::new()
        .key('1')
        .line("apple")
        .any_key()
        .key('q');
    let mut app = app(
        console,
        MemoryStore::new(),
        dictionary(27, &[("apple", "사과", 27)]),
    );

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("Memory level: 27/27"));
    assert!(output.contains("✓ Mastered! (Excluded from quizzes)"));
}

#[test]
fn test_add_unknown_word() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('1')
        .line("  Cherry ")
        .line("체리  버찌")
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[("apple", "사과", 0)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("=== Add New Word: Cherry ==="));
    assert!(output.contains("Enter meanings (use spaces to separate): "));
    assert!(output.contains("Added: Cherry => 체리; 버찌"));

    assert_eq!(store.save_count(), 1);
    let saved = store.saved().unwrap();
    let entry = saved.lookup("cherry").unwrap();
    assert_eq!(entry.meanings, "체리; 버찌");
    assert_eq!(entry.memory.count, 0);
    assert_eq!(entry.memory.last_review, today());
    assert_eq!(app.dictionary().len(), 2);
}

#[test]
fn test_add_cancelled_with_q() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('1')
        .line("cherry")
        .line("체리 q")
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[("apple", "사과", 0)]));

    app.run().unwrap();

    assert_eq!(store.save_count(), 0);
    assert!(app.dictionary().lookup("cherry").is_none());
    assert_eq!(app.console().pending(), 0);
}

#[test]
fn test_invalid_word_is_reported() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('1')
        .line("abc1")
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[]));

    app.run().unwrap();

    assert!(app.console().output().contains("abc1 is an invalid word"));
    assert!(!app.console().output().contains("Add New Word"));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_empty_or_q_returns_to_menu() {
    let console = ScriptedConsole::new()
        .key('1')
        .line("")
        .key('1')
        .line("Q")
        .key('q');
    let mut app = app(console, MemoryStore::new(), dictionary(27, &[]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(!output.contains("=== Search Word ==="));
    assert!(!output.contains("Press any key"));
    assert_eq!(app.console().pending(), 0);
}
