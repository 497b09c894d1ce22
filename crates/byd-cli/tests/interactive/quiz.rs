//! Quiz mode tests.

use byd_core::MemoryStore;

use crate::common::{FailingStore, ScriptedConsole, app, dictionary, today};

#[test]
fn test_all_mastered() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new().key('2').any_key().key('q');
    let mut app = app(console, &store, dictionary(3, &[("apple", "사과", 3)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("=== Vocabulary Quiz ==="));
    assert!(output.contains("All words have been mastered! 🎉"));
    assert!(output.contains("No words need review."));
    assert!(!output.contains("Quiz Results"));
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_question_screen() {
    let console = ScriptedConsole::new().key('2').key('q').any_key().key('q');
    let mut app = app(
        console,
        MemoryStore::new(),
        dictionary(27, &[("apple", "사과", 5), ("banana", "바나나", 27)]),
    );

    app.run().unwrap();

    let screen = app
        .console()
        .screens()
        .iter()
        .find(|s| s.contains("Choose an option"))
        .cloned()
        .unwrap();
    assert!(screen.contains("Score: 0/0"));
    assert!(screen.contains("Memory: 5/27 | Mastered: 1/2"));
    assert!(screen.contains("\napple\n"));
    assert!(screen.contains(&"-".repeat(40)));
    // Too few other words: placeholders fill the distractors.
    assert!(screen.contains("사과"));
    assert!(screen.contains("Unknown meaning"));
    assert!(screen.contains("Incorrect translation"));
    assert!(screen.contains("Wrong answer"));
    assert!(screen.contains("Choose an option (1-4) or 'q' to quit"));
}

#[test]
fn test_wrong_answer_resets_counter() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('2')
        .avoid("사과")
        .any_key()
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[("apple", "사과", 5)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("✗ Wrong!"));
    assert!(output.contains("apple => 사과"));
    assert!(output.contains("Press any key for next question..."));
    assert!(output.contains("Final score: 0/1"));
    assert!(output.contains("Mastered words: 0/1"));

    let saved = store.saved().unwrap();
    let entry = saved.lookup("apple").unwrap();
    assert_eq!(entry.memory.count, 0);
    assert_eq!(entry.memory.last_review, today());
}

#[test]
fn test_correct_answer_masters_word() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('2')
        .pick("사과")
        .any_key()
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(3, &[("apple", "사과", 2)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("🎉 Congratulations! 'apple' has been mastered!"));
    assert!(output.contains("Final score: 1/1"));
    assert!(output.contains("Mastered words: 1/1"));
    assert_eq!(store.saved().unwrap().lookup("apple").unwrap().memory.count, 3);
    assert_eq!(app.console().pending(), 0);
}

#[test]
fn test_invalid_key_asks_again() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('2')
        .key('9')
        .any_key()
        .pick("사과")
        .any_key()
        .key('q');
    let mut app = app(console, &store, dictionary(27, &[("apple", "사과", 0)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("Invalid input!"));
    assert!(output.contains("Final score: 1/1"));
    assert_eq!(store.saved().unwrap().lookup("apple").unwrap().memory.count, 1);
}

#[test]
fn test_shared_meaning_is_always_correct() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new()
        .key('2')
        .key('1')
        .key('2')
        .key('3')
        .key('4')
        .any_key()
        .key('q');
    let words = [
        ("apple", "과일", 0),
        ("banana", "과일", 0),
        ("cherry", "과일", 0),
        ("grape", "과일", 0),
    ];
    let mut app = app(console, &store, dictionary(27, &words));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("Final score: 4/4"));
    assert!(!output.contains("✗ Wrong!"));
    let saved = store.saved().unwrap();
    assert!(saved.entries().all(|e| e.memory.count == 1));
}

#[test]
fn test_quit_early_still_saves() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new().key('2').key('q').any_key().key('q');
    let mut app = app(
        console,
        &store,
        dictionary(27, &[("apple", "사과", 3), ("banana", "바나나", 4)]),
    );

    app.run().unwrap();

    assert!(app.console().output().contains("Final score: 0/0"));
    assert_eq!(store.save_count(), 1);
    let saved = store.saved().unwrap();
    assert_eq!(saved.lookup("apple").unwrap().memory.count, 3);
    assert_eq!(saved.lookup("banana").unwrap().memory.count, 4);
}

#[test]
fn test_interrupt_mid_quiz_keeps_progress() {
    let store = MemoryStore::new();
    let console = ScriptedConsole::new().key('2').pick("과일");
    let mut app = app(
        console,
        &store,
        dictionary(27, &[("apple", "과일", 0), ("banana", "과일", 0)]),
    );

    app.run().unwrap();

    assert_eq!(store.save_count(), 1);
    let saved = store.saved().unwrap();
    let total: u32 = saved.entries().map(|e| e.memory.count).sum();
    assert_eq!(total, 1);
    assert!(!app.console().output().contains("Quiz Results"));
}

#[test]
fn test_interrupt_with_failing_save_still_exits() {
    let console = ScriptedConsole::new().key('2').pick("과일");
    let mut app = app(
        console,
        FailingStore,
        dictionary(27, &[("apple", "과일", 0), ("banana", "과일", 0)]),
    );

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("Could not save progress"));
    assert!(output.contains("disk full"));
    assert!(!output.contains("An error occurred"));
    assert_eq!(app.console().pending(), 0);
}

#[test]
fn test_failing_save_after_quit_is_reported() {
    let console = ScriptedConsole::new()
        .key('2')
        .key('q')
        .any_key()
        .key('q');
    let mut app = app(console, FailingStore, dictionary(27, &[("apple", "사과", 0)]));

    app.run().unwrap();

    let output = app.console().output();
    assert!(output.contains("An error occurred"));
    assert!(!output.contains("Could not save progress"));
    assert!(!output.contains("Quiz Results"));
    assert_eq!(app.console().pending(), 0);
}
