//! # rulebot CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives the interactive session by piping lines into stdin. Ctrl-C is not
//! exercised here; closing stdin takes the same goodbye path.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_chat_is_the_default_command() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(&dir, "")
        .write_stdin("5 + 3\nbye\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🤖 Welcome to Simple ChatBot!")
                .and(predicate::str::contains("🤖 Bot: 5 + 3 = 8"))
                .and(predicate::str::contains("📊 Conversation Summary:"))
                .and(predicate::str::contains("You sent 2 messages")),
        );
}

#[test]
fn test_chat_stops_at_exit_keyword() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(&dir, "")
        .args(["chat", "--no-welcome"])
        .write_stdin("hello\nok goodbye\n2 + 2\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome")
                .not()
                .and(predicate::str::contains("2 + 2 = 4").not())
                .and(predicate::str::contains("Total conversation length: 4 messages")),
        );
}

#[test]
fn test_chat_blank_line_nudge() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(&dir, "")
        .arg("chat")
        .write_stdin("\n   \nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "🤖 Bot: Please say something! I'm here to chat.",
        ));
}

#[test]
fn test_chat_end_of_input_says_goodbye() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(&dir, "")
        .arg("chat")
        .write_stdin("hi\nwhat's your name?\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🤖 Bot: Goodbye! Thanks for chatting with me.")
                .and(predicate::str::contains("I sent 2 responses")),
        );
}

#[test]
fn test_chat_uses_configured_name_and_flags() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(
        &dir,
        "[bot]\nname = \"Rusty\"\n\n[session]\nshow_summary = false\n",
    )
    .write_stdin("hey\nhow are you\nexit\n")
    .assert()
    .success()
    .stdout(
        predicate::str::contains("🤖 Welcome to Rusty!")
            .and(predicate::str::contains("Conversation Summary").not()),
    );
}

#[test]
fn test_chat_invalid_utf8_apologises_and_exits_cleanly() {
    let dir = tempdir().expect("Failed to create temp dir");
    isolated_cmd(&dir, "")
        .args(["chat", "--no-welcome"])
        .write_stdin(b"hello\n\xff\xfe\nbye\n".to_vec())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("❌ An error occurred: Failed to read from stdin")
                .and(predicate::str::contains("Sorry, something went wrong. Goodbye!")),
        );
}
