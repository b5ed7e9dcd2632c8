//! # rulebot UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Console rendering for the chat session: the welcome banner, the input
//! prompt, bot lines and the end-of-session summary. Every function writes to
//! a caller-supplied `Write` so the session can be rendered into a buffer in
//! tests and onto stdout in the real binary.
//!
//! ## Usage
//!
//! ```rust
//! use rulebot::common::ui;
//!
//! let mut out = Vec::new();
//! ui::render_bot_line(&mut out, "Hello!").unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "🤖 Bot: Hello!\n");
//! ```
//!
use crate::engine::ConversationSummary;
use std::io::{self, Write};

/// Width of the banner rules.
const BANNER_WIDTH: usize = 60;

/// Shown instead of a reply when the user submits a blank line.
pub const EMPTY_INPUT_NUDGE: &str = "Please say something! I'm here to chat.";
/// Shown when the session is interrupted or stdin closes.
pub const INTERRUPT_FAREWELL: &str = "Goodbye! Thanks for chatting with me.";
/// Shown after an unexpected failure ends the session.
pub const FAILURE_APOLOGY: &str = "Sorry, something went wrong. Goodbye!";

/// # Render Welcome Banner (`render_welcome`)
///
/// Writes the opening banner: the bot's name between two heavy rules, a short
/// list of what the bot can do, example inputs and how to leave.
///
/// ## Arguments
///
/// * `out` - Destination for the banner (stdout in the binary, a buffer in tests).
/// * `name` - Display name of the bot, from `bot.name` in the configuration.
///
/// ## Returns
///
/// * `io::Result<()>` - `Ok(())` once every banner line has been written.
///
/// ## Errors
///
/// Returns the underlying `io::Error` if any write to `out` fails.
pub fn render_welcome(out: &mut impl Write, name: &str) -> io::Result<()> {
    let heavy = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{heavy}")?;
    writeln!(out, "🤖 Welcome to {name}!")?;
    writeln!(out, "{heavy}")?;
    writeln!(out, "I'm a rule-based chatbot that can:")?;
    writeln!(out, "• Have conversations and answer questions")?;
    writeln!(
        out,
        "• Perform basic math calculations (e.g., '5 + 3', '10 * 2')"
    )?;
    writeln!(out, "• Tell you the current time and date")?;
    writeln!(out, "• Respond to greetings and common phrases")?;
    writeln!(out)?;
    writeln!(
        out,
        "Try saying: 'Hello', 'What time is it?', '15 + 25', or 'What can you do?'"
    )?;
    writeln!(out, "Type 'bye', 'quit', or 'exit' to end the conversation.")?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))
}

/// # Render Input Prompt (`render_prompt`)
///
/// Writes the `💬 You: ` prompt on a fresh line and flushes, so the prompt is
/// visible before the blocking read.
///
/// ## Errors
///
/// Returns the underlying `io::Error` if the write or the flush fails.
pub fn render_prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\n💬 You: ")?;
    out.flush()
}

/// # Render Bot Line (`render_bot_line`)
///
/// ## Arguments
///
/// * `out` - Destination writer.
/// * `text` - Reply text, printed after the `🤖 Bot: ` prefix.
///
/// ## Errors
///
/// Returns the underlying `io::Error` if the write fails.
pub fn render_bot_line(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "🤖 Bot: {text}")
}

/// # Render Conversation Summary (`render_summary`)
///
/// Writes message counts for the finished session. Nothing is written when the
/// conversation holds two events or fewer (a single exchange).
///
/// ## Arguments
///
/// * `out` - Destination writer.
/// * `summary` - Counts taken from the responder's `ConversationLog`.
///
/// ## Returns
///
/// * `io::Result<()>` - `Ok(())` whether or not anything was printed.
///
/// ## Errors
///
/// Returns the underlying `io::Error` if any write to `out` fails.
pub fn render_summary(out: &mut impl Write, summary: &ConversationSummary) -> io::Result<()> {
    if summary.total <= 2 {
        return Ok(());
    }
    writeln!(out, "\n📊 Conversation Summary:")?;
    writeln!(out, "   • You sent {} messages", summary.user_messages)?;
    writeln!(out, "   • I sent {} responses", summary.bot_messages)?;
    writeln!(
        out,
        "   • Total conversation length: {} messages",
        summary.total
    )
}

/// # Render Session Failure (`render_failure`)
///
/// Reports an unexpected error that ended the session, followed by the bot's
/// apology line. Only the outermost context of `error` is shown; the full
/// chain goes to the log.
///
/// ## Arguments
///
/// * `out` - Destination writer.
/// * `error` - The error that stopped the chat loop.
///
/// ## Errors
///
/// Returns the underlying `io::Error` if any write to `out` fails.
pub fn render_failure(out: &mut impl Write, error: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "\n❌ An error occurred: {error}")?;
    render_bot_line(out, FAILURE_APOLOGY)
}
