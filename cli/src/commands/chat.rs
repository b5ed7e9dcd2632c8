//! # rulebot Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The interactive console session, and the default when no command is given.
//! It owns everything around the responder: prompting, printing replies,
//! stopping when a turn asks to exit, Ctrl-C, end of input, and the closing
//! summary.
//!
//! ## Architecture
//!
//! - `ChatSession` turns one input line into console output and tells the loop
//!   whether to keep going. It is synchronous and writes to any `Write`.
//! - `run_loop` feeds it lines from stdin and races each read against a single
//!   pinned `tokio::signal::ctrl_c()` future.
//!
//! Stdin is read on a plain thread and forwarded over a channel. A read
//! blocked inside tokio's own stdin handle cannot be cancelled and would keep
//! the runtime from shutting down after Ctrl-C.
//!
//! ## Examples
//!
//! ```bash
//! rulebot                 # same as `rulebot chat`
//! rulebot chat --no-welcome
//! echo "5 + 3" | rulebot --seed 1 chat
//! ```
//!
use crate::common::ui;
use crate::core::{config, error::Result};
use crate::engine::Responder;
use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::Rng;
use std::future::Future;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::{build_responder, GlobalArgs};

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug, Default)]
#[command(about = "Start an interactive chat session (default)")]
pub struct ChatArgs {
    /// Skip the welcome banner, regardless of `session.show_welcome`.
    #[arg(long)]
    pub no_welcome: bool,
}

/// What the input loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Console-facing wrapper around a `Responder`.
pub struct ChatSession<R: Rng = StdRng> {
    responder: Responder<R>,
    show_summary: bool,
}

impl<R: Rng> ChatSession<R> {
    pub fn new(responder: Responder<R>, show_summary: bool) -> Self {
        Self {
            responder,
            show_summary,
        }
    }

    /// Answers one line. Blank lines get a nudge and never reach the responder.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let input = line.trim();
        if input.is_empty() {
            ui::render_bot_line(out, ui::EMPTY_INPUT_NUDGE)?;
            return Ok(Flow::Continue);
        }

        let outcome = self.responder.process_turn(input);
        ui::render_bot_line(out, &outcome.reply_text)?;

        if outcome.should_exit {
            info!("Exit keyword received, ending session.");
            self.finish(out)?;
            return Ok(Flow::Stop);
        }
        Ok(Flow::Continue)
    }

    /// Ends the session early (Ctrl-C or end of input).
    ///
    /// A blank line separates the goodbye from whatever the terminal echoed
    /// for the interrupt (e.g. `^C`).
    pub fn interrupt(&mut self, out: &mut impl Write) -> Result<()> {
        write!(out, "\n\n")?;
        ui::render_bot_line(out, ui::INTERRUPT_FAREWELL)?;
        self.finish(out)
    }

    pub fn responder(&self) -> &Responder<R> {
        &self.responder
    }

    fn finish(&self, out: &mut impl Write) -> Result<()> {
        if self.show_summary {
            ui::render_summary(out, &self.responder.log().summary())?;
        }
        out.flush()?;
        Ok(())
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, prints the banner and runs the session on stdin/stdout.
/// A failure inside the session is reported to the user with an apology and
/// ends the session without failing the process.
pub async fn handle_chat(args: ChatArgs, global: GlobalArgs) -> Result<()> {
    let cfg = config::load_config(global.config.as_deref())?;
    let responder = build_responder(&cfg, global.seed)?;
    let mut session = ChatSession::new(responder, cfg.session.show_summary);

    let mut stdout = io::stdout();
    if cfg.session.show_welcome && !args.no_welcome {
        ui::render_welcome(&mut stdout, &cfg.bot.name)?;
    }

    let lines = spawn_stdin_reader();
    let ctrl_c = tokio::signal::ctrl_c();
    if let Err(e) = run_loop(&mut session, lines, ctrl_c, &mut stdout).await {
        error!("Chat session failed: {:?}", e);
        ui::render_failure(&mut stdout, &e)?;
    }
    Ok(())
}

/// Feeds `lines` to the session until it stops, input ends, or `interrupt`
/// resolves. `interrupt` is polled as one future for the whole session, so an
/// interrupt that lands while a turn is being processed ends the loop at the
/// next select.
async fn run_loop<R, F>(
    session: &mut ChatSession<R>,
    mut lines: mpsc::UnboundedReceiver<io::Result<String>>,
    interrupt: F,
    out: &mut impl Write,
) -> Result<()>
where
    R: Rng,
    F: Future<Output = io::Result<()>>,
{
    tokio::pin!(interrupt);
    loop {
        ui::render_prompt(out)?;
        tokio::select! {
            line = lines.recv() => match line {
                Some(line) => {
                    let line = line.context("Failed to read from stdin")?;
                    if session.handle_line(&line, out)? == Flow::Stop {
                        break;
                    }
                }
                None => {
                    debug!("Stdin closed, ending session.");
                    session.interrupt(out)?;
                    break;
                }
            },
            signal = &mut interrupt => {
                signal.context("Failed to listen for Ctrl-C")?;
                debug!("Interrupted by user.");
                session.interrupt(out)?;
                break;
            }
        }
    }
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(show_summary: bool) -> ChatSession {
        ChatSession::new(Responder::with_seed(3).unwrap(), show_summary)
    }

    fn drive(session: &mut ChatSession, lines: &[&str]) -> (String, Vec<Flow>) {
        let mut out = Vec::new();
        let flows = lines
            .iter()
            .map(|line| session.handle_line(line, &mut out).unwrap())
            .collect();
        (String::from_utf8(out).unwrap(), flows)
    }

    #[test]
    fn test_blank_line_is_nudged_and_not_logged() {
        let mut session = session(true);
        let (out, flows) = drive(&mut session, &["   "]);
        assert_eq!(out, "🤖 Bot: Please say something! I'm here to chat.\n");
        assert_eq!(flows, vec![Flow::Continue]);
        assert!(session.responder().log().is_empty());
    }

    #[test]
    fn test_exit_stops_and_prints_summary() {
        let mut session = session(true);
        let (out, flows) = drive(&mut session, &["12 * 2", "bye now"]);
        assert_eq!(flows, vec![Flow::Continue, Flow::Stop]);
        assert!(out.starts_with("🤖 Bot: 12 × 2 = 24\n"));
        assert!(out.contains("📊 Conversation Summary:"));
        assert!(out.contains("You sent 2 messages"));
    }

    #[test]
    fn test_summary_can_be_disabled() {
        let mut session = session(false);
        let (out, _) = drive(&mut session, &["hello", "quit"]);
        assert!(!out.contains("Conversation Summary"));
    }

    #[test]
    fn test_interrupt_says_goodbye() {
        let mut session = session(true);
        let mut out = Vec::new();
        session.handle_line("hello", &mut out).unwrap();
        session.handle_line("how are you", &mut out).unwrap();

        let mut closing = Vec::new();
        session.interrupt(&mut closing).unwrap();

        let text = String::from_utf8(closing).unwrap();
        assert!(text.starts_with("\n\n🤖 Bot: Goodbye! Thanks for chatting with me.\n"));
        assert!(text.contains("Total conversation length: 4 messages"));
    }

    #[tokio::test]
    async fn test_pending_interrupt_ends_loop_with_input_still_open() {
        let mut session = session(true);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(Ok("hello".to_string())).unwrap();
        tx.send(Ok("how are you".to_string())).unwrap();

        let mut out = Vec::new();
        run_loop(&mut session, rx, std::future::ready(Ok(())), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n\n🤖 Bot: Goodbye! Thanks for chatting with me.\n"));
        drop(tx);
    }

    #[tokio::test]
    async fn test_closed_input_ends_loop() {
        let mut session = session(true);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(Ok("hi".to_string())).unwrap();
        tx.send(Ok("what's your name?".to_string())).unwrap();
        drop(tx);

        let mut out = Vec::new();
        run_loop(&mut session, rx, std::future::pending(), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Goodbye! Thanks for chatting with me."));
        assert!(text.contains("I sent 2 responses"));
    }

    #[tokio::test]
    async fn test_read_failure_surfaces_as_error() {
        let mut session = session(true);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(Err(io::Error::new(io::ErrorKind::InvalidData, "bad bytes")))
            .unwrap();

        let mut out = Vec::new();
        let err = run_loop(&mut session, rx, std::future::pending(), &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read from stdin");
        drop(tx);
    }

    #[test]
    fn test_interrupt_after_single_turn_skips_summary() {
        let mut session = session(true);
        let mut out = Vec::new();
        session.handle_line("hello", &mut out).unwrap();
        session.interrupt(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("Summary"));
    }
}
