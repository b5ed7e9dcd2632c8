//! # rulebot Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Runs a single turn and prints only the reply, which makes rulebot usable
//! from scripts:
//!
//! ```bash
//! rulebot ask what is 12 x 12
//! rulebot --seed 7 ask "hello there"
//! ```
//!
//! The exit decision is logged but does not change the exit code.
//!
use crate::common::ui;
use crate::core::{config, error::Result};
use clap::Parser;
use tracing::info;

use super::{build_responder, GlobalArgs};

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
#[command(about = "Answer a single message and exit")]
pub struct AskArgs {
    /// The message to answer. Several words are joined with single spaces.
    #[arg(required = true, value_name = "MESSAGE")]
    pub message: Vec<String>,
}

/// # Handle Ask Command (`handle_ask`)
pub async fn handle_ask(args: AskArgs, global: GlobalArgs) -> Result<()> {
    let cfg = config::load_config(global.config.as_deref())?;
    let message = args.message.join(" ");

    if message.trim().is_empty() {
        println!("{}", ui::EMPTY_INPUT_NUDGE);
        return Ok(());
    }

    let mut responder = build_responder(&cfg, global.seed)?;
    let outcome = responder.process_turn(&message);
    info!(
        "Answered via {:?} (should_exit={})",
        outcome.source, outcome.should_exit
    );
    println!("{}", outcome.reply_text);
    Ok(())
}
