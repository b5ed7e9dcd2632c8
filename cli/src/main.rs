//! # rulebot Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the rulebot CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in the `rulebot` library
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting
//! rulebot
//!
//! # One-shot reply with debug logging on stderr
//! rulebot -vv ask "what is 6 * 7"
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the chosen command (`chat` when none is given)
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use rulebot::commands::{self, GlobalArgs};
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "rulebot",
    about = "🤖 rulebot: a rule-based conversational responder",
    long_about = "Chat with a rule-based bot that answers greetings, small talk,\n\
                  time and date questions, and simple arithmetic like '15 + 25'.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    global: GlobalArgs,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));
    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, cli.global).await,
        Commands::Ask(args) => commands::ask::handle_ask(args, cli.global).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
