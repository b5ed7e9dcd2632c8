//! # rulebot Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the commands of the rulebot CLI and the pieces they
//! share: the global options and the construction of a `Responder` from the
//! loaded configuration.
//!
//! ## Command Groups
//!
//! - `chat`: Interactive session on the terminal (the default command)
//! - `ask`: Answer a single message and exit
//!
use crate::core::{config::Config, error::Result};
use crate::engine::Responder;
use clap::Args;
use tracing::debug;

/// Command for the interactive console session.
pub mod chat;
/// Command for a one-shot reply.
pub mod ask;

/// Options accepted by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Read configuration from this file instead of the project/user lookup.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Seed reply selection so the same input gives the same replies.
    /// Overrides `session.seed` from the configuration.
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,
}

/// Builds the responder, seeded when either the CLI or the config asks for it.
pub fn build_responder(config: &Config, seed_override: Option<u64>) -> Result<Responder> {
    match seed_override.or(config.session.seed) {
        Some(seed) => {
            debug!("Seeding reply selection with {}", seed);
            Responder::with_seed(seed)
        }
        None => Responder::new(),
    }
}
