//! # rulebot Engine
//!
//! File: cli/src/engine/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The conversational core. Everything in here is synchronous and free of
//! console I/O so it can be driven from the interactive session, the one-shot
//! `ask` command, or tests alike.
//!
//! ## Architecture
//!
//! - `rules`: the ordered pattern table (keyword matchers and their replies)
//! - `arithmetic`: detection and evaluation of one embedded `A op B` expression
//! - `log`: the append-only conversation log and its summary counts
//! - `responder`: orchestration of a single turn and the exit decision
//!
//! ## Usage
//!
//! ```rust
//! use rulebot::engine::Responder;
//!
//! let mut bot = Responder::new().unwrap();
//! let outcome = bot.process_turn("hello");
//! println!("{}", outcome.reply_text);
//! ```
//!
pub mod arithmetic;
pub mod log;
pub mod responder;
pub mod rules;

pub use log::{ConversationEvent, ConversationLog, ConversationSummary, Speaker};
pub use responder::{ReplySource, Responder, SessionOutcome};
