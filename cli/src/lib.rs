//! # rulebot Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! The library half of the `rulebot` crate. `main.rs` only parses arguments
//! and sets up logging; everything it dispatches to lives here so that
//! integration tests in `cli/tests/` can use it directly.
//!
//! - `engine`: the responder (pattern table, arithmetic, conversation log)
//! - `core`: errors and configuration
//! - `common`: console rendering shared by the commands
//! - `commands`: the `chat` and `ask` command handlers
//!
pub mod commands;
pub mod common;
pub mod core;
pub mod engine;
