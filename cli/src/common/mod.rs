//! # rulebot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared helpers used by more than one command. Currently only console
//! rendering lives here.
//!

/// Terminal rendering: banner, prompt, bot lines, summary.
pub mod ui;
