//! # rulebot Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout rulebot. Very little in
//! the responder can actually fail: unmatched input, division by zero and
//! oversized numbers are all ordinary replies, not errors. What remains is
//! start-up work (building the pattern table, loading configuration) and the
//! console I/O around the session.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `RulebotError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! use anyhow::Context;
//! use rulebot::core::error::{Result, RulebotError};
//!
//! fn read_name(raw: &str) -> Result<String> {
//!     if raw.trim().is_empty() {
//!         return Err(RulebotError::Config("bot name cannot be blank".into()).into());
//!     }
//!     Ok(raw.trim().to_string())
//! }
//!
//! let name = read_name("Simple ChatBot").context("Failed to read bot name").unwrap();
//! assert_eq!(name, "Simple ChatBot");
//! ```
//!
use crate::engine::rules::Topic;
use thiserror::Error;

/// Custom error type for the rulebot application.
#[derive(Error, Debug)]
pub enum RulebotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {source}")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Rule '{topic}' has no responses.")]
    EmptyResponses { topic: Topic },

    #[error("Rule '{topic}' has no keywords to match.")]
    NoKeywords { topic: Topic },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
