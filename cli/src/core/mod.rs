//! # rulebot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the engine and the
//! commands:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use rulebot::core::config; // For loading configuration
//! use rulebot::core::error::{Result, RulebotError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
