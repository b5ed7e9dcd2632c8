//! # rulebot Arithmetic Extractor
//!
//! File: cli/src/engine/arithmetic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Detects one `<int> <op> <int>` expression anywhere in free text and renders
//! its result. Operators are tried in a fixed priority order (addition,
//! subtraction, multiplication, division) and only the first one whose pattern
//! is found is evaluated. If that evaluation fails (an operand too large for 64
//! bits, or an overflowing result) the extractor reports no result at all; it
//! does not go on to try the remaining operators.
//!
//! ## Examples
//!
//! ```rust
//! use rulebot::engine::arithmetic::ArithmeticExtractor;
//!
//! let extractor = ArithmeticExtractor::new().unwrap();
//! assert_eq!(extractor.extract("what is 7x3?").as_deref(), Some("7 × 3 = 21"));
//! assert_eq!(extractor.extract("3 - 10").as_deref(), Some("3 - 10 = -7"));
//! assert_eq!(extractor.extract("no numbers here"), None);
//! ```
//!
use crate::core::error::{Result, RulebotError};
use regex::Regex;
use tracing::debug;

/// Reply for a division whose divisor is zero.
pub const DIVIDE_BY_ZERO: &str = "I can't divide by zero! That would break the universe!";

/// Supported operators, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph used when rendering the result, whatever glyph was typed.
    pub fn glyph(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            Operator::Add => r"([0-9]+)\s*\+\s*([0-9]+)",
            Operator::Subtract => r"([0-9]+)\s*-\s*([0-9]+)",
            Operator::Multiply => r"([0-9]+)\s*[*x×]\s*([0-9]+)",
            Operator::Divide => r"([0-9]+)\s*[/÷]\s*([0-9]+)",
        }
    }
}

/// A structurally matched expression. Operands are kept as typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression<'a> {
    pub operator: Operator,
    pub lhs: &'a str,
    pub rhs: &'a str,
}

impl Expression<'_> {
    /// Evaluates and renders the expression as `"A op B = result"`.
    ///
    /// Returns `None` for operands that do not fit in a `u64` and for
    /// overflowing sums or products. Division by zero is not a failure; it
    /// yields [`DIVIDE_BY_ZERO`].
    pub fn evaluate(&self) -> Option<String> {
        let a: u64 = self.lhs.parse().ok()?;
        let b: u64 = self.rhs.parse().ok()?;

        let value = match self.operator {
            Operator::Add => a.checked_add(b)?.to_string(),
            Operator::Subtract => (i128::from(a) - i128::from(b)).to_string(),
            Operator::Multiply => a.checked_mul(b)?.to_string(),
            Operator::Divide => {
                if b == 0 {
                    return Some(DIVIDE_BY_ZERO.to_string());
                }
                if a % b == 0 {
                    (a / b).to_string()
                } else {
                    inexact_quotient(a, b)
                }
            }
        };

        Some(format!(
            "{} {} {} = {}",
            self.lhs,
            self.operator.glyph(),
            self.rhs,
            value
        ))
    }
}

/// Renders `a / b` when `b` does not divide `a`. The integer part is exact;
/// only the remainder goes through `f64`, clamped below 1 so it never rounds
/// up into the integer part.
fn inexact_quotient(a: u64, b: u64) -> String {
    let fraction = ((a % b) as f64 / b as f64).min(1.0 - f64::EPSILON / 2.0);
    let fraction = fraction.to_string();
    format!("{}{}", a / b, fraction.trim_start_matches('0'))
}

/// Compiled operator patterns, built once and reused for every turn.
#[derive(Debug, Clone)]
pub struct ArithmeticExtractor {
    patterns: Vec<(Operator, Regex)>,
}

impl ArithmeticExtractor {
    pub fn new() -> Result<Self> {
        let patterns = Operator::PRIORITY
            .iter()
            .map(|op| {
                Regex::new(op.pattern())
                    .map(|re| (*op, re))
                    .map_err(RulebotError::from)
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Finds the first operator, in priority order, whose pattern occurs in
    /// `input`, together with its two operands.
    pub fn find<'a>(&self, input: &'a str) -> Option<Expression<'a>> {
        self.patterns.iter().find_map(|(operator, pattern)| {
            pattern.captures(input).and_then(|caps| {
                Some(Expression {
                    operator: *operator,
                    lhs: caps.get(1)?.as_str(),
                    rhs: caps.get(2)?.as_str(),
                })
            })
        })
    }

    /// Extracts and evaluates the first expression in `input`.
    pub fn extract(&self, input: &str) -> Option<String> {
        let expression = self.find(input)?;
        let rendered = expression.evaluate();
        if rendered.is_none() {
            debug!(
                "Arithmetic pattern {:?} matched but could not be evaluated; treating as no match",
                expression
            );
        }
        rendered
    }
}
