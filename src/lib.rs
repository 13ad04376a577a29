//! # semicalc
//!
//! semicalc is a single-pass evaluator for semicolon-terminated arithmetic
//! and boolean statements. It walks a layered-precedence grammar by
//! recursive descent, validating syntax and computing a 64-bit integer
//! value in the same pass, with no intermediate parse tree and no separate
//! tokenization step. Failures are reported as distinguished error kinds
//! that callers can branch on.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the unified error type for evaluation.
///
/// This module defines every failure the evaluator can report, as a single
/// enum of distinguished kinds. It standardizes error reporting so the
/// surrounding line-processing loop can render kind-specific messages.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering all failure modes (syntax,
///   termination, grouping, division, exponentiation).
/// - Carries human-readable messages via `Display`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Implements the recursive-descent grammar engine.
///
/// This module ties together the input cursor, the operator-token scanners
/// and the mutually recursive grammar rules, one per precedence level from
/// the additive fold down to parenthesized atoms. Control flows top-down
/// through the rules and computed values flow bottom-up to the caller.
///
/// # Responsibilities
/// - Threads the cursor by value through every rule; positions only move
///   forward and no rule backtracks.
/// - Computes each rule's integer value as it parses, with no tree.
/// - Propagates the first error unchanged through every enclosing rule.
pub mod evaluator;
/// General utilities for safe numeric conversion and checked arithmetic.
///
/// This module provides reusable helpers used by the grammar rules, such as
/// checked integer conversion and exact checked exponentiation.
///
/// # Responsibilities
/// - Safely convert between `i64` and `u32` without silent data loss.
/// - Compute integer powers with overflow detection instead of wrapping.
pub mod util;

pub use crate::{
    error::EvalError,
    evaluator::core::{EvalResult, evaluate},
};
