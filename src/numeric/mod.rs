//! Shared numeric parsing and display formatting
//!
//! This module provides the plumbing every calculator mode relies on:
//! - [`parse`]: expression sanitizing and operand parsing
//! - [`format`]: canonical display strings (fixed, significant-digit, and
//!   exponential renditions)
//!
//! # Rounding
//!
//! All formatters round on the exact decimal expansion of the input value
//! and resolve ties away from zero, so `0.001953125` at 8 fraction digits
//! renders `"0.00195313"`. The standard `format!("{:.8}", v)` resolves ties
//! to even and would print `"0.00195312"` there.

pub mod format;
pub mod parse;
