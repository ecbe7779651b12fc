//! Calculator evaluation engines
//!
//! This module provides the per-mode evaluation logic:
//! - [`arithmetic`]: two-operand equation fragments (`"6.5*"` against the
//!   display) and the plain-decimal result formatter
//! - [`scientific`]: unary functions and constants (degrees for trig)
//! - [`programmer`]: base-aware signed 32-bit integer operations
//! - [`errors`]: the shared [`errors::EvalError`] taxonomy
//!
//! # Evaluation Model
//!
//! Exactly one operation is pending at a time: a fragment holds the first
//! operand and a trailing operator, and the display holds the second.
//! There is no expression tree, no precedence, and no grouping. Engines
//! return plain values; turning them into display text is a separate,
//! fallible step so that NaN and infinity surface as
//! [`errors::EvalError::InvalidResult`] instead of leaking into the
//! display.

pub mod arithmetic;
pub mod errors;
pub mod programmer;
pub mod scientific;
