//! Evaluation error types shared by all calculator modes
//!
//! This module defines [`EvalError`], which represents every way an
//! evaluation request can fail (as opposed to terminal/IO errors).
//!
//! Evaluation errors are never fatal - the session records them and leaves
//! its state untouched so the user can correct the input.

use std::fmt;

/// Errors produced while evaluating calculator input
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The operand text does not parse as a number (in the active base,
    /// for programmer operations)
    InvalidInput { text: String },

    /// The pending equation fragment has no parsable first operand
    InvalidEquation { fragment: String },

    /// Operator character outside the recognized set
    InvalidOperation { operator: char },

    /// Division with a zero second operand
    DivisionByZero,

    /// The computed value is not finite and cannot be displayed
    InvalidResult { value: f64 },
}

impl EvalError {
    /// Short tag for the status bar
    pub fn label(&self) -> &'static str {
        match self {
            EvalError::InvalidInput { .. } => "Invalid input",
            EvalError::InvalidEquation { .. } => "Invalid equation",
            EvalError::InvalidOperation { .. } => "Invalid operation",
            EvalError::DivisionByZero => "Division by zero",
            EvalError::InvalidResult { .. } => "Invalid result",
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidInput { text } => {
                write!(f, "Invalid input: '{}' is not a number", text)
            }
            EvalError::InvalidEquation { fragment } => {
                write!(f, "Invalid equation: '{}' has no first operand", fragment)
            }
            EvalError::InvalidOperation { operator } => {
                write!(f, "Invalid operation '{}'", operator)
            }
            EvalError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            EvalError::InvalidResult { value } => {
                write!(f, "Result {} cannot be displayed", value)
            }
        }
    }
}

impl std::error::Error for EvalError {}
