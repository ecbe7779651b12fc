//! Two-operand arithmetic over equation fragments
//!
//! The standard mode works on a pending equation fragment like `"6.5*"`:
//! everything before the final character is the first operand, the final
//! character is the operator, and the current display supplies the second
//! operand. [`evaluate`] performs that split and applies the operator;
//! [`format_result`] turns the f64 result into display text.

use crate::engine::errors::EvalError;
use crate::numeric::format::format_fixed;
use crate::numeric::parse::{parse_finite, sanitize_expression};

/// Fraction digits beyond which results are cut to a fixed width
const MAX_FRAC_DIGITS: usize = 8;

/// The five binary operators of standard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    /// Map an operator character to its operation
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '*' => Some(ArithOp::Mul),
            '/' => Some(ArithOp::Div),
            '%' => Some(ArithOp::Rem),
            _ => None,
        }
    }

    /// The character stored in equation fragments
    pub fn symbol(self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
            ArithOp::Rem => '%',
        }
    }

    fn apply(self, first: f64, second: f64) -> Result<f64, EvalError> {
        match self {
            ArithOp::Add => Ok(first + second),
            ArithOp::Sub => Ok(first - second),
            ArithOp::Mul => Ok(first * second),
            ArithOp::Div => {
                if second == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(first / second)
            }
            // A zero divisor here yields NaN and fails at the formatting
            // step instead.
            ArithOp::Rem => Ok(first % second),
        }
    }
}

/// Evaluate a pending equation fragment against the current operand.
///
/// Both inputs are sanitized first. An empty fragment means no operation is
/// pending and the operand is returned as-is. Otherwise the fragment's last
/// character is the operator and the rest must parse as a finite number.
pub fn evaluate(equation: &str, operand: &str) -> Result<f64, EvalError> {
    let fragment = sanitize_expression(equation);
    let operand_text = sanitize_expression(operand);

    let second = parse_finite(&operand_text).ok_or_else(|| EvalError::InvalidInput {
        text: operand.to_string(),
    })?;

    let operator = match fragment.chars().next_back() {
        Some(c) => c,
        // Nothing pending, the operand stands alone.
        None => return Ok(second),
    };
    let prefix = &fragment[..fragment.len() - operator.len_utf8()];

    let first = parse_finite(prefix).ok_or_else(|| EvalError::InvalidEquation {
        fragment: equation.to_string(),
    })?;
    let op = ArithOp::from_char(operator).ok_or(EvalError::InvalidOperation { operator })?;

    op.apply(first, second)
}

/// Format an arithmetic result for the display: shortest plain decimal,
/// cut to 8 fraction digits when the exact rendition is longer. Negative
/// zero collapses to `"0"`.
pub fn format_result(value: f64) -> Result<String, EvalError> {
    if !value.is_finite() {
        return Err(EvalError::InvalidResult { value });
    }
    if value == 0.0 {
        return Ok(String::from("0"));
    }

    let shortest = value.to_string();
    if let Some((_, frac)) = shortest.split_once('.') {
        if frac.len() > MAX_FRAC_DIGITS {
            return Ok(format_fixed(value, MAX_FRAC_DIGITS));
        }
    }
    Ok(shortest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_mapping_round_trips() {
        for op in [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Div, ArithOp::Rem] {
            assert_eq!(ArithOp::from_char(op.symbol()), Some(op));
        }
        assert_eq!(ArithOp::from_char('='), None);
    }

    #[test]
    fn test_evaluate_no_pending_operation() {
        assert_eq!(evaluate("", "42"), Ok(42.0));
        assert_eq!(evaluate("", "-1.5"), Ok(-1.5));
    }

    #[test]
    fn test_evaluate_rejects_empty_operand() {
        assert!(matches!(
            evaluate("", ""),
            Err(EvalError::InvalidInput { .. })
        ));
        assert!(matches!(
            evaluate("2+", "   "),
            Err(EvalError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_evaluate_rejects_bare_operator_fragment() {
        assert!(matches!(
            evaluate("+", "3"),
            Err(EvalError::InvalidEquation { .. })
        ));
    }
}
