//! Base-aware integer operations over a 32-bit word
//!
//! Programmer mode treats the display as a signed `i32` rendered in one of
//! four bases. Values are shown sign-magnitude (`-80000000` for `i32::MIN`
//! in hex, never a two's-complement bit pattern), and the non-decimal bases
//! group their digits in fixed-width clusters padded with leading zeros.
//!
//! The bitwise binary operations carry an intentional asymmetry: the first
//! operand is the display parsed strictly in the active base, while the
//! second comes from the pending-equation slot via a decimal prefix parse
//! (sign, then digits, stop at the first non-digit). The slot holds text
//! like `"5+"` after an operator press, and the prefix parse is what makes
//! that usable as the value 5.

use crate::engine::errors::EvalError;

/// The four display bases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberBase {
    Hex,
    Dec,
    Oct,
    Bin,
}

impl NumberBase {
    /// Selector order
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Hex,
        NumberBase::Dec,
        NumberBase::Oct,
        NumberBase::Bin,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Hex => 16,
            NumberBase::Dec => 10,
            NumberBase::Oct => 8,
            NumberBase::Bin => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberBase::Hex => "HEX",
            NumberBase::Dec => "DEC",
            NumberBase::Oct => "OCT",
            NumberBase::Bin => "BIN",
        }
    }

    /// Digits per grouping cluster; decimal is left ungrouped
    pub fn group_width(self) -> Option<usize> {
        match self {
            NumberBase::Hex => Some(2),
            NumberBase::Dec => None,
            NumberBase::Oct => Some(3),
            NumberBase::Bin => Some(4),
        }
    }

    /// Whether `ch` may be typed into the display under this base
    pub fn is_valid_digit(self, ch: char) -> bool {
        match self {
            NumberBase::Hex => ch.is_ascii_hexdigit(),
            NumberBase::Dec => ch.is_ascii_digit(),
            NumberBase::Oct => matches!(ch, '0'..='7'),
            NumberBase::Bin => matches!(ch, '0' | '1'),
        }
    }
}

/// Operations available in programmer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgrammerOp {
    SetBase(NumberBase),
    And,
    Or,
    Xor,
    Not,
    ShiftLeft,
    ShiftRight,
}

impl ProgrammerOp {
    /// AND/OR/XOR consume the pending-equation slot as their second operand
    pub fn takes_second_operand(self) -> bool {
        matches!(self, ProgrammerOp::And | ProgrammerOp::Or | ProgrammerOp::Xor)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProgrammerOp::SetBase(base) => base.label(),
            ProgrammerOp::And => "AND",
            ProgrammerOp::Or => "OR",
            ProgrammerOp::Xor => "XOR",
            ProgrammerOp::Not => "NOT",
            ProgrammerOp::ShiftLeft => "Lsh",
            ProgrammerOp::ShiftRight => "Rsh",
        }
    }
}

/// Result of a programmer operation: the new value plus, for base
/// switches, the base the display should re-render in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub value: i32,
    pub new_base: Option<NumberBase>,
}

/// Parse display text as a signed i32 in `base`. Grouping spaces are
/// stripped first so a grouped display like `"0F FF"` round-trips. Text
/// whose magnitude does not fit in 32 bits is an input error, not a wrap.
pub fn parse_in_base(text: &str, base: NumberBase) -> Result<i32, EvalError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    i32::from_str_radix(&compact, base.radix()).map_err(|_| EvalError::InvalidInput {
        text: text.to_string(),
    })
}

/// Decimal prefix parse for the pending-equation slot: optional sign, then
/// digits, stopping at the first non-digit. No digits at all is an input
/// error. The accumulated value wraps to 32 bits.
pub fn parse_decimal_prefix(text: &str) -> Result<i32, EvalError> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let magnitude: i64 = digits.parse().map_err(|_| EvalError::InvalidInput {
        text: text.to_string(),
    })?;

    Ok((sign * magnitude) as i32)
}

/// Apply a programmer operation. Failures live entirely in the parsing
/// layer; the operation itself is total.
pub fn apply(op: ProgrammerOp, operand: i32, second: i32) -> Outcome {
    match op {
        ProgrammerOp::SetBase(base) => Outcome {
            value: operand,
            new_base: Some(base),
        },
        ProgrammerOp::And => Outcome::value_only(operand & second),
        ProgrammerOp::Or => Outcome::value_only(operand | second),
        ProgrammerOp::Xor => Outcome::value_only(operand ^ second),
        ProgrammerOp::Not => Outcome::value_only(!operand),
        // Shift-by-one wraps on overflow rather than trapping.
        ProgrammerOp::ShiftLeft => Outcome::value_only(operand.wrapping_shl(1)),
        ProgrammerOp::ShiftRight => Outcome::value_only(operand >> 1),
    }
}

impl Outcome {
    fn value_only(value: i32) -> Self {
        Outcome {
            value,
            new_base: None,
        }
    }
}

/// Render a value in `base`: sign-magnitude digits (uppercase for hex),
/// grouped into fixed-width space-separated clusters for the non-decimal
/// bases.
pub fn format_in_base(value: i32, base: NumberBase) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match base {
        NumberBase::Hex => format!("{:X}", magnitude),
        NumberBase::Dec => magnitude.to_string(),
        NumberBase::Oct => format!("{:o}", magnitude),
        NumberBase::Bin => format!("{:b}", magnitude),
    };

    let grouped = match base.group_width() {
        Some(width) => group_digits(&digits, width),
        None => digits,
    };

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Pad the digit run to a multiple of `width` with leading zeros, then
/// split into space-separated clusters counted from the least significant
/// digit.
fn group_digits(digits: &str, width: usize) -> String {
    let padded_len = digits.len().div_ceil(width) * width;
    let padding = padded_len - digits.len();

    let mut out = String::with_capacity(padded_len + padded_len / width);
    for (i, ch) in std::iter::repeat('0')
        .take(padding)
        .chain(digits.chars())
        .enumerate()
    {
        if i > 0 && i % width == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_pads_from_least_significant_end() {
        assert_eq!(format_in_base(255, NumberBase::Hex), "FF");
        assert_eq!(format_in_base(4095, NumberBase::Hex), "0F FF");
        assert_eq!(format_in_base(10, NumberBase::Bin), "1010");
        assert_eq!(format_in_base(9, NumberBase::Oct), "011");
        assert_eq!(format_in_base(9, NumberBase::Dec), "9");
    }

    #[test]
    fn test_sign_stays_outside_grouping() {
        assert_eq!(format_in_base(-26, NumberBase::Bin), "-0001 1010");
        assert_eq!(format_in_base(-255, NumberBase::Hex), "-FF");
        assert_eq!(format_in_base(i32::MIN, NumberBase::Hex), "-80 00 00 00");
    }

    #[test]
    fn test_parse_accepts_grouped_text() {
        assert_eq!(parse_in_base("0F FF", NumberBase::Hex), Ok(4095));
        assert_eq!(parse_in_base("0001 1010", NumberBase::Bin), Ok(26));
        assert_eq!(parse_in_base("ff", NumberBase::Hex), Ok(255));
    }

    #[test]
    fn test_parse_overflow_is_input_error() {
        assert!(matches!(
            parse_in_base("FFFFFFFF", NumberBase::Hex),
            Err(EvalError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_in_base("99999999999", NumberBase::Dec),
            Err(EvalError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_in_base("", NumberBase::Dec),
            Err(EvalError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_decimal_prefix_stops_at_operator() {
        assert_eq!(parse_decimal_prefix("5+"), Ok(5));
        assert_eq!(parse_decimal_prefix("-12*"), Ok(-12));
        assert_eq!(parse_decimal_prefix("  42"), Ok(42));
        assert!(matches!(
            parse_decimal_prefix(""),
            Err(EvalError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_decimal_prefix("+"),
            Err(EvalError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_shift_left_wraps() {
        assert_eq!(apply(ProgrammerOp::ShiftLeft, 1, 0).value, 2);
        assert_eq!(apply(ProgrammerOp::ShiftLeft, i32::MIN, 0).value, 0);
        assert_eq!(apply(ProgrammerOp::ShiftLeft, -1, 0).value, -2);
    }

    #[test]
    fn test_shift_right_is_arithmetic() {
        assert_eq!(apply(ProgrammerOp::ShiftRight, 8, 0).value, 4);
        assert_eq!(apply(ProgrammerOp::ShiftRight, -8, 0).value, -4);
        assert_eq!(apply(ProgrammerOp::ShiftRight, -1, 0).value, -1);
    }

    #[test]
    fn test_not_is_involutive() {
        for value in [0, 1, -1, 255, i32::MAX, i32::MIN] {
            let once = apply(ProgrammerOp::Not, value, 0).value;
            assert_eq!(apply(ProgrammerOp::Not, once, 0).value, value);
        }
        assert_eq!(apply(ProgrammerOp::Not, 0, 0).value, -1);
    }

    #[test]
    fn test_set_base_reports_new_base() {
        let outcome = apply(ProgrammerOp::SetBase(NumberBase::Bin), 10, 0);
        assert_eq!(outcome.value, 10);
        assert_eq!(outcome.new_base, Some(NumberBase::Bin));
        assert_eq!(apply(ProgrammerOp::And, 6, 3).new_base, None);
    }
}
