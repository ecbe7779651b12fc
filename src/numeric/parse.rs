//! Operand sanitizing and parsing helpers

/// Strip every character that cannot appear in an arithmetic expression,
/// keeping digits, the five operators, the decimal point, and whitespace.
pub fn sanitize_expression(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '.' | '%') || c.is_whitespace())
        .collect()
}

/// Parse trimmed text as a finite f64. Empty text, garbage, and
/// infinity/NaN spellings all come back as `None`.
pub fn parse_finite(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Parse display text as f64, falling back to NaN so the caller can let
/// the formatting step reject the result.
pub fn parse_or_nan(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_letters() {
        assert_eq!(sanitize_expression("12a+3b"), "12+3");
        assert_eq!(sanitize_expression("sin(4)"), "4");
        assert_eq!(sanitize_expression("5 * 2"), "5 * 2");
    }

    #[test]
    fn test_sanitize_keeps_all_operators() {
        assert_eq!(sanitize_expression("1+2-3*4/5%6"), "1+2-3*4/5%6");
    }

    #[test]
    fn test_parse_finite_rejects_empty_and_non_finite() {
        assert_eq!(parse_finite("  42.5 "), Some(42.5));
        assert_eq!(parse_finite(""), None);
        assert_eq!(parse_finite("   "), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("NaN"), None);
    }

    #[test]
    fn test_parse_or_nan_falls_back() {
        assert_eq!(parse_or_nan("2.5"), 2.5);
        assert!(parse_or_nan("bogus").is_nan());
        assert!(parse_or_nan("").is_nan());
    }
}
