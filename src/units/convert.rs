//! Conversion math and result formatting

use crate::numeric::format::{format_exponential, format_precision};
use crate::units::catalog::Unit;

/// Magnitudes below this render in scientific notation
const SCI_LOWER_BOUND: f64 = 0.000001;
/// Magnitudes above this render in scientific notation
const SCI_UPPER_BOUND: f64 = 999_999.0;

/// Significant digits for plain-decimal results
const RESULT_SIG_DIGITS: usize = 7;
/// Mantissa fraction digits for scientific-notation results
const RESULT_EXP_DIGITS: usize = 6;

/// Convert `value` from one unit to another within a category.
///
/// Temperature converts through the affine Celsius paths; everything else
/// multiplies into the base unit and divides back out.
pub fn convert(value: f64, from: &Unit, to: &Unit, category_key: &str) -> f64 {
    if category_key == "temperature" {
        return convert_temperature(value, from.symbol, to.symbol);
    }

    let base_value = value * from.factor;
    base_value / to.factor
}

/// Affine temperature conversion with a Celsius pivot.
///
/// An unrecognized source symbol passes the value through untouched,
/// skipping the target leg entirely; an unrecognized target symbol yields
/// the Celsius pivot.
fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    let celsius = match from {
        "°C" => value,
        "°F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        _ => return value,
    };

    match to {
        "°C" => celsius,
        "°F" => celsius * 9.0 / 5.0 + 32.0,
        "K" => celsius + 273.15,
        _ => celsius,
    }
}

/// Format a conversion result: scientific notation outside
/// `[1e-6, 999999]` (zero included), otherwise 7 significant digits with
/// trailing zeros and a dangling point trimmed.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < SCI_LOWER_BOUND || value.abs() > SCI_UPPER_BOUND {
        return format_exponential(value, RESULT_EXP_DIGITS);
    }

    let formatted = format_precision(value, RESULT_SIG_DIGITS);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::catalog::{LENGTH, TEMPERATURE};

    fn unit(symbol: &str) -> &'static crate::units::catalog::Unit {
        LENGTH
            .unit(symbol)
            .or_else(|| TEMPERATURE.unit(symbol))
            .expect("unknown test unit")
    }

    #[test]
    fn test_linear_conversion_through_base() {
        assert_eq!(convert(1.0, unit("km"), unit("m"), "length"), 1000.0);
        let feet = convert(12.0, unit("in"), unit("ft"), "length");
        assert_eq!(format_result(feet), "1");
    }

    #[test]
    fn test_temperature_pivots_through_celsius() {
        assert_eq!(convert(0.0, unit("°C"), unit("°F"), "temperature"), 32.0);
        assert_eq!(convert(100.0, unit("°C"), unit("K"), "temperature"), 373.15);
        assert_eq!(convert(32.0, unit("°F"), unit("°C"), "temperature"), 0.0);
    }

    #[test]
    fn test_unknown_temperature_symbols_fall_through() {
        assert_eq!(convert_temperature(42.0, "R", "°C"), 42.0);
        assert_eq!(convert_temperature(212.0, "°F", "R"), 100.0);
    }

    #[test]
    fn test_format_thresholds() {
        assert_eq!(format_result(0.000001), "0.000001");
        assert_eq!(format_result(0.0000009), "9.000000e-7");
        assert_eq!(format_result(999999.0), "999999");
        assert_eq!(format_result(1000000.0), "1.000000e+6");
        assert_eq!(format_result(-1234567.0), "-1.234567e+6");
        assert_eq!(format_result(0.0), "0.000000e+0");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_result(373.15), "373.15");
        assert_eq!(format_result(1000.0), "1000");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(1.5), "1.5");
    }
}
