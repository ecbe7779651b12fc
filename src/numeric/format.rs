//! Canonical display formatting for calculator results
//!
//! The three entry points cover the display contracts of the calculator:
//!
//! - [`format_fixed`]: exactly `frac_digits` digits after the point,
//!   trailing zeros kept
//! - [`format_precision`]: a fixed number of significant digits, for unit
//!   conversion results in the plain-decimal range
//! - [`format_exponential`]: scientific notation with a signed exponent
//!   (`3.731500e+2`), for very large and very small magnitudes
//!
//! Rounding always happens on the exact decimal expansion of the binary
//! value, with ties going away from zero. `format!` with a precision is only
//! used to obtain the expansion (40 digits is past the region where its own
//! rounding could disturb the digits we keep).

/// Increment a big-endian ASCII digit run in place. Returns true when the
/// carry ran off the front and a leading `1` was inserted.
fn increment_digits(digits: &mut Vec<u8>) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    digits.insert(0, b'1');
    true
}

/// Render `value` with exactly `frac_digits` digits after the decimal
/// point, rounding ties away from zero. `frac_digits == 0` yields a bare
/// integer with no point.
pub fn format_fixed(value: f64, frac_digits: usize) -> String {
    let negative = value < 0.0;
    let expanded = format!("{:.40}", value.abs());
    let (int_part, frac_part) = match expanded.split_once('.') {
        Some(parts) => parts,
        None => (expanded.as_str(), ""),
    };

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let mut int_len = digits.len();
    digits.extend(frac_part.bytes().take(frac_digits));
    while digits.len() < int_len + frac_digits {
        digits.push(b'0');
    }

    let round_up = frac_part
        .as_bytes()
        .get(frac_digits)
        .is_some_and(|d| *d >= b'5');
    if round_up && increment_digits(&mut digits) {
        int_len += 1;
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if frac_digits > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

/// Render `value` with `sig_digits` significant digits as a plain decimal.
/// Callers keep `value` inside the range where that is representable
/// without an exponent (the unit formatter routes anything else to
/// [`format_exponential`]).
pub fn format_precision(value: f64, sig_digits: usize) -> String {
    if value == 0.0 {
        return format_fixed(0.0, sig_digits.saturating_sub(1));
    }
    let exponent = decimal_exponent(value);
    let frac_digits = (sig_digits as i32 - 1 - exponent).max(0) as usize;
    format_fixed(value, frac_digits)
}

/// Render `value` in scientific notation with `frac_digits` mantissa
/// digits after the point and an always-signed exponent: `1.000000e+7`,
/// `-3.5e-2`. Zero renders as `0.000000e+0`.
pub fn format_exponential(value: f64, frac_digits: usize) -> String {
    let negative = value < 0.0;
    let expanded = format!("{:.40e}", value.abs());
    let (mantissa, exp_text) = match expanded.split_once('e') {
        Some(parts) => parts,
        None => (expanded.as_str(), "0"),
    };
    let mut exponent: i32 = exp_text.parse().unwrap_or(0);

    let (lead, frac) = match mantissa.split_once('.') {
        Some(parts) => parts,
        None => (mantissa, ""),
    };
    let mut digits: Vec<u8> = lead.bytes().collect();
    digits.extend(frac.bytes().take(frac_digits));
    while digits.len() < frac_digits + 1 {
        digits.push(b'0');
    }

    let round_up = frac
        .as_bytes()
        .get(frac_digits)
        .is_some_and(|d| *d >= b'5');
    if round_up && increment_digits(&mut digits) {
        // 9.999... carried over into a new leading digit; renormalize.
        digits.pop();
        exponent += 1;
    }

    let mut out = String::with_capacity(digits.len() + 6);
    if negative {
        out.push('-');
    }
    out.push(digits[0] as char);
    if frac_digits > 0 {
        out.push('.');
        out.extend(digits[1..].iter().map(|&d| d as char));
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
    out
}

/// Power of ten of the leading significant digit, taken from the `{:e}`
/// rendition rather than log10 to avoid boundary fuzz at exact powers.
fn decimal_exponent(value: f64) -> i32 {
    let exponential = format!("{:e}", value.abs());
    match exponential.rsplit_once('e') {
        Some((_, exp)) => exp.parse().unwrap_or(0),
        None => 0,
    }
}
