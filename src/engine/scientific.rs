//! Scientific functions and constants
//!
//! All functions are unary over the current display value; π and e ignore
//! it entirely. Trig functions take their argument in degrees, like a desk
//! calculator. `apply` never fails - domain misuse (sqrt of a negative,
//! log of zero) produces a non-finite value that the shared result
//! formatter rejects.

use std::f64::consts;

/// Functions available in scientific mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SciFunction {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Square,
    Cube,
    Log,
    Ln,
    Pi,
    E,
}

impl SciFunction {
    /// Keypad order
    pub const ALL: [SciFunction; 10] = [
        SciFunction::Sin,
        SciFunction::Cos,
        SciFunction::Tan,
        SciFunction::Sqrt,
        SciFunction::Square,
        SciFunction::Cube,
        SciFunction::Log,
        SciFunction::Ln,
        SciFunction::Pi,
        SciFunction::E,
    ];

    /// Keypad label
    pub fn label(self) -> &'static str {
        match self {
            SciFunction::Sin => "sin",
            SciFunction::Cos => "cos",
            SciFunction::Tan => "tan",
            SciFunction::Sqrt => "√",
            SciFunction::Square => "x²",
            SciFunction::Cube => "x³",
            SciFunction::Log => "log",
            SciFunction::Ln => "ln",
            SciFunction::Pi => "π",
            SciFunction::E => "e",
        }
    }

    /// True for the constants that replace the operand instead of
    /// transforming it
    pub fn is_constant(self) -> bool {
        matches!(self, SciFunction::Pi | SciFunction::E)
    }

    /// Apply the function to the operand (degrees for trig)
    pub fn apply(self, operand: f64) -> f64 {
        match self {
            SciFunction::Sin => operand.to_radians().sin(),
            SciFunction::Cos => operand.to_radians().cos(),
            SciFunction::Tan => operand.to_radians().tan(),
            SciFunction::Sqrt => operand.sqrt(),
            SciFunction::Square => operand * operand,
            SciFunction::Cube => operand * operand * operand,
            SciFunction::Log => operand.log10(),
            SciFunction::Ln => operand.ln(),
            SciFunction::Pi => consts::PI,
            SciFunction::E => consts::E,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trig_in_degrees() {
        assert!((SciFunction::Sin.apply(90.0) - 1.0).abs() < 1e-12);
        assert!((SciFunction::Cos.apply(0.0) - 1.0).abs() < 1e-12);
        assert!((SciFunction::Tan.apply(45.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constants_ignore_operand() {
        assert_eq!(SciFunction::Pi.apply(123.0), consts::PI);
        assert_eq!(SciFunction::E.apply(-7.5), consts::E);
        assert!(SciFunction::Pi.is_constant());
        assert!(!SciFunction::Sqrt.is_constant());
    }

    #[test]
    fn test_domain_misuse_goes_non_finite() {
        assert!(SciFunction::Sqrt.apply(-4.0).is_nan());
        assert!(SciFunction::Log.apply(0.0).is_infinite());
        assert!(SciFunction::Ln.apply(-1.0).is_nan());
    }
}
