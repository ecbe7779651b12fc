//! The calculator session state machine
//!
//! [`Session`] owns everything a calculator surface needs to render:
//! display text, the pending equation fragment, the active mode, the
//! programmer base, the converter selection, and the last evaluation
//! error. Every user action is a method that mutates the session in place.
//!
//! # Failure Model
//!
//! A failed action records its [`EvalError`] and leaves the rest of the
//! state exactly as it was; a successful action clears any recorded error.
//! The session never looks at the clock - transient error display windows
//! belong to the UI layer.

use crate::engine::arithmetic::{self, ArithOp};
use crate::engine::errors::EvalError;
use crate::engine::programmer::{self, NumberBase, ProgrammerOp};
use crate::engine::scientific::SciFunction;
use crate::numeric::parse::parse_or_nan;
use crate::units::catalog::{self, Unit, UnitCatalog, UnitCategory};
use crate::units::convert;

/// Maximum number of characters typed into the display
pub const MAX_DISPLAY_LEN: usize = 16;

/// The four operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Standard,
    Scientific,
    Programmer,
    Converter,
}

impl Mode {
    /// Tab order
    pub const ALL: [Mode; 4] = [
        Mode::Standard,
        Mode::Scientific,
        Mode::Programmer,
        Mode::Converter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Scientific => "Scientific",
            Mode::Programmer => "Programmer",
            Mode::Converter => "Converter",
        }
    }

    /// The next mode in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Mode::Standard => Mode::Scientific,
            Mode::Scientific => Mode::Programmer,
            Mode::Programmer => Mode::Converter,
            Mode::Converter => Mode::Standard,
        }
    }
}

/// Owned calculator state, one instance per running calculator
pub struct Session {
    display: String,
    equation: String,
    has_decimal: bool,
    mode: Mode,
    base: NumberBase,
    category_key: &'static str,
    category: &'static UnitCategory,
    from_unit: &'static Unit,
    to_unit: &'static Unit,
    last_error: Option<EvalError>,
    catalog: UnitCatalog,
}

impl Session {
    pub fn new() -> Self {
        let (category_key, category) = catalog::CATEGORIES[0];
        Session {
            display: String::from("0"),
            equation: String::new(),
            has_decimal: false,
            mode: Mode::Standard,
            base: NumberBase::Dec,
            category_key,
            category,
            from_unit: &category.units[0],
            to_unit: &category.units[1],
            last_error: None,
            catalog: UnitCatalog::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn base(&self) -> NumberBase {
        self.base
    }

    pub fn category_key(&self) -> &'static str {
        self.category_key
    }

    pub fn category(&self) -> &'static UnitCategory {
        self.category
    }

    pub fn from_unit(&self) -> &'static Unit {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static Unit {
        self.to_unit
    }

    pub fn last_error(&self) -> Option<&EvalError> {
        self.last_error.as_ref()
    }

    /// Drop the recorded error (the UI calls this when its display window
    /// expires)
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Switch operating modes. Display, equation, and base survive the
    /// switch.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Append a digit to the display. In programmer mode the digit must be
    /// valid under the active base; elsewhere the caller routes only
    /// decimal digits here. A lone `"0"` is replaced instead of extended,
    /// and input beyond the display cap is dropped.
    pub fn press_digit(&mut self, digit: char) {
        if self.mode == Mode::Programmer && !self.base.is_valid_digit(digit) {
            self.last_error = Some(EvalError::InvalidInput {
                text: digit.to_string(),
            });
            return;
        }
        self.last_error = None;

        if self.display.len() >= MAX_DISPLAY_LEN {
            return;
        }
        if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    /// Capture the display plus the operator as the pending equation and
    /// reset the display for the second operand.
    pub fn press_operator(&mut self, op: ArithOp) {
        self.equation = format!("{}{}", self.display, op.symbol());
        self.display = String::from("0");
        self.has_decimal = false;
        self.last_error = None;
    }

    /// Append the decimal point, once per operand. Programmer mode has no
    /// decimal point.
    pub fn press_decimal(&mut self) {
        if self.has_decimal || self.mode == Mode::Programmer {
            return;
        }
        self.display.push('.');
        self.has_decimal = true;
        self.last_error = None;
    }

    /// Reset display and equation. Mode, base, and converter selection
    /// survive.
    pub fn press_clear(&mut self) {
        self.display = String::from("0");
        self.equation.clear();
        self.has_decimal = false;
        self.last_error = None;
    }

    /// Remove the last display character; a single character collapses
    /// back to `"0"`.
    pub fn press_backspace(&mut self) {
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = String::from("0");
        }
        self.has_decimal = self.display.contains('.');
        self.last_error = None;
    }

    /// Evaluate the pending equation against the display.
    pub fn press_equals(&mut self) {
        match arithmetic::evaluate(&self.equation, &self.display) {
            Ok(value) => self.commit_result(value),
            Err(err) => self.last_error = Some(err),
        }
    }

    /// Apply a scientific function to the display value. Unparseable
    /// display text becomes NaN and is rejected by the result formatter.
    pub fn apply_scientific(&mut self, func: SciFunction) {
        let operand = parse_or_nan(&self.display);
        self.commit_result(func.apply(operand));
    }

    /// Apply a programmer operation: parse the display in the active base,
    /// pull the second operand from the equation slot where the operation
    /// needs one, and re-render in the (possibly switched) base.
    pub fn apply_programmer(&mut self, op: ProgrammerOp) {
        let operand = match programmer::parse_in_base(&self.display, self.base) {
            Ok(value) => value,
            Err(err) => {
                self.last_error = Some(err);
                return;
            }
        };

        let second = if op.takes_second_operand() {
            match programmer::parse_decimal_prefix(&self.equation) {
                Ok(value) => value,
                Err(err) => {
                    self.last_error = Some(err);
                    return;
                }
            }
        } else {
            0
        };

        let outcome = programmer::apply(op, operand, second);
        if let Some(new_base) = outcome.new_base {
            self.base = new_base;
        }
        self.display = programmer::format_in_base(outcome.value, self.base);
        self.has_decimal = false;
        self.equation.clear();
        self.last_error = None;
    }

    /// Convert the display value between the selected units. The pending
    /// equation survives a conversion.
    pub fn apply_convert(&mut self) {
        let value = parse_or_nan(&self.display);
        let result = convert::convert(value, self.from_unit, self.to_unit, self.category_key);
        if !result.is_finite() {
            self.last_error = Some(EvalError::InvalidResult { value: result });
            return;
        }
        self.display = convert::format_result(result);
        self.has_decimal = self.display.contains('.');
        self.last_error = None;
    }

    /// Select a conversion category by key, resetting the unit pair to the
    /// table's first two entries. Unknown keys are ignored.
    pub fn select_category(&mut self, key: &str) {
        if let Some((stored_key, category)) = self.catalog.lookup(key) {
            self.category_key = stored_key;
            self.category = category;
            self.from_unit = &category.units[0];
            self.to_unit = &category.units[1];
        }
    }

    /// Select the source unit by symbol within the active category.
    /// Unknown symbols are ignored.
    pub fn set_from_unit(&mut self, symbol: &str) {
        if let Some(unit) = self.category.unit(symbol) {
            self.from_unit = unit;
        }
    }

    /// Select the target unit by symbol within the active category.
    pub fn set_to_unit(&mut self, symbol: &str) {
        if let Some(unit) = self.category.unit(symbol) {
            self.to_unit = unit;
        }
    }

    /// Exchange source and target units.
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Advance to the next category in selector order, wrapping around.
    pub fn cycle_category(&mut self) {
        let position = catalog::CATEGORIES
            .iter()
            .position(|(key, _)| *key == self.category_key)
            .unwrap_or(0);
        let (key, _) = catalog::CATEGORIES[(position + 1) % catalog::CATEGORIES.len()];
        self.select_category(key);
    }

    /// Advance the source unit within the active category, wrapping.
    pub fn cycle_from_unit(&mut self) {
        let category = self.category;
        if let Some(position) = category.position(self.from_unit.symbol) {
            self.from_unit = &category.units[(position + 1) % category.units.len()];
        }
    }

    /// Advance the target unit within the active category, wrapping.
    pub fn cycle_to_unit(&mut self) {
        let category = self.category;
        if let Some(position) = category.position(self.to_unit.symbol) {
            self.to_unit = &category.units[(position + 1) % category.units.len()];
        }
    }

    /// Store a formatted result as the new display and retire the pending
    /// equation; formatting failures are recorded without touching state.
    fn commit_result(&mut self, value: f64) {
        match arithmetic::format_result(value) {
            Ok(formatted) => {
                self.has_decimal = formatted.contains('.');
                self.display = formatted;
                self.equation.clear();
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
