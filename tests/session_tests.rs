use tally::engine::arithmetic::ArithOp;
use tally::engine::errors::EvalError;
use tally::engine::programmer::{NumberBase, ProgrammerOp};
use tally::engine::scientific::SciFunction;
use tally::session::{Mode, Session, MAX_DISPLAY_LEN};

#[test]
fn test_display_starts_at_zero_and_replaces_the_leading_zero() {
    let mut session = Session::new();
    assert_eq!(session.display(), "0");

    session.press_digit('0');
    assert_eq!(session.display(), "0");

    session.press_digit('5');
    assert_eq!(session.display(), "5");
    session.press_digit('0');
    assert_eq!(session.display(), "50");
}

#[test]
fn test_decimal_point_counts_toward_the_cap() {
    let mut session = Session::new();
    session.press_digit('1');
    session.press_decimal();
    for _ in 0..20 {
        session.press_digit('5');
    }
    assert_eq!(session.display().len(), MAX_DISPLAY_LEN);
    assert!(session.display().starts_with("1."));
}

#[test]
fn test_decimal_point_only_once_per_operand() {
    let mut session = Session::new();
    session.press_digit('1');
    session.press_decimal();
    session.press_digit('5');
    session.press_decimal();
    session.press_digit('5');
    assert_eq!(session.display(), "1.55");

    // The operator press starts a fresh operand that may take a new point.
    session.press_operator(ArithOp::Add);
    session.press_digit('2');
    session.press_decimal();
    session.press_digit('5');
    assert_eq!(session.display(), "2.5");
}

#[test]
fn test_backspace_collapses_to_zero_and_reopens_the_decimal() {
    let mut session = Session::new();
    session.press_digit('1');
    session.press_decimal();
    session.press_digit('5');
    assert_eq!(session.display(), "1.5");

    session.press_backspace();
    session.press_backspace();
    assert_eq!(session.display(), "1");

    // With the point deleted, a new one is accepted again.
    session.press_decimal();
    session.press_digit('2');
    assert_eq!(session.display(), "1.2");

    session.press_backspace();
    session.press_backspace();
    session.press_backspace();
    assert_eq!(session.display(), "0");
    session.press_backspace();
    assert_eq!(session.display(), "0");
}

#[test]
fn test_clear_resets_entry_but_keeps_selections() {
    let mut session = Session::new();
    session.set_mode(Mode::Programmer);
    session.apply_programmer(ProgrammerOp::SetBase(NumberBase::Hex));
    session.press_digit('f');
    session.press_operator(ArithOp::Add);

    session.press_clear();
    assert_eq!(session.display(), "0");
    assert_eq!(session.equation(), "");
    assert_eq!(session.mode(), Mode::Programmer);
    assert_eq!(session.base(), NumberBase::Hex);
}

#[test]
fn test_mode_cycle_wraps() {
    assert_eq!(Mode::Standard.next(), Mode::Scientific);
    assert_eq!(Mode::Scientific.next(), Mode::Programmer);
    assert_eq!(Mode::Programmer.next(), Mode::Converter);
    assert_eq!(Mode::Converter.next(), Mode::Standard);
}

#[test]
fn test_mode_switch_preserves_display_and_base() {
    let mut session = Session::new();
    session.set_mode(Mode::Programmer);
    session.apply_programmer(ProgrammerOp::SetBase(NumberBase::Hex));
    session.press_digit('f');

    session.set_mode(Mode::Standard);
    session.set_mode(Mode::Programmer);
    assert_eq!(session.display(), "00f");
    assert_eq!(session.base(), NumberBase::Hex);
}

#[test]
fn test_scientific_roots_and_powers() {
    let mut session = Session::new();
    session.set_mode(Mode::Scientific);

    session.press_digit('9');
    session.apply_scientific(SciFunction::Sqrt);
    assert_eq!(session.display(), "3");

    session.press_clear();
    session.press_digit('1');
    session.press_digit('2');
    session.apply_scientific(SciFunction::Square);
    assert_eq!(session.display(), "144");

    session.press_clear();
    session.press_digit('5');
    session.apply_scientific(SciFunction::Cube);
    assert_eq!(session.display(), "125");
}

#[test]
fn test_scientific_constants_replace_the_display() {
    let mut session = Session::new();
    session.set_mode(Mode::Scientific);
    session.press_digit('7');

    session.apply_scientific(SciFunction::Pi);
    assert_eq!(session.display(), "3.14159265");

    session.apply_scientific(SciFunction::E);
    assert_eq!(session.display(), "2.71828183");
}

#[test]
fn test_trigonometry_works_in_degrees() {
    let mut session = Session::new();
    session.set_mode(Mode::Scientific);

    session.press_digit('3');
    session.press_digit('0');
    session.apply_scientific(SciFunction::Sin);
    assert_eq!(session.display(), "0.50000000");

    session.press_clear();
    session.press_digit('4');
    session.press_digit('5');
    session.apply_scientific(SciFunction::Tan);
    assert_eq!(session.display(), "1.00000000");
}

#[test]
fn test_scientific_functions_clear_the_pending_equation() {
    let mut session = Session::new();
    session.set_mode(Mode::Scientific);
    session.press_digit('9');
    session.press_operator(ArithOp::Add);
    session.press_digit('1');
    session.press_digit('6');

    session.apply_scientific(SciFunction::Sqrt);
    assert_eq!(session.display(), "4");
    assert_eq!(session.equation(), "");
}

#[test]
fn test_logarithm_of_zero_is_an_invalid_result() {
    let mut session = Session::new();
    session.set_mode(Mode::Scientific);

    session.apply_scientific(SciFunction::Log);
    assert!(matches!(
        session.last_error(),
        Some(EvalError::InvalidResult { .. })
    ));
    assert_eq!(session.display(), "0");

    session.press_digit('1');
    assert!(session.last_error().is_none());
    session.apply_scientific(SciFunction::Ln);
    assert_eq!(session.display(), "0");
}

#[test]
fn test_equals_without_pending_operator_formats_the_display() {
    let mut session = Session::new();
    session.press_digit('0');
    session.press_decimal();
    for digit in "123456789".chars() {
        session.press_digit(digit);
    }
    assert_eq!(session.display(), "0.123456789");

    session.press_equals();
    assert_eq!(session.display(), "0.12345679");
}
