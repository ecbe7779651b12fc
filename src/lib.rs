//! # Introduction
//!
//! Tally is a four-mode terminal calculator: standard arithmetic,
//! scientific functions, programmer bases and bitwise operations, and
//! unit conversion.  The whole thing runs in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Key press → Session → Engine (arithmetic │ scientific │ programmer │ units) → Display
//! ```
//!
//! 1. [`session`] — the calculator state machine: display text, the
//!    pending equation, the active mode, and the last error.
//! 2. [`engine`] — per-mode evaluation: chained binary arithmetic,
//!    scientific functions, and integer base/bitwise operations.
//! 3. [`units`] — the unit catalog and linear/affine conversion.
//! 4. [`numeric`] — input sanitising and decimal formatting shared by
//!    the engines.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Modes
//!
//! Standard: chained `+ - * / %` over decimals, eight fraction digits.
//! Scientific: degree trigonometry, roots and powers, logarithms, π, e.
//! Programmer: 32-bit signed integers in hex/dec/oct/bin with AND, OR,
//! XOR, NOT, and single-bit shifts.
//! Converter: length, area, volume, mass, and temperature units.

pub mod engine;
pub mod numeric;
pub mod session;
pub mod ui;
pub mod units;
