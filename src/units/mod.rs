//! Unit conversion engine
//!
//! This module provides physical unit conversion:
//! - [`catalog`]: the static unit tables (length, area, volume, mass,
//!   temperature) and the keyed [`catalog::UnitCatalog`] index
//! - [`convert`]: the conversion math and the result formatter
//!
//! # Conversion Model
//!
//! Every non-temperature category converts through its base unit with a
//! linear factor:
//! ```text
//! result = value * from.factor / to.factor
//! ```
//! Temperature is affine and routes through a Celsius pivot instead; its
//! table factors exist only to keep the [`catalog::Unit`] shape uniform.

pub mod catalog;
pub mod convert;
