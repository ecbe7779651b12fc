//! Static unit tables and the keyed category index

use rustc_hash::FxHashMap;

/// A single convertible unit. `factor` is the multiplier into the
/// category's base unit (meaningless for temperature, which converts
/// through [`super::convert`]'s affine paths).
#[derive(Debug, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub symbol: &'static str,
    pub factor: f64,
}

/// A conversion category: display name, base-unit symbol, and the unit
/// table in selector order. Every table carries at least two units.
#[derive(Debug)]
pub struct UnitCategory {
    pub name: &'static str,
    pub base_unit: &'static str,
    pub units: &'static [Unit],
}

impl UnitCategory {
    /// Look up a unit by its symbol
    pub fn unit(&self, symbol: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.symbol == symbol)
    }

    /// Index of a unit within the selector order
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.units.iter().position(|u| u.symbol == symbol)
    }
}

pub static LENGTH: UnitCategory = UnitCategory {
    name: "Length",
    base_unit: "m",
    units: &[
        Unit { name: "Kilometer", symbol: "km", factor: 1000.0 },
        Unit { name: "Meter", symbol: "m", factor: 1.0 },
        Unit { name: "Centimeter", symbol: "cm", factor: 0.01 },
        Unit { name: "Millimeter", symbol: "mm", factor: 0.001 },
        Unit { name: "Mile", symbol: "mi", factor: 1609.34 },
        Unit { name: "Yard", symbol: "yd", factor: 0.9144 },
        Unit { name: "Foot", symbol: "ft", factor: 0.3048 },
        Unit { name: "Inch", symbol: "in", factor: 0.0254 },
    ],
};

pub static AREA: UnitCategory = UnitCategory {
    name: "Area",
    base_unit: "m²",
    units: &[
        Unit { name: "Square Kilometer", symbol: "km²", factor: 1_000_000.0 },
        Unit { name: "Square Meter", symbol: "m²", factor: 1.0 },
        Unit { name: "Square Mile", symbol: "mi²", factor: 2_589_988.11 },
        Unit { name: "Acre", symbol: "ac", factor: 4046.86 },
        Unit { name: "Hectare", symbol: "ha", factor: 10_000.0 },
    ],
};

pub static VOLUME: UnitCategory = UnitCategory {
    name: "Volume",
    base_unit: "L",
    units: &[
        Unit { name: "Cubic Meter", symbol: "m³", factor: 1000.0 },
        Unit { name: "Liter", symbol: "L", factor: 1.0 },
        Unit { name: "Milliliter", symbol: "mL", factor: 0.001 },
        Unit { name: "Gallon (US)", symbol: "gal", factor: 3.78541 },
        Unit { name: "Quart (US)", symbol: "qt", factor: 0.946353 },
        Unit { name: "Pint (US)", symbol: "pt", factor: 0.473176 },
    ],
};

pub static MASS: UnitCategory = UnitCategory {
    name: "Mass",
    base_unit: "kg",
    units: &[
        Unit { name: "Tonne", symbol: "t", factor: 1000.0 },
        Unit { name: "Kilogram", symbol: "kg", factor: 1.0 },
        Unit { name: "Gram", symbol: "g", factor: 0.001 },
        Unit { name: "Milligram", symbol: "mg", factor: 0.000001 },
        Unit { name: "Pound", symbol: "lb", factor: 0.453592 },
        Unit { name: "Ounce", symbol: "oz", factor: 0.0283495 },
    ],
};

pub static TEMPERATURE: UnitCategory = UnitCategory {
    name: "Temperature",
    base_unit: "°C",
    units: &[
        Unit { name: "Celsius", symbol: "°C", factor: 1.0 },
        Unit { name: "Fahrenheit", symbol: "°F", factor: 1.0 },
        Unit { name: "Kelvin", symbol: "K", factor: 1.0 },
    ],
};

/// Category table in selector order, keyed by the identifiers the session
/// and the conversion math use.
pub static CATEGORIES: [(&str, &UnitCategory); 5] = [
    ("length", &LENGTH),
    ("area", &AREA),
    ("volume", &VOLUME),
    ("mass", &MASS),
    ("temperature", &TEMPERATURE),
];

/// Keyed index over [`CATEGORIES`] for by-name lookup
pub struct UnitCatalog {
    index: FxHashMap<&'static str, &'static UnitCategory>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        let mut index = FxHashMap::default();
        for (key, category) in &CATEGORIES {
            index.insert(*key, *category);
        }
        UnitCatalog { index }
    }

    /// Resolve a category key, returning the interned key alongside the
    /// table so callers can store both with a `'static` lifetime.
    pub fn lookup(&self, key: &str) -> Option<(&'static str, &'static UnitCategory)> {
        self.index.get_key_value(key).map(|(k, v)| (*k, *v))
    }

    pub fn category(&self, key: &str) -> Option<&'static UnitCategory> {
        self.index.get(key).copied()
    }
}

impl Default for UnitCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_resolves_every_category() {
        let catalog = UnitCatalog::new();
        for (key, category) in &CATEGORIES {
            let found = catalog.category(key).expect("category missing from index");
            assert_eq!(found.name, category.name);
            assert!(found.units.len() >= 2);
        }
        assert!(catalog.category("acceleration").is_none());
    }

    #[test]
    fn test_base_units_have_factor_one() {
        for (_, category) in &CATEGORIES {
            let base = category
                .unit(category.base_unit)
                .expect("base unit missing from its own table");
            assert_eq!(base.factor, 1.0);
        }
    }

    #[test]
    fn test_unit_lookup_by_symbol() {
        assert_eq!(LENGTH.unit("mi").map(|u| u.name), Some("Mile"));
        assert_eq!(LENGTH.position("m"), Some(1));
        assert!(TEMPERATURE.unit("R").is_none());
    }
}
