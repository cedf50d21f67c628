use crate::units::{PrefixDescriptor, UnitDescriptor, UnitKind};

/// A prefixed unit ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Static identifier (e.g., "KILOSECOND")
    pub ident: String,
    /// Prefixed symbol (e.g., "ks")
    pub symbol: String,
    /// Scale factor literal relative to the unprefixed unit
    pub factor: String,
    /// The unprefixed unit this was derived from
    pub unit: UnitDescriptor,
}

impl GeneratedUnit {
    fn new(unit: &UnitDescriptor, name: &str, symbol: &str, factor: &str) -> Self {
        Self {
            ident: format!("{}{}", name, unit.name),
            symbol: format!("{}{}", symbol, unit.symbol),
            factor: factor.to_string(),
            unit: unit.clone(),
        }
    }

    fn from_prefix(unit: &UnitDescriptor, prefix: &PrefixDescriptor) -> Self {
        Self::new(unit, prefix.name, prefix.symbol, prefix.factor)
    }

    pub fn kind(&self) -> UnitKind {
        self.unit.kind
    }
}

/// Prefixed variants produced for one (unit, prefix) pair
///
/// Kilogram is the canonical mass unit and is defined elsewhere, so KILO GRAM
/// yields nothing. MILLI METER also yields the centimeter alias.
fn variants(unit: &UnitDescriptor, prefix: &PrefixDescriptor) -> Vec<GeneratedUnit> {
    match (prefix.name, unit.name) {
        ("KILO", "GRAM") => vec![],
        ("MILLI", "METER") => vec![
            GeneratedUnit::from_prefix(unit, prefix),
            GeneratedUnit::new(unit, "CENTI", "c", "1e-2"),
        ],
        _ => vec![GeneratedUnit::from_prefix(unit, prefix)],
    }
}

/// Cartesian product of units and prefixes, units outermost
pub fn generate(units: &[UnitDescriptor], prefixes: &[PrefixDescriptor]) -> Vec<GeneratedUnit> {
    units
        .iter()
        .flat_map(|unit| prefixes.iter().flat_map(move |prefix| variants(unit, prefix)))
        .collect()
}
