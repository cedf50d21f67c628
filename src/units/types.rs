use std::fmt;

/// Physical quantity measured by a base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalQuantity {
    Time,
    Length,
    Mass,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
    Angle,
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rendered as the bare variant name, matching `use PhysicalQuantity::*`
        // in the generated unit module.
        let name = match self {
            PhysicalQuantity::Time => "Time",
            PhysicalQuantity::Length => "Length",
            PhysicalQuantity::Mass => "Mass",
            PhysicalQuantity::Current => "Current",
            PhysicalQuantity::Temperature => "Temperature",
            PhysicalQuantity::AmountOfSubstance => "AmountOfSubstance",
            PhysicalQuantity::LuminousIntensity => "LuminousIntensity",
            PhysicalQuantity::Angle => "Angle",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Declared as a `Base` with its own physical quantity
    Base,
    /// Declared as a `Unit` composed from other units
    Derived,
}

/// A unit that receives SI-prefixed variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDescriptor {
    /// Identifier stem in generated code (e.g., "METER")
    pub name: &'static str,
    /// Display symbol (e.g., "m")
    pub symbol: &'static str,
    /// Quantity for base units; derived units have none
    pub quantity: Option<PhysicalQuantity>,
    pub kind: UnitKind,
}

impl UnitDescriptor {
    pub const fn base(name: &'static str, symbol: &'static str, quantity: PhysicalQuantity) -> Self {
        Self {
            name,
            symbol,
            quantity: Some(quantity),
            kind: UnitKind::Base,
        }
    }

    pub const fn derived(name: &'static str, symbol: &'static str) -> Self {
        Self {
            name,
            symbol,
            quantity: None,
            kind: UnitKind::Derived,
        }
    }
}

/// A metric prefix and its scale factor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixDescriptor {
    /// Identifier prefix in generated code (e.g., "KILO")
    pub name: &'static str,
    /// Symbol prefix (e.g., "k")
    pub symbol: &'static str,
    /// Scale factor as a decimal exponent literal (e.g., "1e3")
    pub factor: &'static str,
}

impl PrefixDescriptor {
    pub const fn new(name: &'static str, symbol: &'static str, factor: &'static str) -> Self {
        Self {
            name,
            symbol,
            factor,
        }
    }

    /// Power of ten encoded in `factor`, if it has the `1eN` shape
    pub fn exponent(&self) -> Option<i32> {
        self.factor.strip_prefix("1e")?.parse().ok()
    }
}
