// Fixed generator input. Order here is the order of the generated output.

use super::types::PhysicalQuantity::*;
use super::types::{PrefixDescriptor, UnitDescriptor};

/// Units that receive SI-prefixed variants
pub static UNITS: [UnitDescriptor; 16] = [
    UnitDescriptor::base("SECOND", "s", Time),
    UnitDescriptor::base("METER", "m", Length),
    UnitDescriptor::base("GRAM", "g", Mass),
    UnitDescriptor::base("AMPERE", "A", Current),
    UnitDescriptor::base("KELVIN", "K", Temperature),
    UnitDescriptor::base("MOLE", "mol", AmountOfSubstance),
    UnitDescriptor::base("CANDELA", "cd", LuminousIntensity),
    UnitDescriptor::base("RADIAN", "rad", Angle),
    UnitDescriptor::derived("JOULE", "J"),
    UnitDescriptor::derived("NEWTON", "N"),
    UnitDescriptor::derived("WATT", "W"),
    UnitDescriptor::derived("PASCAL", "Pa"),
    UnitDescriptor::derived("VOLT", "V"),
    UnitDescriptor::derived("OHM", "ohm"),
    UnitDescriptor::derived("FARAD", "F"),
    UnitDescriptor::derived("TESLA", "T"),
];

/// SI prefixes from peta down to femto
pub static PREFIXES: [PrefixDescriptor; 10] = [
    PrefixDescriptor::new("PETA", "P", "1e15"),
    PrefixDescriptor::new("TERA", "T", "1e12"),
    PrefixDescriptor::new("GIGA", "G", "1e9"),
    PrefixDescriptor::new("MEGA", "M", "1e6"),
    PrefixDescriptor::new("KILO", "k", "1e3"),
    PrefixDescriptor::new("MILLI", "m", "1e-3"),
    PrefixDescriptor::new("MICRO", "u", "1e-6"),
    PrefixDescriptor::new("NANO", "n", "1e-9"),
    PrefixDescriptor::new("PICO", "p", "1e-12"),
    PrefixDescriptor::new("FEMTO", "f", "1e-15"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::types::UnitKind;

    #[test]
    fn test_prefixes_are_descending_powers_of_ten() {
        let exponents: Vec<i32> = PREFIXES.iter().filter_map(|p| p.exponent()).collect();
        assert_eq!(exponents.len(), 10);
        assert_eq!(exponents.first(), Some(&15));
        assert_eq!(exponents.last(), Some(&-15));
        assert!(exponents.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_only_base_units_carry_a_quantity() {
        for unit in UNITS.iter() {
            match unit.kind {
                UnitKind::Base => assert!(unit.quantity.is_some(), "{}", unit.name),
                UnitKind::Derived => assert!(unit.quantity.is_none(), "{}", unit.name),
            }
        }
    }
}
