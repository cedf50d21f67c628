// Unit and SI prefix tables consumed by the code generators

pub mod tables;
pub mod types;

pub use tables::{PREFIXES, UNITS};
pub use types::{PhysicalQuantity, PrefixDescriptor, UnitDescriptor, UnitKind};
