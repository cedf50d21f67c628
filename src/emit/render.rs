use super::prefixes::{generate, GeneratedUnit};
use crate::units::{PrefixDescriptor, UnitDescriptor, UnitKind, PREFIXES, UNITS};
use std::fmt::Write;

const DECLARATIONS_HEADER: &str = "// SI prefixes";
const REGISTRATIONS_HEADER: &str = "        // SI prefixes";
const REGISTRATION_INDENT: &str = "        ";

/// Which generated block to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Static declarations for the unit module
    Declarations,
    /// Builtin table entries for the unit registry
    Registrations,
    #[default]
    All,
}

/// One `pub static` line for a generated unit
fn declaration(unit: &GeneratedUnit) -> String {
    match (unit.kind(), unit.unit.quantity) {
        (UnitKind::Base, Some(quantity)) => format!(
            "pub static {}: Base = Base::new(\"{}\", {}, {});",
            unit.ident, unit.symbol, quantity, unit.factor
        ),
        _ => format!(
            "pub static {}: Lazy<Unit> = Lazy::new(|| {}.scaled({}).with_symbol(\"{}\"));",
            unit.ident, unit.unit.name, unit.factor, unit.symbol
        ),
    }
}

/// One builtin table entry for a generated unit
fn registration(unit: &GeneratedUnit) -> String {
    match unit.kind() {
        UnitKind::Base => format!("{}base!(units::{}),", REGISTRATION_INDENT, unit.ident),
        UnitKind::Derived => format!("{}unit!(&*units::{}),", REGISTRATION_INDENT, unit.ident),
    }
}

/// Render the declarations block, one blank line after each unit's group
pub fn render_declarations(units: &[GeneratedUnit]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", DECLARATIONS_HEADER);

    for (idx, unit) in units.iter().enumerate() {
        let _ = writeln!(out, "{}", declaration(unit));

        let group_ends = units
            .get(idx + 1)
            .map_or(true, |next| next.unit.name != unit.unit.name);
        if group_ends {
            out.push('\n');
        }
    }

    out
}

/// Render the registrations block
pub fn render_registrations(units: &[GeneratedUnit]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", REGISTRATIONS_HEADER);
    for unit in units {
        let _ = writeln!(out, "{}", registration(unit));
    }
    out
}

/// Emits both blocks from a pair of unit and prefix tables
pub struct SiPrefixEmitter<'a> {
    units: &'a [UnitDescriptor],
    prefixes: &'a [PrefixDescriptor],
}

impl<'a> SiPrefixEmitter<'a> {
    pub fn new(units: &'a [UnitDescriptor], prefixes: &'a [PrefixDescriptor]) -> Self {
        Self { units, prefixes }
    }

    pub fn generated(&self) -> Vec<GeneratedUnit> {
        generate(self.units, self.prefixes)
    }

    pub fn emit(&self, section: Section) -> String {
        let generated = self.generated();
        match section {
            Section::Declarations => render_declarations(&generated),
            Section::Registrations => render_registrations(&generated),
            Section::All => format!(
                "{}{}",
                render_declarations(&generated),
                render_registrations(&generated)
            ),
        }
    }
}

impl SiPrefixEmitter<'static> {
    /// Emitter over the built-in tables
    pub fn standard() -> Self {
        Self::new(&UNITS, &PREFIXES)
    }
}
