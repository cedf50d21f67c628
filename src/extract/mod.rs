// Recovers declared unit symbols from a unit-definitions source file

pub mod scanner;


pub use scanner::{dedup_units, extract_units, extract_units_from_lines, strip_line};
