// Generates SI-prefixed unit declarations and their registry entries

pub mod prefixes;
pub mod render;

#[cfg(test)]
mod tests;

pub use prefixes::{generate, GeneratedUnit};
pub use render::{render_declarations, render_registrations, Section, SiPrefixEmitter};
