use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

lazy_static! {
    /// Base unit definition: `Base::new("m", Length, 1.0)`
    static ref BASE_PATTERN: Regex = Regex::new(r#"Base::new\("([^"]+)"#).unwrap();

    /// Derived unit symbol: `(&*JOULE / &SECOND).with_symbol("W")`
    static ref SYMBOL_PATTERN: Regex = Regex::new(r#"with_symbol\("([^"]+)"#).unwrap();
}

/// Markers that end the meaningful part of a line, in priority order
const LINE_TERMINATORS: [&str; 3] = ["//", "#![", "#["];

/// Drop comments and attributes from a single source line
pub fn strip_line(line: &str) -> &str {
    LINE_TERMINATORS
        .iter()
        .fold(line, |rest, marker| match rest.find(marker) {
            Some(idx) => &rest[..idx],
            None => rest,
        })
        .trim()
}

/// Extract unit symbols from the full text of a unit-definitions source
pub fn extract_units(source: &str) -> Vec<String> {
    extract_units_from_lines(source.lines())
}

/// Extract unit symbols from source lines, in first-occurrence order
///
/// Lines are stripped and joined with single spaces so that statements split
/// across lines are matched as a whole. Statements matching neither pattern
/// are skipped.
pub fn extract_units_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized = lines
        .into_iter()
        .map(strip_line)
        .collect::<Vec<_>>()
        .join(" ");

    let units: Vec<String> = normalized
        .split(';')
        .filter_map(|stmt| {
            BASE_PATTERN
                .captures(stmt)
                .or_else(|| SYMBOL_PATTERN.captures(stmt))
                .map(|caps| caps[1].to_string())
        })
        .collect();

    debug!(count = units.len(), "extracted unit symbols");
    units
}

/// Remove repeated symbols, keeping the first occurrence of each
pub fn dedup_units(units: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    units
        .iter()
        .filter(|u| seen.insert(u.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line() {
        assert_eq!(strip_line("  let x = 1; // note"), "let x = 1;");
        assert_eq!(strip_line("#[allow(dead_code)]"), "");
        assert_eq!(strip_line("#![allow(dead_code)]"), "");
        assert_eq!(strip_line("/// SI base unit for time"), "");
        assert_eq!(
            strip_line("pub static X: Base = Base::new(\"x\", Time, 1.0);"),
            "pub static X: Base = Base::new(\"x\", Time, 1.0);"
        );
    }

    #[test]
    fn test_dedup_units() {
        let units: Vec<String> = ["m", "s", "m", "kg", "s"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup_units(&units), vec!["m", "s", "kg"]);
    }
}
