use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// Units in the sampled "from" expression
pub const FROM_UNITS: usize = 3;
/// Units in the sampled "to" expression
pub const TO_UNITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Operator::Multiply
        } else {
            Operator::Divide
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Multiply => write!(f, "*"),
            Operator::Divide => write!(f, "/"),
        }
    }
}

/// Units combined left to right with `*` and `/`
///
/// `ops[i]` joins the accumulated expression with `units[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundUnit {
    pub units: Vec<String>,
    pub ops: Vec<Operator>,
}

impl CompoundUnit {
    pub fn new(units: Vec<String>, ops: Vec<Operator>) -> Self {
        debug_assert_eq!(units.len(), ops.len() + 1);
        Self { units, ops }
    }

    fn join(&self, sep: &str) -> String {
        let mut out = self.units[0].clone();
        for (op, unit) in self.ops.iter().zip(&self.units[1..]) {
            out.push_str(&format!("{}{}{}{}", sep, op, sep, unit));
        }
        out
    }

    /// Compact infix form passed to the oracle: `m*s/kg`
    pub fn oracle_expr(&self) -> String {
        self.join("")
    }

    /// Spaced infix form for people: `m * s / kg`
    pub fn readable(&self) -> String {
        self.join(" ")
    }

    /// Postfix form understood by the calculator under test: `m s * kg /`
    pub fn postfix(&self) -> String {
        let mut parts = vec![self.units[0].clone()];
        for (op, unit) in self.ops.iter().zip(&self.units[1..]) {
            parts.push(unit.clone());
            parts.push(op.to_string());
        }
        parts.join(" ")
    }
}

/// One randomized conversion test
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzCase {
    /// Magnitude with 16 digits after the decimal point
    pub magnitude: String,
    pub from: CompoundUnit,
    pub to: CompoundUnit,
    /// Oracle answer, kept as the literal text it printed
    pub expected: Option<String>,
}

fn sample_compound<R: Rng + ?Sized>(
    rng: &mut R,
    units: &[String],
    count: usize,
) -> Option<CompoundUnit> {
    let picked = (0..count)
        .map(|_| units.choose(rng).cloned())
        .collect::<Option<Vec<_>>>()?;
    let ops = (1..count).map(|_| Operator::sample(rng)).collect();
    Some(CompoundUnit::new(picked, ops))
}

/// Uniform draw from the open interval (-bound, bound)
fn sample_magnitude<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    loop {
        let x = rng.gen_range(-bound..bound);
        if x != -bound {
            return x;
        }
    }
}

impl FuzzCase {
    /// Draw a fresh case from `units`, or `None` if there are no units
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        units: &[String],
        magnitude_bound: f64,
    ) -> Option<Self> {
        let from = sample_compound(rng, units, FROM_UNITS)?;
        let to = sample_compound(rng, units, TO_UNITS)?;
        let magnitude = format!("{:.16}", sample_magnitude(rng, magnitude_bound));

        Some(Self {
            magnitude,
            from,
            to,
            expected: None,
        })
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Test function name built from the five sampled units
    pub fn test_name(&self) -> String {
        let mut name = String::from("test");
        for unit in self.from.units.iter().chain(&self.to.units) {
            name.push('_');
            name.extend(unit.chars().map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c
                } else {
                    '_'
                }
            }));
        }
        name
    }

    /// Expected value as a float literal (`12` becomes `12.0`)
    pub fn expected_literal(&self) -> Option<String> {
        let expected = self.expected.as_ref()?;
        if expected.contains(|c: char| c == '.' || c == 'e' || c == 'E') {
            Some(expected.clone())
        } else {
            Some(format!("{}.0", expected))
        }
    }

    /// Render as a `#[test]` function asserting the oracle's answer
    pub fn render(&self) -> Option<String> {
        let expected = self.expected_literal()?;
        Some(format!(
            r#"#[test]
#[allow(non_snake_case)]
fn {name}() {{
    // {magnitude} {from} -> {to}
    dotest!("{magnitude} {from_postfix} {to_postfix} into", {expected});
}}"#,
            name = self.test_name(),
            magnitude = self.magnitude,
            from = self.from.readable(),
            to = self.to.readable(),
            from_postfix = self.from.postfix(),
            to_postfix = self.to.postfix(),
            expected = expected,
        ))
    }
}

/// Header for a test file holding generated cases
pub fn render_preamble() -> &'static str {
    r#"use approx::assert_relative_eq;

use calc::eval;
use calc::popf;

macro_rules! dotest {
    ($code:expr, $res:expr) => {
        let mut ctx = eval::Context::new();
        let status = ctx.eval($code);
        assert_eq!(status, eval::Status::Ok);
        let mut tx = ctx.stack.begin();
        assert_relative_eq!(
            popf!(tx).unwrap().value,
            $res,
            epsilon = f64::EPSILON * 100.0
        );
    };
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(units: &[&str], ops: &[Operator]) -> CompoundUnit {
        CompoundUnit::new(units.iter().map(|u| u.to_string()).collect(), ops.to_vec())
    }

    #[test]
    fn test_compound_forms() {
        let from = compound(&["m", "s", "kg"], &[Operator::Multiply, Operator::Divide]);
        assert_eq!(from.oracle_expr(), "m*s/kg");
        assert_eq!(from.readable(), "m * s / kg");
        assert_eq!(from.postfix(), "m s * kg /");
    }

    #[test]
    fn test_test_name_sanitized() {
        let case = FuzzCase {
            magnitude: "1.0000000000000000".to_string(),
            from: compound(&["m", "deg-C", "kg"], &[Operator::Divide, Operator::Divide]),
            to: compound(&["µm", "s"], &[Operator::Multiply]),
            expected: None,
        };
        assert_eq!(case.test_name(), "test_m_deg_C_kg__m_s");
    }

    #[test]
    fn test_expected_literal_is_float() {
        let case = FuzzCase {
            magnitude: "1.0000000000000000".to_string(),
            from: compound(&["m", "m", "m"], &[Operator::Multiply, Operator::Multiply]),
            to: compound(&["m", "m"], &[Operator::Multiply]),
            expected: None,
        };
        assert_eq!(case.expected_literal(), None);
        assert_eq!(case.clone().with_expected("12").expected_literal().unwrap(), "12.0");
        assert_eq!(case.clone().with_expected("-0.5").expected_literal().unwrap(), "-0.5");
        assert_eq!(case.with_expected("1e-05").expected_literal().unwrap(), "1e-05");
    }

    #[test]
    fn test_render_without_expected() {
        let case = FuzzCase {
            magnitude: "1.0000000000000000".to_string(),
            from: compound(&["m", "m", "m"], &[Operator::Multiply, Operator::Multiply]),
            to: compound(&["m", "m"], &[Operator::Multiply]),
            expected: None,
        };
        assert!(case.render().is_none());
    }

    #[test]
    fn test_preamble_defines_macro() {
        assert!(render_preamble().contains("macro_rules! dotest"));
    }
}
