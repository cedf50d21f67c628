use super::error::OracleError;
use std::process::Command;
use tracing::debug;

/// Marker the `units` tool prints when the target is the inverse dimension
const RECIPROCAL_MARKER: &str = "reciprocal conversion";

/// External source of truth for unit conversions
pub trait Oracle {
    /// Convert `magnitude` in `from` to `to`, returning the raw standard output
    fn convert(&mut self, magnitude: &str, from: &str, to: &str) -> Result<String, OracleError>;
}

/// Oracle backed by the GNU `units` command-line tool
#[derive(Debug, Clone)]
pub struct UnitsOracle {
    program: String,
    precision: u32,
}

impl UnitsOracle {
    pub fn new(program: impl Into<String>, precision: u32) -> Self {
        Self {
            program: program.into(),
            precision,
        }
    }

    /// Arguments for a single-line, fixed-precision conversion
    pub fn args(&self, magnitude: &str, from: &str, to: &str) -> Vec<String> {
        vec![
            "-1".to_string(),
            "-o".to_string(),
            format!("%.{}g", self.precision),
            format!("{} {}", magnitude, from),
            to.to_string(),
        ]
    }
}

impl Default for UnitsOracle {
    fn default() -> Self {
        Self::new("units", 16)
    }
}

impl Oracle for UnitsOracle {
    fn convert(&mut self, magnitude: &str, from: &str, to: &str) -> Result<String, OracleError> {
        let args = self.args(magnitude, from, to);
        debug!(program = %self.program, ?args, "invoking oracle");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| OracleError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(match output.status.code() {
                Some(code) => OracleError::Exit(code),
                None => OracleError::Terminated,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Extract the expected value from successful oracle output
///
/// Output such as `\t* 1234.5 m` yields `1234.5`: the first token that parses
/// as a finite number wins and the trailing unit annotation is ignored.
pub fn classify(stdout: &str) -> Result<String, OracleError> {
    if stdout.contains(RECIPROCAL_MARKER) {
        return Err(OracleError::Reciprocal);
    }

    stdout
        .split_whitespace()
        .map(|token| token.trim_end_matches(|c: char| c == ',' || c == ';'))
        .find(|token| token.parse::<f64>().map_or(false, f64::is_finite))
        .map(str::to_string)
        .ok_or_else(|| OracleError::Malformed(stdout.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_args() {
        let oracle = UnitsOracle::default();
        assert_eq!(
            oracle.args("12.5000000000000000", "m*s/kg", "ft*min"),
            vec!["-1", "-o", "%.16g", "12.5000000000000000 m*s/kg", "ft*min"]
        );
    }

    #[test]
    fn test_classify_units_output() {
        assert_eq!(classify("\t* 1234.5678901234567\n").unwrap(), "1234.5678901234567");
        assert_eq!(classify("\t* -3.2e-07\n").unwrap(), "-3.2e-07");
    }

    #[test]
    fn test_classify_discards_trailing_annotation() {
        assert_eq!(
            classify("1234.5678901234567 unit").unwrap(),
            "1234.5678901234567"
        );
        assert_eq!(classify("* 42 ft min extra").unwrap(), "42");
    }

    #[test]
    fn test_classify_reciprocal() {
        let stdout = "\treciprocal conversion\n\t* 0.5\n";
        assert!(matches!(classify(stdout), Err(OracleError::Reciprocal)));
    }

    #[test]
    fn test_classify_malformed() {
        assert!(matches!(classify(""), Err(OracleError::Malformed(_))));
        assert!(matches!(
            classify("conformability error"),
            Err(OracleError::Malformed(_))
        ));
        // "inf" parses as a float but is not a usable literal
        assert!(matches!(classify("* inf"), Err(OracleError::Malformed(_))));
    }

    #[test]
    fn test_missing_program_is_not_retryable() {
        let mut oracle = UnitsOracle::new("unitgen-no-such-oracle-binary", 16);
        let err = oracle.convert("1", "m", "ft").unwrap_err();
        assert!(matches!(err, OracleError::Spawn { .. }));
        assert!(!err.is_retryable());
    }
}
