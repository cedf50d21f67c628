use crate::fuzz::generator::{DEFAULT_MAGNITUDE_BOUND, DEFAULT_MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "unitgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Unit-definitions source scanned by `fuzz`
    #[serde(default = "default_units_source")]
    pub units_source: PathBuf,

    #[serde(default)]
    pub oracle: OracleConfig,

    #[serde(default)]
    pub fuzz: FuzzConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OracleConfig {
    #[serde(default = "default_oracle_program")]
    pub program: String,

    // Significant digits requested from the oracle
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            program: default_oracle_program(),
            precision: default_precision(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FuzzConfig {
    // Magnitudes are drawn from (-bound, bound)
    #[serde(default = "default_magnitude_bound")]
    pub magnitude_bound: f64,

    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            magnitude_bound: default_magnitude_bound(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_units_source() -> PathBuf {
    PathBuf::from("src/units/mod.rs")
}

fn default_oracle_program() -> String {
    "units".to_string()
}

fn default_precision() -> u32 {
    16
}

fn default_magnitude_bound() -> f64 {
    DEFAULT_MAGNITUDE_BOUND
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units_source: default_units_source(),
            oracle: OracleConfig::default(),
            fuzz: FuzzConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `unitgen.toml` if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fuzz.magnitude_bound.is_finite() && self.fuzz.magnitude_bound > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fuzz.magnitude_bound must be a positive number, got {}",
                self.fuzz.magnitude_bound
            )));
        }
        if self.fuzz.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "fuzz.max_attempts must be at least 1".to_string(),
            ));
        }
        if self.oracle.precision == 0 {
            return Err(ConfigError::Invalid(
                "oracle.precision must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
