use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "tonecheck.toml";
pub const CONFIG_ENV_VAR: &str = "TONECHECK_CONFIG";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub report: ReportConfig,
}

// ============================================================================
// Thresholds
// ============================================================================

/// Tunable acceptance levels for the scorer
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum whole-utterance similarity (inclusive) for a pass
    #[serde(default = "default_pass_threshold")]
    pub pass: f64,
    /// Token pairs with similarity below this are reported as mismatches
    #[serde(default = "default_mismatch_threshold")]
    pub mismatch: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pass: default_pass_threshold(),
            mismatch: default_mismatch_threshold(),
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("pass", self.pass), ("mismatch", self.mismatch)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

fn default_pass_threshold() -> f64 {
    0.80
}

fn default_mismatch_threshold() -> f64 {
    0.70
}

// ============================================================================
// Report Config
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// ANSI colors in terminal reports
    #[serde(default = "default_color")]
    pub color: bool,
    /// Print the normalized strings under the raw ones
    #[serde(default)]
    pub show_normalized: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_normalized: false,
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load config from an explicit path, `$TONECHECK_CONFIG`, or
    /// `tonecheck.toml` in the working directory, in that order.
    ///
    /// An explicitly named file must exist; the working-directory default is
    /// optional and falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        let config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Config::default()
                }
            }
        };

        config.thresholds.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
