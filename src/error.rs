use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Collaborator step that runs before text reaches the scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamStage {
    /// Speech-to-text
    Transcription,
    /// Script-to-pinyin conversion
    Romanization,
}

impl fmt::Display for UpstreamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamStage::Transcription => write!(f, "transcription"),
            UpstreamStage::Romanization => write!(f, "romanization"),
        }
    }
}

/// Why an attempt could not be scored.
///
/// Never a low score: callers must be able to tell "service unavailable"
/// apart from "pronunciation incorrect".
#[derive(Debug, Error, PartialEq)]
pub enum AssessError {
    #[error("missing required input `{field}`")]
    InputMissing { field: &'static str },

    #[error("{stage} step failed upstream: {message}")]
    UpstreamFailure {
        stage: UpstreamStage,
        message: String,
    },
}

impl AssessError {
    pub(crate) fn input_missing(field: &'static str) -> Self {
        Self::InputMissing { field }
    }

    pub(crate) fn upstream(stage: UpstreamStage, message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            stage,
            message: message.into(),
        }
    }

    /// Stable machine-readable kind, used in JSON error output
    pub fn kind(&self) -> &'static str {
        match self {
            AssessError::InputMissing { .. } => "input_missing",
            AssessError::UpstreamFailure { .. } => "upstream_failure",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error while reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("threshold `{name}` must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },
}
