//! Pronunciation scoring for Mandarin drills.
//!
//! Compares a learner's romanized transcript with the romanized target
//! phrase: an overall similarity score, a pass/fail verdict, and the syllable
//! positions that diverged.
//!
//! ```
//! use tonecheck::Assessor;
//!
//! let result = Assessor::default().compare("ni3 hao1", "ni3 hao3");
//! assert!(result.passed);
//! assert_eq!(result.mismatches[0].index, 1);
//! ```

pub mod assess;
pub mod config;
pub mod decision;
pub mod drill;
pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod mismatch;
pub mod normalize;
pub mod render;
pub mod stats;
pub mod tokenize;
pub mod tone;

pub use assess::{AssessmentReport, Assessor, AttemptRequest, ComparisonResult, UpstreamError};
pub use config::{Config, Thresholds};
pub use error::{AssessError, ConfigError, UpstreamStage};
pub use mismatch::MismatchRecord;
