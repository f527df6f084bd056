//! Drill files for batch scoring
//!
//! ```toml
//! [[drill]]
//! target = "nǐ hǎo"
//! transcript = "你好"
//! romanized = "nǐ hǎo"
//! ```
//!
//! `romanized` may be left out when `transcript` is already pinyin.

use crate::assess::AttemptRequest;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct DrillFile {
    #[serde(default, rename = "drill")]
    pub drills: Vec<Drill>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Drill {
    pub target: String,
    pub transcript: String,
    #[serde(default)]
    pub romanized: Option<String>,
}

impl Drill {
    pub fn to_request(&self) -> AttemptRequest {
        AttemptRequest {
            transcript: Some(self.transcript.clone()),
            transcript_romanized: Some(
                self.romanized
                    .clone()
                    .unwrap_or_else(|| self.transcript.clone()),
            ),
            target_romanized: Some(self.target.clone()),
            upstream_error: None,
        }
    }
}

impl DrillFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading drill file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing drill file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drills() {
        let file = DrillFile::parse(
            r#"
[[drill]]
target = "nǐ hǎo"
transcript = "你好"
romanized = "nǐ hǎo"

[[drill]]
target = "xie4 xie5"
transcript = "xie4 xie4"
"#,
        )
        .unwrap();

        assert_eq!(file.drills.len(), 2);
        let first = file.drills[0].to_request();
        assert_eq!(first.transcript.as_deref(), Some("你好"));
        assert_eq!(first.transcript_romanized.as_deref(), Some("nǐ hǎo"));

        let second = file.drills[1].to_request();
        assert_eq!(second.transcript_romanized.as_deref(), Some("xie4 xie4"));
    }

    #[test]
    fn test_empty_file_has_no_drills() {
        assert!(DrillFile::parse("").unwrap().drills.is_empty());
    }

    #[test]
    fn test_missing_target_is_rejected() {
        assert!(DrillFile::parse("[[drill]]\ntranscript = \"ni3\"\n").is_err());
    }
}
