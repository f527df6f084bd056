//! Pronunciation assessment pipeline
//!
//! normalize -> tokenize -> whole-string similarity (tone-mark form) ->
//! positional token comparison -> verdict. Every stage is a pure function; [`Assessor`] only
//! carries the thresholds.

use crate::config::Thresholds;
use crate::decision::decide;
use crate::error::{AssessError, UpstreamStage};
use crate::fuzzy::similarity;
use crate::mismatch::{MismatchRecord, find_mismatches};
use crate::normalize::normalize;
use crate::tokenize::tokenize;
use crate::tone::tone_marked_text;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of comparing one transcript with its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub normalized_transcript: String,
    pub normalized_target: String,
    /// 0..=100
    pub similarity: u8,
    pub passed: bool,
    pub mismatches: Vec<MismatchRecord>,
}

/// Failure reported by the speech-to-text or romanization collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamError {
    pub stage: UpstreamStage,
    pub message: String,
}

/// Everything the collaborators hand over for one attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRequest {
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub transcript_romanized: Option<String>,
    #[serde(default)]
    pub target_romanized: Option<String>,
    #[serde(default)]
    pub upstream_error: Option<UpstreamError>,
}

impl AttemptRequest {
    /// Request for an attempt whose transcript is already romanized
    pub fn romanized(transcript: impl Into<String>, target: impl Into<String>) -> Self {
        let transcript = transcript.into();
        Self {
            transcript_romanized: Some(transcript.clone()),
            transcript: Some(transcript),
            target_romanized: Some(target.into()),
            upstream_error: None,
        }
    }
}

/// Result returned to callers for a scored attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub transcript: String,
    pub transcript_romanized: String,
    pub normalized_transcript: String,
    pub target_romanized: String,
    pub normalized_target: String,
    pub passed: bool,
    pub similarity: u8,
    pub mismatches: Vec<MismatchRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Assessor {
    thresholds: Thresholds,
}

impl Assessor {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Score a romanized transcript against a romanized target.
    #[hotpath::measure]
    pub fn compare(&self, transcript: &str, target: &str) -> ComparisonResult {
        let normalized_transcript = normalize(transcript);
        let normalized_target = normalize(target);

        let transcript_tokens = tokenize(&normalized_transcript);
        let target_tokens = tokenize(&normalized_target);

        let overall = similarity(
            &tone_marked_text(&transcript_tokens),
            &tone_marked_text(&target_tokens),
        );
        let mismatches =
            find_mismatches(&transcript_tokens, &target_tokens, self.thresholds.mismatch);
        let verdict = decide(
            &normalized_transcript,
            &normalized_target,
            overall,
            self.thresholds.pass,
        );

        debug!(
            expected = %normalized_target,
            received = %normalized_transcript,
            similarity = overall,
            passed = verdict.passed,
            mismatches = mismatches.len(),
            "compared attempt"
        );

        ComparisonResult {
            normalized_transcript,
            normalized_target,
            similarity: verdict.score,
            passed: verdict.passed,
            mismatches,
        }
    }

    /// Validate a request and score it. Nothing is scored when an input is
    /// missing or a collaborator failed.
    pub fn assess(&self, request: &AttemptRequest) -> Result<AssessmentReport, AssessError> {
        let (transcript, transcript_romanized, target) =
            validate(request).inspect_err(|e| warn!(kind = e.kind(), "rejected attempt: {e}"))?;

        let result = self.compare(transcript_romanized, target);

        Ok(AssessmentReport {
            transcript: transcript.to_string(),
            transcript_romanized: transcript_romanized.to_string(),
            normalized_transcript: result.normalized_transcript,
            target_romanized: target.to_string(),
            normalized_target: result.normalized_target,
            passed: result.passed,
            similarity: result.similarity,
            mismatches: result.mismatches,
        })
    }
}

/// Returns (transcript, transcript_romanized, target_romanized)
fn validate(request: &AttemptRequest) -> Result<(&str, &str, &str), AssessError> {
    if let Some(upstream) = &request.upstream_error {
        return Err(AssessError::upstream(upstream.stage, upstream.message.clone()));
    }

    let target = present(&request.target_romanized)
        .ok_or_else(|| AssessError::input_missing("targetRomanized"))?;
    let transcript =
        present(&request.transcript).ok_or_else(|| AssessError::input_missing("transcript"))?;
    let romanized = present(&request.transcript_romanized).ok_or_else(|| {
        AssessError::upstream(
            UpstreamStage::Romanization,
            "no romanized transcript was produced",
        )
    })?;

    Ok((transcript, romanized, target))
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
