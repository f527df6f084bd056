//! Pass/fail decision for a scored attempt

/// Pass/fail verdict with the score shown to the learner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    /// Whole-utterance similarity as a percentage, 0..=100
    pub score: u8,
}

/// Decide the verdict for one attempt.
///
/// The pass threshold is inclusive. An exact match of the normalized strings
/// always passes, whatever the ratio rounds to.
pub fn decide(
    normalized_transcript: &str,
    normalized_target: &str,
    similarity: f64,
    pass_threshold: f64,
) -> Verdict {
    let passed = similarity >= pass_threshold || normalized_transcript == normalized_target;
    Verdict {
        passed,
        score: to_score(similarity),
    }
}

fn to_score(similarity: f64) -> u8 {
    (similarity.clamp(0.0, 1.0) * 100.0).round() as u8
}
