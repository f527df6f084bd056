//! Syllable-level mismatch localization
//!
//! Tokens are compared index for index. There is no realignment: when the
//! learner merges or splits a syllable, every later index shifts and the
//! mismatches cascade from that point on. Drills are short fixed-form
//! phrases, where the positional report is what learners are shown.

use crate::fuzzy::similarity;
use crate::tone::to_tone_marks;
use serde::{Deserialize, Serialize};

/// One diverging syllable. An empty side means the token is missing there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchRecord {
    pub index: usize,
    pub expected: String,
    pub received: String,
}

/// Compare token sequences position by position and report every pair whose
/// similarity falls below `threshold`.
pub fn find_mismatches(
    transcript_tokens: &[String],
    target_tokens: &[String],
    threshold: f64,
) -> Vec<MismatchRecord> {
    let len = transcript_tokens.len().max(target_tokens.len());
    let mut mismatches = Vec::new();

    for index in 0..len {
        let expected = target_tokens.get(index).map(String::as_str).unwrap_or("");
        let received = transcript_tokens.get(index).map(String::as_str).unwrap_or("");

        if expected == received {
            continue;
        }

        let ratio = token_similarity(expected, received);
        if ratio < threshold {
            mismatches.push(MismatchRecord {
                index,
                expected: expected.to_string(),
                received: received.to_string(),
            });
        }
    }

    mismatches
}

/// Similarity of two syllables, insensitive to tone notation
fn token_similarity(expected: &str, received: &str) -> f64 {
    similarity(&to_tone_marks(expected), &to_tone_marks(received))
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 0.7;

    fn tokens(s: &str) -> Vec<String> {
        crate::tokenize::tokenize(s)
    }

    #[test]
    fn test_identical_sequences() {
        assert!(find_mismatches(&tokens("ni3 hao3"), &tokens("ni3 hao3"), THRESHOLD).is_empty());
        assert!(find_mismatches(&[], &[], THRESHOLD).is_empty());
    }

    #[test]
    fn test_wrong_tone_is_reported() {
        let found = find_mismatches(&tokens("ni3 hao1"), &tokens("ni3 hao3"), THRESHOLD);
        assert_eq!(
            found,
            vec![MismatchRecord {
                index: 1,
                expected: "hao3".into(),
                received: "hao1".into(),
            }]
        );
    }

    #[test]
    fn test_wrong_tone_mark_is_reported() {
        let found = find_mismatches(&tokens("nǐ hāo"), &tokens("nǐ hǎo"), THRESHOLD);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].index, 1);
    }

    #[test]
    fn test_notation_difference_alone_is_accepted() {
        assert!(find_mismatches(&tokens("nǐ hǎo"), &tokens("ni3 hao3"), THRESHOLD).is_empty());
    }

    #[test]
    fn test_close_tokens_are_accepted() {
        // 11 of 12 chars agree
        let found = find_mismatches(&tokens("zhuangzhuan"), &tokens("zhuangzhuang"), THRESHOLD);
        assert!(found.is_empty());
    }

    #[test]
    fn test_missing_trailing_token() {
        let found = find_mismatches(&tokens("ni3"), &tokens("ni3 hao3"), THRESHOLD);
        assert_eq!(
            found,
            vec![MismatchRecord {
                index: 1,
                expected: "hao3".into(),
                received: String::new(),
            }]
        );
    }

    #[test]
    fn test_extra_trailing_token() {
        let found = find_mismatches(&tokens("ni3 hao3 ma5"), &tokens("ni3 hao3"), THRESHOLD);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].expected, "");
        assert_eq!(found[0].received, "ma5");
    }

    #[test]
    fn test_dropped_token_cascades() {
        // "hen3" dropped: every following index shifts
        let found = find_mismatches(
            &tokens("wo3 gao1 xing4"),
            &tokens("wo3 hen3 gao1 xing4"),
            THRESHOLD,
        );
        let indices: Vec<usize> = found.iter().map(|m| m.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(found[2].received, "");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // "abcd" vs "abce": ratio 0.75
        assert!(find_mismatches(&tokens("abce"), &tokens("abcd"), 0.75).is_empty());
        assert_eq!(find_mismatches(&tokens("abce"), &tokens("abcd"), 0.76).len(), 1);
    }
}
