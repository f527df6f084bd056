//! String distance utilities using Levenshtein distance
//!
//! Used on whole normalized utterances and on single syllable tokens alike.
//! Distances count Unicode scalar values, so a precomposed tone mark such as
//! `ǎ` is one character.

/// Calculate Levenshtein distance between two strings
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        dp[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[a.len()][b.len()]
}

/// Similarity ratio in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Two empty strings are identical (ratio 1). The ratio is computed as
/// `(longest - distance) / longest` so exact fractions like 4/5 produce the
/// same `f64` as the literal `0.8`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (longest - distance) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 8] = [
        "",
        "a",
        "ni3 hao3",
        "ni3 hao1",
        "nǐ hǎo",
        "xie4 xie5",
        "kitten",
        "sitting",
    ];

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("hello", "helo"), 1);
        assert_eq!(levenshtein("hello", "world"), 4);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_empty_sides() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "hao"), 3);
        assert_eq!(levenshtein("hao", ""), 3);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        // ǎ and ā are two bytes each in UTF-8
        assert_eq!(levenshtein("hǎo", "hāo"), 1);
        assert_eq!(levenshtein("hǎo", "hao"), 1);
    }

    #[test]
    fn test_identity() {
        for a in SAMPLES {
            assert_eq!(levenshtein(a, a), 0, "{a:?}");
            assert_eq!(similarity(a, a), 1.0, "{a:?}");
        }
    }

    #[test]
    fn test_symmetry() {
        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        for a in SAMPLES {
            for b in SAMPLES {
                for c in SAMPLES {
                    assert!(
                        levenshtein(a, c) <= levenshtein(a, b) + levenshtein(b, c),
                        "{a:?} {b:?} {c:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("hao", ""), 0.0);
        assert_eq!(similarity("hao3", "hao1"), 0.75);
        assert_eq!(similarity("abcde", "abcdx"), 0.8);
        assert!((similarity("hǎo", "hāo") - 2.0 / 3.0).abs() < 1e-12);
    }
}
