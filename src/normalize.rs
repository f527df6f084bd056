//! Text normalization for comparing a transcript against its target phrase
//!
//! Speech-to-text output and hand-typed targets differ in casing, punctuation
//! style (full-width vs ASCII) and spacing. Normalization removes all three so
//! the remaining differences are the ones the learner actually produced.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Full-width and CJK punctuation stripped during normalization
pub const CJK_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', '“', '”', '‘', '’', '（', '）', '《', '》', '〈',
    '〉', '【', '】', '「', '」', '『', '』', '…', '—', '～', '·',
];

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

/// Normalize free text: lowercase, spell `u:` as `ü`, strip CJK and ASCII
/// punctuation, compose tone marks (NFC), collapse whitespace runs and trim.
///
/// Empty input yields an empty string. The function is idempotent.
pub fn normalize(text: &str) -> String {
    // Composing first turns singleton decompositions such as U+037E into the
    // punctuation they stand for, so the strip below catches them.
    let composed: String = text.nfc().collect();
    let lowered = composed.to_lowercase().replace("u:", "ü");

    let stripped: String = lowered
        .chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .collect();

    // Compose again: a removed character may have separated a base letter
    // from its combining mark.
    let recomposed: String = stripped.nfc().collect();

    WHITESPACE_RUN
        .replace_all(&recomposed, " ")
        .trim()
        .to_string()
}

fn is_stripped_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || CJK_PUNCTUATION.contains(&c)
}
