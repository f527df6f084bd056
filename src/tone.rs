//! Pinyin tone notation
//!
//! Targets are often typed with tone numbers (`hao3`) while romanizers emit
//! tone marks (`hǎo`). Both the whole-utterance score and the per-syllable
//! comparison rewrite numbered syllables into the marked form first, so the
//! notation alone never costs points and a wrong tone costs one changed vowel
//! in either notation instead of one trailing digit.

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'ü'];

/// Rewrite a numbered-tone syllable (`hao3`, `lv4`, `lü4`, `ma5`) into
/// tone-mark form (`hǎo`, `lǜ`, `lǜ`, `ma`). Any other token is returned
/// unchanged.
pub fn to_tone_marks(token: &str) -> String {
    let Some((body, tone)) = split_tone_number(token) else {
        return token.to_string();
    };
    let body: String = body.chars().map(|c| if c == 'v' { 'ü' } else { c }).collect();

    if tone == 5 {
        return body;
    }

    let Some(target) = mark_position(&body) else {
        return token.to_string();
    };

    body.chars()
        .enumerate()
        .map(|(i, c)| if i == target { with_mark(c, tone) } else { c })
        .collect()
}

/// Split `hao3` into (`hao`, 3). Only lowercase ASCII letters (plus `ü`)
/// followed by a single digit 1-5 qualify.
fn split_tone_number(token: &str) -> Option<(&str, u8)> {
    let last = token.chars().last()?;
    let tone = last.to_digit(10)? as u8;
    if !(1..=5).contains(&tone) {
        return None;
    }
    let body = &token[..token.len() - 1];
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_lowercase() || c == 'ü') {
        return None;
    }
    Some((body, tone))
}

/// Index (in chars) of the vowel that carries the tone mark.
fn mark_position(body: &str) -> Option<usize> {
    let chars: Vec<char> = body.chars().collect();
    if let Some(i) = chars.iter().position(|&c| c == 'a' || c == 'e') {
        return Some(i);
    }
    if let Some(i) = chars.windows(2).position(|w| w == ['o', 'u']) {
        return Some(i);
    }
    chars.iter().rposition(|c| VOWELS.contains(c))
}

/// Tone-mark rendering of a token sequence, joined with single spaces
pub fn tone_marked_text(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|t| to_tone_marks(t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn with_mark(vowel: char, tone: u8) -> char {
    let marks = match vowel {
        'a' => ['ā', 'á', 'ǎ', 'à'],
        'e' => ['ē', 'é', 'ě', 'è'],
        'i' => ['ī', 'í', 'ǐ', 'ì'],
        'o' => ['ō', 'ó', 'ǒ', 'ò'],
        'u' => ['ū', 'ú', 'ǔ', 'ù'],
        'ü' => ['ǖ', 'ǘ', 'ǚ', 'ǜ'],
        other => return other,
    };
    marks[usize::from(tone - 1)]
}
