/// Split normalized text into syllable tokens, in utterance order.
///
/// Empty tokens never appear, so `""` and `"   "` both yield no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}
