/// Word characters are Unicode alphanumerics and `_`; everything else separates tokens.
pub fn is_word_char(c: char) -> bool { c.is_alphanumeric() || c == '_' }

/// Lower-cases `text`, splits it on runs of non-word characters and keeps the
/// tokens with at least `min_token_len` characters. Empty tokens never survive.
pub fn tokenize(text: &str, min_token_len: usize) -> Vec<String> {
    let min = min_token_len.max(1);
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|t| t.chars().count() >= min)
        .map(String::from)
        .collect()
}
