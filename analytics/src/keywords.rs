//! Keyword/hashtag candidate extraction from normalized post text.

/// Tokenize normalized text into candidate keywords: split on whitespace,
/// lowercase, and keep a token iff it starts with `#` or is longer than
/// three characters. Punctuation is preserved; the sequence feeds a
/// frequency count, so order only matters for tie-breaking there.
pub fn extract(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .filter(|token| token.starts_with('#') || token.chars().count() > 3)
        .collect()
}
