//! Spoiler masking for console output.
//!
//! Dictionary words appear in uppercase, including inside definitions, so
//! any all-uppercase token is flagged with a run of asterisks.

/// Prefix every token that equals its own uppercase form with asterisks of
/// the same length. Tokens are re-joined with single spaces.
pub fn censor(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if token == token.to_uppercase() {
                format!("{}{}", "*".repeat(token.chars().count()), token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One answer line for the console: `WORD [length] definition`, with both
/// the word and the definition passed through [`censor`] when `masked`.
pub fn answer_line(word: &str, definition: &str, masked: bool) -> String {
    if masked {
        format!("{} [{}] {}", censor(word), word.len(), censor(definition))
    } else {
        format!("{} [{}] {}", word, word.len(), definition)
    }
}
