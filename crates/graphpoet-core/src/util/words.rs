//! Word tokenization utilities.
//!
//! Tokens are maximal runs of non-whitespace characters. Punctuation is
//! part of the token, so `"system."` and `"system"` are different words.

/// Split a line into its whitespace-separated words.
///
/// Runs of whitespace collapse, and leading/trailing whitespace produces
/// no empty tokens.
///
/// # Examples
///
/// ```
/// use graphpoet_core::util::words::split_words;
///
/// let words: Vec<&str> = split_words("  To explore\tnew   worlds. ").collect();
/// assert_eq!(words, vec!["To", "explore", "new", "worlds."]);
/// assert_eq!(split_words("   ").count(), 0);
/// ```
pub fn split_words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Fold a word to the form stored as a vertex label.
///
/// # Examples
///
/// ```
/// use graphpoet_core::util::words::fold_case;
///
/// assert_eq!(fold_case("HELLO"), "hello");
/// assert_eq!(fold_case("World."), "world.");
/// ```
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}
