//! Splitting raw text into token sequences.

/// Whitespace-separated words. Empty pieces are dropped.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// One token per character.
pub fn split_chars(text: &str) -> Vec<String> {
    text.chars().map(String::from).collect()
}

/// Words if `text` contains whitespace, characters otherwise.
pub fn split_auto(text: &str) -> Vec<String> {
    if text.chars().any(char::is_whitespace) {
        split_words(text)
    } else {
        split_chars(text)
    }
}
