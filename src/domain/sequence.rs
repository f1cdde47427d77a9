// ============================================================
// Layer 3: Sequences
// ============================================================
// CER compares Unicode scalar values (Rust `char`), one element
// per code point. No grapheme clustering, no normalisation.
//
// WER splits on a single literal space. Repeated delimiters are
// NOT collapsed, so "a  b" is three words: ["a", "", "b"].
// That also means "" is one (empty) word, never zero words.

/// The literal delimiter used to split text into words
pub const WORD_DELIMITER: char = ' ';

/// Split `text` into its characters.
pub fn characters(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Split `text` into words on [`WORD_DELIMITER`], keeping empty segments.
pub fn words(text: &str) -> Vec<&str> {
    text.split(WORD_DELIMITER).collect()
}
