//! Sentence segmentation.
//!
//! Splits text on sentence punctuation and on dashes surrounded by
//! whitespace. Segments are borrowed slices of the input; empty segments
//! are dropped.

/// Characters that terminate a sentence segment.
const SENTENCE_DELIMITERS: &[char] = &[
    '.', '!', '?', ',', ';', ':', '\t', '\\', '"', '(', ')', '\'', '\u{2019}', '\u{2013}',
];

/// Split text into sentence-level segments.
///
/// A `-` only delimits when surrounded by whitespace, so hyphenated words
/// like `co-occurrence` stay inside one segment.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let is_break = if SENTENCE_DELIMITERS.contains(&c) {
            true
        } else if c == '-' {
            prev.is_some_and(char::is_whitespace)
                && iter.peek().is_some_and(|&(_, next)| next.is_whitespace())
        } else {
            false
        };

        if is_break {
            let segment = text[start..i].trim();
            if !segment.is_empty() {
                sentences.push(segment);
            }
            start = i + c.len_utf8();
        }
        prev = Some(c);
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}
