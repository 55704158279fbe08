//! Unicode-aware tokenization
//!
//! This module turns raw text into ordered sequences of content words and
//! splits documents into sentences, using UAX #29 word and sentence
//! segmentation.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// A tokenizer producing lower-cased, punctuation-free, stopword-free words
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Words dropped from the output
    stopwords: StopwordFilter,
    /// Minimum token length to consider
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Tokenizer {
    /// Create a tokenizer that removes the given stopwords
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            min_token_length: 1,
        }
    }

    /// Create a tokenizer with the built-in English stopword list
    pub fn english() -> Self {
        Self::new(StopwordFilter::new("en"))
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize text into normalized words, in source order.
    ///
    /// Punctuation is stripped before splitting, so "don't" becomes "dont"
    /// and "U.S." becomes "us". Empty text yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(text).to_lowercase();

        // unicode_words only yields segments containing an alphanumeric
        // character, so pure-punctuation tokens never get this far.
        cleaned
            .unicode_words()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .filter(|word| !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    /// Split raw text into trimmed, non-empty sentences.
    ///
    /// Each line is treated as a separate passage, so a sentence never spans
    /// a line break.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();

        for passage in text.split('\n') {
            for (start, end) in sentence_boundaries(passage) {
                let sentence = passage[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
            }
        }

        sentences
    }
}

/// Remove every character that is not a word character or whitespace.
///
/// Word characters are alphanumerics and `_`.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
        .collect()
}

/// Titles and Latin abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "jr", "sr", "vs", "etc", "e.g", "i.e",
];

/// Find sentence boundaries in a passage.
///
/// UAX #29 boundaries after a known abbreviation or a single-letter initial
/// are merged into the following segment.
fn sentence_boundaries(text: &str) -> Vec<(usize, usize)> {
    let mut boundaries = Vec::new();
    let mut start = 0;

    for (idx, segment) in text.split_sentence_bound_indices() {
        let end = idx + segment.len();
        if end < text.len() && ends_with_abbreviation(segment) {
            continue;
        }
        if !text[start..end].trim().is_empty() {
            boundaries.push((start, end));
        }
        start = end;
    }

    // Handle last segment
    if start < text.len() && !text[start..].trim().is_empty() {
        boundaries.push((start, text.len()));
    }

    boundaries
}

/// Whether a segment's final word is an abbreviation or an initial followed by a period
fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(stem) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    let word = stem
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default()
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_alphabetic(),
        (Some(_), Some(_)) => {
            let lowered = word.to_lowercase();
            ABBREVIATIONS.contains(&lowered.as_str())
        }
        _ => false,
    }
}
