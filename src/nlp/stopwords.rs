//! Stopword filtering
//!
//! Ships the standard general-purpose English stopword list. The filter is
//! an ordinary value handed to the tokenizer, never a process-wide global.

use rustc_hash::FxHashSet;

/// The standard English stopword list (179 words).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// A set of words to drop during tokenization.
///
/// Lookups are case-sensitive against lower-cased entries; the tokenizer
/// lower-cases tokens before asking.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create the built-in filter for `language`.
    ///
    /// Unsupported languages yield an empty filter; check
    /// [`StopwordFilter::is_supported`] first when that matters.
    pub fn new(language: &str) -> Self {
        let words = match Self::builtin(language) {
            Some(list) => list.iter().map(|w| w.to_string()).collect(),
            None => FxHashSet::default(),
        };
        Self { words }
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether a built-in list exists for `language`
    pub fn is_supported(language: &str) -> bool {
        Self::builtin(language).is_some()
    }

    fn builtin(language: &str) -> Option<&'static [&'static str]> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Some(ENGLISH),
            _ => None,
        }
    }

    /// Extend the filter with additional words (lower-cased)
    pub fn with_additional<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Check if `word` is a stopword
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
