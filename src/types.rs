//! Core types for rapid_qa
//!
//! This module defines the typed mappings that flow between the engine's
//! stages (queries, tokenized documents, IDF tables, scored results) and
//! the engine configuration.

use crate::errors::{QaError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::Path;

// ============================================================================
// Query
// ============================================================================

/// A set of normalized query words.
///
/// Duplicates collapse and iteration is lexical, so any sum taken over the
/// query is evaluated in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    words: BTreeSet<String>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from already-normalized words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokenize free text into a query
    pub fn parse(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::from_words(tokenizer.tokenize(text))
    }

    /// Check whether `word` is a query word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Iterate over the query words in lexical order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of distinct query words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the query has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

// ============================================================================
// Tokenized documents
// ============================================================================

/// A document (or sentence) identifier paired with its token sequence.
///
/// Token multiplicity is preserved; it is the basis of term frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedDocument {
    /// Opaque identifier (file name, or the sentence text itself)
    pub id: String,
    /// Normalized tokens in source order
    pub tokens: Vec<String>,
}

impl TokenizedDocument {
    /// Create a new tokenized document
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    /// Raw count of `word` in the token sequence
    pub fn term_frequency(&self, word: &str) -> usize {
        self.tokens.iter().filter(|t| t.as_str() == word).count()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// An insertion-ordered mapping from identifier to token sequence.
///
/// Identifiers are unique. Re-inserting an existing identifier replaces its
/// tokens but keeps its original position. Positions are the final
/// tie-break of both rankers.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    entries: Vec<TokenizedDocument>,
    index: FxHashMap<String, usize>,
}

impl DocumentSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert a document, returning `true` if the identifier was new
    pub fn insert(&mut self, id: impl Into<String>, tokens: Vec<String>) -> bool {
        let id = id.into();
        if let Some(&pos) = self.index.get(&id) {
            self.entries[pos].tokens = tokens;
            return false;
        }

        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(TokenizedDocument::new(id, tokens));
        true
    }

    /// Look up the tokens of a document by identifier
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].tokens.as_slice())
    }

    /// Input position of a document
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Iterate over documents in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TokenizedDocument> {
        self.entries.iter()
    }

    /// Documents in insertion order
    pub fn as_slice(&self) -> &[TokenizedDocument] {
        &self.entries
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<String>)> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = (S, Vec<String>)>>(iter: I) -> Self {
        let mut set = DocumentSet::new();
        for (id, tokens) in iter {
            set.insert(id, tokens);
        }
        set
    }
}

impl FromIterator<TokenizedDocument> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = TokenizedDocument>>(iter: I) -> Self {
        iter.into_iter().map(|d| (d.id, d.tokens)).collect()
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a TokenizedDocument;
    type IntoIter = std::slice::Iter<'a, TokenizedDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// IDF table
// ============================================================================

/// Inverse document frequency per distinct word of one corpus snapshot.
///
/// Lookups of unknown words return `0.0`: a word that never appeared in the
/// snapshot carries no discriminative weight. Use [`IdfTable::try_get`] to
/// tell "absent" apart from "present in every document".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
    idfs: FxHashMap<String, f64>,
    document_count: usize,
}

impl IdfTable {
    /// Create an empty table for a snapshot of `document_count` documents
    pub fn new(document_count: usize) -> Self {
        Self {
            idfs: FxHashMap::default(),
            document_count,
        }
    }

    pub(crate) fn with_entries(idfs: FxHashMap<String, f64>, document_count: usize) -> Self {
        Self {
            idfs,
            document_count,
        }
    }

    /// IDF of `word`, or `0.0` if the word is not in the table
    #[inline]
    pub fn get(&self, word: &str) -> f64 {
        self.idfs.get(word).copied().unwrap_or(0.0)
    }

    /// IDF of `word`, or `None` if the word is not in the table
    pub fn try_get(&self, word: &str) -> Option<f64> {
        self.idfs.get(word).copied()
    }

    /// Check if the table has an entry for `word`
    pub fn contains(&self, word: &str) -> bool {
        self.idfs.contains_key(word)
    }

    /// Number of documents in the snapshot the table was computed from
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.idfs.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.idfs.is_empty()
    }

    /// Entries sorted by word, for stable display and debugging
    pub fn iter_sorted(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.idfs.iter().map(|(w, &v)| (w.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

// ============================================================================
// Scored results
// ============================================================================

/// A document with its summed TF-IDF score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Document identifier
    pub id: String,
    /// Sum over query words of `tf * idf`
    pub score: f64,
    /// Position of the document in the ranked input
    pub position: usize,
}

impl ScoredDocument {
    /// Total order used for ranking: score descending, then input position.
    pub fn stable_cmp(&self, other: &Self) -> Ordering {
        cmp_desc(self.score, other.score).then_with(|| self.position.cmp(&other.position))
    }
}

/// A sentence with its matching-word IDF score and query-term density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    /// The sentence text
    pub text: String,
    /// Sum of IDFs of the distinct query words present in the sentence
    pub idf_score: f64,
    /// Fraction of the sentence's tokens that are query words
    pub density: f64,
    /// Position of the sentence in the ranked input
    pub position: usize,
}

impl ScoredSentence {
    /// Total order used for ranking.
    ///
    /// 1. **IDF score** descending
    /// 2. **Density** descending
    /// 3. **Input position** ascending
    pub fn stable_cmp(&self, other: &Self) -> Ordering {
        cmp_desc(self.idf_score, other.idf_score)
            .then_with(|| cmp_desc(self.density, other.density))
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Higher score first. Scores are finite, and `0.0` and `-0.0` tie.
#[inline]
fn cmp_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// ============================================================================
// Configuration
// ============================================================================

fn default_matches() -> usize {
    1
}

fn default_language() -> String {
    "en".to_string()
}

fn default_min_token_length() -> usize {
    1
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string()]
}

/// Configuration for the question answerer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaConfig {
    /// Number of top documents to search for sentences
    #[serde(default = "default_matches")]
    pub file_matches: usize,
    /// Number of top sentences to return
    #[serde(default = "default_matches")]
    pub sentence_matches: usize,
    /// Language code for stopwords
    #[serde(default = "default_language")]
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Minimum token length in characters
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,
    /// File extensions loaded from a corpus directory (without the dot)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Maximum number of Rayon threads. `None` uses Rayon's default.
    #[serde(default)]
    pub max_threads: Option<usize>,
    /// Disable parallelism entirely. Overrides `max_threads`.
    #[serde(default)]
    pub single_thread: bool,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            file_matches: default_matches(),
            sentence_matches: default_matches(),
            language: default_language(),
            stopwords: Vec::new(),
            min_token_length: default_min_token_length(),
            extensions: default_extensions(),
            max_threads: None,
            single_thread: false,
        }
    }
}

impl QaConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| QaError::io(path, &e))?;
        Self::from_json_str(&json)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.file_matches == 0 {
            return Err(QaError::invalid_config("file_matches must be > 0"));
        }

        if self.sentence_matches == 0 {
            return Err(QaError::invalid_config("sentence_matches must be > 0"));
        }

        if !StopwordFilter::is_supported(&self.language) {
            return Err(QaError::invalid_config(format!(
                "unsupported language '{}'",
                self.language
            )));
        }

        if self.min_token_length == 0 {
            return Err(QaError::invalid_config("min_token_length must be > 0"));
        }

        if self.extensions.is_empty() {
            return Err(QaError::invalid_config(
                "extensions must name at least one file extension",
            ));
        }

        if self.max_threads == Some(0) {
            return Err(QaError::invalid_config("max_threads must be > 0"));
        }

        Ok(())
    }

    /// Build the tokenizer described by this config
    pub fn tokenizer(&self) -> Tokenizer {
        let stopwords =
            StopwordFilter::new(&self.language).with_additional(self.stopwords.iter());
        Tokenizer::new(stopwords).with_min_length(self.min_token_length)
    }

    /// Resolve the effective thread count.
    ///
    /// - `single_thread == true` → `Some(1)`
    /// - `max_threads == Some(n)` → `Some(n)`
    /// - otherwise → `None` (use Rayon default)
    pub fn effective_threads(&self) -> Option<usize> {
        if self.single_thread {
            Some(1)
        } else {
            self.max_threads
        }
    }

    /// Build a Rayon thread pool matching this config.
    ///
    /// Returns `None` when no thread limit is set or the pool cannot be
    /// built; work then runs on the global pool. Each call spawns fresh OS
    /// threads, so callers answering many queries should build it once.
    pub fn thread_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.effective_threads()?;
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .ok()
    }

    /// Builder method: set number of top documents
    pub fn with_file_matches(mut self, n: usize) -> Self {
        self.file_matches = n;
        self
    }

    /// Builder method: set number of top sentences
    pub fn with_sentence_matches(mut self, n: usize) -> Self {
        self.sentence_matches = n;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Builder method: set the corpus file extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: limit the Rayon thread count
    pub fn with_max_threads(mut self, n: usize) -> Self {
        self.max_threads = Some(n);
        self
    }

    /// Builder method: disable parallelism
    pub fn with_single_thread(mut self, single_thread: bool) -> Self {
        self.single_thread = single_thread;
        self
    }
}
