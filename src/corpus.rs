//! Corpus loading
//!
//! A corpus maps document names to raw text. Names are opaque to the
//! engine; iteration is always sorted by name so every downstream stage
//! sees the documents in the same order.

use crate::errors::{QaError, Result};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::DocumentSet;
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// An immutable, in-memory collection of raw documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from `(name, text)` pairs. Later duplicates win.
    pub fn from_documents<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load every file in `dir` whose extension is one of `extensions`.
    ///
    /// Subdirectories are not visited. File contents are kept verbatim;
    /// invalid UTF-8 is replaced rather than rejected.
    pub fn load_dir<S: AsRef<str>>(dir: impl AsRef<Path>, extensions: &[S]) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| QaError::io(dir, &e))?;

        let mut documents = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| QaError::io(dir, &e))?;
            let path = entry.path();
            if !path.is_file() || !has_extension(&path, extensions) {
                continue;
            }

            let bytes = fs::read(&path).map_err(|e| QaError::io(&path, &e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            documents.insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(dir = %dir.display(), documents = documents.len(), "loaded corpus");

        Ok(Self { documents })
    }

    /// Raw text of a document
    pub fn get(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    /// Iterate over `(name, text)` pairs sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Document names sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Tokenize every document, keeping corpus order.
    ///
    /// Large corpora are tokenized in parallel.
    pub fn tokenize(&self, tokenizer: &Tokenizer) -> DocumentSet {
        let docs: Vec<(&String, &String)> = self.documents.iter().collect();

        let tokenized: Vec<(String, Vec<String>)> = if docs.len() < PARALLEL_THRESHOLD {
            docs.iter()
                .map(|(name, text)| (name.to_string(), tokenizer.tokenize(text)))
                .collect()
        } else {
            docs.par_iter()
                .map(|(name, text)| (name.to_string(), tokenizer.tokenize(text)))
                .collect()
        };

        let mut set = DocumentSet::with_capacity(tokenized.len());
        for (name, tokens) in tokenized {
            set.insert(name, tokens);
        }
        set
    }
}

fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.as_ref().eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
