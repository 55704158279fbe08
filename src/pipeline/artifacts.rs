//! Pipeline outputs.

use crate::types::{ScoredDocument, ScoredSentence};
use serde::{Deserialize, Serialize};

/// Result of answering one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Normalized query words, in lexical order
    pub query: Vec<String>,
    /// Top documents, best first
    pub documents: Vec<ScoredDocument>,
    /// Top sentences drawn from those documents, best first
    pub sentences: Vec<ScoredSentence>,
}

impl Answer {
    /// The best-ranked sentence, if any
    pub fn best_sentence(&self) -> Option<&str> {
        self.sentences.first().map(|s| s.text.as_str())
    }

    /// Sentence texts, best first
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    /// Check if no sentence was found
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
