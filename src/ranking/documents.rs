//! Document-level ranking
//!
//! Each document is scored as `Σ tf(word, doc) * idf(word)` over the query
//! words, where `tf` is the raw count of the word in the document. Query
//! words without an IDF entry contribute nothing.

use crate::types::{DocumentSet, IdfTable, Query, ScoredDocument, TokenizedDocument};
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;

/// Summed TF-IDF of the query words in one document
pub fn tf_idf_score(query: &Query, doc: &TokenizedDocument, idfs: &IdfTable) -> f64 {
    query
        .iter()
        .map(|word| {
            let idf = idfs.get(word);
            if idf == 0.0 {
                return 0.0;
            }
            doc.term_frequency(word) as f64 * idf
        })
        .sum()
}

/// Score and rank every document, returning at most `n` results.
///
/// Ties keep the documents' input order.
pub fn rank_documents(
    query: &Query,
    documents: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> Vec<ScoredDocument> {
    let score = |(position, doc): (usize, &TokenizedDocument)| ScoredDocument {
        id: doc.id.clone(),
        score: tf_idf_score(query, doc, idfs),
        position,
    };

    let mut scored: Vec<ScoredDocument> = if documents.len() < PARALLEL_THRESHOLD {
        documents.iter().enumerate().map(score).collect()
    } else {
        documents.as_slice().par_iter().enumerate().map(score).collect()
    };

    scored.sort_by(|a, b| a.stable_cmp(b));
    scored.truncate(n);
    scored
}

/// Identifiers of the `n` documents that best match `query`
pub fn top_files(query: &Query, documents: &DocumentSet, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_documents(query, documents, idfs, n)
        .into_iter()
        .map(|d| d.id)
        .collect()
}
