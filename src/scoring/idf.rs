//! Inverse document frequency
//!
//! `idf(word) = ln(N / df(word))` where `N` is the number of documents in
//! the snapshot and `df(word)` the number of documents containing `word` at
//! least once. Document frequencies are counted in a single pass over each
//! document's distinct words, so repeated tokens never change the result.

use crate::types::{DocumentSet, IdfTable, TokenizedDocument};
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Compute the IDF of every word appearing in `documents`.
///
/// An empty snapshot yields an empty table. A word present in every
/// document gets an IDF of exactly `0.0`.
pub fn compute_idfs(documents: &DocumentSet) -> IdfTable {
    let n = documents.len();
    if n == 0 {
        return IdfTable::new(0);
    }

    let total = n as f64;
    let idfs = document_frequencies(documents.as_slice())
        .into_iter()
        .map(|(word, df)| (word.to_string(), (total / df as f64).ln()))
        .collect();

    IdfTable::with_entries(idfs, n)
}

/// Count, for each distinct word, how many documents contain it.
///
/// Large collections are counted in parallel; integer counts make the merge
/// order irrelevant.
pub fn document_frequencies(documents: &[TokenizedDocument]) -> FxHashMap<&str, usize> {
    if documents.len() < PARALLEL_THRESHOLD {
        let mut df = FxHashMap::default();
        for doc in documents {
            count_distinct(&mut df, doc);
        }
        return df;
    }

    documents
        .par_iter()
        .fold(FxHashMap::default, |mut df, doc| {
            count_distinct(&mut df, doc);
            df
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (word, count) in b {
                *a.entry(word).or_insert(0) += count;
            }
            a
        })
}

fn count_distinct<'a>(df: &mut FxHashMap<&'a str, usize>, doc: &'a TokenizedDocument) {
    let mut seen = FxHashSet::default();
    for token in &doc.tokens {
        if seen.insert(token.as_str()) {
            *df.entry(token.as_str()).or_insert(0) += 1;
        }
    }
}
