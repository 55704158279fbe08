//! Sentence-level ranking
//!
//! Sentences are ranked by the summed IDF of the distinct query words they
//! contain. Ties are broken by query-term density, the share of the
//! sentence's tokens that are query words, and then by input order.

use crate::types::{DocumentSet, IdfTable, Query, ScoredSentence, TokenizedDocument};
use crate::PARALLEL_THRESHOLD;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Sum of `idf(word)` over each distinct query word present in `tokens`.
///
/// A matching word counts once no matter how often it repeats.
pub fn matching_word_idf(query: &Query, tokens: &[String], idfs: &IdfTable) -> f64 {
    if tokens.is_empty() || query.is_empty() {
        return 0.0;
    }

    let present: FxHashSet<&str> = tokens.iter().map(String::as_str).collect();
    query
        .iter()
        .filter(|word| present.contains(word))
        .map(|word| idfs.get(word))
        .sum()
}

/// Fraction of `tokens` that are query words, `matches / len`.
///
/// An empty sentence has density `0.0`.
pub fn query_term_density(query: &Query, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let matches = tokens.iter().filter(|t| query.contains(t)).count();
    matches as f64 / tokens.len() as f64
}

fn score_sentence(
    query: &Query,
    position: usize,
    sentence: &TokenizedDocument,
    idfs: &IdfTable,
) -> ScoredSentence {
    ScoredSentence {
        text: sentence.id.clone(),
        idf_score: matching_word_idf(query, &sentence.tokens, idfs),
        density: query_term_density(query, &sentence.tokens),
        position,
    }
}

/// Score and rank every sentence, returning at most `n` results.
///
/// `sentences` maps sentence text to its tokens.
pub fn rank_sentences(
    query: &Query,
    sentences: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = if sentences.len() < PARALLEL_THRESHOLD {
        sentences
            .iter()
            .enumerate()
            .map(|(i, s)| score_sentence(query, i, s, idfs))
            .collect()
    } else {
        sentences
            .as_slice()
            .par_iter()
            .enumerate()
            .map(|(i, s)| score_sentence(query, i, s, idfs))
            .collect()
    };

    scored.sort_by(|a, b| a.stable_cmp(b));
    scored.truncate(n);
    scored
}

/// Text of the `n` sentences that best match `query`
pub fn top_sentences(
    query: &Query,
    sentences: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> Vec<String> {
    rank_sentences(query, sentences, idfs, n)
        .into_iter()
        .map(|s| s.text)
        .collect()
}
