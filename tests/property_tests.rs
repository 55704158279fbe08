//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_qa::*;

/// Small vocabulary so random documents share words
fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
    ])
    .prop_map(str::to_string)
}

fn document_set() -> impl Strategy<Value = DocumentSet> {
    prop::collection::vec(prop::collection::vec(word(), 0..12), 1..15).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, tokens)| (format!("doc{i}"), tokens))
            .collect()
    })
}

fn query() -> impl Strategy<Value = Query> {
    prop::collection::vec(word(), 0..4).prop_map(Query::from_words)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_tokenize_idempotent(text in "\\PC{0,200}") {
        let tokenizer = Tokenizer::english();
        prop_assert_eq!(tokenizer.tokenize(&text), tokenizer.tokenize(&text));
    }

    #[test]
    fn test_tokens_are_normalized(text in "[a-zA-Z0-9_ .,;:!?'\"()-]{0,200}") {
        let tokenizer = Tokenizer::english();
        for token in tokenizer.tokenize(&text) {
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert!(!tokenizer.stopwords().is_stopword(&token));
            prop_assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
        }
    }

    #[test]
    fn test_idf_monotonic_in_document_frequency(docs in document_set()) {
        let idfs = compute_idfs(&docs);
        let df = scoring::document_frequencies(docs.as_slice());

        for (a, &df_a) in &df {
            for (b, &df_b) in &df {
                if df_a < df_b {
                    prop_assert!(idfs.get(a) > idfs.get(b));
                }
            }
        }
    }

    #[test]
    fn test_idf_covers_every_word(docs in document_set()) {
        let idfs = compute_idfs(&docs);
        for doc in docs.iter() {
            for token in &doc.tokens {
                prop_assert!(idfs.contains(token));
                prop_assert!(idfs.get(token) >= 0.0);
            }
        }
    }

    #[test]
    fn test_word_in_every_document_has_zero_idf(
        docs in document_set(),
    ) {
        let docs: DocumentSet = docs
            .iter()
            .map(|d| {
                let mut tokens = d.tokens.clone();
                tokens.push("everywhere".to_string());
                (d.id.clone(), tokens)
            })
            .collect();
        prop_assert_eq!(compute_idfs(&docs).try_get("everywhere"), Some(0.0));
    }

    #[test]
    fn test_ranking_deterministic(docs in document_set(), query in query(), n in 0usize..20) {
        let idfs = compute_idfs(&docs);
        prop_assert_eq!(
            top_files(&query, &docs, &idfs, n),
            top_files(&query, &docs, &idfs, n)
        );
        prop_assert_eq!(
            top_sentences(&query, &docs, &idfs, n),
            top_sentences(&query, &docs, &idfs, n)
        );
    }

    #[test]
    fn test_truncation(docs in document_set(), query in query(), n in 0usize..20) {
        let idfs = compute_idfs(&docs);
        let files = rank_documents(&query, &docs, &idfs, n);
        let sentences = rank_sentences(&query, &docs, &idfs, n);

        prop_assert_eq!(files.len(), n.min(docs.len()));
        prop_assert_eq!(sentences.len(), n.min(docs.len()));
    }

    #[test]
    fn test_rankings_sorted(docs in document_set(), query in query()) {
        let idfs = compute_idfs(&docs);

        let files = rank_documents(&query, &docs, &idfs, docs.len());
        for pair in files.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        let sentences = rank_sentences(&query, &docs, &idfs, docs.len());
        for pair in sentences.windows(2) {
            prop_assert!(
                pair[0].idf_score > pair[1].idf_score
                    || (pair[0].idf_score == pair[1].idf_score
                        && pair[0].density >= pair[1].density)
            );
        }
    }

    #[test]
    fn test_density_matches_ratio(
        tokens in prop::collection::vec(word(), 0..20),
        query in query(),
    ) {
        let density = ranking::query_term_density(&query, &tokens);
        prop_assert!((0.0..=1.0).contains(&density));

        let expected = if tokens.is_empty() {
            0.0
        } else {
            tokens.iter().filter(|t| query.contains(t)).count() as f64 / tokens.len() as f64
        };
        prop_assert!((density - expected).abs() < 1e-12);
    }
}
