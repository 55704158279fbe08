//! Two-stage ranking: whole documents by TF-IDF, then sentences by
//! matching-word IDF with query-term density as the tie-break.

pub mod documents;
pub mod sentences;

pub use documents::{rank_documents, tf_idf_score, top_files};
pub use sentences::{matching_word_idf, query_term_density, rank_sentences, top_sentences};
