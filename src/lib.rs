//! # rapid_qa
//!
//! TF-IDF document retrieval and extractive answer ranking.
//!
//! Given a corpus of text documents and a natural-language question, the
//! engine finds the most relevant documents by summed TF-IDF, then the most
//! relevant sentences within them by the IDF of the query words they
//! contain, with query-term density as the tie-break.
//!
//! ## Features
//!
//! - **Deterministic**: every ranking uses a total order with input position
//!   as the final tie-break
//! - **Unicode-aware**: UAX #29 word and sentence segmentation
//! - **Side-effect free**: stopwords and IDF tables are explicit, immutable inputs
//!
//! ```
//! use rapid_qa::{Corpus, QaConfig, QuestionAnswerer};
//!
//! let corpus = Corpus::from_documents([
//!     ("doc1", "The cat sat on the mat."),
//!     ("doc2", "Dogs bark at cats."),
//! ]);
//! let qa = QuestionAnswerer::new(corpus, QaConfig::default()).unwrap();
//! assert_eq!(qa.answer("cat").best_sentence(), Some("The cat sat on the mat."));
//! ```

pub mod corpus;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod types;

// Re-export commonly used types
pub use corpus::Corpus;
pub use errors::{QaError, Result};
pub use types::{
    DocumentSet, IdfTable, QaConfig, Query, ScoredDocument, ScoredSentence, TokenizedDocument,
};

// Re-export main functionality
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pipeline::{Answer, QuestionAnswerer};
pub use ranking::{rank_documents, rank_sentences, top_files, top_sentences};
pub use scoring::compute_idfs;

/// Collections at least this large are tokenized and scored with Rayon.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
