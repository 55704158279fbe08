//! Corpus statistics used by the rankers.

pub mod idf;

pub use idf::{compute_idfs, document_frequencies};
