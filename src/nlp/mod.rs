//! Text normalization: tokenization, sentence splitting, stopwords.

pub mod stopwords;
pub mod tokenizer;
