//! Query orchestration.
//!
//! [`QuestionAnswerer`] tokenizes the corpus and computes document IDFs
//! once, then answers any number of queries against that immutable state:
//!
//! 1. parse the query
//! 2. rank documents by TF-IDF
//! 3. split the top documents into sentences and tokenize them
//! 4. compute IDFs over those sentences
//! 5. rank sentences by matching-word IDF and density

use super::artifacts::Answer;
use super::observer::{NoopObserver, PipelineObserver, StageClock};
use crate::corpus::Corpus;
use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::ranking::{rank_documents, rank_sentences};
use crate::scoring::compute_idfs;
use crate::types::{DocumentSet, IdfTable, QaConfig, Query, ScoredDocument};
use std::path::Path;
use std::sync::Arc;

pub const STAGE_QUERY: &str = "query";
pub const STAGE_DOCUMENTS: &str = "rank_documents";
pub const STAGE_SENTENCES: &str = "split_sentences";
pub const STAGE_SENTENCE_IDFS: &str = "sentence_idfs";
pub const STAGE_RANK_SENTENCES: &str = "rank_sentences";

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("qa_stage", stage = $name).entered();
    };
}

/// Answers questions against one in-memory corpus
#[derive(Debug, Clone)]
pub struct QuestionAnswerer {
    corpus: Corpus,
    config: QaConfig,
    tokenizer: Tokenizer,
    documents: DocumentSet,
    idfs: IdfTable,
    /// Built once from the thread settings and shared by clones
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl QuestionAnswerer {
    /// Validate `config`, tokenize `corpus` and compute document IDFs.
    pub fn new(corpus: Corpus, config: QaConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = config.tokenizer();
        let pool = config.thread_pool().map(Arc::new);

        let (documents, idfs) = {
            trace_stage!("index");
            install(pool.as_deref(), || {
                let documents = corpus.tokenize(&tokenizer);
                let idfs = compute_idfs(&documents);
                (documents, idfs)
            })
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            documents = documents.len(),
            vocabulary = idfs.len(),
            "indexed corpus"
        );

        Ok(Self {
            corpus,
            config,
            tokenizer,
            documents,
            idfs,
            pool,
        })
    }

    /// Load a corpus directory using the extensions in `config`.
    pub fn from_dir(dir: impl AsRef<Path>, config: QaConfig) -> Result<Self> {
        config.validate()?;
        let corpus = Corpus::load_dir(dir, config.extensions.as_slice())?;
        Self::new(corpus, config)
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenized corpus documents, in corpus order
    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    /// Document-level IDF table
    pub fn idfs(&self) -> &IdfTable {
        &self.idfs
    }

    /// Normalize free text into a query
    pub fn parse_query(&self, text: &str) -> Query {
        Query::parse(text, &self.tokenizer)
    }

    /// Answer a free-text question
    pub fn answer(&self, text: &str) -> Answer {
        self.answer_with_observer(text, &mut NoopObserver)
    }

    /// Answer a free-text question, reporting each stage to `observer`
    pub fn answer_with_observer(
        &self,
        text: &str,
        observer: &mut (impl PipelineObserver + Send),
    ) -> Answer {
        trace_stage!(STAGE_QUERY);
        observer.on_stage_start(STAGE_QUERY);
        let clock = StageClock::start();
        let query = self.parse_query(text);
        observer.on_stage_end(STAGE_QUERY, &clock.report(query.len()));

        self.answer_query_with_observer(&query, observer)
    }

    /// Answer an already-parsed query
    pub fn answer_query(&self, query: &Query) -> Answer {
        self.answer_query_with_observer(query, &mut NoopObserver)
    }

    fn answer_query_with_observer(
        &self,
        query: &Query,
        observer: &mut (impl PipelineObserver + Send),
    ) -> Answer {
        if query.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("query has no content words");
            return Answer::default();
        }

        install(self.pool.as_deref(), || {
            // Stage 1: rank documents
            trace_stage!(STAGE_DOCUMENTS);
            observer.on_stage_start(STAGE_DOCUMENTS);
            let clock = StageClock::start();
            let documents =
                rank_documents(query, &self.documents, &self.idfs, self.config.file_matches);
            observer.on_stage_end(STAGE_DOCUMENTS, &clock.report(documents.len()));

            // Stage 2: split top documents into sentences
            trace_stage!(STAGE_SENTENCES);
            observer.on_stage_start(STAGE_SENTENCES);
            let clock = StageClock::start();
            let sentences = self.sentences_for(&documents);
            observer.on_stage_end(STAGE_SENTENCES, &clock.report(sentences.len()));

            // Stage 3: sentence-level IDFs
            trace_stage!(STAGE_SENTENCE_IDFS);
            observer.on_stage_start(STAGE_SENTENCE_IDFS);
            let clock = StageClock::start();
            let sentence_idfs = compute_idfs(&sentences);
            observer.on_stage_end(STAGE_SENTENCE_IDFS, &clock.report(sentence_idfs.len()));

            // Stage 4: rank sentences
            trace_stage!(STAGE_RANK_SENTENCES);
            observer.on_stage_start(STAGE_RANK_SENTENCES);
            let clock = StageClock::start();
            let ranked = rank_sentences(
                query,
                &sentences,
                &sentence_idfs,
                self.config.sentence_matches,
            );
            observer.on_stage_end(STAGE_RANK_SENTENCES, &clock.report(ranked.len()));

            #[cfg(feature = "tracing")]
            tracing::debug!(
                query_words = query.len(),
                documents = documents.len(),
                sentences = sentences.len(),
                "answered query"
            );

            Answer {
                query: query.iter().map(str::to_string).collect(),
                documents,
                sentences: ranked,
            }
        })
    }

    /// Threads available to ranking work
    pub fn num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Tokenized sentences of the given documents, in ranking order.
    ///
    /// Sentences without content words are dropped. A sentence text seen
    /// twice keeps the position of its first occurrence.
    fn sentences_for(&self, documents: &[ScoredDocument]) -> DocumentSet {
        let mut sentences = DocumentSet::new();

        for doc in documents {
            let Some(text) = self.corpus.get(&doc.id) else {
                continue;
            };
            for sentence in self.tokenizer.split_sentences(text) {
                if sentences.position(&sentence).is_some() {
                    continue;
                }
                let tokens = self.tokenizer.tokenize(&sentence);
                if !tokens.is_empty() {
                    sentences.insert(sentence, tokens);
                }
            }
        }

        sentences
    }
}

/// Run `f` on `pool`, or on the global pool when there is none
fn install<R: Send>(pool: Option<&rayon::ThreadPool>, f: impl FnOnce() -> R + Send) -> R {
    match pool {
        Some(pool) => pool.install(f),
        None => f(),
    }
}
