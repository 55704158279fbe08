//! Query answering pipeline.
//!
//! ## Submodules
//!
//! - [`artifacts`]: the [`Answer`] returned for one query
//! - [`observer`]: stage timing hooks
//! - [`runner`]: [`QuestionAnswerer`], which threads a query through every stage

pub mod artifacts;
pub mod observer;
pub mod runner;

pub use artifacts::Answer;
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::QuestionAnswerer;
