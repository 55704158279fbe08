//! Stage observation hooks.
//!
//! Observers receive a callback when each stage starts and ends. The
//! default [`NoopObserver`] compiles away; [`StageTimingObserver`] records
//! a [`StageReport`] per stage.

use serde::Serialize;
use std::time::Instant;

/// What a stage reports once it finishes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageReport {
    /// Wall-clock duration in milliseconds
    pub elapsed_ms: f64,
    /// Number of items the stage produced (documents, sentences, words)
    pub items: usize,
}

impl StageReport {
    pub fn new(elapsed_ms: f64, items: usize) -> Self {
        Self { elapsed_ms, items }
    }
}

/// Hooks invoked around every pipeline stage
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a report per stage, in execution order
#[derive(Debug, Clone, Default, Serialize)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage, report)` pairs
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Total time across all recorded stages
    pub fn total_ms(&self) -> f64 {
        self.reports.iter().map(|(_, r)| r.elapsed_ms).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

/// Wall-clock timer for one stage
#[derive(Debug)]
pub(crate) struct StageClock(Instant);

impl StageClock {
    pub(crate) fn start() -> Self {
        Self(Instant::now())
    }

    pub(crate) fn report(&self, items: usize) -> StageReport {
        StageReport::new(self.0.elapsed().as_secs_f64() * 1000.0, items)
    }
}
