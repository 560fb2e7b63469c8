//! The `OutputWriter` trait implemented by all backend writers.

use pp_plan::PlanOutcome;

use crate::OutputResult;

/// Trait implemented by the JSON and CSV writers.
pub trait OutputWriter {
    /// Write everything the backend records about one planning run.
    fn write_outcome(&mut self, outcome: &PlanOutcome) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
