//! Planner observer trait for progress reporting.

use pp_assign::{AssignmentOutcome, Metrics};
use pp_core::Point;
use pp_density::DensityGrid;

/// Callbacks invoked by [`Planner::run`][crate::Planner::run] as each stage
/// finishes.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct StagePrinter;
///
/// impl PlanObserver for StagePrinter {
///     fn on_metrics(&mut self, m: &Metrics) {
///         println!("coverage: {:.1}%", m.coverage_percent());
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once the density grid is built.
    fn on_grid(&mut self, _grid: &DensityGrid) {}

    /// Called with the new facility locations, in `PP_NEW_<i>` order.
    fn on_locations(&mut self, _locations: &[Point]) {}

    /// Called once every order has been assigned.
    fn on_assignment(&mut self, _outcome: &AssignmentOutcome) {}

    /// Called with the final metrics.
    fn on_metrics(&mut self, _metrics: &Metrics) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
