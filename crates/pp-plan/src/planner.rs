//! The `Planner` struct and its stage sequence.

use tracing::info;

use pp_assign::{AssignmentOutcome, Metrics, assign_orders, calculate_metrics};
use pp_core::{Facility, Order, PlacementRng, PlanConfig, Point};
use pp_density::{DensityGrid, build_density_grid};
use pp_placement::optimize_locations;

use crate::{PlanObserver, PlanResult};

/// Results of one planning run.
#[derive(Clone, Debug)]
pub struct PlanOutcome {
    pub grid:          DensityGrid,
    /// New facility locations, `PP_NEW_1` first.
    pub new_locations: Vec<Point>,
    pub assignment:    AssignmentOutcome,
    pub metrics:       Metrics,
}

impl PlanOutcome {
    /// The newly placed facilities (the tail of the merged facility list).
    pub fn new_facilities(&self) -> &[Facility] {
        let facilities = &self.assignment.facilities;
        &facilities[facilities.len() - self.new_locations.len()..]
    }
}

/// Validated planning inputs plus the placement RNG.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
#[derive(Debug)]
pub struct Planner {
    pub config:   PlanConfig,
    pub orders:   Vec<Order>,
    pub existing: Vec<Facility>,
    pub(crate) rng: PlacementRng,
}

impl Planner {
    /// Run the four stages in order, reporting each result to `observer`.
    ///
    /// Calling `run` again continues the same RNG stream, so a second run
    /// samples different initial centroids.
    pub fn run<O: PlanObserver>(&mut self, observer: &mut O) -> PlanResult<PlanOutcome> {
        let cfg = &self.config;

        // ── ① Density grid ────────────────────────────────────────────────
        let grid = build_density_grid(&self.orders, cfg.bounds, cfg.resolution)?;
        let (rows, cols) = grid.shape();
        info!(rows, cols, resolution = cfg.resolution, "density grid ready");
        observer.on_grid(&grid);

        // ── ② Placement ───────────────────────────────────────────────────
        let new_locations = optimize_locations(
            &self.orders,
            cfg.new_facility_count,
            cfg.iterations,
            &mut self.rng,
        )?;
        info!(count = new_locations.len(), iterations = cfg.iterations, "new locations placed");
        observer.on_locations(&new_locations);

        // ── ③ Assignment ──────────────────────────────────────────────────
        let assignment = assign_orders(&self.orders, &self.existing, &new_locations, cfg.max_radius)?;
        info!(
            orders = assignment.assignments.len(),
            facilities = assignment.facilities.len(),
            "orders assigned"
        );
        observer.on_assignment(&assignment);

        // ── ④ Metrics ─────────────────────────────────────────────────────
        let metrics = calculate_metrics(&assignment.assignments, cfg.max_radius);
        info!(
            avg_distance = metrics.avg_delivery_distance,
            coverage = metrics.coverage_efficiency,
            load_imbalance = metrics.load_imbalance,
            "metrics computed"
        );
        observer.on_metrics(&metrics);

        Ok(PlanOutcome { grid, new_locations, assignment, metrics })
    }
}
