//! Human-readable progress summary printed to stdout.

use pp_assign::{AssignmentOutcome, Metrics};
use pp_core::geo::round_to;
use pp_core::{PlanConfig, Point};
use pp_density::DensityGrid;
use pp_input::ProblemConfig;
use pp_plan::PlanObserver;

/// Corner of the density grid echoed to the console.
const PREVIEW_CELLS: usize = 3;

pub struct SummaryPrinter {
    max_radius: f64,
}

impl SummaryPrinter {
    pub fn new(max_radius: f64) -> Self {
        Self { max_radius }
    }

    pub fn print_inputs(&self, document: &ProblemConfig, config: &PlanConfig) {
        println!("=== Pickup point network optimization ===");
        println!();
        println!("Districts: {}", document.district_count());
        println!("Historical orders: {}", document.historical_orders.len());
        println!("Existing pickup points: {}", document.existing_pickup_points.len());
        println!("New pickup points to place: {}", config.new_facility_count);
        println!("Max delivery radius: {}", config.max_radius);
        println!("Grid resolution: {}", config.resolution);
        match config.seed {
            Some(seed) => println!("Seed: {seed}"),
            None => println!("Seed: (entropy)"),
        }
    }
}

impl PlanObserver for SummaryPrinter {
    fn on_grid(&mut self, grid: &DensityGrid) {
        let (rows, cols) = grid.shape();
        println!();
        println!("=== Demand density map ===");
        println!("Grid size: {rows} x {cols}");
        println!("Resolution: {} units", grid.resolution());
        println!();
        println!("Sample density values (first {PREVIEW_CELLS}x{PREVIEW_CELLS} cells):");
        for (i, row) in grid.rows_iter().take(PREVIEW_CELLS).enumerate() {
            let values: Vec<f64> = row.iter().take(PREVIEW_CELLS).map(|&v| round_to(v, 3)).collect();
            println!("  Row {i}: {values:?}");
        }
    }

    fn on_locations(&mut self, locations: &[Point]) {
        println!();
        println!("=== New pickup point locations ===");
        println!("Found {} locations:", locations.len());
        for (i, p) in locations.iter().enumerate() {
            println!("  New pickup point #{}: {}", i + 1, p.rounded(1));
        }
    }

    fn on_assignment(&mut self, outcome: &AssignmentOutcome) {
        println!();
        println!("=== Order distribution ===");
        println!();
        println!("Load per pickup point:");
        for load in outcome.loads.iter() {
            println!("  {}: {} orders", load.dp_id, load.orders);
        }
    }

    fn on_metrics(&mut self, metrics: &Metrics) {
        let m = metrics.rounded();
        println!();
        println!("=== Efficiency metrics ===");
        println!("Average delivery distance: {} units", m.avg_delivery_distance);
        println!(
            "Coverage within {}: {:.1}%",
            self.max_radius,
            metrics.coverage_percent()
        );
        println!("Load imbalance: {}", m.load_imbalance);
    }
}
