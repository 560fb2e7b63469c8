//! Typed form of the configuration document.

use serde::Deserialize;

use pp_core::config::DEFAULT_ITERATIONS;
use pp_core::{Bounds, Facility, Order, PlanConfig};

use crate::InputResult;

/// The whole configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemConfig {
    /// District descriptions.  Opaque to the planner; only counted.
    #[serde(default)]
    pub districts: Vec<serde_json::Value>,

    pub historical_orders: Vec<Order>,

    #[serde(default)]
    pub existing_pickup_points: Vec<Facility>,

    pub task_parameters: TaskParameters,
}

/// The `task_parameters` object.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskParameters {
    pub new_pp_count:             usize,
    pub max_delivery_radius:      f64,
    pub interpolation_resolution: f64,

    #[serde(default = "default_iterations")]
    pub optimizer_iterations: usize,

    #[serde(default)]
    pub seed: Option<u64>,

    /// Grid region; the 0..300 square when absent.
    #[serde(default)]
    pub grid_bounds: Option<Bounds>,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl ProblemConfig {
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    /// Validated planning parameters for this document.
    ///
    /// Also rejects any order whose weight is negative or not finite.
    pub fn plan_config(&self) -> InputResult<PlanConfig> {
        let p = &self.task_parameters;
        let config = PlanConfig {
            bounds:             p.grid_bounds.unwrap_or_default(),
            resolution:         p.interpolation_resolution,
            new_facility_count: p.new_pp_count,
            max_radius:         p.max_delivery_radius,
            iterations:         p.optimizer_iterations,
            seed:               p.seed,
        };
        config.validate()?;
        for order in &self.historical_orders {
            order.validate_weight()?;
        }
        Ok(config)
    }
}
