//! Fluent builder for constructing a [`Planner`].

use pp_core::{Facility, Order, PlacementRng, PlanConfig};

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner`].
///
/// # Required inputs
///
/// - [`PlanConfig`]: bounds, resolution, K, radius, iterations, seed
/// - historical orders (non-empty, finite non-negative weights)
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                                 |
/// |-----------------------------|-----------------------------------------|
/// | `.existing_facilities(v)`   | No existing pickup points               |
/// | `.rng(r)`                   | `PlacementRng` from `config.seed`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut planner = PlannerBuilder::new(config, orders)
///     .existing_facilities(existing)
///     .rng(PlacementRng::new(7))
///     .build()?;
/// ```
pub struct PlannerBuilder {
    config:   PlanConfig,
    orders:   Vec<Order>,
    existing: Vec<Facility>,
    rng:      Option<PlacementRng>,
}

impl PlannerBuilder {
    pub fn new(config: PlanConfig, orders: Vec<Order>) -> Self {
        Self { config, orders, existing: Vec::new(), rng: None }
    }

    /// Supply the pickup points that already exist.  Their ids are kept and
    /// they precede the new points in every output.
    pub fn existing_facilities(mut self, existing: Vec<Facility>) -> Self {
        self.existing = existing;
        self
    }

    /// Supply the generator used for initial centroid sampling.
    ///
    /// If not called, one is seeded from `config.seed` (or from entropy when
    /// the config has no seed).
    pub fn rng(mut self, rng: PlacementRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs and return a ready-to-run [`Planner`].
    pub fn build(self) -> PlanResult<Planner> {
        self.config.validate()?;
        if self.orders.is_empty() {
            return Err(PlanError::NoOrders);
        }
        for order in &self.orders {
            order.validate_weight()?;
        }

        let rng = self
            .rng
            .unwrap_or_else(|| PlacementRng::from_seed_option(self.config.seed));

        Ok(Planner {
            config:   self.config,
            orders:   self.orders,
            existing: self.existing,
            rng,
        })
    }
}
