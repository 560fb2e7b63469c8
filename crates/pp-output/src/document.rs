//! Serializable result document (`output.json`).
//!
//! Reported values are rounded for readability: new point coordinates to one
//! decimal, metrics to 2 (distance) and 3 (ratios) decimals.
//! Existing facilities keep their coordinates as given.

use serde::Serialize;

use pp_core::{Bounds, FacilityId, Point};
use pp_plan::PlanOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct ResultDocument {
    pub demand_density_map:  DensityMapDoc,
    pub new_delivery_points: Vec<NewPointDoc>,
    pub delivery_zones:      Vec<ZoneDoc>,
    pub metrics:             MetricsDoc,
}

#[derive(Debug, Clone, Serialize)]
pub struct DensityMapDoc {
    pub grid_bounds:    Bounds,
    pub resolution:     f64,
    pub density_matrix: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPointDoc {
    pub dp_id:    FacilityId,
    pub location: Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneDoc {
    pub dp_id:            FacilityId,
    pub location:         Point,
    pub estimated_orders: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsDoc {
    pub avg_delivery_distance: f64,
    pub coverage_efficiency:   f64,
    pub load_imbalance:        f64,
}

impl ResultDocument {
    pub fn from_outcome(outcome: &PlanOutcome) -> Self {
        let grid = &outcome.grid;

        let new_delivery_points = outcome
            .new_facilities()
            .iter()
            .map(|f| NewPointDoc { dp_id: f.dp_id.clone(), location: f.location.rounded(1) })
            .collect();

        let delivery_zones = outcome
            .assignment
            .facilities
            .iter()
            .zip(outcome.assignment.loads.iter())
            .map(|(f, load)| ZoneDoc {
                dp_id:            f.dp_id.clone(),
                location:         f.location,
                estimated_orders: load.orders,
            })
            .collect();

        let m = outcome.metrics.rounded();

        Self {
            demand_density_map: DensityMapDoc {
                grid_bounds:    grid.bounds(),
                resolution:     grid.resolution(),
                density_matrix: grid.to_nested(),
            },
            new_delivery_points,
            delivery_zones,
            metrics: MetricsDoc {
                avg_delivery_distance: m.avg_delivery_distance,
                coverage_efficiency:   m.coverage_efficiency,
                load_imbalance:        m.load_imbalance,
            },
        }
    }
}
