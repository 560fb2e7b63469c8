//! Aggregate quality metrics over an assignment.

use rustc_hash::FxHashMap;

use pp_core::geo::round_to;

use crate::Assignment;

/// Summary measurements of one assignment.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Metrics {
    /// Mean order-to-facility distance.
    pub avg_delivery_distance: f64,
    /// Fraction of orders within the coverage radius, in `[0, 1]`.
    pub coverage_efficiency:   f64,
    /// Coefficient of variation of per-facility order counts.  `0` means
    /// perfectly even load.
    pub load_imbalance:        f64,
}

impl Metrics {
    /// Reporting precision: distance to 2 decimals, ratios to 3.
    pub fn rounded(&self) -> Metrics {
        Metrics {
            avg_delivery_distance: round_to(self.avg_delivery_distance, 2),
            coverage_efficiency:   round_to(self.coverage_efficiency, 3),
            load_imbalance:        round_to(self.load_imbalance, 3),
        }
    }

    pub fn coverage_percent(&self) -> f64 {
        self.coverage_efficiency * 100.0
    }
}

/// Compute [`Metrics`] for `assignments`.
///
/// Coverage counts distances `<= max_radius`.  Load imbalance is derived from
/// counts rebuilt here from `assignments`, so only facilities that received
/// at least one order take part.  An empty slice yields all-zero metrics.
pub fn calculate_metrics(assignments: &[Assignment], max_radius: f64) -> Metrics {
    if assignments.is_empty() {
        return Metrics::default();
    }
    let n = assignments.len() as f64;

    let total_distance: f64 = assignments.iter().map(|a| a.distance).sum();
    let covered = assignments.iter().filter(|a| a.distance <= max_radius).count();

    Metrics {
        avg_delivery_distance: total_distance / n,
        coverage_efficiency:   covered as f64 / n,
        load_imbalance:        coefficient_of_variation(&loads_by_first_seen(assignments)),
    }
}

/// Order count per facility, in the order facilities first appear.
fn loads_by_first_seen(assignments: &[Assignment]) -> Vec<usize> {
    let mut slot: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<usize> = Vec::new();

    for a in assignments {
        let i = *slot.entry(a.assigned_to.as_str()).or_insert_with(|| {
            counts.push(0);
            counts.len() - 1
        });
        counts[i] += 1;
    }
    counts
}

/// Population standard deviation over mean.  `0` for an empty or all-zero
/// input.
fn coefficient_of_variation(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}
