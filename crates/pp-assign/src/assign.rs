//! Nearest-facility assignment and per-facility load tallies.

use rustc_hash::FxHashMap;
use tracing::debug;

use pp_core::{Facility, FacilityId, Order, OrderId, Point};

use crate::{AssignError, AssignResult, FacilityIndex};

/// One order's nearest facility.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub order_id:    OrderId,
    pub assigned_to: FacilityId,
    /// Euclidean distance from the delivery point to the facility.
    pub distance:    f64,
}

/// Order count for one facility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacilityLoad {
    pub dp_id:  FacilityId,
    pub orders: usize,
}

// ── LoadTable ─────────────────────────────────────────────────────────────────

/// Assigned-order counts for every facility, in facility-list order.
///
/// Facilities with no orders are present with a count of zero.  Iteration
/// follows the facility list, never hash order.
#[derive(Clone, Debug)]
pub struct LoadTable {
    entries: Vec<FacilityLoad>,
    by_id:   FxHashMap<FacilityId, usize>,
}

impl LoadTable {
    /// Zero counts for each facility.  Rejects duplicate ids.
    fn zeroed(facilities: &[Facility]) -> AssignResult<Self> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(facilities.len());
        let mut entries = Vec::with_capacity(facilities.len());

        for (i, f) in facilities.iter().enumerate() {
            if by_id.insert(f.dp_id.clone(), i).is_some() {
                return Err(AssignError::DuplicateFacility(f.dp_id.clone()));
            }
            entries.push(FacilityLoad { dp_id: f.dp_id.clone(), orders: 0 });
        }

        Ok(Self { entries, by_id })
    }

    #[inline]
    fn increment(&mut self, facility_idx: usize) {
        self.entries[facility_idx].orders += 1;
    }

    /// Count for `dp_id`, or `None` if it is not a known facility.
    pub fn get(&self, dp_id: &FacilityId) -> Option<usize> {
        self.by_id.get(dp_id).map(|&i| self.entries[i].orders)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacilityLoad> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.  Equals the number of assigned orders.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.orders).sum()
    }
}

// ── Assignment ────────────────────────────────────────────────────────────────

/// Everything the assignment stage produces.
#[derive(Clone, Debug)]
pub struct AssignmentOutcome {
    /// One entry per order, in input order.
    pub assignments: Vec<Assignment>,
    pub loads:       LoadTable,
    /// Existing facilities followed by the new ones.
    pub facilities:  Vec<Facility>,
}

/// The unified facility list: `existing` in their given order, then one
/// `PP_NEW_<i>` facility per entry of `new_locations` (1-indexed).
pub fn merge_facilities(existing: &[Facility], new_locations: &[Point]) -> Vec<Facility> {
    existing
        .iter()
        .cloned()
        .chain(
            new_locations
                .iter()
                .enumerate()
                .map(|(i, &loc)| Facility::placed(i + 1, loc)),
        )
        .collect()
}

/// Assign every order to its nearest facility and tally loads.
///
/// `max_radius` does not filter anything: an order beyond the radius is still
/// assigned to its nearest facility.  It is only used for a debug log of how
/// many orders fall outside it.
///
/// # Errors
///
/// - [`AssignError::NoFacilities`] if both facility lists are empty.
/// - [`AssignError::DuplicateFacility`] if a `dp_id` occurs twice in the
///   merged list.
pub fn assign_orders(
    orders:        &[Order],
    existing:      &[Facility],
    new_locations: &[Point],
    max_radius:    f64,
) -> AssignResult<AssignmentOutcome> {
    let facilities = merge_facilities(existing, new_locations);
    if facilities.is_empty() {
        return Err(AssignError::NoFacilities);
    }

    let mut loads = LoadTable::zeroed(&facilities)?;
    let index = FacilityIndex::new(&facilities);

    let nearest = nearest_for_orders(orders, &index);

    // ── Serial reduction ──────────────────────────────────────────────────
    let mut assignments = Vec::with_capacity(orders.len());
    for (order, (facility_idx, distance)) in orders.iter().zip(nearest) {
        loads.increment(facility_idx);
        assignments.push(Assignment {
            order_id:    order.order_id.clone(),
            assigned_to: facilities[facility_idx].dp_id.clone(),
            distance,
        });
    }

    let beyond_radius = assignments.iter().filter(|a| a.distance > max_radius).count();
    debug!(
        orders = assignments.len(),
        facilities = facilities.len(),
        beyond_radius,
        max_radius,
        "orders assigned"
    );

    Ok(AssignmentOutcome { assignments, loads, facilities })
}

/// Nearest facility index and distance for each order, in order.
fn nearest_for_orders(orders: &[Order], index: &FacilityIndex) -> Vec<(usize, f64)> {
    // The caller checked that the index holds at least one facility.
    #[cfg(not(feature = "parallel"))]
    {
        orders
            .iter()
            .map(|o| index.nearest(o.delivery_point).unwrap_or_default())
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        orders
            .par_iter()
            .map(|o| index.nearest(o.delivery_point).unwrap_or_default())
            .collect()
    }
}
