//! Plain data row types written by the CSV backend.

use pp_plan::PlanOutcome;

/// One order's assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRow {
    pub order_id:    String,
    pub assigned_to: String,
    pub distance:    f64,
}

/// One facility with its assigned-order count.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRow {
    pub dp_id:            String,
    pub x:                f64,
    pub y:                f64,
    pub estimated_orders: usize,
    /// `true` for facilities placed by this run.
    pub is_new:           bool,
}

impl AssignmentRow {
    pub fn from_outcome(outcome: &PlanOutcome) -> Vec<AssignmentRow> {
        outcome
            .assignment
            .assignments
            .iter()
            .map(|a| AssignmentRow {
                order_id:    a.order_id.to_string(),
                assigned_to: a.assigned_to.to_string(),
                distance:    a.distance,
            })
            .collect()
    }
}

impl ZoneRow {
    /// One row per facility, existing first, in facility-list order.
    pub fn from_outcome(outcome: &PlanOutcome) -> Vec<ZoneRow> {
        outcome
            .assignment
            .facilities
            .iter()
            .zip(outcome.assignment.loads.iter())
            .map(|(f, load)| ZoneRow {
                dp_id:            f.dp_id.to_string(),
                x:                f.location.x,
                y:                f.location.y,
                estimated_orders: load.orders,
                is_new:           f.dp_id.is_new_facility(),
            })
            .collect()
    }
}
