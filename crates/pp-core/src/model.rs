//! Input records shared by every planning stage.

use crate::{FacilityId, OrderId, Point, PpError, PpResult};

/// A historical delivery order.
///
/// Stages borrow the order slice; nothing in the planner mutates an order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_id:       OrderId,
    pub delivery_point: Point,
    /// Demand weight.  Expected non-negative.
    pub weight:         f64,
}

impl Order {
    pub fn new(order_id: impl Into<OrderId>, delivery_point: Point, weight: f64) -> Self {
        Self { order_id: order_id.into(), delivery_point, weight }
    }

    /// `Ok` if the weight is finite and non-negative.
    pub fn validate_weight(&self) -> PpResult<()> {
        if self.weight.is_finite() && self.weight >= 0.0 {
            Ok(())
        } else {
            Err(PpError::InvalidWeight { order_id: self.order_id.to_string(), weight: self.weight })
        }
    }
}

/// A pickup point that orders can be assigned to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub dp_id:    FacilityId,
    pub location: Point,
}

impl Facility {
    pub fn new(dp_id: impl Into<FacilityId>, location: Point) -> Self {
        Self { dp_id: dp_id.into(), location }
    }

    /// The `ordinal`-th (1-indexed) newly placed facility at `location`.
    pub fn placed(ordinal: usize, location: Point) -> Self {
        Self { dp_id: FacilityId::new_facility(ordinal), location }
    }
}
