//! `pp-assign`: order-to-pickup-point assignment and quality metrics.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`index`]   | `FacilityIndex` (R-tree nearest-facility lookup)            |
//! | [`assign`]  | `assign_orders`, `Assignment`, `LoadTable`, `AssignmentOutcome` |
//! | [`metrics`] | `calculate_metrics`, `Metrics`                              |
//! | [`error`]   | `AssignError`, `AssignResult<T>`                            |
//!
//! Every order goes to its nearest facility, full stop.  The coverage radius
//! is a measurement applied afterwards by [`calculate_metrics`]; it never
//! changes which facility an order is assigned to.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Per-order facility searches run on Rayon's thread pool.  |

pub mod assign;
pub mod error;
pub mod index;
pub mod metrics;


pub use assign::{Assignment, AssignmentOutcome, FacilityLoad, LoadTable, assign_orders, merge_facilities};
pub use error::{AssignError, AssignResult};
pub use index::FacilityIndex;
pub use metrics::{Metrics, calculate_metrics};
