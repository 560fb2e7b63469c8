//! `pp-core`: foundational types for the `ppnet` pickup-point planner.
//!
//! This crate is a dependency of every other `pp-*` crate.  It intentionally
//! has no `pp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `Point`, `Bounds`, Euclidean distance, linear `nearest`   |
//! | [`ids`]     | `OrderId`, `FacilityId`                                   |
//! | [`model`]   | `Order`, `Facility`                                       |
//! | [`rng`]     | `PlacementRng` (seedable sampling for the optimizer)      |
//! | [`config`]  | `PlanConfig`                                              |
//! | [`error`]   | `PpError`, `PpResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (`pp-input`, `pp-output`) |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod model;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlanConfig;
pub use error::{PpError, PpResult};
pub use geo::{Bounds, Point, nearest};
pub use ids::{FacilityId, OrderId};
pub use model::{Facility, Order};
pub use rng::PlacementRng;
