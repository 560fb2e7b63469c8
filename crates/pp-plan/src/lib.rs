//! `pp-plan`: runs the four planning stages in order.
//!
//! # Pipeline
//!
//! ```text
//! ① Grid     : orders + bounds + resolution → DensityGrid
//! ② Place    : orders + K + iterations + rng → K new locations
//! ③ Assign   : orders + existing + new locations → assignments, loads
//! ④ Measure  : assignments + radius → Metrics
//! ```
//!
//! Each stage reads the previous stages' results and nothing is mutated in
//! place.  A [`PlanObserver`] sees each result as soon as it is produced.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Rayon for placement labelling and order assignment.    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pp_core::PlanConfig;
//! use pp_plan::{NoopObserver, PlannerBuilder};
//!
//! let mut planner = PlannerBuilder::new(config, orders)
//!     .existing_facilities(existing)
//!     .build()?;
//! let outcome = planner.run(&mut NoopObserver)?;
//! println!("coverage {:.1}%", outcome.metrics.coverage_percent());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;


pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::{PlanOutcome, Planner};
