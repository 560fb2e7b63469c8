//! `pp-placement`: choose locations for new pickup points.
//!
//! # Algorithm
//!
//! ```text
//! centroids ← k delivery points sampled uniformly, with replacement
//! repeat `iterations` times:
//!   ① Label  : each order joins its nearest centroid (ties → lowest index)
//!               (parallel with the `parallel` feature)
//!   ② Move   : each centroid moves to the mean of its members
//!   ③ Freeze : a centroid with no members keeps its position
//! ```
//!
//! There is no convergence test: the round count is fixed.  Sampling is the
//! only random step; pass a seeded [`PlacementRng`](pp_core::PlacementRng)
//! for reproducible output.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the labelling step on Rayon's thread pool.        |

pub mod error;
pub mod lloyd;


pub use error::{PlacementError, PlacementResult};
pub use lloyd::optimize_locations;
