//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `PpError` as one variant
//! where they validate core inputs.

use thiserror::Error;

/// Invalid-argument conditions detected by `pp-core` validation helpers.
#[derive(Debug, Error, PartialEq)]
pub enum PpError {
    #[error("invalid bounds: x [{x_min}, {x_max}], y [{y_min}, {y_max}] (limits must be finite, max must exceed min)")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("invalid grid resolution {0}: must be positive and finite")]
    InvalidResolution(f64),

    #[error("grid of {rows} x {cols} cells is too large (at most {max} cells)")]
    GridTooLarge { rows: f64, cols: f64, max: usize },

    #[error("order {order_id} has invalid weight {weight}: must be finite and non-negative")]
    InvalidWeight { order_id: String, weight: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pp-core`.
pub type PpResult<T> = Result<T, PpError>;
