//! Planning run parameters.

use crate::{Bounds, PpError, PpResult};

/// Optimizer iterations used when a configuration does not specify any.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Top-level parameters for one planning run.
///
/// Typically built by `pp-input` from the configuration document and handed
/// to `pp_plan::PlannerBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    /// Region covered by the density grid.
    pub bounds: Bounds,

    /// Grid cell size, in coordinate units.
    pub resolution: f64,

    /// Number of new pickup points to place (K).
    pub new_facility_count: usize,

    /// Coverage radius.  Only used for measurement, never to reject an
    /// assignment.
    pub max_radius: f64,

    /// Fixed number of centroid-relocation rounds.
    pub iterations: usize,

    /// Seed for initial centroid sampling.  `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            bounds:             Bounds::default(),
            resolution:         10.0,
            new_facility_count: 1,
            max_radius:         50.0,
            iterations:         DEFAULT_ITERATIONS,
            seed:               None,
        }
    }
}

impl PlanConfig {
    /// Check every parameter the planning stages rely on.
    pub fn validate(&self) -> PpResult<()> {
        self.bounds.validate()?;
        validate_resolution(self.resolution)?;
        if self.new_facility_count == 0 {
            return Err(PpError::Config("new facility count must be at least 1".into()));
        }
        if !(self.max_radius.is_finite() && self.max_radius >= 0.0) {
            return Err(PpError::Config(format!(
                "max radius {} must be a finite non-negative number",
                self.max_radius
            )));
        }
        Ok(())
    }
}

/// `Ok` if `resolution` is a positive finite cell size.
pub fn validate_resolution(resolution: f64) -> PpResult<()> {
    if resolution > 0.0 && resolution.is_finite() {
        Ok(())
    } else {
        Err(PpError::InvalidResolution(resolution))
    }
}
