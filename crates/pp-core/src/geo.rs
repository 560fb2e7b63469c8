//! Planar coordinate types and distance utilities.
//!
//! All coordinates live in one flat plane and distances are plain Euclidean.
//! There is no projection or curvature correction: inputs are assumed to be
//! in a local metric grid already.

use crate::{PpError, PpResult};

/// A point in the plane.
///
/// Serialized as a two-element `[x, y]` array.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.distance_2(other).sqrt()
    }

    /// Squared Euclidean distance.  Cheaper than [`distance`](Self::distance)
    /// when only the ordering matters.
    #[inline]
    pub fn distance_2(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Round both coordinates to `decimals` places (half away from zero).
    pub fn rounded(self, decimals: i32) -> Point {
        Point::new(round_to(self.x, decimals), round_to(self.y, decimals))
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Index and distance of the candidate nearest to `point`.
///
/// Ties go to the lowest index: a later candidate only wins if it is strictly
/// closer.  Returns `None` when `candidates` is empty.
pub fn nearest(point: Point, candidates: &[Point]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &c) in candidates.iter().enumerate() {
        let d = point.distance(c);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle covered by the density grid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Construct without validation; call [`validate`](Self::validate) before
    /// building a grid over it.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// `Ok` if every limit is finite and both spans are strictly positive.
    pub fn validate(&self) -> PpResult<()> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max].iter().all(|v| v.is_finite());
        if finite && self.x_max > self.x_min && self.y_max > self.y_min {
            Ok(())
        } else {
            Err(PpError::InvalidBounds {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
            })
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Half-open containment: `[x_min, x_max) × [y_min, y_max)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x < self.x_max && p.y >= self.y_min && p.y < self.y_max
    }
}

impl Default for Bounds {
    /// The 300 × 300 service area used when a configuration gives no bounds.
    fn default() -> Self {
        Bounds::new(0.0, 300.0, 0.0, 300.0)
    }
}
