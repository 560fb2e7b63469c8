//! Fixed-round Lloyd relocation.

use tracing::{debug, warn};

use pp_core::{Order, PlacementRng, Point, nearest};

use crate::{PlacementError, PlacementResult};

/// Summary of one relocation round, for logging.
pub(crate) struct RoundStats {
    /// Sum of squared distances from each order to its centroid before the
    /// move.
    pub(crate) inertia:        f64,
    pub(crate) empty_clusters: usize,
}

/// Place `k` new facilities over the orders' delivery points.
///
/// Returns exactly `k` points, in the index order of the initial sample.
/// With `iterations == 0` the sampled points are returned unchanged.
/// `k` may exceed the number of distinct locations; coincident centroids are
/// kept as they are.
///
/// # Errors
///
/// - [`PlacementError::ZeroFacilities`] if `k == 0`.
/// - [`PlacementError::NoOrders`] if `orders` is empty.
pub fn optimize_locations(
    orders:     &[Order],
    k:          usize,
    iterations: usize,
    rng:        &mut PlacementRng,
) -> PlacementResult<Vec<Point>> {
    if k == 0 {
        return Err(PlacementError::ZeroFacilities);
    }
    if orders.is_empty() {
        return Err(PlacementError::NoOrders);
    }

    let points: Vec<Point> = orders.iter().map(|o| o.delivery_point).collect();
    let mut centroids = initial_centroids(&points, k, rng)?;

    for round in 0..iterations {
        let labels = label_points(&points, &centroids);
        let stats = relocate(&points, &labels, &mut centroids);

        debug!(round, inertia = stats.inertia, empty = stats.empty_clusters, "relocation round");
        if round + 1 == iterations && stats.empty_clusters > 0 {
            warn!(
                empty = stats.empty_clusters,
                k, "some centroids attracted no orders and stayed at their sampled position"
            );
        }
    }

    Ok(centroids)
}

/// Sample `k` delivery points uniformly with replacement.
fn initial_centroids(points: &[Point], k: usize, rng: &mut PlacementRng) -> PlacementResult<Vec<Point>> {
    (0..k)
        .map(|_| rng.choose(points).copied().ok_or(PlacementError::NoOrders))
        .collect()
}

/// Nearest centroid index and distance for every point.
pub(crate) fn label_points(points: &[Point], centroids: &[Point]) -> Vec<(usize, f64)> {
    // `centroids` always holds k ≥ 1 entries, so `nearest` never sees an
    // empty slice here.
    #[cfg(not(feature = "parallel"))]
    {
        points
            .iter()
            .map(|&p| nearest(p, centroids).unwrap_or_default())
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        points
            .par_iter()
            .map(|&p| nearest(p, centroids).unwrap_or_default())
            .collect()
    }
}

/// Move every non-empty centroid to the mean of its members.
pub(crate) fn relocate(points: &[Point], labels: &[(usize, f64)], centroids: &mut [Point]) -> RoundStats {
    // (sum_x, sum_y, members) per centroid.
    let mut sums = vec![(0.0f64, 0.0f64, 0usize); centroids.len()];
    let mut inertia = 0.0;

    for (p, &(label, dist)) in points.iter().zip(labels) {
        let s = &mut sums[label];
        s.0 += p.x;
        s.1 += p.y;
        s.2 += 1;
        inertia += dist * dist;
    }

    let mut empty_clusters = 0;
    for (centroid, &(sx, sy, n)) in centroids.iter_mut().zip(&sums) {
        if n == 0 {
            empty_clusters += 1;
            continue;
        }
        *centroid = Point::new(sx / n as f64, sy / n as f64);
    }

    RoundStats { inertia, empty_clusters }
}
