//! Spatial index over facility locations.
//!
//! An R-tree (via `rstar`) maps a query point to the nearest facility.  The
//! R-tree alone does not say which of several equidistant facilities it
//! returns, so [`FacilityIndex::nearest`] walks the nearest-neighbour
//! iterator across the whole tie and keeps the lowest facility index.  The
//! result is identical to a linear scan that keeps the first strict minimum.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use pp_core::{Facility, Point};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a facility location plus its position in the
/// facility list.
#[derive(Clone)]
struct FacilityEntry {
    point: [f64; 2], // [x, y]
    idx:   usize,
}

impl RTreeObject for FacilityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for FacilityEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FacilityIndex ─────────────────────────────────────────────────────────────

/// Nearest-facility lookup over a fixed, ordered facility list.
pub struct FacilityIndex {
    locations: Vec<Point>,
    tree:      RTree<FacilityEntry>,
}

impl FacilityIndex {
    /// Bulk-load the index.  Facility `i` in `facilities` is reported as
    /// index `i` by [`nearest`](Self::nearest).
    pub fn new(facilities: &[Facility]) -> Self {
        let locations: Vec<Point> = facilities.iter().map(|f| f.location).collect();
        let entries: Vec<FacilityEntry> = locations
            .iter()
            .enumerate()
            .map(|(idx, p)| FacilityEntry { point: [p.x, p.y], idx })
            .collect();
        Self { locations, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Index and Euclidean distance of the facility nearest to `p`.
    ///
    /// Among equidistant facilities the lowest index wins.  Returns `None`
    /// only if the index is empty.
    pub fn nearest(&self, p: Point) -> Option<(usize, f64)> {
        let mut candidates = self.tree.nearest_neighbor_iter(&[p.x, p.y]);
        let first = candidates.next()?;

        let best_dist = p.distance(self.locations[first.idx]);
        let mut best_idx = first.idx;

        // The iterator yields entries in non-decreasing distance, so the tie
        // ends at the first strictly farther entry.
        for entry in candidates {
            if p.distance(self.locations[entry.idx]) > best_dist {
                break;
            }
            best_idx = best_idx.min(entry.idx);
        }

        Some((best_idx, best_dist))
    }
}
