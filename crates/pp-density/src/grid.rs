//! Density grid type and builder.
//!
//! # Layout
//!
//! Cells are stored in one flat row-major `Vec<f64>`:
//!
//! ```text
//! cells[ row * cols + col ]      row ↔ y axis, col ↔ x axis
//! ```
//!
//! The shape is fixed at construction from the bounds and resolution, so
//! accumulation never reallocates.

use tracing::{debug, warn};

use pp_core::config::validate_resolution;
use pp_core::{Bounds, Order, Point, PpError, PpResult};

/// Largest number of cells a grid may hold.
pub const MAX_GRID_CELLS: usize = 1 << 26;

/// Normalized demand heat-map.  Every cell lies in `[0, 1]`.
///
/// Immutable after [`build_density_grid`] returns it.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityGrid {
    bounds:        Bounds,
    resolution:    f64,
    rows:          usize,
    cols:          usize,
    cells:         Vec<f64>,
    orders_inside: usize,
}

impl DensityGrid {
    /// All-zero grid covering `bounds` with square cells of side `resolution`.
    ///
    /// `cols = floor(width / resolution)`, `rows = floor(height / resolution)`.
    /// A resolution that does not divide the span leaves a strip along the
    /// max edges uncovered.
    fn zeros(bounds: Bounds, resolution: f64) -> PpResult<Self> {
        let cols_f = (bounds.width() / resolution).floor();
        let rows_f = (bounds.height() / resolution).floor();
        let too_large = || PpError::GridTooLarge { rows: rows_f, cols: cols_f, max: MAX_GRID_CELLS };

        if !(cols_f.is_finite() && rows_f.is_finite()) || cols_f * rows_f > MAX_GRID_CELLS as f64 {
            return Err(too_large());
        }
        let (rows, cols) = (rows_f as usize, cols_f as usize);
        let len = rows.checked_mul(cols).ok_or_else(too_large)?;

        Ok(Self {
            bounds,
            resolution,
            rows,
            cols,
            cells: vec![0.0; len],
            orders_inside: 0,
        })
    }

    /// `(row, col)` of the cell containing `p`, or `None` outside the grid.
    fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        // NaN coordinates fail containment too.
        if !self.bounds.contains(p) {
            return None;
        }
        let cx = ((p.x - self.bounds.x_min) / self.resolution).floor();
        let cy = ((p.y - self.bounds.y_min) / self.resolution).floor();
        // The strip left by a non-dividing resolution is outside.
        if cx < self.cols as f64 && cy < self.rows as f64 {
            Some((cy as usize, cx as usize))
        } else {
            None
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(row, col)`.  Panics if out of range, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of range for {} columns", self.cols);
        self.cells[row * self.cols + col]
    }

    /// One row of the grid as a slice of length `cols`.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Rows in ascending y order.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Largest cell value: `1.0` if any weight landed inside, else `0.0`.
    pub fn max_value(&self) -> f64 {
        self.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Number of orders that fell inside the grid.
    pub fn orders_inside(&self) -> usize {
        self.orders_inside
    }

    /// Row-major nested copy, for serialization.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        self.rows_iter().map(<[f64]>::to_vec).collect()
    }
}

/// Sum order weights per cell over `bounds`, then normalize by the maximum.
///
/// Orders outside the grid are dropped silently.  If no weight lands inside
/// (or every weight is zero) the grid stays all zeros.  Weights are expected
/// finite and non-negative (see [`Order::validate_weight`]); the `[0, 1]`
/// range of the cells only holds for such weights.
///
/// # Errors
///
/// - [`PpError::InvalidBounds`] or [`PpError::InvalidResolution`] when the
///   grid geometry is unusable.
/// - [`PpError::GridTooLarge`] when the cell count exceeds
///   [`MAX_GRID_CELLS`].
pub fn build_density_grid(orders: &[Order], bounds: Bounds, resolution: f64) -> PpResult<DensityGrid> {
    bounds.validate()?;
    validate_resolution(resolution)?;

    let mut grid = DensityGrid::zeros(bounds, resolution)?;

    // ── Accumulate raw weights ────────────────────────────────────────────
    for order in orders {
        if let Some((row, col)) = grid.cell_of(order.delivery_point) {
            grid.cells[row * grid.cols + col] += order.weight;
            grid.orders_inside += 1;
        }
    }

    let dropped = orders.len() - grid.orders_inside;
    if dropped > 0 {
        debug!(dropped, total = orders.len(), "orders outside density grid");
    }
    if grid.orders_inside == 0 && !orders.is_empty() {
        warn!(orders = orders.len(), "no orders fell inside the density grid bounds");
    }

    // ── Normalize ─────────────────────────────────────────────────────────
    let max = grid.max_value();
    if max > 0.0 {
        for cell in &mut grid.cells {
            *cell /= max;
        }
    }

    debug!(rows = grid.rows, cols = grid.cols, raw_max = max, "density grid built");
    Ok(grid)
}
