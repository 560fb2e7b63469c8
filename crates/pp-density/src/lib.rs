//! `pp-density`: demand-density grid construction.
//!
//! Order weights are summed into fixed-size square cells covering a
//! [`Bounds`](pp_core::Bounds) rectangle, then scaled so the busiest cell is
//! `1.0`.  Orders outside the rectangle are dropped from the grid (they still
//! take part in assignment downstream).
//!
//! ```
//! use pp_core::{Bounds, Order, Point};
//! use pp_density::build_density_grid;
//!
//! let orders = vec![
//!     Order::new("a", Point::new(1.0, 1.0), 10.0),
//!     Order::new("b", Point::new(9.0, 9.0), 5.0),
//! ];
//! let grid = build_density_grid(&orders, Bounds::new(0.0, 10.0, 0.0, 10.0), 5.0).unwrap();
//! assert_eq!(grid.shape(), (2, 2));
//! assert_eq!(grid.get(0, 0), 1.0);
//! assert_eq!(grid.get(1, 1), 0.5);
//! ```

pub mod grid;


pub use grid::{DensityGrid, MAX_GRID_CELLS, build_density_grid};
