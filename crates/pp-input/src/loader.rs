//! JSON configuration loader.
//!
//! # Document format
//!
//! ```json
//! {
//!   "districts": [ { "name": "Center" } ],
//!   "historical_orders": [
//!     { "order_id": "ORD_001", "delivery_point": [12.0, 40.5], "weight": 1.0 }
//!   ],
//!   "existing_pickup_points": [
//!     { "dp_id": "PP_001", "location": [50.0, 50.0] }
//!   ],
//!   "task_parameters": {
//!     "new_pp_count": 3,
//!     "max_delivery_radius": 50.0,
//!     "interpolation_resolution": 10,
//!     "optimizer_iterations": 10,
//!     "seed": 42,
//!     "grid_bounds": { "x_min": 0, "x_max": 300, "y_min": 0, "y_max": 300 }
//!   }
//! }
//! ```
//!
//! | Key                                     | Required | Default            |
//! |-----------------------------------------|----------|--------------------|
//! | `districts`                             | no       | `[]`               |
//! | `historical_orders`                     | yes      |                    |
//! | `existing_pickup_points`                | no       | `[]`               |
//! | `task_parameters.new_pp_count`          | yes      |                    |
//! | `task_parameters.max_delivery_radius`   | yes      |                    |
//! | `task_parameters.interpolation_resolution` | yes   |                    |
//! | `task_parameters.optimizer_iterations`  | no       | `10`               |
//! | `task_parameters.seed`                  | no       | entropy            |
//! | `task_parameters.grid_bounds`           | no       | `0..300 × 0..300`  |

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::info;

use crate::{InputError, InputResult, ProblemConfig};

/// Load the configuration document from a JSON file.
pub fn load_config(path: &Path) -> InputResult<ProblemConfig> {
    let file = File::open(path).map_err(InputError::Io)?;
    let config = load_config_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        orders = config.historical_orders.len(),
        existing = config.existing_pickup_points.len(),
        districts = config.district_count(),
        "configuration loaded"
    );
    Ok(config)
}

/// Like [`load_config`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_config_reader<R: Read>(reader: R) -> InputResult<ProblemConfig> {
    serde_json::from_reader(reader).map_err(|e| InputError::Parse(e.to_string()))
}
