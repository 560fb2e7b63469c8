//! `pp-output`: result writers for the ppnet planner.
//!
//! Two backends are provided:
//!
//! | Writer       | Files created                                 |
//! |--------------|-----------------------------------------------|
//! | `JsonWriter` | `output.json`                                 |
//! | `CsvWriter`  | `assignments.csv`, `delivery_zones.csv`       |
//!
//! Both implement [`OutputWriter`] and take a finished
//! [`PlanOutcome`](pp_plan::PlanOutcome).
//!
//! # Usage
//!
//! ```rust,ignore
//! use pp_output::{JsonWriter, OutputWriter};
//!
//! let mut writer = JsonWriter::new(Path::new("."))?;
//! writer.write_outcome(&outcome)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod document;
pub mod error;
pub mod json;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use document::ResultDocument;
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use row::{AssignmentRow, ZoneRow};
pub use writer::OutputWriter;
