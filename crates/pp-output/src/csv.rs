//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `assignments.csv`
//! - `delivery_zones.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use pp_plan::PlanOutcome;

use crate::writer::OutputWriter;
use crate::{AssignmentRow, OutputResult, ZoneRow};

/// Writes assignments and per-facility zones to two CSV files.
pub struct CsvWriter {
    assignments: Writer<File>,
    zones:       Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["order_id", "assigned_to", "distance"])?;

        let mut zones = Writer::from_path(dir.join("delivery_zones.csv"))?;
        zones.write_record(["dp_id", "x", "y", "estimated_orders", "is_new"])?;

        Ok(Self {
            assignments,
            zones,
            finished: false,
        })
    }

    fn write_assignments(&mut self, rows: &[AssignmentRow]) -> OutputResult<()> {
        for row in rows {
            self.assignments.write_record(&[
                row.order_id.clone(),
                row.assigned_to.clone(),
                row.distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_zones(&mut self, rows: &[ZoneRow]) -> OutputResult<()> {
        for row in rows {
            self.zones.write_record(&[
                row.dp_id.clone(),
                row.x.to_string(),
                row.y.to_string(),
                row.estimated_orders.to_string(),
                (row.is_new as u8).to_string(),
            ])?;
        }
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_outcome(&mut self, outcome: &PlanOutcome) -> OutputResult<()> {
        self.write_assignments(&AssignmentRow::from_outcome(outcome))?;
        self.write_zones(&ZoneRow::from_outcome(outcome))?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.zones.flush()?;
        Ok(())
    }
}
