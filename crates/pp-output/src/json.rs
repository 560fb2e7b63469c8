//! JSON output backend.
//!
//! Creates `output.json` in the configured output directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use pp_plan::PlanOutcome;

use crate::writer::OutputWriter;
use crate::{OutputResult, ResultDocument};

/// File name of the result document.
pub const RESULT_FILE: &str = "output.json";

/// Writes the result document as pretty-printed JSON.
pub struct JsonWriter {
    path:     PathBuf,
    out:      BufWriter<File>,
    finished: bool,
}

impl JsonWriter {
    /// Create (or truncate) `output.json` in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(RESULT_FILE);
        let out = BufWriter::new(File::create(&path)?);
        Ok(Self { path, out, finished: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputWriter for JsonWriter {
    fn write_outcome(&mut self, outcome: &PlanOutcome) -> OutputResult<()> {
        let doc = ResultDocument::from_outcome(outcome);
        serde_json::to_writer_pretty(&mut self.out, &doc)?;
        self.out.write_all(b"\n")?;
        debug!(path = %self.path.display(), "result document written");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
