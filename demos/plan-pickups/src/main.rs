//! plan-pickups: place new pickup points and report network quality.
//!
//! Reads a configuration document (see `pp_input::loader`), runs the four
//! planning stages, prints a summary of each, and writes `output.json`
//! (plus CSV tables with `--csv`) to the output directory.
//!
//! ```text
//! plan-pickups --config demos/plan-pickups/config.json --output-dir out --seed 42 --csv
//! ```

mod report;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use pp_input::load_config;
use pp_output::{CsvWriter, JsonWriter, OutputWriter};
use pp_plan::PlannerBuilder;

use report::SummaryPrinter;

#[derive(Parser, Debug)]
#[command(name = "plan-pickups")]
#[command(about = "Place new pickup points over historical orders and measure coverage")]
struct Args {
    /// Configuration document (JSON).
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    /// Directory for output.json and the optional CSV tables.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Seed for initial centroid sampling; overrides the document's seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write assignments.csv and delivery_zones.csv.
    #[arg(long)]
    csv: bool,

    /// Debug-level logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // ── Load inputs ───────────────────────────────────────────────────────
    let document = load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let mut config = document.plan_config()?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut printer = SummaryPrinter::new(config.max_radius);
    printer.print_inputs(&document, &config);

    // ── Plan ──────────────────────────────────────────────────────────────
    let t0 = Instant::now();
    let mut planner = PlannerBuilder::new(config, document.historical_orders)
        .existing_facilities(document.existing_pickup_points)
        .build()?;
    let outcome = planner.run(&mut printer)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "planning finished");

    // ── Write results ─────────────────────────────────────────────────────
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    let mut json = JsonWriter::new(&args.output_dir)?;
    json.write_outcome(&outcome)?;
    json.finish()?;

    if args.csv {
        let mut csv = CsvWriter::new(&args.output_dir)?;
        csv.write_outcome(&outcome)?;
        csv.finish()?;
    }

    println!();
    println!("=== Results saved to {} ===", json.path().display());
    Ok(())
}
