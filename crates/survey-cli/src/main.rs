//! Roof Survey CLI
//!
//! Measures drawn roof facets, prices the job, and plans aerial survey
//! coverage.
//!
//! Usage:
//!   roof-survey estimate --input facets.geojson --rate 45 \
//!                        --overhead-pct 10 --profit-pct 15 --output report.csv
//!   roof-survey plan --length-m 200 --width-m 80 --altitude-m 100

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use flight_coverage::{coverage, estimate_rect, CameraSpec, FlightPlanParameters};
use roof_metrics::{estimate, measure, render_csv, PricingParameters, ReportMeta};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use survey_cli::{loader, pct_to_fraction, EstimateOutput, PlanOutput};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "roof-survey",
    about = "Roof measurement, cost estimation, and aerial survey planning"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Measure facet polygons and produce a cost report
    Estimate(EstimateArgs),
    /// Plan camera coverage and mission time for a rectangular area
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// GeoJSON file with drawn facet polygons
    #[arg(short, long)]
    input: PathBuf,

    /// Roof pitch in degrees
    #[arg(long, default_value_t = 0.0)]
    pitch_deg: f64,

    /// Material label for the report
    #[arg(long, default_value = "Generic")]
    material: String,

    /// Rate per square meter
    #[arg(long, default_value_t = 45.0)]
    rate: f64,

    /// Overhead as a whole-number percent
    #[arg(long, default_value_t = 10.0)]
    overhead_pct: f64,

    /// Profit as a whole-number percent
    #[arg(long, default_value_t = 15.0)]
    profit_pct: f64,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the full measurement + breakdown as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// AOI rectangle length in meters (lane direction)
    #[arg(long)]
    length_m: f64,

    /// AOI rectangle width in meters (across lanes)
    #[arg(long)]
    width_m: f64,

    /// Flight altitude in meters
    #[arg(long, default_value_t = 100.0)]
    altitude_m: f64,

    /// Sensor width in millimeters
    #[arg(long, default_value_t = 13.2)]
    sensor_width_mm: f64,

    /// Sensor height in millimeters
    #[arg(long, default_value_t = 8.8)]
    sensor_height_mm: f64,

    /// Focal length in millimeters
    #[arg(long, default_value_t = 8.8)]
    focal_mm: f64,

    /// Image width in pixels
    #[arg(long, default_value_t = 5472)]
    image_width_px: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 3648)]
    image_height_px: u32,

    /// Camera trigger latency in seconds
    #[arg(long, default_value_t = 0.0)]
    trigger_latency_sec: f64,

    /// Forward overlap as a whole-number percent
    #[arg(long, default_value_t = 70.0)]
    front_overlap_pct: f64,

    /// Side overlap as a whole-number percent
    #[arg(long, default_value_t = 60.0)]
    side_overlap_pct: f64,

    /// Ground speed in meters per second
    #[arg(long, default_value_t = 8.0)]
    ground_speed_mps: f64,

    /// Time per 180-degree turn in seconds
    #[arg(long, default_value_t = 8.0)]
    turn_time_sec: f64,

    /// Climb rate in meters per second
    #[arg(long, default_value_t = 4.0)]
    climb_rate_mps: f64,

    /// Descend rate in meters per second
    #[arg(long, default_value_t = 3.0)]
    descend_rate_mps: f64,

    /// Write the plan JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Estimate(args) => run_estimate(args),
        Command::Plan(args) => run_plan(args),
    }
}

fn run_estimate(args: EstimateArgs) -> Result<()> {
    let polygons = loader::load_polygons(&args.input)?;
    if polygons.is_empty() {
        info!("No facet polygons found; report will be all zeros");
    }

    let pricing = PricingParameters {
        rate_per_m2: args.rate,
        overhead: pct_to_fraction(args.overhead_pct),
        profit: pct_to_fraction(args.profit_pct),
    };

    let measurement = measure(&polygons, args.pitch_deg);
    let breakdown = estimate(&measurement, &pricing);

    info!(
        "Measured {} facet(s): {:.2} m2, {:.2} m perimeter",
        measurement.facet_count, measurement.area_m2, measurement.perimeter_m
    );
    info!("Estimated total: {:.2}", breakdown.total);

    if args.json {
        let output = EstimateOutput {
            measurement,
            breakdown,
        };
        write_json(&output, args.output.as_deref())?;
    } else {
        let meta = ReportMeta {
            material: args.material,
            pricing,
        };
        let report = render_csv(&breakdown, &measurement, &meta);
        write_text(&report, args.output.as_deref())?;
    }

    Ok(())
}

fn run_plan(args: PlanArgs) -> Result<()> {
    let cam = CameraSpec {
        sensor_width_mm: args.sensor_width_mm,
        sensor_height_mm: args.sensor_height_mm,
        focal_mm: args.focal_mm,
        image_width_px: args.image_width_px,
        image_height_px: args.image_height_px,
        trigger_latency_sec: args.trigger_latency_sec,
    };
    let plan = FlightPlanParameters {
        altitude_m: args.altitude_m,
        front_overlap: pct_to_fraction(args.front_overlap_pct),
        side_overlap: pct_to_fraction(args.side_overlap_pct),
        ground_speed_mps: args.ground_speed_mps,
        turn_time_sec: args.turn_time_sec,
        climb_rate_mps: args.climb_rate_mps,
        descend_rate_mps: args.descend_rate_mps,
    };

    let cov = coverage(&cam, &plan);
    let mission = estimate_rect(args.length_m, args.width_m, &cam, &plan);

    info!(
        "Footprint {:.1} x {:.1} m, GSD {:.1} cm/px, lane spacing {:.1} m",
        cov.footprint_width_m,
        cov.footprint_height_m,
        cov.gsd_width_mpp * 100.0,
        cov.lane_spacing_m
    );
    info!(
        "{} lane(s), {} photo(s), ~{:.0} s mission",
        mission.lane_count, mission.photo_count, mission.approx_mission_time_sec
    );

    let output = PlanOutput {
        coverage: cov,
        mission,
    };
    write_json(&output, args.output.as_deref())
}

fn write_json<T: serde::Serialize>(value: &T, path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing output to {:?}", path);
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, value)?;
        }
        None => {
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), value)?;
            println!();
        }
    }
    Ok(())
}

fn write_text(text: &str, path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing report to {:?}", path);
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
        }
        None => print!("{text}"),
    }
    Ok(())
}
