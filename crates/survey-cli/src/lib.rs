//! Roof Survey CLI
//!
//! Boundary layer between drawn-polygon GeoJSON and the pure calculation
//! crates. Everything that can fail lives here: file I/O, GeoJSON parsing,
//! ring validation, and the one-time conversion of whole-number percent
//! flags into the fractional representation the cores use.

use serde::Serialize;
use thiserror::Error;

pub mod loader;

#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("GeoJSON parse error: {0}")]
    GeoJson(#[from] geojson::Error),
    #[error("Malformed ring in geometry {geometry}: {reason}")]
    MalformedRing { geometry: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SurveyError>;

/// Convert a whole-number percent (as entered on the command line) to the
/// fraction used throughout the calculation crates
pub fn pct_to_fraction(pct: f64) -> f64 {
    pct / 100.0
}

/// Combined JSON output for the `estimate` subcommand
#[derive(Debug, Serialize)]
pub struct EstimateOutput {
    pub measurement: roof_metrics::Measurement,
    pub breakdown: roof_metrics::CostBreakdown,
}

/// Combined JSON output for the `plan` subcommand
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub coverage: flight_coverage::CoverageResult,
    pub mission: flight_coverage::MissionEstimate,
}
