//! Flat field/value report rendering
//!
//! Produces the comma-separated, newline-terminated table consumed by the
//! file-download collaborator. Pure formatting: the caller owns writing the
//! resulting bytes anywhere.

use crate::estimate::{CostBreakdown, PricingParameters};
use crate::measure::Measurement;
use serde::{Deserialize, Serialize};

/// Caller-supplied context rendered alongside the computed figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub material: String,
    pub pricing: PricingParameters,
}

/// Render a cost breakdown as a fixed, ordered field/value table
///
/// Monetary and area fields are fixed to two decimals with a `.` decimal
/// point regardless of locale; counts are plain integers; rate and pitch
/// are rendered as plain numbers. Row order is significant and stable.
pub fn render_csv(breakdown: &CostBreakdown, measurement: &Measurement, meta: &ReportMeta) -> String {
    let mut out = String::new();
    let mut row = |field: &str, value: String| {
        out.push_str(field);
        out.push(',');
        out.push_str(&value);
        out.push('\n');
    };

    row("Field", "Value".to_string());
    row("Material", meta.material.clone());
    row("Rate per m2", format!("{}", meta.pricing.rate_per_m2));
    row("Pitch (deg)", format!("{}", measurement.pitch_deg));
    row("Facets", format!("{}", breakdown.facet_count));
    row("Area m2", format!("{:.2}", breakdown.area_m2));
    row("Base", format!("{:.2}", breakdown.base_cost));
    row("Pitch Factor", format!("{:.2}", breakdown.pitch_factor));
    row("Adjusted Base", format!("{:.2}", breakdown.adjusted_base));
    row("Overhead", format!("{:.2}", breakdown.overhead_amount));
    row("Profit", format!("{:.2}", breakdown.profit_amount));
    row("Total", format!("{:.2}", breakdown.total));
    out
}
