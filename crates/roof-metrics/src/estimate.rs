//! Cost estimation from a facet measurement
//!
//! # Pricing Model
//!
//! ```text
//! base      = area * rate
//! adjusted  = base * pitch_factor(pitch)
//! overhead  = adjusted * overhead_frac
//! profit    = (adjusted + overhead) * profit_frac
//! total     = adjusted + overhead + profit
//! ```
//!
//! Profit is taken on cost *including* overhead. That ordering is business
//! policy; changing it changes every total.
//!
//! Percent-style parameters are fractions in [0, 1] throughout; callers
//! convert whole-number percents once at their own boundary.

use crate::measure::Measurement;
use serde::{Deserialize, Serialize};

/// Pitch angle at which the adjustment saturates
pub const PITCH_SATURATION_DEG: f64 = 60.0;

/// Slope of the pitch adjustment curve
pub const PITCH_GAIN: f64 = 0.45;

/// Cap on the pitch adjustment; the factor saturates at 1.45
pub const MAX_PITCH_ADJUSTMENT: f64 = 0.9;

/// Pricing inputs, immutable per estimate
///
/// `overhead` and `profit` are fractions in [0, 1]. Range validation is the
/// caller's responsibility; the estimator does not re-check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    pub rate_per_m2: f64,
    pub overhead: f64,
    pub profit: f64,
}

/// One row of the cost breakdown, in rendering order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: f64,
}

/// Full cost breakdown for one measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub area_m2: f64,
    pub base_cost: f64,
    pub pitch_factor: f64,
    pub adjusted_base: f64,
    pub overhead_amount: f64,
    pub profit_amount: f64,
    pub total: f64,
    pub line_items: Vec<LineItem>,
    pub facet_count: usize,
}

/// Pitch adjustment factor
///
/// Monotonically increasing and saturating: 0 deg -> 1.00, 30 deg -> 1.225,
/// 45 deg -> 1.3375, 60 deg and beyond -> 1.45.
pub fn pitch_factor(pitch_deg: f64) -> f64 {
    1.0 + ((pitch_deg / PITCH_SATURATION_DEG) * PITCH_GAIN).clamp(0.0, MAX_PITCH_ADJUSTMENT)
}

/// Estimate the cost of a measured roof
///
/// Pure function; identical inputs yield bit-identical output. A zero-area
/// measurement yields an all-zero breakdown rather than an error.
pub fn estimate(m: &Measurement, p: &PricingParameters) -> CostBreakdown {
    let base_cost = m.area_m2 * p.rate_per_m2;
    let factor = pitch_factor(m.pitch_deg);
    let adjusted_base = base_cost * factor;
    let overhead_amount = adjusted_base * p.overhead;
    let profit_amount = (adjusted_base + overhead_amount) * p.profit;
    let total = adjusted_base + overhead_amount + profit_amount;

    CostBreakdown {
        area_m2: m.area_m2,
        base_cost,
        pitch_factor: factor,
        adjusted_base,
        overhead_amount,
        profit_amount,
        total,
        line_items: vec![
            LineItem {
                name: "Base (Materials+Labor)".to_string(),
                amount: adjusted_base,
            },
            LineItem {
                name: "Overhead".to_string(),
                amount: overhead_amount,
            },
            LineItem {
                name: "Profit".to_string(),
                amount: profit_amount,
            },
        ],
        facet_count: m.facet_count,
    }
}

/// Flat quick quote: callout fee plus a per-square-meter rate
///
/// The simple model used by the embeddable widget path, kept alongside the
/// full breakdown for callers that only need a headline figure.
pub fn quick_quote(area_m2: f64, callout_fee: f64, rate_per_m2: f64) -> f64 {
    callout_fee + rate_per_m2 * area_m2
}
