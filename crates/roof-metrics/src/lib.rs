//! Roof Metrics Library
//!
//! Turns drawn roof facet polygons into physical measurements and a cost
//! breakdown, and renders the result as a flat field/value report.
//!
//! # Pipeline
//!
//! ```text
//! facet polygons ──> measure ──> estimate ──> render_csv
//! ```
//!
//! All operations are pure functions of their inputs: no shared state, no
//! I/O, safe to call from any concurrency context. Degenerate inputs (no
//! facets, zero area) produce all-zero outputs rather than errors; range
//! validation of user-supplied parameters belongs to the caller.

pub mod estimate;
pub mod measure;
pub mod report;

pub use estimate::{estimate, quick_quote, CostBreakdown, LineItem, PricingParameters};
pub use measure::{measure, measure_with, Measurement, PerimeterProxy, RidgeEaveModel};
pub use report::{render_csv, ReportMeta};
