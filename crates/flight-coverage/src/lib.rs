//! Flight Coverage Library
//!
//! Aerial survey planning math: pinhole-camera ground footprint, ground
//! sample distance, lane spacing and trigger distance, plus a time/photo
//! estimate for covering a rectangular area of interest.
//!
//! Every operation is a deterministic pure function of its inputs.
//! Mathematically-undefined parameter combinations (near-zero trigger
//! distance, non-positive focal length or ground speed) are clamped to
//! small positive floors so results stay large-but-finite instead of
//! becoming NaN or infinity.

pub mod coverage;
pub mod mission;

pub use coverage::{coverage, CameraSpec, CoverageResult, FlightPlanParameters};
pub use mission::{estimate_rect, MissionEstimate};
