//! Camera coverage model
//!
//! Converts camera intrinsics and flight parameters into the ground
//! footprint of a single exposure, the ground sample distance, the spacing
//! between survey lanes, and the along-track distance between exposures.

use serde::{Deserialize, Serialize};

/// Floor for the along-track trigger distance when computing photo rate
pub const MIN_TRIGGER_DISTANCE_M: f64 = 0.1;

/// Floor for focal length, guarding the footprint division
pub const MIN_FOCAL_MM: f64 = 0.1;

/// Floor for ground speed, guarding time divisions
pub const MIN_GROUND_SPEED_MPS: f64 = 0.1;

/// Camera intrinsics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSpec {
    pub sensor_width_mm: f64,
    pub sensor_height_mm: f64,
    pub focal_mm: f64,
    pub image_width_px: u32,
    pub image_height_px: u32,
    /// Sensor-imposed minimum delay between triggers, zero if unknown
    pub trigger_latency_sec: f64,
}

impl CameraSpec {
    /// Common 1-inch survey sensor (13.2 x 8.8 mm, 20 MP, 8.8 mm lens)
    pub fn one_inch_survey() -> Self {
        Self {
            sensor_width_mm: 13.2,
            sensor_height_mm: 8.8,
            focal_mm: 8.8,
            image_width_px: 5472,
            image_height_px: 3648,
            trigger_latency_sec: 0.0,
        }
    }
}

/// Flight parameters for a survey plan
///
/// Overlaps are fractions in [0, 1); callers convert whole-number percents
/// at their own boundary and validate ranges before calling in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPlanParameters {
    pub altitude_m: f64,
    pub front_overlap: f64,
    pub side_overlap: f64,
    pub ground_speed_mps: f64,
    pub turn_time_sec: f64,
    pub climb_rate_mps: f64,
    pub descend_rate_mps: f64,
}

/// Derived coverage figures for one camera/plan combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageResult {
    pub footprint_width_m: f64,
    pub footprint_height_m: f64,
    pub gsd_width_mpp: f64,
    pub gsd_height_mpp: f64,
    pub lane_spacing_m: f64,
    pub trigger_distance_m: f64,
    pub exposure_gap_sec: f64,
}

/// Compute coverage and trigger spacing for a camera at a given altitude
///
/// Standard pinhole relation: footprint = altitude * sensor / focal.
pub fn coverage(cam: &CameraSpec, plan: &FlightPlanParameters) -> CoverageResult {
    let focal_mm = cam.focal_mm.max(MIN_FOCAL_MM);
    let footprint_width_m = plan.altitude_m * cam.sensor_width_mm / focal_mm;
    let footprint_height_m = plan.altitude_m * cam.sensor_height_mm / focal_mm;

    let gsd_width_mpp = footprint_width_m / cam.image_width_px.max(1) as f64;
    let gsd_height_mpp = footprint_height_m / cam.image_height_px.max(1) as f64;

    let lane_spacing_m = footprint_height_m * (1.0 - plan.side_overlap);
    let trigger_distance_m = footprint_width_m * (1.0 - plan.front_overlap);

    let ground_speed = plan.ground_speed_mps.max(MIN_GROUND_SPEED_MPS);
    let photo_rate_hz = ground_speed / trigger_distance_m.max(MIN_TRIGGER_DISTANCE_M);
    let exposure_gap_sec = 1.0 / photo_rate_hz + cam.trigger_latency_sec;

    CoverageResult {
        footprint_width_m,
        footprint_height_m,
        gsd_width_mpp,
        gsd_height_mpp,
        lane_spacing_m,
        trigger_distance_m,
        exposure_gap_sec,
    }
}
