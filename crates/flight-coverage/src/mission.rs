//! Mission time estimation for a rectangular area of interest
//!
//! Lanes run parallel to the rectangle's length; one turn is charged
//! between each pair of adjacent lanes, plus one climb and one descent leg.
//! Transit to and from a launch point outside the AOI is not modeled.

use crate::coverage::{
    coverage, CameraSpec, CoverageResult, FlightPlanParameters, MIN_GROUND_SPEED_MPS,
    MIN_TRIGGER_DISTANCE_M,
};
use serde::{Deserialize, Serialize};

/// Floor for lane spacing when deriving the lane count
pub const MIN_LANE_SPACING_M: f64 = 0.1;

/// Floor for climb/descend rates, guarding the vertical-leg divisions
pub const MIN_VERTICAL_RATE_MPS: f64 = 0.1;

/// Lane, photo and time figures for covering one rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionEstimate {
    pub lane_count: u32,
    pub lane_length_m: f64,
    pub photo_count: u64,
    pub survey_time_sec: f64,
    pub approx_mission_time_sec: f64,
}

/// Estimate the mission for a length x width rectangle in meters
pub fn estimate_rect(
    length_m: f64,
    width_m: f64,
    cam: &CameraSpec,
    plan: &FlightPlanParameters,
) -> MissionEstimate {
    let cov: CoverageResult = coverage(cam, plan);

    let lane_count = (width_m / cov.lane_spacing_m.max(MIN_LANE_SPACING_M))
        .ceil()
        .max(1.0) as u32;
    let lane_length_m = length_m;
    let survey_distance_m = lane_count as f64 * lane_length_m;

    let ground_speed = plan.ground_speed_mps.max(MIN_GROUND_SPEED_MPS);
    let survey_time_sec =
        survey_distance_m / ground_speed + (lane_count - 1) as f64 * plan.turn_time_sec;

    let photos_per_lane = (lane_length_m / cov.trigger_distance_m.max(MIN_TRIGGER_DISTANCE_M))
        .ceil()
        .max(0.0) as u64;
    let photo_count = photos_per_lane * lane_count as u64;

    let climb_sec = plan.altitude_m / plan.climb_rate_mps.max(MIN_VERTICAL_RATE_MPS);
    let descend_sec = plan.altitude_m / plan.descend_rate_mps.max(MIN_VERTICAL_RATE_MPS);

    MissionEstimate {
        lane_count,
        lane_length_m,
        photo_count,
        survey_time_sec,
        approx_mission_time_sec: survey_time_sec + climb_sec + descend_sec,
    }
}
