//! Facet measurement from closed polygon rings
//!
//! Areas and perimeters are geodesic (WGS84), so figures agree with
//! standard geospatial tooling operating on the same rings. The ridge/eave
//! figure is produced by a pluggable [`RidgeEaveModel`]; the shipped
//! implementation is a perimeter-fraction proxy.

use geo::{GeodesicArea, Polygon};
use serde::{Deserialize, Serialize};

/// Square feet per square meter
pub const SQFT_PER_M2: f64 = 10.76391041671;

/// Perimeter fraction used by the default ridge/eave proxy
pub const RIDGE_EAVE_PERIMETER_FACTOR: f64 = 0.5;

/// Scalar measurements derived from a set of roof facet polygons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub facet_count: usize,
    pub area_m2: f64,
    pub perimeter_m: f64,
    pub ridge_eave_m: f64,
    pub pitch_deg: f64,
}

impl Measurement {
    /// Total facet area in square feet
    pub fn area_ft2(&self) -> f64 {
        self.area_m2 * SQFT_PER_M2
    }
}

/// Strategy for deriving a ridge/eave length from measured facets
///
/// A true ridge/eave figure requires facet topology analysis (shared edges
/// between adjacent facets). Until that exists, [`PerimeterProxy`] stands
/// in; callers needing the real thing supply their own implementation via
/// [`measure_with`].
pub trait RidgeEaveModel {
    fn ridge_eave_m(&self, facets: &[Polygon<f64>], perimeter_m: f64) -> f64;
}

/// Ridge/eave proxy: a fixed fraction of total facet perimeter
///
/// Known approximation, not a topological computation.
#[derive(Debug, Clone, Copy)]
pub struct PerimeterProxy {
    pub factor: f64,
}

impl Default for PerimeterProxy {
    fn default() -> Self {
        Self {
            factor: RIDGE_EAVE_PERIMETER_FACTOR,
        }
    }
}

impl RidgeEaveModel for PerimeterProxy {
    fn ridge_eave_m(&self, _facets: &[Polygon<f64>], perimeter_m: f64) -> f64 {
        perimeter_m * self.factor
    }
}

/// Measure a set of facet polygons with the default ridge/eave proxy
///
/// Empty input yields an all-zero measurement with `pitch_deg` passed
/// through; it is not an error.
pub fn measure(facets: &[Polygon<f64>], pitch_deg: f64) -> Measurement {
    measure_with(facets, pitch_deg, &PerimeterProxy::default())
}

/// Measure a set of facet polygons with an explicit ridge/eave model
pub fn measure_with(
    facets: &[Polygon<f64>],
    pitch_deg: f64,
    ridge_model: &dyn RidgeEaveModel,
) -> Measurement {
    let area_m2: f64 = facets.iter().map(|p| p.geodesic_area_unsigned()).sum();
    let perimeter_m: f64 = facets.iter().map(|p| p.geodesic_perimeter()).sum();

    Measurement {
        facet_count: facets.len(),
        area_m2,
        perimeter_m,
        ridge_eave_m: ridge_model.ridge_eave_m(facets, perimeter_m),
        pitch_deg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coord, LineString};

    /// Closed square ring, `side_deg` degrees on a side, anchored at the equator
    fn square(side_deg: f64) -> Polygon<f64> {
        let ring = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: side_deg, y: 0.0 },
            Coord {
                x: side_deg,
                y: side_deg,
            },
            Coord { x: 0.0, y: side_deg },
            Coord { x: 0.0, y: 0.0 },
        ];
        Polygon::new(LineString::from(ring), vec![])
    }

    #[test]
    fn empty_input_measures_zero() {
        let m = measure(&[], 35.0);
        assert_eq!(m.facet_count, 0);
        assert_eq!(m.area_m2, 0.0);
        assert_eq!(m.perimeter_m, 0.0);
        assert_eq!(m.ridge_eave_m, 0.0);
        assert_eq!(m.pitch_deg, 35.0, "pitch passes through unchanged");
    }

    #[test]
    fn square_at_equator_has_expected_scale() {
        // 0.001 deg is ~111 m at the equator, so area ~12,300 m2
        let m = measure(&[square(0.001)], 0.0);
        assert_eq!(m.facet_count, 1);
        assert!(
            m.area_m2 > 12_000.0 && m.area_m2 < 12_700.0,
            "area out of range: {}",
            m.area_m2
        );
        assert!(
            m.perimeter_m > 430.0 && m.perimeter_m < 460.0,
            "perimeter out of range: {}",
            m.perimeter_m
        );
    }

    #[test]
    fn multiple_facets_sum() {
        let one = measure(&[square(0.001)], 0.0);
        let two = measure(&[square(0.001), square(0.001)], 0.0);
        assert_eq!(two.facet_count, 2);
        assert!((two.area_m2 - 2.0 * one.area_m2).abs() < 1e-6);
        assert!((two.perimeter_m - 2.0 * one.perimeter_m).abs() < 1e-9);
    }

    #[test]
    fn ridge_eave_is_half_perimeter_under_proxy() {
        let m = measure(&[square(0.002)], 20.0);
        assert_eq!(m.ridge_eave_m, m.perimeter_m * 0.5);
    }

    #[test]
    fn custom_ridge_model_is_honored() {
        struct Fixed;
        impl RidgeEaveModel for Fixed {
            fn ridge_eave_m(&self, _facets: &[Polygon<f64>], _perimeter_m: f64) -> f64 {
                42.0
            }
        }
        let m = measure_with(&[square(0.001)], 0.0, &Fixed);
        assert_eq!(m.ridge_eave_m, 42.0);
    }

    #[test]
    fn square_feet_conversion() {
        let m = Measurement {
            facet_count: 1,
            area_m2: 100.0,
            perimeter_m: 40.0,
            ridge_eave_m: 20.0,
            pitch_deg: 0.0,
        };
        assert!((m.area_ft2() - 1076.391041671).abs() < 1e-9);
    }
}
