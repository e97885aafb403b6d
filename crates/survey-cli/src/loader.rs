//! GeoJSON loading and ring validation
//!
//! Drawn facets arrive as loosely-typed feature collections. This module
//! owns turning them into strictly-typed closed rings: Polygon and
//! MultiPolygon geometries are kept, everything else is skipped, and any
//! malformed ring (too few vertices, unclosed, out-of-range coordinates) is
//! rejected here so the calculation crates never see one.

use crate::{Result, SurveyError};
use geo::{Coord, LineString, Polygon};
use geojson::{GeoJson, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Validate latitude is in valid range
fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && lat.is_finite()
}

/// Validate longitude is in valid range
fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon) && lon.is_finite()
}

/// Load facet polygons from a GeoJSON file
pub fn load_polygons(path: &Path) -> Result<Vec<Polygon<f64>>> {
    let contents = fs::read_to_string(path)?;
    let polygons = polygons_from_str(&contents)?;
    info!("Loaded {} facet polygon(s) from {:?}", polygons.len(), path);
    Ok(polygons)
}

/// Extract validated polygons from GeoJSON text
///
/// Accepts a FeatureCollection, a single Feature, or a bare Geometry.
/// Non-polygon geometries are skipped, not errors; an empty result is
/// valid and measures to zero downstream.
pub fn polygons_from_str(contents: &str) -> Result<Vec<Polygon<f64>>> {
    let geojson: GeoJson = contents.parse()?;
    let mut polygons = Vec::new();

    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for (idx, feature) in fc.features.into_iter().enumerate() {
                if let Some(geometry) = feature.geometry {
                    collect_polygons(idx, &geometry.value, &mut polygons)?;
                }
            }
        }
        GeoJson::Feature(feature) => {
            if let Some(geometry) = feature.geometry {
                collect_polygons(0, &geometry.value, &mut polygons)?;
            }
        }
        GeoJson::Geometry(geometry) => collect_polygons(0, &geometry.value, &mut polygons)?,
    }

    Ok(polygons)
}

fn collect_polygons(idx: usize, value: &Value, out: &mut Vec<Polygon<f64>>) -> Result<()> {
    match value {
        Value::Polygon(rings) => out.push(polygon_from_rings(idx, rings)?),
        Value::MultiPolygon(polys) => {
            for rings in polys {
                out.push(polygon_from_rings(idx, rings)?);
            }
        }
        Value::GeometryCollection(geometries) => {
            for geometry in geometries {
                collect_polygons(idx, &geometry.value, out)?;
            }
        }
        _ => debug!("skipping non-polygon geometry at index {}", idx),
    }
    Ok(())
}

fn polygon_from_rings(idx: usize, rings: &[Vec<Vec<f64>>]) -> Result<Polygon<f64>> {
    let mut validated = rings
        .iter()
        .map(|ring| validated_ring(idx, ring))
        .collect::<Result<Vec<LineString<f64>>>>()?;

    if validated.is_empty() {
        return Err(SurveyError::MalformedRing {
            geometry: idx,
            reason: "polygon has no rings".to_string(),
        });
    }

    let exterior = validated.remove(0);
    Ok(Polygon::new(exterior, validated))
}

fn validated_ring(idx: usize, ring: &[Vec<f64>]) -> Result<LineString<f64>> {
    // A closed ring needs 3 distinct vertices plus the closing repeat
    if ring.len() < 4 {
        return Err(SurveyError::MalformedRing {
            geometry: idx,
            reason: format!("ring has {} position(s), need at least 4", ring.len()),
        });
    }

    let mut coords = Vec::with_capacity(ring.len());
    for position in ring {
        let (lon, lat) = match position.as_slice() {
            [lon, lat, ..] => (*lon, *lat),
            _ => {
                return Err(SurveyError::MalformedRing {
                    geometry: idx,
                    reason: "position has fewer than 2 ordinates".to_string(),
                })
            }
        };
        if !is_valid_longitude(lon) || !is_valid_latitude(lat) {
            return Err(SurveyError::MalformedRing {
                geometry: idx,
                reason: format!("coordinate out of range: ({}, {})", lon, lat),
            });
        }
        coords.push(Coord { x: lon, y: lat });
    }

    if coords.first() != coords.last() {
        return Err(SurveyError::MalformedRing {
            geometry: idx,
            reason: "ring is not closed (first vertex != last vertex)".to_string(),
        });
    }

    Ok(LineString::from(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SQUARE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [0.001, 0.0], [0.001, 0.001], [0.0, 0.001], [0.0, 0.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Point",
                    "coordinates": [0.0, 0.0]
                }
            }
        ]
    }"#;

    #[test]
    fn keeps_polygons_and_skips_points() {
        let polygons = polygons_from_str(SQUARE).unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].exterior().0.len(), 5);
    }

    #[test]
    fn bare_geometry_is_accepted() {
        let geojson = r#"{
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        }"#;
        let polygons = polygons_from_str(geojson).unwrap();
        assert_eq!(polygons.len(), 1);
    }

    #[test]
    fn unclosed_ring_is_rejected() {
        let geojson = r#"{
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]]
        }"#;
        let err = polygons_from_str(geojson).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedRing { .. }), "{err}");
    }

    #[test]
    fn short_ring_is_rejected() {
        let geojson = r#"{
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]
        }"#;
        let err = polygons_from_str(geojson).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedRing { .. }), "{err}");
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let geojson = r#"{
            "type": "Polygon",
            "coordinates": [[[0.0, 95.0], [1.0, 0.0], [1.0, 1.0], [0.0, 95.0]]]
        }"#;
        let err = polygons_from_str(geojson).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedRing { .. }), "{err}");
    }

    #[test]
    fn loads_from_a_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SQUARE.as_bytes()).unwrap();
        let polygons = load_polygons(file.path()).unwrap();
        assert_eq!(polygons.len(), 1);
    }
}
