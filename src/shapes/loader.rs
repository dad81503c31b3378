//! GeoJSON-backed shape layers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geojson::{GeoJson, Geometry as GeoGeometry, Value};
use log::debug;

use super::{Geometry, ShapeLayer};
use crate::error::{Error, Result};

const POINT: u32 = 1;
const POLYLINE: u32 = 3;
const POLYGON: u32 = 5;
const MULTIPOINT: u32 = 8;

impl ShapeLayer {
    /// Parse a GeoJSON document (bare geometry, feature or feature
    /// collection) into a layer. All geometries must map to the same
    /// shapefile type.
    pub fn from_geojson_str(name: impl Into<String>, s: &str) -> Result<Self> {
        let geojson = s.parse::<GeoJson>()?;
        Self::from_geojson(name.into(), geojson)
    }

    /// Load a GeoJSON file. The layer is named after the file stem.
    pub fn from_geojson_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let geojson = GeoJson::from_reader(reader)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_geojson(name, geojson)
    }

    fn from_geojson(name: String, geojson: GeoJson) -> Result<Self> {
        let geometries: Vec<GeoGeometry> = match geojson {
            GeoJson::Geometry(g) => vec![g],
            GeoJson::Feature(f) => f.geometry.into_iter().collect(),
            GeoJson::FeatureCollection(fc) => {
                fc.features.into_iter().filter_map(|f| f.geometry).collect()
            }
        };

        let mut shape_type = None;
        let mut shapes = Vec::with_capacity(geometries.len());
        for geometry in geometries {
            let (code, shape) = convert(&geometry.value)?;
            match shape_type {
                None => shape_type = Some(code),
                Some(existing) if existing != code => {
                    return Err(Error::shape(format!(
                        "layer '{}' mixes shape types {} and {}",
                        name, existing, code
                    )));
                }
                Some(_) => {}
            }
            shapes.push(shape);
        }

        let shape_type = shape_type
            .ok_or_else(|| Error::shape(format!("layer '{}' has no geometries", name)))?;
        debug!("Loaded shape layer '{}': {} shapes of type {}", name, shapes.len(), shape_type);
        Ok(ShapeLayer::new(name, shape_type, shapes))
    }
}

fn point(position: &[f64]) -> Result<(f64, f64)> {
    match position {
        [x, y, ..] => Ok((*x, *y)),
        _ => Err(Error::shape(format!(
            "position needs at least two coordinates, got {}",
            position.len()
        ))),
    }
}

fn points(positions: &[Vec<f64>]) -> Result<Vec<(f64, f64)>> {
    positions.iter().map(|p| point(p)).collect()
}

/// Map a GeoJSON geometry to a shapefile type code and record.
fn convert(value: &Value) -> Result<(u32, Geometry)> {
    let converted = match value {
        Value::Point(p) => (POINT, Geometry::new(vec![vec![point(p)?]])),
        Value::MultiPoint(ps) => (MULTIPOINT, Geometry::new(vec![points(ps)?])),
        Value::LineString(ls) => (POLYLINE, Geometry::new(vec![points(ls)?])),
        Value::MultiLineString(mls) => (
            POLYLINE,
            Geometry::new(mls.iter().map(|ls| points(ls)).collect::<Result<_>>()?),
        ),
        Value::Polygon(rings) => (
            POLYGON,
            Geometry::new(rings.iter().map(|r| points(r)).collect::<Result<_>>()?),
        ),
        Value::MultiPolygon(polygons) => (
            POLYGON,
            Geometry::new(
                polygons
                    .iter()
                    .flatten()
                    .map(|r| points(r))
                    .collect::<Result<_>>()?,
            ),
        ),
        Value::GeometryCollection(_) => {
            return Err(Error::shape("geometry collections are not supported"))
        }
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{classify_shape, ShapeKind};

    #[test]
    fn test_feature_collection_of_polygons() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0,0],[4,0],[4,4],[0,4],[0,0]], [[1,1],[2,1],[2,2],[1,1]]]
                }},
                {"type": "Feature", "properties": {}, "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[5,5],[6,5],[6,6],[5,5]]], [[[7,7],[8,7],[8,8],[7,7]]]]
                }}
            ]
        }"#;
        let layer = ShapeLayer::from_geojson_str("site", doc).unwrap();
        assert_eq!(classify_shape(layer.shape_type), Some(ShapeKind::Polygon));
        assert_eq!(layer.shapes.len(), 2);
        assert_eq!(layer.shapes[0].parts.len(), 2);
        assert_eq!(layer.shapes[1].parts.len(), 2);
    }

    #[test]
    fn test_line_strings() {
        let doc = r#"{"type": "MultiLineString", "coordinates": [[[0,0],[1,1]], [[2,2],[3,3,10]]]}"#;
        let layer = ShapeLayer::from_geojson_str("streams", doc).unwrap();
        assert_eq!(layer.shape_type, POLYLINE);
        assert_eq!(layer.shapes[0].parts[1], vec![(2.0, 2.0), (3.0, 3.0)]);
    }

    #[test]
    fn test_mixed_types_rejected() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0,0]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0,0],[1,1]]}}
            ]
        }"#;
        assert!(ShapeLayer::from_geojson_str("mixed", doc).is_err());
        assert!(ShapeLayer::from_geojson_str("bad", "not json").is_err());
    }

    #[test]
    fn test_from_path_uses_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wells.geojson");
        std::fs::write(&path, r#"{"type": "MultiPoint", "coordinates": [[0,0],[1,2]]}"#).unwrap();
        let layer = ShapeLayer::from_geojson_path(&path).unwrap();
        assert_eq!(layer.name, "wells");
        assert_eq!(layer.kind(), Some(ShapeKind::MultiPoint));
    }
}
