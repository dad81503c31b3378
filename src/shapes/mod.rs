//! Geographic shape overlays.
//!
//! Shape layers follow the shapefile model: every layer has one numeric
//! shape type and a list of records, each record a list of parts (polygon
//! rings or line parts). Only polygon and line layers can be drawn; other
//! categories are reported back to the caller instead of being dropped.

mod loader;

use std::fmt;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::plotting::{Axes, Color, Line2D, PolygonPatch};

/// Shapefile shape categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Polygon,
    MultiPoint,
    MultiPatch,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Point => "point",
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
            ShapeKind::MultiPoint => "multipoint",
            ShapeKind::MultiPatch => "multipatch",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a shapefile type code. The Z and M variants of each type share
/// its category; the null shape (0) and unknown codes have none.
pub fn classify_shape(code: u32) -> Option<ShapeKind> {
    match code {
        1 | 11 | 21 => Some(ShapeKind::Point),
        3 | 13 | 23 => Some(ShapeKind::Line),
        5 | 15 | 25 => Some(ShapeKind::Polygon),
        8 | 18 | 28 => Some(ShapeKind::MultiPoint),
        31 => Some(ShapeKind::MultiPatch),
        _ => None,
    }
}

/// One shape record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    pub parts: Vec<Vec<(f64, f64)>>,
}

impl Geometry {
    pub fn new(parts: Vec<Vec<(f64, f64)>>) -> Self {
        Geometry { parts }
    }
}

/// Anything that yields shapefile-style records.
pub trait ShapeSource {
    /// Shapefile type code shared by every record.
    fn shape_type(&self) -> u32;

    fn shapes(&self) -> &[Geometry];

    /// Name used in logs and overlay reports.
    fn name(&self) -> &str {
        "unnamed layer"
    }
}

/// An in-memory shape layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayer {
    pub name: String,
    pub shape_type: u32,
    pub shapes: Vec<Geometry>,
}

impl ShapeLayer {
    pub fn new(name: impl Into<String>, shape_type: u32, shapes: Vec<Geometry>) -> Self {
        ShapeLayer {
            name: name.into(),
            shape_type,
            shapes,
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        classify_shape(self.shape_type)
    }
}

impl ShapeSource for ShapeLayer {
    fn shape_type(&self) -> u32 {
        self.shape_type
    }

    fn shapes(&self) -> &[Geometry] {
        &self.shapes
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A layer `add_shapefiles` could not draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLayer {
    /// Position in the layer list
    pub index: usize,
    pub name: String,
    pub shape_type: u32,
    pub kind: Option<ShapeKind>,
}

/// What `add_shapefiles` drew and what it skipped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayReport {
    /// Polygon patches added
    pub patches: usize,
    /// Line parts added
    pub lines: usize,
    pub skipped: Vec<SkippedLayer>,
}

impl OverlayReport {
    /// True when every layer was drawn.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Draw shape layers onto `axes`, one color per layer.
///
/// Polygon layers become one filled patch per record (face and edge in the
/// layer color, even-odd fill). Line layers become one plain line per record
/// part. Any other category is skipped with a warning and listed in the
/// returned report.
pub fn add_shapefiles<S: ShapeSource>(
    axes: &mut Axes,
    layers: &[S],
    colors: &[Color],
) -> Result<OverlayReport> {
    if layers.len() != colors.len() {
        return Err(Error::invalid(
            "colors",
            format!(
                "expected one color per shape layer ({}), got {}",
                layers.len(),
                colors.len()
            ),
        ));
    }

    let mut report = OverlayReport::default();
    for (index, (layer, color)) in layers.iter().zip(colors).enumerate() {
        let kind = classify_shape(layer.shape_type());
        match kind {
            Some(ShapeKind::Polygon) => {
                for shape in layer.shapes() {
                    axes.add_patch(PolygonPatch::new(shape.parts.clone()).color(color.clone()));
                    report.patches += 1;
                }
            }
            Some(ShapeKind::Line) => {
                for part in layer.shapes().iter().flat_map(|s| &s.parts) {
                    let mut line = Line2D::new("-", Some(color.clone()))?;
                    let (x, y): (Vec<f64>, Vec<f64>) = part.iter().copied().unzip();
                    line.set_data(x, y)?;
                    axes.add_line(line);
                    report.lines += 1;
                }
            }
            _ => {
                let category = kind.map_or("unknown", |k| k.as_str());
                warn!(
                    "Skipping shape layer '{}': {} shapes (type {}) cannot be drawn",
                    layer.name(),
                    category,
                    layer.shape_type()
                );
                report.skipped.push(SkippedLayer {
                    index,
                    name: layer.name().to_string(),
                    shape_type: layer.shape_type(),
                    kind,
                });
                continue;
            }
        }
        debug!("Drew shape layer '{}' ({} records)", layer.name(), layer.shapes().len());
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(offset: f64) -> Geometry {
        Geometry::new(vec![vec![
            (offset, offset),
            (offset + 1.0, offset),
            (offset + 1.0, offset + 1.0),
            (offset, offset + 1.0),
        ]])
    }

    #[test]
    fn test_classify_shape() {
        for code in [5, 15, 25] {
            assert_eq!(classify_shape(code), Some(ShapeKind::Polygon));
        }
        for code in [3, 13, 23] {
            assert_eq!(classify_shape(code), Some(ShapeKind::Line));
        }
        for code in [1, 11, 21] {
            assert_eq!(classify_shape(code), Some(ShapeKind::Point));
        }
        for code in [8, 18, 28] {
            assert_eq!(classify_shape(code), Some(ShapeKind::MultiPoint));
        }
        assert_eq!(classify_shape(31), Some(ShapeKind::MultiPatch));
        assert_eq!(classify_shape(0), None);
        assert_eq!(classify_shape(2), None);
    }

    #[test]
    fn test_polygons_and_lines_drawn() {
        let mut axes = Axes::new();
        let polygons = ShapeLayer::new("parcels", 5, vec![square(0.0), square(2.0)]);
        let rivers = ShapeLayer::new(
            "rivers",
            13,
            vec![Geometry::new(vec![
                vec![(0.0, 0.0), (1.0, 1.0)],
                vec![(2.0, 2.0), (3.0, 3.0), (4.0, 3.0)],
            ])],
        );
        let report = add_shapefiles(
            &mut axes,
            &[polygons, rivers],
            &[Color::from("#59a14f"), Color::from("#4e79a7")],
        )
        .unwrap();
        assert_eq!(report.patches, 2);
        assert_eq!(report.lines, 2);
        assert!(report.is_complete());
        assert_eq!(axes.num_patches(), 2);
        assert_eq!(axes.num_lines(), 2);
    }

    #[test]
    fn test_unhandled_layers_reported() {
        let mut axes = Axes::new();
        let wells = ShapeLayer::new("wells", 1, vec![Geometry::new(vec![vec![(1.0, 1.0)]])]);
        let odd = ShapeLayer::new("odd", 99, Vec::new());
        let report =
            add_shapefiles(&mut axes, &[wells, odd], &[Color::BLACK, Color::BLACK]).unwrap();
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].kind, Some(ShapeKind::Point));
        assert_eq!(report.skipped[1].kind, None);
        assert_eq!(report.skipped[1].index, 1);
        assert_eq!(axes.num_lines() + axes.num_patches(), 0);
    }

    #[test]
    fn test_color_count_must_match() {
        let mut axes = Axes::new();
        let layer = ShapeLayer::new("parcels", 5, vec![square(0.0)]);
        assert!(add_shapefiles(&mut axes, &[layer], &[]).is_err());
    }
}
