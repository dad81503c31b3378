//! JSON plot scripts.
//!
//! A script describes a whole batch: the session, the features to register,
//! an optional legend and minimap, and a list of pages. Each page updates or
//! masks features, optionally moves the minimap marker, and is then exported.
//! Pages refer to features by their position in registration order; an
//! `nd_pair` entry registers two features (detect, then non-detect).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDate;
use log::{info, warn};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{LegendConfig, MinimapConfig, SessionConfig};
use crate::error::{Error, Result};
use crate::export::PageSink;
use crate::plotting::{date_to_num, Color};
use crate::session::{FeatureId, Session};
use crate::shapes::ShapeLayer;

/// Date format accepted for x values given as strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A complete batch description.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct PlotScript {
    pub session: SessionConfig,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub legend: Option<LegendConfig>,
    #[serde(default)]
    pub features: Vec<FeatureDef>,
    #[serde(default)]
    pub minimap: Option<MinimapDef>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

fn default_true() -> bool { true }

/// One registration step.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureDef {
    /// A single feature
    Single {
        style: String,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default = "default_true")]
        in_legend: bool,
        #[serde(default)]
        empty: bool,
    },
    /// A detect feature plus its outline-only non-detect mate
    NdPair {
        style: String,
        #[serde(default)]
        color: Option<String>,
    },
    /// The legend-only "Non-Detects" symbol
    LegendNd {
        #[serde(default)]
        color: Option<String>,
    },
}

/// Minimap settings plus GeoJSON overlays.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct MinimapDef {
    #[serde(flatten)]
    pub config: MinimapConfig,
    #[serde(default)]
    pub shapes: Vec<ShapeDef>,
}

/// A GeoJSON file, relative to the script's directory, and its color.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct ShapeDef {
    pub path: PathBuf,
    pub color: String,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub updates: Vec<FeatureUpdate>,
    /// Features to clear and hide from the legend
    #[serde(default)]
    pub mask: Vec<usize>,
    #[serde(default)]
    pub current_loc: Option<CurrentLoc>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct FeatureUpdate {
    /// Feature position in registration order
    pub feature: usize,
    pub x: Vec<XValue>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_true")]
    pub in_legend: bool,
}

/// An x value: a plain number or a `YYYY-MM-DD` date.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum XValue {
    Number(f64),
    Date(String),
}

impl XValue {
    pub fn to_num(&self) -> Result<f64> {
        match self {
            XValue::Number(v) => Ok(*v),
            XValue::Date(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(date_to_num)
                .map_err(|e| Error::invalid("x", format!("'{}' is not a {} date: {}", s, DATE_FORMAT, e))),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone)]
pub struct CurrentLoc {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: String,
    #[serde(default = "default_marker_size")]
    pub size: f64,
}

fn default_marker_size() -> f64 { 8.0 }

// ============================================================================
// Schema
// ============================================================================

/// Cached JSON Schema for PlotScript.
static SCHEMA: LazyLock<schemars::Schema> = LazyLock::new(|| schema_for!(PlotScript));

/// Returns the JSON Schema as a pretty-printed JSON string.
pub fn schema_json_pretty() -> Result<String> {
    Ok(serde_json::to_string_pretty(&*SCHEMA)?)
}

/// Validate a JSON value against the PlotScript schema, reporting every
/// violation at once.
pub fn validate(value: &Value) -> Result<()> {
    let schema_val = serde_json::to_value(&*SCHEMA)?;
    let validator = jsonschema::validator_for(&schema_val)
        .map_err(|e| Error::Schema(format!("Failed to compile schema: {}", e)))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("  - {}: {}", e.instance_path, e))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Schema(format!(
            "Plot script failed schema validation ({} errors):\n{}",
            errors.len(),
            errors.join("\n")
        )))
    }
}

// ============================================================================
// Loading and running
// ============================================================================

impl PlotScript {
    /// Parse and validate a script.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        validate(&value)?;
        let script: PlotScript = serde_json::from_value(value)?;
        script.session.validate()?;
        Ok(script)
    }

    /// Load a script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Build the session, export every page into `sink`, and return the
    /// session as it stands after the last page. Shape paths are resolved
    /// against `base_dir`.
    pub fn run(&self, base_dir: &Path, sink: &mut dyn PageSink) -> Result<Session> {
        let mut session = Session::new(self.session.clone())?;
        if let Some(ref title) = self.title {
            session.set_title(title);
        }

        let ids = self.register_features(&mut session)?;
        info!("Registered {} features", ids.len());

        if let Some(ref minimap) = self.minimap {
            let layers = minimap
                .shapes
                .iter()
                .map(|s| ShapeLayer::from_geojson_path(base_dir.join(&s.path)))
                .collect::<Result<Vec<_>>>()?;
            let colors: Vec<Color> = minimap.shapes.iter().map(|s| Color::from(&s.color)).collect();
            let report = session.create_minimap(&minimap.config, &layers, &colors)?;
            if !report.is_complete() {
                warn!("{} shape layers were not drawn on the minimap", report.skipped.len());
            }
        }

        if let Some(ref legend) = self.legend {
            session.create_legend(&legend.loc, legend.size, legend.ncols)?;
        }

        for (n, page) in self.pages.iter().enumerate() {
            apply_page(&mut session, &ids, page)?;
            session.add_to_document(sink)?;
            info!("Rendered page {} of {}", n + 1, self.pages.len());
        }
        Ok(session)
    }

    fn register_features(&self, session: &mut Session) -> Result<Vec<FeatureId>> {
        let mut ids = Vec::new();
        for def in &self.features {
            match def {
                FeatureDef::Single {
                    style,
                    color,
                    label,
                    in_legend,
                    empty,
                } => {
                    ids.push(session.add_feature(
                        style,
                        color.as_ref().map(Color::from),
                        label.as_deref(),
                        *in_legend,
                        *empty,
                    )?);
                }
                FeatureDef::NdPair { style, color } => {
                    let (detect, non_detect) =
                        session.add_nd_pair_feature(style, color.as_ref().map(Color::from))?;
                    ids.push(detect);
                    ids.push(non_detect);
                }
                FeatureDef::LegendNd { color } => {
                    ids.push(session.add_legend_nd_feature(color.as_ref().map(Color::from))?);
                }
            }
        }
        Ok(ids)
    }
}

fn lookup(ids: &[FeatureId], position: usize) -> Result<FeatureId> {
    ids.get(position).copied().ok_or_else(|| {
        Error::invalid(
            "feature",
            format!("no feature at position {} ({} registered)", position, ids.len()),
        )
    })
}

fn apply_page(session: &mut Session, ids: &[FeatureId], page: &Page) -> Result<()> {
    if let Some(ref title) = page.title {
        session.set_title(title);
    }
    for update in &page.updates {
        let id = lookup(ids, update.feature)?;
        let x = update
            .x
            .iter()
            .map(XValue::to_num)
            .collect::<Result<Vec<f64>>>()?;
        session.update_feature(id, x, update.y.clone(), update.label.as_deref(), update.in_legend)?;
    }
    let masked = page
        .mask
        .iter()
        .map(|&position| lookup(ids, position))
        .collect::<Result<Vec<_>>>()?;
    session.mask_features(&masked)?;
    if let Some(ref loc) = page.current_loc {
        session.minimap_current_loc(loc.x.clone(), loc.y.clone(), Color::from(&loc.color), loc.size)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::PageBuffer;

    const SCRIPT: &str = r#"{
        "session": {
            "xlims": ["ignored"],
            "ylims": [0, 50]
        }
    }"#;

    fn full_script(shape_path: &str) -> String {
        format!(
            r##"{{
            "session": {{
                "xlims": [14610, 16436],
                "ylims": [0, 50],
                "ylabel": "Benzene (ug/L)",
                "xscale": "date"
            }},
            "title": "Site wells",
            "legend": {{"loc": "upper left", "ncols": 2}},
            "features": [
                {{"kind": "nd_pair", "style": "o"}},
                {{"kind": "single", "style": "s--", "label": "Trend", "in_legend": false}},
                {{"kind": "legend_nd"}}
            ],
            "minimap": {{
                "left": 0.7, "bottom": 0.7, "width": 0.2, "height": 0.2,
                "x": [0, 10], "y": [0, 10],
                "shapes": [{{"path": "{}", "color": "#d3d3d3"}}]
            }},
            "pages": [
                {{
                    "title": "MW-1",
                    "updates": [
                        {{"feature": 0, "x": ["2011-03-01", "2012-03-01"], "y": [5, 7], "label": "MW-1"}},
                        {{"feature": 1, "x": [15400], "y": [0.5], "in_legend": false}}
                    ],
                    "current_loc": {{"x": [2], "y": [3], "color": "red"}}
                }},
                {{
                    "title": "MW-2",
                    "mask": [0, 1]
                }}
            ]
        }}"##,
            shape_path
        )
    }

    #[test]
    fn test_schema_generation() {
        let schema = schema_json_pretty().unwrap();
        let parsed: Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(parsed.get("type").and_then(|v| v.as_str()), Some("object"));
    }

    #[test]
    fn test_invalid_script_rejected() {
        assert!(matches!(PlotScript::from_json_str(SCRIPT), Err(Error::Schema(_))));
        assert!(matches!(
            PlotScript::from_json_str(r#"{"bogus": true}"#),
            Err(Error::Schema(_))
        ));
    }

    #[test]
    fn test_x_values() {
        assert_eq!(XValue::Number(3.5).to_num().unwrap(), 3.5);
        assert_eq!(XValue::Date("1970-01-11".to_string()).to_num().unwrap(), 10.0);
        assert!(XValue::Date("11/01/1970".to_string()).to_num().is_err());
    }

    #[test]
    fn test_run_full_script() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("site.geojson"),
            r#"{"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,0]]]}"#,
        )
        .unwrap();

        let script = PlotScript::from_json_str(&full_script("site.geojson")).unwrap();
        let mut doc = PageBuffer::new();
        let session = script.run(dir.path(), &mut doc).unwrap();

        assert_eq!(doc.pages().len(), 2);
        assert!(doc.pages()[0].contains(">MW-1</text>"));
        assert!(doc.pages()[1].contains(">MW-2</text>"));
        assert_eq!(session.num_features(), 4);
        assert_eq!(session.legend_mask(), vec![false, false, false, true]);
        assert_eq!(session.legend_labels(), vec!["Non-Detects".to_string()]);
        assert_eq!(session.axes().xlabel(), Some("Date"));
    }

    #[test]
    fn test_unknown_feature_position() {
        let dir = tempfile::tempdir().unwrap();
        let script = PlotScript::from_json_str(
            r#"{
                "session": {"xlims": [0, 1], "ylims": [0, 1]},
                "features": [{"kind": "single", "style": "o"}],
                "pages": [{"mask": [3]}]
            }"#,
        )
        .unwrap();
        let mut doc = PageBuffer::new();
        assert!(matches!(
            script.run(dir.path(), &mut doc),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(doc.pages().len(), 0);
    }
}
