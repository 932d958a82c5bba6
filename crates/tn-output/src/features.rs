//! Map-viewer artifact: GeoJSON features wrapped in a JavaScript prelude.
//!
//! The viewer loads the artifact as a plain `<script>`, so the features are
//! assigned to a global rather than served as a `.geojson` document:
//!
//! ```text
//! var geojson_features = [ … ];
//!
//! var lat_center_map = 43.55
//! var lon_center_map = -96.72
//! ```
//!
//! The map center is the mean of each feature's first position.

use std::path::Path;

use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};
use log::debug;

use tn_core::{GeoNode, GeoPoint};
use tn_spatial::{JoinedDemand, JoinedLinkFeature};

use crate::format::float;
use crate::{write_artifact, OutputError, OutputResult};

/// Line or marker weight used when a style carries no explicit weights.
pub const DEFAULT_WEIGHT: f64 = 2.0;

/// Global the viewer reads the feature array from.
pub const FEATURES_VAR: &str = "geojson_features";

// ── Style ─────────────────────────────────────────────────────────────────────

/// Viewer color bucket for a numeric color value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorClass {
    /// `< 1`
    Blue,
    /// `[1, 2)`
    Yellow,
    /// `[2, 3)`
    Orange,
    /// `[3, 4)`
    OrangeRed,
    /// `>= 5`
    Red,
}

impl ColorClass {
    /// Bucket `value`.  `[4, 5)` and NaN have no bucket.
    pub fn classify(value: f64) -> Option<ColorClass> {
        match value {
            v if v < 1.0 => Some(ColorClass::Blue),
            v if v < 2.0 => Some(ColorClass::Yellow),
            v if v < 3.0 => Some(ColorClass::Orange),
            v if v < 4.0 => Some(ColorClass::OrangeRed),
            v if v >= 5.0 => Some(ColorClass::Red),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorClass::Blue => "blue",
            ColorClass::Yellow => "yellow",
            ColorClass::Orange => "orange",
            ColorClass::OrangeRed => "orangered",
            ColorClass::Red => "red",
        }
    }
}

/// Per-feature color values and optional weights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureStyle {
    pub colors:  Vec<f64>,
    /// `None` gives every feature [`DEFAULT_WEIGHT`].
    pub weights: Option<Vec<f64>>,
}

impl FeatureStyle {
    /// Same color for `n` features, default weights.
    pub fn uniform(color: f64, n: usize) -> Self {
        Self { colors: vec![color; n], weights: None }
    }

    pub fn weight(&self, i: usize) -> f64 {
        self.weights
            .as_ref()
            .and_then(|w| w.get(i).copied())
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Check lengths against `n` features and every value against its bucket.
    /// Colors and weights must be finite.
    pub fn validate(&self, n: usize) -> OutputResult<()> {
        if self.colors.len() != n {
            return Err(OutputError::LengthMismatch {
                what:     "colors",
                expected: n,
                got:      self.colors.len(),
            });
        }
        if let Some(weights) = &self.weights {
            if weights.len() != n {
                return Err(OutputError::LengthMismatch {
                    what:     "weights",
                    expected: n,
                    got:      weights.len(),
                });
            }
            if let Some((index, &value)) = weights.iter().enumerate().find(|(_, w)| !w.is_finite()) {
                return Err(OutputError::InvalidWeight { index, value });
            }
        }
        // Infinite colors would serialize as JSON `null`.
        for (index, &value) in self.colors.iter().enumerate() {
            if !value.is_finite() || ColorClass::classify(value).is_none() {
                return Err(OutputError::UnassignedColor { index, value });
            }
        }
        Ok(())
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// One `LineString` feature per link, with `names[k]` carrying
/// `attributes[k]` as a string property.
pub fn render_link_features(
    links: &[JoinedLinkFeature],
    names: &[&str],
    style: &FeatureStyle,
) -> OutputResult<String> {
    if links.is_empty() {
        return Err(OutputError::Empty("link features"));
    }
    style.validate(links.len())?;

    let mut features = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        if link.attributes.len() != names.len() {
            return Err(OutputError::LengthMismatch {
                what:     "attribute names",
                expected: link.attributes.len(),
                got:      names.len(),
            });
        }
        let mut props = JsonObject::new();
        for (name, &v) in names.iter().zip(&link.attributes) {
            props.insert((*name).to_owned(), JsonValue::String(float(v)));
        }
        features.push(feature(
            Value::LineString(vec![link.from.lon_lat(), link.to.lon_lat()]),
            props,
            style,
            i,
        ));
    }

    let anchors: Vec<GeoPoint> = links.iter().map(|l| l.from).collect();
    wrap(&features, &anchors)
}

/// Desire lines: one feature per OD pair with a `demand` property.
pub fn render_demand_features(demand: &[JoinedDemand], style: &FeatureStyle) -> OutputResult<String> {
    let links: Vec<JoinedLinkFeature> = demand.iter().copied().map(Into::into).collect();
    render_link_features(&links, &["demand"], style)
}

/// One `Point` feature per node with a `node` property.
pub fn render_point_features(nodes: &[GeoNode], style: &FeatureStyle) -> OutputResult<String> {
    if nodes.is_empty() {
        return Err(OutputError::Empty("point features"));
    }
    style.validate(nodes.len())?;

    let features: Vec<Feature> = nodes
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let mut props = JsonObject::new();
            props.insert("node".to_owned(), JsonValue::String(n.id.0.to_string()));
            feature(Value::Point(n.pos.lon_lat()), props, style, i)
        })
        .collect();

    let anchors: Vec<GeoPoint> = nodes.iter().map(|n| n.pos).collect();
    wrap(&features, &anchors)
}

fn feature(geometry: Value, mut props: JsonObject, style: &FeatureStyle, i: usize) -> Feature {
    props.insert("color".to_owned(), JsonValue::from(style.colors[i]));
    props.insert("weight".to_owned(), JsonValue::from(style.weight(i)));
    Feature {
        bbox:            None,
        geometry:        Some(Geometry::new(geometry)),
        id:              None,
        properties:      Some(props),
        foreign_members: None,
    }
}

/// `anchors` is non-empty: callers reject empty feature lists first.
fn wrap(features: &[Feature], anchors: &[GeoPoint]) -> OutputResult<String> {
    let n = anchors.len() as f64;
    let lat = anchors.iter().map(|p| p.lat).sum::<f64>() / n;
    let lon = anchors.iter().map(|p| p.lon).sum::<f64>() / n;

    let body = serde_json::to_string_pretty(features)?;
    debug!("serialized {} features, center ({lat}, {lon})", features.len());
    Ok(format!(
        "var {FEATURES_VAR} = {body};\n\nvar lat_center_map = {}\nvar lon_center_map = {}\n",
        float(lat),
        float(lon),
    ))
}

// ── File writers ──────────────────────────────────────────────────────────────

pub fn write_link_features(
    path:  &Path,
    links: &[JoinedLinkFeature],
    names: &[&str],
    style: &FeatureStyle,
) -> OutputResult<()> {
    write_artifact(path, render_link_features(links, names, style)?)
}

pub fn write_demand_features(path: &Path, demand: &[JoinedDemand], style: &FeatureStyle) -> OutputResult<()> {
    write_artifact(path, render_demand_features(demand, style)?)
}

pub fn write_point_features(path: &Path, nodes: &[GeoNode], style: &FeatureStyle) -> OutputResult<()> {
    write_artifact(path, render_point_features(nodes, style)?)
}
