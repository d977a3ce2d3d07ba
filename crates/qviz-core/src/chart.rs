//! Renderer-agnostic chart specification
//!
//! The types in this module mirror the Plot.ly JSON schema closely enough that
//! a serialized [`ChartSpec`] can be handed to any Plot.ly-compatible renderer:
//! - `data`: ordered traces (surfaces or bar series)
//! - `layout`: titles, colors, axis definitions and annotations
//! - `config`: renderer behaviour toggles
//!
//! Optional fields are skipped when unset so the JSON only carries what a
//! builder or template actually specified.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::colorscale::ColorScale;

/// A complete chart: traces, layout and renderer config
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart elements, in drawing order
    pub data: Vec<Trace>,

    /// Global and per-axis presentation
    pub layout: Layout,

    /// Renderer toggles (only present in full templates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RendererConfig>,
}

impl ChartSpec {
    /// Number of traces in the chart
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over the bar traces only
    pub fn bars(&self) -> impl Iterator<Item = &BarTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Bar(bar) => Some(bar),
            _ => None,
        })
    }

    /// Iterate over the surface traces only
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceTrace> {
        self.data.iter().filter_map(|trace| match trace {
            Trace::Surface(surface) => Some(surface),
            _ => None,
        })
    }
}

/// One chart element, discriminated by its `type` key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// 3D surface over a sampled grid
    Surface(SurfaceTrace),
    /// Categorical bar series
    Bar(BarTrace),
}

impl Trace {
    /// The trace type as it appears in JSON
    pub fn kind(&self) -> &'static str {
        match self {
            Trace::Surface(_) => "surface",
            Trace::Bar(_) => "bar",
        }
    }
}

/// Surface trace: `z[i][j]` is the value at `(x[i], y[j])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub colorscale: ColorScale,
    pub cmin: f64,
    pub cmax: f64,
    #[serde(default)]
    pub contours: Contours,
}

/// Contour projections of a surface
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contours {
    #[serde(default)]
    pub z: ContourProjection,
}

/// A single contour projection setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContourProjection {
    #[serde(default)]
    pub show: bool,
}

/// Bar trace bound to a named x/y axis pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarTrace {
    /// Category labels
    pub x: Vec<String>,

    /// Bar heights, one per label
    pub y: Vec<f64>,

    /// Display name (may be empty)
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,

    /// Axis reference such as `x` or `x2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,

    /// Axis reference such as `y`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

/// Marker styling for bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

impl Marker {
    /// Solid marker color
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

/// Global chart layout
///
/// Cartesian axis definitions (`xaxis`, `xaxis2`, ..., `yaxis`) sit directly in
/// the layout object in JSON; here they live in [`Layout::axes`], keyed by that
/// name. Any other key without a typed field (`bargap`, `legend`, ...) is kept
/// in [`Layout::extra`] and written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,

    /// 3D scene (surface charts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,

    /// Positioned text labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    /// Cartesian axes keyed by layout name
    #[serde(flatten, deserialize_with = "axis_entries")]
    pub axes: BTreeMap<String, Axis>,

    /// Remaining layout keys, passed through verbatim
    #[serde(flatten, deserialize_with = "non_axis_entries")]
    pub extra: Map<String, Value>,
}

/// Whether `key` names a cartesian axis (`xaxis`, `yaxis3`, ...)
fn is_axis_key(key: &str) -> bool {
    ["xaxis", "yaxis"].iter().any(|prefix| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.chars().all(|c| c.is_ascii_digit()))
    })
}

fn axis_entries<'de, D>(deserializer: D) -> Result<BTreeMap<String, Axis>, D::Error>
where
    D: Deserializer<'de>,
{
    Map::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .filter(|(key, _)| is_axis_key(key))
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|axis| (key, axis))
                .map_err(<D::Error as serde::de::Error>::custom)
        })
        .collect()
}

fn non_axis_entries<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Map::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .filter(|(key, _)| !is_axis_key(key))
        .collect())
}

impl Layout {
    /// Look up an axis definition by layout name
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.get(name)
    }

    /// Mutable access to an axis definition
    pub fn axis_mut(&mut self, name: &str) -> Option<&mut Axis> {
        self.axes.get_mut(name)
    }

    /// Insert or replace an axis definition
    pub fn set_axis(&mut self, name: impl Into<String>, axis: Axis) {
        self.axes.insert(name.into(), axis);
    }

    /// Names of all x-axis definitions
    pub fn x_axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes
            .keys()
            .map(String::as_str)
            .filter(|name| name.starts_with("xaxis"))
    }

    /// Remove every x-axis definition, returning how many were dropped
    pub fn clear_x_axes(&mut self) -> usize {
        let before = self.axes.len();
        self.axes.retain(|name, _| !name.starts_with("xaxis"));
        before - self.axes.len()
    }
}

/// Font settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl Font {
    /// Font with only a color
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            size: None,
        }
    }

    /// Font with only a size
    pub fn size(size: u32) -> Self {
        Self {
            color: None,
            size: Some(size),
        }
    }
}

/// Plot margins in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
    pub pad: u32,
}

/// Axis value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Category,
    Linear,
}

/// Axis definition, shared by cartesian and scene axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,

    /// Fraction of the plotting width `[low, high]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixedrange: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autorange: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Styling keys without a typed field, passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Axis {
    /// Axis carrying only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the line/label color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the grid color
    pub fn with_gridcolor(mut self, color: impl Into<String>) -> Self {
        self.gridcolor = Some(color.into());
        self
    }
}

/// 3D scene holding the surface axes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,

    #[serde(default)]
    pub xaxis: Axis,

    #[serde(default)]
    pub yaxis: Axis,

    #[serde(default)]
    pub zaxis: Axis,
}

/// Positioned text label in paper coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showarrow: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,

    #[serde(default)]
    pub text: String,

    pub x: f64,
    pub y: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,

    /// Styling keys without a typed field, inherited by every panel caption
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Renderer behaviour toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    #[serde(rename = "modeBarButtonsToRemove", default)]
    pub mode_bar_buttons_to_remove: Vec<String>,

    #[serde(default)]
    pub displaylogo: bool,
}
