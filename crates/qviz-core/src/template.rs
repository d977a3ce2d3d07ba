//! Default chart templates
//!
//! Templates are plain constructors returning a fresh [`ChartSpec`]; there is
//! no shared default object to mutate. Builders clone whatever template they
//! are given before filling it in.

use crate::chart::{
    Annotation, Axis, AxisType, BarTrace, ChartSpec, Contours, Font, Layout, Margin,
    RendererConfig, Scene, SurfaceTrace, Trace,
};
use crate::colorscale::ColorScale;
use crate::style::{TEXT_COLOR, TRANSPARENT};

/// Mode-bar buttons hidden by the bar chart template
pub const REMOVED_MODE_BAR_BUTTONS: [&str; 4] =
    ["zoom2d", "lasso2d", "select2d", "toggleSpikelines"];

impl Annotation {
    /// Caption style used above each bar panel
    ///
    /// Centered horizontally on `x`, sitting on top of the plotting area.
    pub fn panel_caption() -> Self {
        Self {
            showarrow: Some(false),
            xanchor: Some("center".to_string()),
            yanchor: Some("bottom".to_string()),
            xref: Some("paper".to_string()),
            yref: Some("paper".to_string()),
            text: String::new(),
            x: 0.0,
            y: 1.0,
            font: Some(Font::size(16)),
            extra: Default::default(),
        }
    }
}

impl ChartSpec {
    /// Full bar chart template: one placeholder series, fixed size, one caption
    pub fn bar_chart_default() -> Self {
        let mut layout = Layout {
            width: Some(835),
            height: Some(500),
            margin: Some(Margin {
                l: 100,
                r: 100,
                b: 100,
                t: 100,
                pad: 4,
            }),
            paper_bgcolor: Some(TRANSPARENT.to_string()),
            plot_bgcolor: Some(TRANSPARENT.to_string()),
            autosize: Some(true),
            showlegend: Some(false),
            annotations: vec![Annotation::panel_caption()],
            ..Default::default()
        };
        layout.set_axis(
            "yaxis",
            Axis {
                axis_type: Some(AxisType::Linear),
                title: Some("Probability".to_string()),
                fixedrange: Some(true),
                gridcolor: Some("#bbb".to_string()),
                autorange: Some(true),
                ..Default::default()
            },
        );
        layout.set_axis(
            "xaxis",
            Axis {
                axis_type: Some(AxisType::Category),
                title: Some("q[0]".to_string()),
                fixedrange: Some(true),
                gridcolor: Some(TEXT_COLOR.to_string()),
                autorange: Some(true),
                ..Default::default()
            },
        );

        Self {
            data: vec![Trace::Bar(BarTrace {
                name: "q[0]".to_string(),
                ..Default::default()
            })],
            layout,
            config: Some(RendererConfig {
                mode_bar_buttons_to_remove: REMOVED_MODE_BAR_BUTTONS
                    .iter()
                    .map(|b| b.to_string())
                    .collect(),
                displaylogo: false,
            }),
        }
    }

    /// Empty surface chart skeleton: one blank surface and an empty scene
    pub fn surface_skeleton() -> Self {
        Self {
            data: vec![Trace::Surface(SurfaceTrace {
                x: Vec::new(),
                y: Vec::new(),
                z: Vec::new(),
                colorscale: ColorScale::default(),
                cmin: 0.0,
                cmax: 0.0,
                contours: Contours::default(),
            })],
            layout: Layout {
                scene: Some(Scene::default()),
                ..Default::default()
            },
            config: None,
        }
    }
}
