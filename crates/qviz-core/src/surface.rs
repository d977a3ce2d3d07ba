//! Wigner function surface charts
//!
//! Turns a sampled Wigner function `W(x, p)` into a single 3D surface trace.
//! The color range is pinned to `±1/π`, the bound on `|W|` for any normalised
//! state, so charts of different states share one color mapping.

use ndarray::ArrayView2;

use crate::chart::{
    Axis, ChartSpec, ContourProjection, Contours, Font, Scene, SurfaceTrace, Trace,
};
use crate::colorscale::wigner_diverging;
use crate::error::{ChartError, ChartResult};
use crate::style::ChartStyle;

/// Upper bound on `|W(x, p)|`, used as the fixed color range
pub const WIGNER_BOUND: f64 = std::f64::consts::FRAC_1_PI;

/// Build a surface chart from a Wigner field sampled on `x_axis × p_axis`
///
/// `field[[i, j]]` is the value at `(x_axis[i], p_axis[j])`. The field must
/// have shape `(x_axis.len(), p_axis.len())`; monotonicity of the axes is
/// the caller's responsibility.
pub fn build_surface_chart(
    field: ArrayView2<'_, f64>,
    x_axis: &[f64],
    p_axis: &[f64],
    show_contours: bool,
) -> ChartResult<ChartSpec> {
    build_surface_chart_styled(field, x_axis, p_axis, show_contours, &ChartStyle::default())
}

/// Build a surface chart using colors from `style`
pub fn build_surface_chart_styled(
    field: ArrayView2<'_, f64>,
    x_axis: &[f64],
    p_axis: &[f64],
    show_contours: bool,
    style: &ChartStyle,
) -> ChartResult<ChartSpec> {
    if x_axis.is_empty() {
        return Err(ChartError::EmptyAxis { axis: "x" });
    }
    if p_axis.is_empty() {
        return Err(ChartError::EmptyAxis { axis: "p" });
    }

    let expected = (x_axis.len(), p_axis.len());
    if field.dim() != expected {
        return Err(ChartError::ShapeMismatch {
            expected,
            actual: field.dim(),
        });
    }

    let colorscale = wigner_diverging();
    colorscale.validate()?;

    let surface = SurfaceTrace {
        x: x_axis.to_vec(),
        y: p_axis.to_vec(),
        z: field.outer_iter().map(|row| row.to_vec()).collect(),
        colorscale,
        cmin: -WIGNER_BOUND,
        cmax: WIGNER_BOUND,
        contours: Contours {
            z: ContourProjection {
                show: show_contours,
            },
        },
    };

    let mut chart = ChartSpec::surface_skeleton();
    chart.data = vec![Trace::Surface(surface)];

    let layout = &mut chart.layout;
    layout.paper_bgcolor = Some(style.background.clone());
    layout.plot_bgcolor = Some(style.background.clone());
    layout.font = Some(Font::color(style.text_color.clone()));
    layout.scene = Some(Scene {
        bgcolor: Some(style.background.clone()),
        xaxis: Axis::titled("x").with_color(style.text_color.clone()),
        yaxis: Axis::titled("p")
            .with_color(style.text_color.clone())
            .with_gridcolor(style.text_color.clone()),
        zaxis: Axis::titled("W(x,p)"),
    });

    tracing::debug!(
        "Built Wigner surface chart: {}x{} grid, contours {}",
        expected.0,
        expected.1,
        show_contours
    );

    Ok(chart)
}
