//! Hand-off between quantum states, chart builders and renderers
//!
//! The builders never render anything themselves. This module connects:
//! - A [`QuantumState`] that can produce Wigner fields and reduced density matrices
//! - The chart builders in [`crate::surface`] and [`crate::fock`]
//! - A [`Renderer`] that displays the finished [`ChartSpec`]
//!
//! When no renderer backend is linked, [`MissingRenderer`] stands in and
//! reports what is missing, but only once rendering is attempted.

use ndarray::Array2;
use num_complex::Complex64;
use qviz_stats::FockStatistics;
use serde::{Deserialize, Serialize};

use crate::chart::ChartSpec;
use crate::error::{RenderError, RenderResult};
use crate::fock::build_fock_chart;
use crate::surface::build_surface_chart;

/// Truncation loss above which `plot_fock` logs a warning
const TRUNCATION_WARN_THRESHOLD: f64 = 1e-3;

/// Source of the numerical data that gets plotted
pub trait QuantumState {
    /// Default Fock-basis truncation of the state
    fn cutoff_dim(&self) -> usize;

    /// Wigner function of `mode` sampled on `xvec × pvec`
    fn wigner(&self, mode: usize, xvec: &[f64], pvec: &[f64]) -> Array2<f64>;

    /// Reduced density matrix of `mode` in a basis truncated at `cutoff`
    fn reduced_dm(&self, mode: usize, cutoff: usize) -> Array2<Complex64>;
}

/// Something that can display a chart
pub trait Renderer {
    /// Display `chart` on the named target (e.g. `"browser"`)
    fn show(&self, chart: &ChartSpec, target: &str) -> RenderResult<()>;
}

/// Renderer used when no backend is available
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingRenderer {
    /// What is missing
    pub capability: String,
    /// How to get it
    pub hint: String,
}

impl Default for MissingRenderer {
    fn default() -> Self {
        Self {
            capability: "A Plot.ly renderer".to_string(),
            hint: "Link a backend that accepts Plot.ly JSON, or see \
                   https://plotly.com/javascript/getting-started/ for plotly.js installation."
                .to_string(),
        }
    }
}

impl Renderer for MissingRenderer {
    fn show(&self, _chart: &ChartSpec, _target: &str) -> RenderResult<()> {
        Err(RenderError::BackendUnavailable {
            capability: self.capability.clone(),
            hint: self.hint.clone(),
        })
    }
}

/// Options for the `plot_*` functions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Renderer target name
    pub renderer: String,

    /// Show contour projections on Wigner surfaces
    pub contours: bool,

    /// Fock truncation (defaults to the state's own cutoff)
    pub cutoff: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            renderer: "browser".to_string(),
            contours: true,
            cutoff: None,
        }
    }
}

impl DisplayOptions {
    /// Set the renderer target
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = renderer.into();
        self
    }

    /// Toggle contour projections
    pub fn with_contours(mut self, contours: bool) -> Self {
        self.contours = contours;
        self
    }

    /// Override the Fock truncation
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = Some(cutoff);
        self
    }
}

/// Plot the Wigner function of one mode
pub fn plot_wigner<S, R>(
    state: &S,
    mode: usize,
    xvec: &[f64],
    pvec: &[f64],
    renderer: &R,
    options: &DisplayOptions,
) -> RenderResult<()>
where
    S: QuantumState + ?Sized,
    R: Renderer + ?Sized,
{
    let field = state.wigner(mode, xvec, pvec);
    let chart = build_surface_chart(field.view(), xvec, pvec, options.contours)?;
    show(renderer, &chart, &options.renderer)
}

/// Plot marginal Fock occupation probabilities of several modes
pub fn plot_fock<S, R>(
    state: &S,
    modes: &[usize],
    renderer: &R,
    options: &DisplayOptions,
) -> RenderResult<()>
where
    S: QuantumState + ?Sized,
    R: Renderer + ?Sized,
{
    let cutoff = options.cutoff.unwrap_or_else(|| state.cutoff_dim());

    let mut stats = FockStatistics::new(cutoff);
    for &mode in modes {
        stats.insert(mode, state.reduced_dm(mode, cutoff).view())?;
        if let Some(summary) = stats.summary(mode) {
            if summary.truncation_loss() > TRUNCATION_WARN_THRESHOLD {
                tracing::warn!(
                    "Mode {} loses {:.4} probability above cutoff {}",
                    mode,
                    summary.truncation_loss(),
                    cutoff
                );
            }
        }
    }

    let chart = build_fock_chart(
        &ChartSpec::bar_chart_default(),
        modes,
        &stats.probabilities,
        &stats.means,
        &stats.labels(),
    )?;
    show(renderer, &chart, &options.renderer)
}

fn show<R: Renderer + ?Sized>(renderer: &R, chart: &ChartSpec, target: &str) -> RenderResult<()> {
    tracing::debug!("Rendering chart with {} traces on '{}'", chart.trace_count(), target);
    renderer.show(chart, target).inspect_err(|e| {
        tracing::warn!("Rendering on '{}' failed: {}", target, e);
    })
}
