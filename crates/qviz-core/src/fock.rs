//! Multi-panel Fock occupation bar charts
//!
//! One bar panel per requested mode, laid out left to right in ascending mode
//! order. All panels share the `y` probability axis; each panel owns its own
//! categorical x-axis so it can carry its own `mode n` title.
//!
//! Per-mode data is looked up by **mode number**, not by the position of the
//! mode in the request, through the [`ModeLookup`] trait.

use std::collections::{BTreeMap, HashMap};

use crate::axis::{narrowest_panel, panel_domains, AxisName};
use crate::chart::{Annotation, Axis, AxisType, BarTrace, ChartSpec, Font, Marker, Trace};
use crate::error::{ChartError, ChartResult};
use crate::style::{ChartStyle, TRANSPARENT};

/// Per-mode data addressable by mode number
pub trait ModeLookup<T> {
    /// Entry for `mode`, if present
    fn lookup(&self, mode: usize) -> Option<&T>;
}

impl<T> ModeLookup<T> for [T] {
    fn lookup(&self, mode: usize) -> Option<&T> {
        self.get(mode)
    }
}

impl<T> ModeLookup<T> for Vec<T> {
    fn lookup(&self, mode: usize) -> Option<&T> {
        self.get(mode)
    }
}

impl<T> ModeLookup<T> for BTreeMap<usize, T> {
    fn lookup(&self, mode: usize) -> Option<&T> {
        self.get(&mode)
    }
}

impl<T> ModeLookup<T> for HashMap<usize, T> {
    fn lookup(&self, mode: usize) -> Option<&T> {
        self.get(&mode)
    }
}

/// Build a Fock bar chart from `template`
///
/// - `modes`: modes to show, one panel each, in any order
/// - `distributions`: occupation probabilities, looked up by mode number
/// - `means`: mean photon numbers, looked up by mode number
/// - `labels`: category labels shared by every panel
///
/// The template is cloned, never modified. Its first annotation provides the
/// caption style for every panel.
pub fn build_fock_chart<D, M>(
    template: &ChartSpec,
    modes: &[usize],
    distributions: &D,
    means: &M,
    labels: &[String],
) -> ChartResult<ChartSpec>
where
    D: ModeLookup<Vec<f64>> + ?Sized,
    M: ModeLookup<f64> + ?Sized,
{
    build_fock_chart_styled(
        template,
        modes,
        distributions,
        means,
        labels,
        &ChartStyle::default(),
    )
}

/// Build a Fock bar chart using colors, title and panel gap from `style`
pub fn build_fock_chart_styled<D, M>(
    template: &ChartSpec,
    modes: &[usize],
    distributions: &D,
    means: &M,
    labels: &[String],
    style: &ChartStyle,
) -> ChartResult<ChartSpec>
where
    D: ModeLookup<Vec<f64>> + ?Sized,
    M: ModeLookup<f64> + ?Sized,
{
    if modes.is_empty() {
        return Err(ChartError::NoModes);
    }

    let mut ordered = modes.to_vec();
    ordered.sort_unstable();
    let count = ordered.len();

    let gap = style.panel_gap;
    let fits = gap >= 0.0 && narrowest_panel(count, gap) > 0.0;
    if !fits {
        return Err(ChartError::PanelTooNarrow { count, gap });
    }
    let domains = panel_domains(count, gap);

    let mut chart = template.clone();
    let caption = chart
        .layout
        .annotations
        .first()
        .cloned()
        .unwrap_or_else(Annotation::panel_caption);

    let stale = chart.layout.clear_x_axes();
    if stale > count {
        tracing::debug!(
            "Dropping {} template x-axes beyond {} panels",
            stale - count,
            count
        );
    }

    let y_ref = AxisName::primary_y().trace_ref;
    let mut data = Vec::with_capacity(count);
    let mut annotations = Vec::with_capacity(count);

    for (idx, (&mode, domain)) in ordered.iter().zip(&domains).enumerate() {
        let probabilities = distributions
            .lookup(mode)
            .ok_or(ChartError::ModeOutOfRange {
                mode,
                what: "distribution",
            })?;
        let mean = means.lookup(mode).ok_or(ChartError::ModeOutOfRange {
            mode,
            what: "mean",
        })?;
        if probabilities.len() != labels.len() {
            return Err(ChartError::LabelCountMismatch {
                mode,
                labels: labels.len(),
                probabilities: probabilities.len(),
            });
        }

        let axis = AxisName::x(idx);

        data.push(Trace::Bar(BarTrace {
            x: labels.to_vec(),
            y: probabilities.clone(),
            name: String::new(),
            marker: Some(Marker::color(style.bar_color.clone())),
            xaxis: Some(axis.trace_ref),
            yaxis: Some(y_ref.clone()),
        }));

        chart.layout.set_axis(
            axis.layout_key,
            Axis {
                axis_type: Some(AxisType::Category),
                domain: Some(domain.as_array()),
                title: Some(format!("mode {}", mode)),
                fixedrange: Some(true),
                gridcolor: Some(TRANSPARENT.to_string()),
                ..Default::default()
            },
        );

        annotations.push(Annotation {
            text: format!("Mean: {:.3}", mean),
            x: domain.label_x,
            ..caption.clone()
        });
    }

    chart.data = data;
    chart.layout.annotations = annotations;

    if let Some(primary) = chart.layout.axis_mut("xaxis") {
        primary.axis_type = Some(AxisType::Category);
    }
    chart.layout.title = Some(style.fock_title.clone());
    chart.layout.font = Some(Font::color(style.text_color.clone()));

    tracing::debug!("Built Fock chart with {} panels for modes {:?}", count, ordered);

    Ok(chart)
}
