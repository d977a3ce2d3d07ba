//! Axis naming and horizontal panel layout
//!
//! Multi-panel charts give every panel its own x-axis while sharing a single
//! y-axis. This module derives:
//! - The layout key / trace reference pair for each panel's x-axis
//! - The fractional domain each panel occupies in the plotting width

use serde::{Deserialize, Serialize};

/// Default gap inserted between adjacent panels, as a fraction of the width
pub const PANEL_GAP: f64 = 0.01;

/// Name of an axis in both places it appears
///
/// The layout stores axes under keys like `xaxis2`, while traces refer to the
/// same axis as `x2`. Both are always derived together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisName {
    /// Key in the layout object (`xaxis`, `xaxis2`, ...)
    pub layout_key: String,
    /// Reference used by traces (`x`, `x2`, ...)
    pub trace_ref: String,
}

impl AxisName {
    /// X-axis for the panel at `idx` (0-based)
    pub fn x(idx: usize) -> Self {
        if idx == 0 {
            Self {
                layout_key: "xaxis".to_string(),
                trace_ref: "x".to_string(),
            }
        } else {
            Self {
                layout_key: format!("xaxis{}", idx + 1),
                trace_ref: format!("x{}", idx + 1),
            }
        }
    }

    /// The single y-axis shared by all panels
    pub fn primary_y() -> Self {
        Self {
            layout_key: "yaxis".to_string(),
            trace_ref: "y".to_string(),
        }
    }
}

/// Horizontal slot occupied by one panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelDomain {
    /// Left edge (fraction of total width)
    pub low: f64,
    /// Right edge (fraction of total width)
    pub high: f64,
    /// Horizontal anchor for the panel caption
    pub label_x: f64,
}

impl PanelDomain {
    /// Domain of panel `idx` out of `count`
    ///
    /// Panel `idx` spans `[idx/n + gap_l, (idx+1)/n - gap_r]` where the gaps
    /// are `gap` between neighbours and zero at the outer edges.
    pub fn of(idx: usize, count: usize, gap: f64) -> Self {
        let n = count as f64;
        let gap_left = if idx != 0 { gap } else { 0.0 };
        let gap_right = if idx + 1 != count { gap } else { 0.0 };
        let low = idx as f64 / n + gap_left;

        Self {
            low,
            high: (idx + 1) as f64 / n - gap_right,
            label_x: low + 0.5 / n,
        }
    }

    /// Domain as the `[low, high]` pair stored on an axis
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

}

/// Width of the narrowest of `count` panels separated by `gap`
///
/// Inner panels lose `gap` on both sides, so this goes non-positive once
/// `1/count <= 2·gap` (or `gap >= 0.5` for two panels).
pub fn narrowest_panel(count: usize, gap: f64) -> f64 {
    match count {
        0 | 1 => 1.0,
        2 => 0.5 - gap,
        n => 1.0 / n as f64 - 2.0 * gap,
    }
}

/// Domains for `count` panels laid out left to right
pub fn panel_domains(count: usize, gap: f64) -> Vec<PanelDomain> {
    (0..count)
        .map(|idx| PanelDomain::of(idx, count, gap))
        .collect()
}
