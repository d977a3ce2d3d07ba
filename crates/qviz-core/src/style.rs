//! Chart style configuration
//!
//! The builders use [`ChartStyle::default()`], which reproduces the fixed
//! palette of the reference charts. A style can also be loaded from TOML;
//! missing keys fall back to the defaults.
//!
//! ```toml
//! text_color = "#333333"
//! bar_color = "#aa3377"
//! panel_gap = 0.02
//! ```

use serde::{Deserialize, Serialize};

use crate::axis::PANEL_GAP;
use crate::error::{StyleError, StyleResult};

/// Neutral gray used for fonts and scene axes
pub const TEXT_COLOR: &str = "#787878";

/// Marker color of Fock bars
pub const BAR_COLOR: &str = "#1f9094";

/// Opaque background of surface charts
pub const BACKGROUND: &str = "white";

/// Fully transparent color (hidden panel grid lines)
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Title of the Fock bar chart
pub const FOCK_TITLE: &str = "Marginal Fock state probabilities";

/// Colors and spacing applied by the chart builders
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Global font color
    pub text_color: String,

    /// Bar marker color
    pub bar_color: String,

    /// Surface chart background (paper, plot and scene)
    pub background: String,

    /// Fock chart title
    pub fock_title: String,

    /// Gap between adjacent bar panels
    pub panel_gap: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            text_color: TEXT_COLOR.to_string(),
            bar_color: BAR_COLOR.to_string(),
            background: BACKGROUND.to_string(),
            fock_title: FOCK_TITLE.to_string(),
            panel_gap: PANEL_GAP,
        }
    }
}

impl ChartStyle {
    /// Parse a style from TOML
    pub fn from_toml_str(source: &str) -> StyleResult<Self> {
        let style: Self = toml::from_str(source)?;
        style.validate()?;
        Ok(style)
    }

    /// Check that the panel gap lies in `[0, 0.5)`
    ///
    /// Whether panels actually fit also depends on how many there are; the
    /// Fock builder rejects gaps that leave an inner panel no width.
    pub fn validate(&self) -> StyleResult<()> {
        if !(0.0..0.5).contains(&self.panel_gap) {
            return Err(StyleError::InvalidGap {
                gap: self.panel_gap,
            });
        }
        Ok(())
    }

    /// Set the font color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the bar marker color
    pub fn with_bar_color(mut self, color: impl Into<String>) -> Self {
        self.bar_color = color.into();
        self
    }

    /// Set the surface background
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    /// Set the Fock chart title
    pub fn with_fock_title(mut self, title: impl Into<String>) -> Self {
        self.fock_title = title.into();
        self
    }

    /// Set the panel gap
    pub fn with_panel_gap(mut self, gap: f64) -> Self {
        self.panel_gap = gap;
        self
    }
}
