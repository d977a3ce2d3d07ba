//! Color scales for surface charts
//!
//! A color scale is an ordered list of `(fraction, color)` stops that the
//! renderer interpolates between. Stops serialize as two-element arrays,
//! e.g. `[0.25, "red"]`, matching the Plot.ly `colorscale` attribute.
//!
//! The Wigner surface uses a fixed diverging scale; it is not data-driven.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One stop of a color scale: value fraction in `[0, 1]` and a CSS color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorStop(pub f64, pub String);

impl ColorStop {
    /// Create a new stop
    pub fn new(fraction: f64, color: impl Into<String>) -> Self {
        Self(fraction, color.into())
    }

    /// Position of the stop
    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// Color at the stop
    pub fn color(&self) -> &str {
        &self.1
    }
}

/// Ordered list of color stops
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(Vec<ColorStop>);

impl ColorScale {
    /// Create a scale from a list of colors (evenly spaced)
    pub fn from_colors<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        let n = colors.len();
        let stops = colors
            .into_iter()
            .enumerate()
            .map(|(i, c)| ColorStop::new(i as f64 / n.saturating_sub(1).max(1) as f64, c))
            .collect();

        Self(stops)
    }

    /// The stops, in order
    pub fn stops(&self) -> &[ColorStop] {
        &self.0
    }

    /// Stop fractions, in order
    pub fn fractions(&self) -> Vec<f64> {
        self.0.iter().map(ColorStop::fraction).collect()
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the scale has no stops
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that stops ascend through `[0, 1]`, starting at 0 and ending at 1
    pub fn validate(&self) -> ChartResult<()> {
        let (first, last) = match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() >= 2 => (first, last),
            _ => {
                return Err(ChartError::InvalidColorScale {
                    message: format!("need at least 2 stops, got {}", self.0.len()),
                })
            }
        };

        if first.fraction() != 0.0 || last.fraction() != 1.0 {
            return Err(ChartError::InvalidColorScale {
                message: format!(
                    "stops must span [0, 1], got [{}, {}]",
                    first.fraction(),
                    last.fraction()
                ),
            });
        }

        if let Some(pair) = self.0.windows(2).find(|w| w[1].fraction() <= w[0].fraction()) {
            return Err(ChartError::InvalidColorScale {
                message: format!(
                    "stop {} does not follow {}",
                    pair[1].fraction(),
                    pair[0].fraction()
                ),
            });
        }

        Ok(())
    }
}

/// The diverging scale used for Wigner surfaces
///
/// Negative quasi-probability maps to purple/red, zero to yellow and positive
/// values to green/blue.
pub fn wigner_diverging() -> ColorScale {
    ColorScale::from_colors(["purple", "red", "yellow", "green", "blue"])
}
