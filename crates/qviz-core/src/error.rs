//! Error types for qviz-core
//!
//! Provides error handling for:
//! - Chart building (shape and lookup failures)
//! - Rendering hand-off
//! - Style configuration loading

use qviz_stats::StatsError;
use thiserror::Error;

/// Errors raised while building a chart specification
#[derive(Error, Debug)]
pub enum ChartError {
    /// A sampling axis has no points
    #[error("Axis '{axis}' has no sample points")]
    EmptyAxis { axis: &'static str },

    /// Field dimensions do not match the sampling axes
    #[error("Field shape {actual:?} does not match axes {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A bar chart needs at least one mode
    #[error("No modes requested for the Fock chart")]
    NoModes,

    /// A requested mode has no entry in the supplied data
    #[error("Mode {mode} has no {what}")]
    ModeOutOfRange { mode: usize, what: &'static str },

    /// Category labels and probabilities disagree in length
    #[error("Mode {mode} has {probabilities} probabilities but {labels} labels")]
    LabelCountMismatch {
        mode: usize,
        labels: usize,
        probabilities: usize,
    },

    /// Panel gaps leave no room for at least one panel
    #[error("{count} panels do not fit with a panel gap of {gap}")]
    PanelTooNarrow { count: usize, gap: f64 },

    /// Color scale stops are malformed
    #[error("Invalid color scale: {message}")]
    InvalidColorScale { message: String },

    /// JSON conversion failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised when handing a chart to a renderer
#[derive(Error, Debug)]
pub enum RenderError {
    /// No rendering backend is linked
    #[error("{capability} required for rendering charts. {hint}")]
    BackendUnavailable { capability: String, hint: String },

    /// The backend rejected the chart
    #[error("Renderer '{target}' failed: {message}")]
    Backend { target: String, message: String },

    /// Building the chart failed
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    /// Deriving statistics from the state failed
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),
}

/// Errors raised while loading a chart style
#[derive(Error, Debug)]
pub enum StyleError {
    /// TOML could not be parsed into a style
    #[error("Failed to parse style: {0}")]
    Parse(#[from] toml::de::Error),

    /// Panel gap outside `[0, 0.5)`
    #[error("Panel gap {gap} must be in [0, 0.5)")]
    InvalidGap { gap: f64 },
}

/// Result type alias for chart building
pub type ChartResult<T> = Result<T, ChartError>;

/// Result type alias for rendering
pub type RenderResult<T> = Result<T, RenderError>;

/// Result type alias for style loading
pub type StyleResult<T> = Result<T, StyleError>;
