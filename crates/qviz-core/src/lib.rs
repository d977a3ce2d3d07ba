//! qviz-core - Chart specifications for photonic quantum states
//!
//! This crate turns numerical simulation output into renderer-agnostic chart
//! specifications in the Plot.ly JSON schema. Nothing here draws pixels; a
//! [`ChartSpec`] is plain data that any Plot.ly-compatible renderer can show.
//!
//! # Key Components
//!
//! - **ChartSpec**: Traces, layout, axis definitions and annotations
//! - **Surface charts**: Wigner function `W(x, p)` as a 3D surface
//! - **Fock charts**: Per-mode occupation probabilities as juxtaposed bar panels
//! - **Display**: Traits connecting quantum states, builders and renderers
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use qviz_core::{build_fock_chart, ChartSpec};
//!
//! let dists: BTreeMap<usize, Vec<f64>> =
//!     BTreeMap::from([(0, vec![0.6, 0.3, 0.1]), (1, vec![0.9, 0.08, 0.02])]);
//! let means: BTreeMap<usize, f64> = BTreeMap::from([(0, 0.5), (1, 0.12)]);
//! let labels = qviz_stats::fock_labels(3);
//!
//! let chart = build_fock_chart(&ChartSpec::bar_chart_default(), &[1, 0], &dists, &means, &labels)?;
//! assert_eq!(chart.layout.annotations[1].text, "Mean: 0.120");
//! # Ok::<(), qviz_core::ChartError>(())
//! ```

pub mod axis;
pub mod chart;
pub mod colorscale;
pub mod display;
pub mod error;
pub mod export;
pub mod fock;
pub mod style;
pub mod surface;
pub mod template;

pub use axis::*;
pub use chart::*;
pub use colorscale::*;
pub use display::*;
pub use error::*;
pub use export::ExportFormat;
pub use fock::*;
pub use style::*;
pub use surface::*;
pub use template::REMOVED_MODE_BAR_BUTTONS;
