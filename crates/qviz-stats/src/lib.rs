//! qviz-stats - Fock-basis statistics for photonic state visualization
//!
//! This crate turns reduced density matrices into the per-mode quantities
//! that the bar-chart builder in `qviz-core` consumes:
//!
//! - **Occupation probabilities**: the real diagonal of a reduced density matrix
//! - **Mean photon number**: `Σ n·pₙ` over the truncated Fock basis
//! - **Ket labels**: `|0>`, `|1>`, ... for category axes
//!
//! All quantities are keyed by mode number, never by position in a request,
//! so callers can hand them straight to the chart builder.

pub mod error;
pub mod fock;

pub use error::*;
pub use fock::*;
