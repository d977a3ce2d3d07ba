//! Photon-number statistics for single modes
//!
//! Provides the per-mode summaries plotted by the Fock bar chart:
//! - Occupation probabilities from a reduced density matrix
//! - Mean photon number and total captured probability
//! - Ket labels for the truncated basis

use std::collections::BTreeMap;

use ndarray::ArrayView2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Extract occupation probabilities from a reduced density matrix
///
/// The probabilities are the real parts of the diagonal entries. The
/// imaginary parts of a valid density matrix diagonal are zero and are
/// discarded.
pub fn occupation_probabilities(
    mode: usize,
    rho: ArrayView2<'_, Complex64>,
) -> StatsResult<Vec<f64>> {
    let (rows, cols) = rho.dim();
    if rows != cols {
        return Err(StatsError::NotSquare { mode, rows, cols });
    }
    if rows == 0 {
        return Err(StatsError::Empty { mode });
    }

    Ok(rho.diag().iter().map(|c| c.re).collect())
}

/// Mean photon number `Σ n·pₙ` of an occupation distribution
pub fn mean_photon_number(probabilities: &[f64]) -> f64 {
    probabilities
        .iter()
        .enumerate()
        .map(|(n, p)| n as f64 * p)
        .sum()
}

/// Ket labels `|0>`, `|1>`, ... for a basis truncated at `cutoff`
pub fn fock_labels(cutoff: usize) -> Vec<String> {
    (0..cutoff).map(|n| format!("|{}>", n)).collect()
}

/// Summary of one mode's occupation distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FockSummary {
    /// Mode number
    pub mode: usize,
    /// Truncation of the Fock basis
    pub cutoff: usize,
    /// Mean photon number
    pub mean: f64,
    /// Total probability captured below the cutoff
    pub norm: f64,
}

impl FockSummary {
    /// Summarise an occupation distribution
    pub fn from_probabilities(mode: usize, probabilities: &[f64]) -> Self {
        Self {
            mode,
            cutoff: probabilities.len(),
            mean: mean_photon_number(probabilities),
            norm: probabilities.iter().sum(),
        }
    }

    /// Probability mass lost above the cutoff
    pub fn truncation_loss(&self) -> f64 {
        (1.0 - self.norm).max(0.0)
    }
}

/// Occupation probabilities and mean photon numbers keyed by mode number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FockStatistics {
    /// Truncation shared by every mode
    pub cutoff: usize,
    /// Occupation probabilities per mode
    pub probabilities: BTreeMap<usize, Vec<f64>>,
    /// Mean photon number per mode
    pub means: BTreeMap<usize, f64>,
}

impl FockStatistics {
    /// Create an empty collection for a given cutoff
    pub fn new(cutoff: usize) -> Self {
        Self {
            cutoff,
            probabilities: BTreeMap::new(),
            means: BTreeMap::new(),
        }
    }

    /// Build statistics from `(mode, density matrix)` pairs
    pub fn from_density_matrices<'a, I>(cutoff: usize, matrices: I) -> StatsResult<Self>
    where
        I: IntoIterator<Item = (usize, ArrayView2<'a, Complex64>)>,
    {
        let mut stats = Self::new(cutoff);
        for (mode, rho) in matrices {
            stats.insert(mode, rho)?;
        }
        Ok(stats)
    }

    /// Add one mode's reduced density matrix, replacing any earlier entry
    pub fn insert(&mut self, mode: usize, rho: ArrayView2<'_, Complex64>) -> StatsResult<()> {
        let probabilities = occupation_probabilities(mode, rho)?;
        if probabilities.len() != self.cutoff {
            return Err(StatsError::CutoffMismatch {
                mode,
                expected: self.cutoff,
                actual: probabilities.len(),
            });
        }

        self.means.insert(mode, mean_photon_number(&probabilities));
        self.probabilities.insert(mode, probabilities);
        Ok(())
    }

    /// Modes present, in ascending order
    pub fn modes(&self) -> impl Iterator<Item = usize> + '_ {
        self.probabilities.keys().copied()
    }

    /// Ket labels matching the shared cutoff
    pub fn labels(&self) -> Vec<String> {
        fock_labels(self.cutoff)
    }

    /// Summary for a single mode
    pub fn summary(&self, mode: usize) -> Option<FockSummary> {
        self.probabilities
            .get(&mode)
            .map(|probs| FockSummary::from_probabilities(mode, probs))
    }
}
