//! Chart input fixtures

use std::collections::BTreeMap;

/// Ket labels for a basis truncated at `cutoff`
pub fn labels(cutoff: usize) -> Vec<String> {
    qviz_stats::fock_labels(cutoff)
}

/// The two-mode example: vacuum-heavy mode 0, near-vacuum mode 1
pub fn two_mode_example() -> (BTreeMap<usize, Vec<f64>>, BTreeMap<usize, f64>) {
    let dists = BTreeMap::from([(0, vec![0.6, 0.3, 0.1]), (1, vec![0.9, 0.08, 0.02])]);
    let means = BTreeMap::from([(0, 0.5), (1, 0.12)]);
    (dists, means)
}

/// Deterministic distributions for modes `0..modes` with the given cutoff
///
/// Mode `m` puts weight `1/(m + 1)` on `|0>` and spreads the rest evenly.
pub fn synthetic(modes: usize, cutoff: usize) -> (BTreeMap<usize, Vec<f64>>, BTreeMap<usize, f64>) {
    let mut dists = BTreeMap::new();
    let mut means = BTreeMap::new();
    for m in 0..modes {
        let head = 1.0 / (m as f64 + 1.0);
        let tail = if cutoff > 1 {
            (1.0 - head) / (cutoff - 1) as f64
        } else {
            0.0
        };
        let probs: Vec<f64> = (0..cutoff)
            .map(|n| if n == 0 { head } else { tail })
            .collect();
        means.insert(m, qviz_stats::mean_photon_number(&probs));
        dists.insert(m, probs);
    }
    (dists, means)
}
