// src/analysis/velocity.rs
/*!
Mean **drift velocity** of a translating pattern from its center-of-mass trajectory.

Procedure, applied to each axis independently:

1. Drop missing samples (edge-touching generations). They are absent, not zero, and
   do not split the series.
2. Take the discrete [`gradient`] of the remaining positions.
3. Find the first index `k` with `g[k] > 0` and `g[k + 1] < 0`. A pattern drifting in
   the positive direction that crosses the toroidal seam shows up as exactly this
   `+ → −` jump, and everything from `k` on is treated as post-wrap.
4. Velocity is the mean of `g[..k]`, or of all of `g` when no reversal is found.

The heuristic assumes a single wrap and a monotonic positive drift per axis. It is
not an unwrapping algorithm; trajectories with several wraps or with backwards drift
are outside what it measures.

Degenerate input (fewer than two samples, or a reversal at `k = 0`) yields `0.0`.
*/

use crate::analysis::stats::{gradient, mean};

/// First index `k` where `g[k] > 0` is immediately followed by `g[k + 1] < 0`.
pub fn first_reversal(g: &[f64]) -> Option<usize> {
    g.windows(2).position(|w| w[0] > 0.0 && w[1] < 0.0)
}

/// Mean velocity along one axis from its (gap-free) position series.
pub fn axis_velocity(positions: &[f64]) -> f64 {
    let g = gradient(positions);
    let end = first_reversal(&g).unwrap_or(g.len());
    mean(&g[..end]).unwrap_or(0.0)
}

/// Mean `(row, col)` velocity in cells per generation.
pub fn estimate_velocity(trajectory: &[Option<(f64, f64)>]) -> (f64, f64) {
    let (rows, cols): (Vec<f64>, Vec<f64>) = trajectory.iter().flatten().copied().unzip();
    let v = (axis_velocity(&rows), axis_velocity(&cols));
    log::debug!(
        "velocity from {} of {} samples: ({:.4}, {:.4})",
        rows.len(),
        trajectory.len(),
        v.0,
        v.1
    );
    v
}
