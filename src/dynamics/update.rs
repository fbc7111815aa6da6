// src/dynamics/update.rs
/*!
One **Game of Life generation** on a periodic lattice.

Both formulations read only from the frozen input snapshot and write into a fresh
buffer, so no cell can observe a neighbor's next-generation value:

- [`StepMethod::Direct`]: per-cell explicit wraparound. Each output row borrows the
  three source rows above, at and below it (wrapped) and sums the Moore window.
- [`StepMethod::ShiftedSum`]: whole-grid formulation. The neighbor-count grid is
  the sum of the eight lattice copies rolled by each Moore offset; the rule is then
  applied elementwise.

Rows of the output are independent and are filled in parallel with `rayon`.
*/

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::space::lattice::{Lattice, ALIVE, DEAD};
use crate::space::space_trait::{Space, MOORE_OFFSETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMethod {
    /// Explicit per-cell wraparound indexing.
    #[default]
    Direct,
    /// Sum of eight rolled copies, then elementwise rule.
    ShiftedSum,
}

impl fmt::Display for StepMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepMethod::Direct => "direct",
            StepMethod::ShiftedSum => "shifted_sum",
        })
    }
}

impl FromStr for StepMethod {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(StepMethod::Direct),
            "shifted_sum" | "shifted-sum" => Ok(StepMethod::ShiftedSum),
            other => Err(LifeError::invalid(format!("unknown step method '{other}'"))),
        }
    }
}

/// Next state of one cell given its current state and live-neighbor count.
#[inline(always)]
pub const fn next_state(current: u8, neighbors: u8) -> u8 {
    match (current, neighbors) {
        (DEAD, 3) => ALIVE,                 // birth
        (ALIVE, n) if n < 2 || n > 3 => DEAD, // under/over-population
        (state, _) => state,
    }
}

/// Advance `lattice` by one generation with the default [`StepMethod::Direct`].
#[inline]
pub fn step(lattice: &Lattice) -> Lattice {
    step_with(lattice, StepMethod::Direct)
}

/// Advance `lattice` by one generation using `method`. The input is never mutated.
pub fn step_with(lattice: &Lattice, method: StepMethod) -> Lattice {
    match method {
        StepMethod::Direct => step_direct(lattice),
        StepMethod::ShiftedSum => step_shifted_sum(lattice),
    }
}

/// Apply `generations` steps in sequence.
pub fn step_n(lattice: &Lattice, generations: usize, method: StepMethod) -> Lattice {
    let mut current = lattice.clone();
    for _ in 0..generations {
        current = step_with(&current, method);
    }
    current
}

// ============================================================================
// ------------------------------ Direct step ---------------------------------
// ============================================================================

fn step_direct(lattice: &Lattice) -> Lattice {
    let n = lattice.side();
    let mut next = vec![DEAD; n * n];

    next.par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, out)| {
            let up = lattice.row((i + n - 1) % n);
            let mid = lattice.row(i);
            let down = lattice.row((i + 1) % n);

            for (j, slot) in out.iter_mut().enumerate() {
                let l = (j + n - 1) % n;
                let r = (j + 1) % n;
                let count = up[l] + up[j] + up[r]
                    + mid[l] + mid[r]
                    + down[l] + down[j] + down[r];
                *slot = next_state(mid[j], count);
            }
        });

    Lattice::from_raw(n, next)
}

// ============================================================================
// ---------------------------- Shifted-sum step ------------------------------
// ============================================================================

/// Neighbor-count grid: `counts[i][j] = Σ_offsets cur[(i+di) mod n][(j+dj) mod n]`.
pub fn neighbor_counts(lattice: &Lattice) -> Vec<u8> {
    let n = lattice.side();
    let mut counts = vec![0u8; n * n];

    counts
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(i, out)| {
            for &(di, dj) in &MOORE_OFFSETS {
                let src = lattice.row((i as isize + di).rem_euclid(n as isize) as usize);
                let shift = dj.rem_euclid(n as isize) as usize;
                // rolled row: out[j] += src[(j + dj) mod n]
                for (j, c) in out.iter_mut().enumerate() {
                    *c += src[(j + shift) % n];
                }
            }
        });

    counts
}

fn step_shifted_sum(lattice: &Lattice) -> Lattice {
    let n = lattice.side();
    let counts = neighbor_counts(lattice);

    let next: Vec<u8> = lattice
        .data()
        .par_iter()
        .zip(counts.par_iter())
        .map(|(&cell, &count)| next_state(cell, count))
        .collect();

    Lattice::from_raw(n, next)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table() {
        assert_eq!(next_state(DEAD, 3), ALIVE);
        assert_eq!(next_state(DEAD, 2), DEAD);
        assert_eq!(next_state(DEAD, 4), DEAD);
        assert_eq!(next_state(ALIVE, 1), DEAD);
        assert_eq!(next_state(ALIVE, 2), ALIVE);
        assert_eq!(next_state(ALIVE, 3), ALIVE);
        assert_eq!(next_state(ALIVE, 4), DEAD);
    }

    #[test]
    fn neighbor_counts_match_space_trait() {
        let lattice = Lattice::from_live_cells(6, &[(0, 0), (0, 5), (5, 5), (2, 3), (3, 3), (3, 2)]).unwrap();
        let counts = neighbor_counts(&lattice);
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(counts[i * 6 + j], lattice.count_live_neighbors(i as isize, j as isize), "({i},{j})");
            }
        }
    }

    #[test]
    fn method_names_roundtrip() {
        for m in [StepMethod::Direct, StepMethod::ShiftedSum] {
            assert_eq!(m.to_string().parse::<StepMethod>().unwrap(), m);
        }
        assert!("roll".parse::<StepMethod>().is_err());
    }
}
