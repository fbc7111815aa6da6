// src/space/lattice.rs
/*!
A **periodic square lattice** of binary cells for Game of Life simulations.

- **Toroidal coordinate access** with `isize` indices: every index wraps, nothing panics.
- **Parallel fills and downscaling** using `rayon`.
- **Snapshot helpers** for display sinks: `rescale`, `Display`, `live_cells`.

# Layout

- `Lattice { n, data }`:
  - `n`: side length (total sites = `n^2`),
  - `data`: row-major `Vec<u8>`, `coord_to_index(i, j) = i * n + j`.
- Cell values are `0` (dead) or `1` (alive).

# Invariants
- `n > 0` (enforced by [`Lattice::new`]).
- `data.len() == n * n`.
- Every element of `data` is `0` or `1`.
*/

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{LifeError, Result};
use crate::space::space_trait::Space;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;


// ======================================================================================
// ------------------------------------ Lattice -----------------------------------------
// ======================================================================================

/// An `n × n` toroidal lattice of binary cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lattice {
    /// Side length.
    n: usize,
    /// Row-major storage for all sites (length = `n^2`).
    data: Vec<u8>,
}

impl Lattice {
    /// Build an all-dead `n × n` lattice.
    ///
    /// Fails with [`LifeError::InvalidConfig`] if `n == 0`.
    #[inline]
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(LifeError::invalid("lattice size must be positive"));
        }
        Ok(Self { n, data: vec![DEAD; n * n] })
    }

    /// Build a lattice whose only live cells are `cells` (wrapped onto the torus).
    pub fn from_live_cells(n: usize, cells: &[(isize, isize)]) -> Result<Self> {
        let mut lattice = Self::new(n)?;
        for &(i, j) in cells {
            lattice.set(i, j, ALIVE);
        }
        Ok(lattice)
    }

    /// Wrap already-computed row-major data. Caller guarantees `data.len() == n * n`
    /// and that every value is `0` or `1`.
    #[inline]
    pub(crate) fn from_raw(n: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), n * n, "raw data length {} != n^2 for n={}", data.len(), n);
        debug_assert!(data.iter().all(|&c| c <= ALIVE));
        Self { n, data }
    }

    /// Mutable row-major storage for crate-internal fillers.
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Row `i` (already in range) as a slice of length `n`.
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        let start = i * self.n;
        &self.data[start..start + self.n]
    }

    /// Coordinates `(row, col)` of every live cell, in row-major order.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let n = self.n;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == ALIVE)
            .map(|(k, _)| (k / n, k % n))
            .collect()
    }

    // --- Private helpers -----------------------------------------------------

    /// **Wrap** a single coordinate into `[0, n-1]` (Euclidean modulo).
    #[inline(always)]
    fn wrap(&self, c: isize) -> usize {
        c.rem_euclid(self.n as isize) as usize
    }

    #[inline(always)]
    fn coord_to_index(&self, i: isize, j: isize) -> usize {
        self.wrap(i) * self.n + self.wrap(j)
    }
}


// ======================================================================================
// -------------------------- Space impl (core ops) -------------------------------------
// ======================================================================================

impl Space for Lattice {
    #[inline] fn data(&self) -> &[u8] { &self.data }

    #[inline] fn side(&self) -> usize { self.n }

    #[inline] fn linear_size(&self) -> usize { self.data.len() }

    #[inline]
    fn get(&self, i: isize, j: isize) -> u8 {
        self.data[self.coord_to_index(i, j)]
    }

    #[inline]
    fn set(&mut self, i: isize, j: isize, val: u8) {
        let k = self.coord_to_index(i, j);
        self.data[k] = (val != DEAD) as u8;
    }

    #[inline]
    fn set_all(&mut self, val: u8) {
        let v = (val != DEAD) as u8;
        self.data.par_iter_mut().for_each(|x| *x = v);
    }
}


// ======================================================================================
// ------------------------------ Downscale & Display -----------------------------------
// ======================================================================================

impl Lattice {
    /**
    Create a **downsampled** copy with side length `n_new`, for display sinks.

    - If `n_new >= n` (or `n_new == 0`), this returns a **clone**.
    - Otherwise each new coordinate maps to `floor(i_new * n / n_new)` along each axis.

    This is a point-sample, not an average, so cells stay binary.
    */
    pub fn rescale(&self, n_new: usize) -> Self {
        if n_new == 0 || n_new >= self.n {
            return self.clone();
        }

        let scale = self.n as f64 / n_new as f64;
        let mut data = vec![DEAD; n_new * n_new];

        data.par_chunks_mut(n_new)
            .enumerate()
            .for_each(|(i_new, row)| {
                let i_old = ((i_new as f64 * scale).floor() as usize).min(self.n - 1);
                let src = self.row(i_old);
                for (j_new, slot) in row.iter_mut().enumerate() {
                    let j_old = ((j_new as f64 * scale).floor() as usize).min(self.n - 1);
                    *slot = src[j_old];
                }
            });

        Self::from_raw(n_new, data)
    }
}

/// One text line per row: `#` alive, `.` dead.
impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            let line: String = self
                .row(i)
                .iter()
                .map(|&c| if c == ALIVE { '#' } else { '.' })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
