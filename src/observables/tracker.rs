// src/observables/tracker.rs
/*!
Per-generation **observables** of a lattice.

- [`total_live`]: live-cell count.
- [`center_of_mass`]: mean `(row, col)` of live cells, **unavailable** (`None`) as soon
  as any live cell sits on row `0`, row `n-1`, column `0` or column `n-1`. On a finite
  torus a translating pattern that reaches the seam has no meaningful mean position.
- [`ObservableTracker`]: accumulates both as [`GenerationSeries`] over a run.

Each call rescans the whole lattice; rows are reduced in parallel.
*/

use rayon::prelude::*;
use serde::Serialize;

use crate::observables::series::{PopulationSeries, Trajectory};
use crate::space::lattice::{Lattice, ALIVE};
use crate::space::space_trait::Space;

/// Live-cell count of `lattice`.
#[inline]
pub fn total_live(lattice: &Lattice) -> usize {
    lattice.total_live()
}

/// Running sums for one row band of the scan.
#[derive(Debug, Clone, Copy, Default)]
struct MassSums {
    count: usize,
    row_sum: usize,
    col_sum: usize,
    on_edge: bool,
}

impl MassSums {
    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            row_sum: self.row_sum + other.row_sum,
            col_sum: self.col_sum + other.col_sum,
            on_edge: self.on_edge || other.on_edge,
        }
    }
}

/// Mean `(row, col)` of live cells, or `None` if a live cell touches the lattice
/// edge or there are no live cells.
pub fn center_of_mass(lattice: &Lattice) -> Option<(f64, f64)> {
    let n = lattice.side();
    let last = n - 1;

    let sums = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut acc = MassSums::default();
            for (j, &c) in lattice.row(i).iter().enumerate() {
                if c != ALIVE {
                    continue;
                }
                if i == 0 || i == last || j == 0 || j == last {
                    acc.on_edge = true;
                }
                acc.count += 1;
                acc.row_sum += i;
                acc.col_sum += j;
            }
            acc
        })
        .reduce(MassSums::default, MassSums::merge);

    if sums.on_edge || sums.count == 0 {
        return None;
    }
    let count = sums.count as f64;
    Some((sums.row_sum as f64 / count, sums.col_sum as f64 / count))
}

/// Collects population and center-of-mass series for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObservableTracker {
    population: PopulationSeries,
    trajectory: Trajectory,
}

impl ObservableTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both observables for the next generation and return the pair.
    pub fn observe(&mut self, lattice: &Lattice) -> (usize, Option<(f64, f64)>) {
        let live = total_live(lattice);
        let com = center_of_mass(lattice);
        self.population.push(live);
        let generation = self.trajectory.push(com);
        if com.is_none() && live > 0 {
            log::trace!("generation {generation}: center of mass unavailable (edge contact)");
        }
        (live, com)
    }

    /// Generations observed so far.
    #[inline]
    pub fn generations(&self) -> usize {
        self.population.len()
    }

    pub fn population(&self) -> &PopulationSeries {
        &self.population
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn into_parts(self) -> (PopulationSeries, Trajectory) {
        (self.population, self.trajectory)
    }
}
