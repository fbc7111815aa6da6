// src/analysis/equilibrium.rs
/*!
**Equilibration time** from a population series.

A run is stabilized at the first generation of the earliest stretch of
[`STABLE_RUN`] identical consecutive population counts: the earliest `i >= 3` with
`s[i] == s[i-1] == s[i-2] == s[i-3]` reports `i - 3`.

Only the first `max_sweeps` entries count. Running out of budget is the ordinary
[`EquilibriumRecord::NonStabilizing`] outcome, which aggregate statistics tally
separately from the histogram of stabilization generations.
*/

use serde::Serialize;

use crate::analysis::stats::mean;
use crate::error::{LifeError, Result};

/// Consecutive equal readings required to call the population stable.
pub const STABLE_RUN: usize = 4;

// ============================================================================
// ------------------------------- Records ------------------------------------
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EquilibriumRecord {
    /// First generation of the first constant run.
    Stabilized { generation: usize },
    /// No constant run within the sweep budget.
    NonStabilizing,
}

impl EquilibriumRecord {
    #[inline]
    pub fn generation(self) -> Option<usize> {
        match self {
            EquilibriumRecord::Stabilized { generation } => Some(generation),
            EquilibriumRecord::NonStabilizing => None,
        }
    }
}

impl From<Option<usize>> for EquilibriumRecord {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(generation) => EquilibriumRecord::Stabilized { generation },
            None => EquilibriumRecord::NonStabilizing,
        }
    }
}

// ============================================================================
// ------------------------- Incremental detector -----------------------------
// ============================================================================

/// Streaming detector fed one population value per generation.
#[derive(Debug, Clone)]
pub struct EquilibriumDetector {
    max_sweeps: usize,
    seen: usize,
    last: Option<usize>,
    run_len: usize,
    stabilized_at: Option<usize>,
}

impl EquilibriumDetector {
    /// Fails with [`LifeError::InvalidConfig`] if `max_sweeps == 0`.
    pub fn new(max_sweeps: usize) -> Result<Self> {
        if max_sweeps == 0 {
            return Err(LifeError::invalid("sweep budget must be positive"));
        }
        Ok(Self { max_sweeps, seen: 0, last: None, run_len: 0, stabilized_at: None })
    }

    /// Feed the value for the next generation. Returns the stabilization generation
    /// once it is known; values past the budget or after stabilization are ignored.
    pub fn push(&mut self, value: usize) -> Option<usize> {
        if self.stabilized_at.is_some() || self.exhausted() {
            return self.stabilized_at;
        }
        let generation = self.seen;
        self.seen += 1;

        self.run_len = match self.last {
            Some(prev) if prev == value => self.run_len + 1,
            _ => 1,
        };
        self.last = Some(value);

        if self.run_len >= STABLE_RUN {
            let start = generation + 1 - STABLE_RUN;
            log::debug!("population {value} constant since generation {start}");
            self.stabilized_at = Some(start);
        }
        self.stabilized_at
    }

    /// Values consumed so far.
    #[inline] pub fn generations_seen(&self) -> usize { self.seen }

    /// True once the budget is spent without stabilization.
    #[inline]
    pub fn exhausted(&self) -> bool {
        self.stabilized_at.is_none() && self.seen >= self.max_sweeps
    }

    /// True when no further input can change the outcome.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.stabilized_at.is_some() || self.seen >= self.max_sweeps
    }

    #[inline]
    pub fn record(&self) -> EquilibriumRecord {
        self.stabilized_at.into()
    }
}

/// Batch form of [`EquilibriumDetector`] over an already collected series.
pub fn detect_equilibrium(series: &[usize], max_sweeps: usize) -> Result<Option<usize>> {
    let mut detector = EquilibriumDetector::new(max_sweeps)?;
    for &value in series {
        if detector.is_done() {
            break;
        }
        detector.push(value);
    }
    Ok(detector.record().generation())
}

// ============================================================================
// ------------------------------ Aggregation ---------------------------------
// ============================================================================

/// Fixed-width histogram of stabilization generations.
///
/// `bins[k]` is the inclusive lower edge of bin `k`; bin `k` covers
/// `[bins[k], bins[k] + bin_width)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Histogram {
    pub bin_width: usize,
    pub bins: Vec<usize>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` starting at 0. Empty input yields empty bins.
    pub fn from_values(values: &[usize], bin_width: usize) -> Result<Self> {
        if bin_width == 0 {
            return Err(LifeError::invalid("histogram bin width must be positive"));
        }
        let num_bins = values.iter().max().map_or(0, |&max| max / bin_width + 1);
        let mut counts = vec![0usize; num_bins];
        for &v in values {
            counts[v / bin_width] += 1;
        }
        let bins = (0..num_bins).map(|k| k * bin_width).collect();
        Ok(Self { bin_width, bins, counts })
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Outcome distribution over many independent trials.
#[derive(Debug, Clone, Serialize)]
pub struct EquilibriumSummary {
    pub records: Vec<EquilibriumRecord>,
    pub histogram: Histogram,
    pub non_stabilizing: usize,
    pub mean_generation: Option<f64>,
}

impl EquilibriumSummary {
    pub fn from_records(records: Vec<EquilibriumRecord>, bin_width: usize) -> Result<Self> {
        let stabilized: Vec<usize> = records.iter().filter_map(|r| r.generation()).collect();
        let histogram = Histogram::from_values(&stabilized, bin_width)?;
        let non_stabilizing = records.len() - stabilized.len();
        let mean_generation = mean(&stabilized);
        Ok(Self { records, histogram, non_stabilizing, mean_generation })
    }

    #[inline]
    pub fn trials(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn stabilized(&self) -> usize {
        self.records.len() - self.non_stabilizing
    }
}
