// src/sim/experiment.rs
/*!
Drivers that thread an owned [`Lattice`] through the update rule and feed the
observables into the estimators.

- [`Simulation`]: one lattice plus its generation counter. No shared state, so
  independent simulations can live on different threads.
- [`run_equilibrium_trial`] / [`run_equilibrium_experiment`]: population series until
  stabilization, over many independent random seeds (trials run on the rayon pool).
- [`run_glider_trajectory`]: center-of-mass trajectory and drift velocity of a glider.

Budgets are checked once per generation boundary: a run with budget `k` observes
generations `0..k` and performs at most `k - 1` steps.
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::equilibrium::{EquilibriumDetector, EquilibriumRecord, EquilibriumSummary};
use crate::analysis::velocity::estimate_velocity;
use crate::config::ExperimentConfig;
use crate::dynamics::update::{step_with, StepMethod};
use crate::error::{LifeError, Result};
use crate::observables::series::{PopulationSeries, Trajectory};
use crate::observables::tracker::{total_live, ObservableTracker};
use crate::sim::sink::LatticeSink;
use crate::space::initial::{generate, generate_with_rng, InitialCondition};
use crate::space::lattice::Lattice;

// ============================================================================
// ------------------------------- Simulation ---------------------------------
// ============================================================================

#[derive(Debug, Clone)]
pub struct Simulation {
    lattice: Lattice,
    generation: usize,
    method: StepMethod,
}

impl Simulation {
    pub fn new(lattice: Lattice, method: StepMethod) -> Self {
        Self { lattice, generation: 0, method }
    }

    /// Seed from `mode` with thread-local randomness.
    pub fn from_condition(mode: InitialCondition, n: usize, method: StepMethod) -> Result<Self> {
        Ok(Self::new(generate(mode, n)?, method))
    }

    /// Replace the current lattice with its next generation.
    #[inline]
    pub fn advance(&mut self) {
        self.lattice = step_with(&self.lattice, self.method);
        self.generation += 1;
    }

    /// Replace the lattice wholesale and restart the generation count.
    pub fn reseed(&mut self, lattice: Lattice) {
        self.lattice = lattice;
        self.generation = 0;
    }

    #[inline] pub fn lattice(&self) -> &Lattice { &self.lattice }

    #[inline] pub fn generation(&self) -> usize { self.generation }

    #[inline] pub fn method(&self) -> StepMethod { self.method }

    pub fn into_lattice(self) -> Lattice { self.lattice }
}

/// Observe `sweeps` generations of `sim` (the current one first), handing each to
/// `sink` and to a fresh [`ObservableTracker`].
pub fn observe_run<S: LatticeSink + ?Sized>(
    sim: &mut Simulation,
    sweeps: usize,
    sink: &mut S,
) -> ObservableTracker {
    let mut tracker = ObservableTracker::new();
    for k in 0..sweeps {
        sink.record(sim.generation(), sim.lattice());
        tracker.observe(sim.lattice());
        if k + 1 < sweeps {
            sim.advance();
        }
    }
    tracker
}

// ============================================================================
// ------------------------------ Equilibrium ---------------------------------
// ============================================================================

/// One independent run: seed from `mode` via `rng`, step until the population has
/// been constant for four generations or `max_sweeps` generations were observed.
pub fn run_equilibrium_trial<R: Rng + ?Sized>(
    mode: InitialCondition,
    size: usize,
    max_sweeps: usize,
    method: StepMethod,
    rng: &mut R,
) -> Result<EquilibriumRecord> {
    let mut detector = EquilibriumDetector::new(max_sweeps)?;
    let mut sim = Simulation::new(generate_with_rng(mode, size, rng)?, method);

    loop {
        detector.push(total_live(sim.lattice()));
        if detector.is_done() {
            break;
        }
        sim.advance();
    }
    Ok(detector.record())
}

/// Run `cfg.trials` independent trials in parallel and aggregate their outcomes.
///
/// With `cfg.seed = Some(s)`, trial `t` is seeded with `s + t`, so the summary does
/// not depend on how rayon schedules the trials.
pub fn run_equilibrium_experiment(cfg: &ExperimentConfig) -> Result<EquilibriumSummary> {
    cfg.validate()?;
    log::info!(
        "equilibrium experiment: {} trials on {}x{} ({}), budget {} generations",
        cfg.trials, cfg.size, cfg.size, cfg.initial, cfg.max_sweeps
    );

    let records = (0..cfg.trials)
        .into_par_iter()
        .map(|t| match cfg.seed {
            Some(seed) => {
                let mut rng_local = StdRng::seed_from_u64(seed.wrapping_add(t as u64));
                run_equilibrium_trial(cfg.initial, cfg.size, cfg.max_sweeps, cfg.step_method, &mut rng_local)
            }
            None => {
                let mut rng_local = rand::rng();
                run_equilibrium_trial(cfg.initial, cfg.size, cfg.max_sweeps, cfg.step_method, &mut rng_local)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = EquilibriumSummary::from_records(records, cfg.bin_width)?;
    if summary.stabilized() == 0 {
        log::warn!("no trial stabilized within {} generations", cfg.max_sweeps);
    }
    log::info!(
        "equilibrium experiment done: {} stabilized, {} non-stabilizing, mean generation {:?}",
        summary.stabilized(),
        summary.non_stabilizing,
        summary.mean_generation
    );
    Ok(summary)
}

// ============================================================================
// -------------------------------- Glider ------------------------------------
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GliderReport {
    pub size: usize,
    pub generations: usize,
    pub population: PopulationSeries,
    pub trajectory: Trajectory,
    /// Generations with an available center of mass.
    pub valid_samples: usize,
    /// Mean `(row, col)` drift in cells per generation.
    pub velocity: (f64, f64),
}

/// Track a glider on an `size × size` torus for `sweeps` generations.
pub fn run_glider_trajectory<S: LatticeSink + ?Sized>(
    size: usize,
    sweeps: usize,
    method: StepMethod,
    sink: &mut S,
) -> Result<GliderReport> {
    if sweeps == 0 {
        return Err(LifeError::invalid("sweep budget must be positive"));
    }
    let mut sim = Simulation::from_condition(InitialCondition::Glider, size, method)?;
    let (population, trajectory) = observe_run(&mut sim, sweeps, sink).into_parts();

    let velocity = estimate_velocity(trajectory.as_slice());
    let valid_samples = trajectory.iter().filter(|p| p.is_some()).count();
    log::info!(
        "glider on {size}x{size}: {valid_samples}/{sweeps} valid samples, velocity ({:.4}, {:.4})",
        velocity.0,
        velocity.1
    );

    Ok(GliderReport { size, generations: sweeps, population, trajectory, valid_samples, velocity })
}

/// [`run_glider_trajectory`] with size, budget and step method from `cfg`.
pub fn run_glider_experiment<S: LatticeSink + ?Sized>(
    cfg: &ExperimentConfig,
    sink: &mut S,
) -> Result<GliderReport> {
    InitialCondition::Glider.validate_size(cfg.size)?;
    run_glider_trajectory(cfg.size, cfg.max_sweeps, cfg.step_method, sink)
}
