/*
    Seed a `Lattice` from a named initial condition.

    Modes
    -----
    - `random`: every cell independently alive iff `u >= 0.5`, `u ~ Uniform[0, 1)`.
    - `glider`: a single 5-cell glider anchored at `(n/2, n/2)`, heading `(+1, +1)`.

    Parallelism
    -----------
    - `generate` fills the random lattice in a `par_iter_mut()` loop where every
      element creates its own thread-local RNG via `rand::rng()`; no shared state.
    - `generate_with_rng` draws serially from a caller-owned RNG, so a seeded
      `StdRng` reproduces the same lattice on every run.
*/

use std::fmt;
use std::str::FromStr;

use rand::{rng, Rng};
use rand_distr::{Distribution, Uniform};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::space::lattice::{Lattice, ALIVE, DEAD};
use crate::space::space_trait::Space;

/// Alive iff a `Uniform[0, 1)` draw lands at or above this threshold.
pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.5;

/// Glider cells as `(d_row, d_col)` from the anchor `(n/2, n/2)`.
pub const GLIDER_OFFSETS: [(isize, isize); 5] = [(0, 0), (1, 0), (-1, 0), (1, -1), (0, -2)];

/// Smallest side length that holds the glider without it wrapping onto itself.
pub const GLIDER_MIN_SIZE: usize = 5;

// ============================================================================
// ------------------------------- Mode enum ----------------------------------
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialCondition {
    #[default]
    Random,
    Glider,
}

impl InitialCondition {
    pub fn name(self) -> &'static str {
        match self {
            InitialCondition::Random => "random",
            InitialCondition::Glider => "glider",
        }
    }

    /// Minimum lattice side this mode accepts.
    pub fn min_size(self) -> usize {
        match self {
            InitialCondition::Random => 1,
            InitialCondition::Glider => GLIDER_MIN_SIZE,
        }
    }

    /// Check `n` against this mode's size requirement.
    pub fn validate_size(self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(LifeError::invalid("lattice size must be positive"));
        }
        if n < self.min_size() {
            return Err(LifeError::invalid(format!(
                "{} pattern needs a lattice of at least {}x{}, got {n}x{n}",
                self.name(),
                self.min_size(),
                self.min_size(),
            )));
        }
        Ok(())
    }
}

impl fmt::Display for InitialCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitialCondition {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(InitialCondition::Random),
            "glider" => Ok(InitialCondition::Glider),
            other => Err(LifeError::invalid(format!(
                "unknown initial condition '{other}' (expected 'random' or 'glider')"
            ))),
        }
    }
}

// ============================================================================
// ------------------------------- Generators ---------------------------------
// ============================================================================

/// Build an `n × n` lattice for `mode`, using thread-local randomness.
pub fn generate(mode: InitialCondition, n: usize) -> Result<Lattice> {
    mode.validate_size(n)?;
    let mut lattice = Lattice::new(n)?;
    match mode {
        InitialCondition::Random => fill_random_parallel(&mut lattice)?,
        InitialCondition::Glider => place_glider(&mut lattice),
    }
    Ok(lattice)
}

/// Build an `n × n` lattice for `mode`, drawing every random bit from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    mode: InitialCondition,
    n: usize,
    rng: &mut R,
) -> Result<Lattice> {
    mode.validate_size(n)?;
    let mut lattice = Lattice::new(n)?;
    match mode {
        InitialCondition::Random => {
            let dist = unit_uniform()?;
            for cell in lattice.data_mut().iter_mut() {
                *cell = alive_from_draw(dist.sample(rng));
            }
        }
        InitialCondition::Glider => place_glider(&mut lattice),
    }
    Ok(lattice)
}

/// String-keyed entry point for collaborators that carry the mode as text.
pub fn create_lattice(mode: &str, n: usize) -> Result<Lattice> {
    generate(mode.parse()?, n)
}

// ============================================================================
// ------------------------------ Fill helpers --------------------------------
// ============================================================================

#[inline]
fn unit_uniform() -> Result<Uniform<f64>> {
    Uniform::new(0.0, 1.0).map_err(|e| LifeError::invalid(format!("uniform bounds: {e}")))
}

#[inline(always)]
fn alive_from_draw(u: f64) -> u8 {
    if u >= RANDOM_ALIVE_THRESHOLD { ALIVE } else { DEAD }
}

fn fill_random_parallel(lattice: &mut Lattice) -> Result<()> {
    let dist = unit_uniform()?;
    lattice.data_mut().par_iter_mut().for_each(|x| {
        let mut rng_local = rng();
        *x = alive_from_draw(dist.sample(&mut rng_local));
    });
    Ok(())
}

fn place_glider(lattice: &mut Lattice) {
    let c = (lattice.side() / 2) as isize;
    for &(di, dj) in &GLIDER_OFFSETS {
        lattice.set(c + di, c + dj, ALIVE);
    }
}
