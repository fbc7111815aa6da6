/*!
Conway's Game of Life on an `n × n` torus, with the observables used to study it:
total population, equilibration time, and the center-of-mass drift of a glider.

```
use life_in_parallel::{center_of_mass, create_lattice, estimate_velocity, step};

let mut lattice = create_lattice("glider", 20).unwrap();
let mut trajectory = Vec::new();
for _ in 0..40 {
    trajectory.push(center_of_mass(&lattice));
    lattice = step(&lattice);
}
let (v_row, v_col) = estimate_velocity(&trajectory);
assert!(v_row > 0.2 && v_col > 0.2);
```

Modules, leaf first:

- [`space`]: the [`Lattice`] with wrapped indexing, and its initial conditions.
- [`dynamics`]: the update rule, computed from a frozen snapshot.
- [`observables`]: population and bounded center of mass per generation.
- [`analysis`]: equilibrium detection and velocity estimation.
- [`sim`]: drivers for single runs and parallel multi-trial experiments.
*/

pub mod analysis;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod observables;
pub mod sim;
pub mod space;

pub use analysis::equilibrium::{detect_equilibrium, EquilibriumRecord, EquilibriumSummary, Histogram};
pub use analysis::velocity::estimate_velocity;
pub use config::ExperimentConfig;
pub use dynamics::update::{step, step_with, StepMethod};
pub use error::{LifeError, Result};
pub use observables::tracker::{center_of_mass, total_live, ObservableTracker};
pub use space::initial::{create_lattice, generate, generate_with_rng, InitialCondition};
pub use space::lattice::Lattice;
pub use space::space_trait::Space;
