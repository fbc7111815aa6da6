// src/config.rs
/*!
Experiment configuration, deserialized from JSON.

```json
{ "size": 50, "max_sweeps": 1000, "trials": 100, "bin_width": 10,
  "seed": 7, "initial": "random", "step_method": "direct" }
```

Every field is optional; missing fields take the [`Default`] values.
*/

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dynamics::update::StepMethod;
use crate::error::{LifeError, Result};
use crate::space::initial::InitialCondition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Lattice side length `n`.
    pub size: usize,
    /// Generations observed per run (the sweep budget).
    pub max_sweeps: usize,
    /// Independent trials in an equilibrium experiment.
    pub trials: usize,
    /// Histogram bin width, in generations.
    pub bin_width: usize,
    /// Base seed; trial `t` uses `seed + t`. `None` draws from thread-local entropy.
    pub seed: Option<u64>,
    pub initial: InitialCondition,
    pub step_method: StepMethod,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            size: 50,
            max_sweeps: 1000,
            trials: 100,
            bin_width: 10,
            seed: None,
            initial: InitialCondition::Random,
            step_method: StepMethod::Direct,
        }
    }
}

impl ExperimentConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject zero sizes/budgets and patterns that do not fit the lattice.
    pub fn validate(&self) -> Result<()> {
        self.initial.validate_size(self.size)?;
        if self.max_sweeps == 0 {
            return Err(LifeError::invalid("max_sweeps must be positive"));
        }
        if self.trials == 0 {
            return Err(LifeError::invalid("trials must be positive"));
        }
        if self.bin_width == 0 {
            return Err(LifeError::invalid("bin_width must be positive"));
        }
        Ok(())
    }
}
