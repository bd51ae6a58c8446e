// Run configuration, read from YAML:
//
// length: 30
// n_steps: 5000
// temperature: 300.0
// interaction: [-10.4e-21, -3.47e-21]
// seed: 42
// policy: retry_until_valid
// max_attempts: 500

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::energy::Fill;
use crate::error::{Result, SimulationError};
use crate::polymer::Site;
use crate::sampling::{MetropolisParams, ProposalPolicy, BOLTZMANN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    #[default]
    Metropolis,
    RandomWalk,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    EveryProposal,
    RetryUntilValid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub length: usize,
    /// Signed so that a negative budget is reported instead of failing to parse
    pub n_steps: i64,
    pub temperature: f64,
    #[serde(default = "default_boltzmann")]
    pub boltzmann: f64,
    pub interaction: Fill,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub origin: [i32; 2],
    #[serde(default)]
    pub mode: SamplingMode,
    #[serde(default)]
    pub policy: PolicyKind,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_boltzmann() -> f64 {
    BOLTZMANN
}

fn default_max_attempts() -> usize {
    1000
}

impl SimulationConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: SimulationConfig = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SimulationConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length < 1 {
            return Err(SimulationError::Configuration(
                "length must be at least 1".to_string(),
            ));
        }
        // Pivot moves can carry a monomer up to about `length` sites from
        // where it started, along either axis.
        let reach = 2u64.saturating_mul(self.length as u64);
        if self
            .origin
            .iter()
            .any(|c| u64::from(c.unsigned_abs()).saturating_add(reach) > i32::MAX as u64)
        {
            return Err(SimulationError::Configuration(format!(
                "origin [{}, {}] is too close to the lattice edge for a chain of {} monomers",
                self.origin[0], self.origin[1], self.length
            )));
        }
        if self.n_steps < 0 {
            return Err(SimulationError::Configuration(format!(
                "n_steps must not be negative, got {}",
                self.n_steps
            )));
        }
        if self.max_attempts < 1 {
            return Err(SimulationError::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        self.interaction.validate()?;
        self.metropolis_params()?.validate()
    }

    pub fn origin(&self) -> Site {
        Site::new(self.origin[0], self.origin[1])
    }

    pub fn n_steps(&self) -> Result<usize> {
        usize::try_from(self.n_steps).map_err(|_| {
            SimulationError::Configuration(format!("n_steps {} is out of range", self.n_steps))
        })
    }

    pub fn metropolis_params(&self) -> Result<MetropolisParams> {
        let policy = match self.policy {
            PolicyKind::EveryProposal => ProposalPolicy::EveryProposalCounts,
            PolicyKind::RetryUntilValid => ProposalPolicy::RetryUntilValid {
                max_attempts: self.max_attempts,
            },
        };
        Ok(MetropolisParams {
            n_steps: self.n_steps()?,
            temperature: self.temperature,
            boltzmann: self.boltzmann,
            policy,
        })
    }
}
