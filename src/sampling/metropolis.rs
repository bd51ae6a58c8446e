//! Metropolis sampling of lattice polymer conformations with pivot moves.
//!
//! Each step proposes a pivot rotation of the current chain, discards it if
//! the chain is no longer self-avoiding and connected, and otherwise accepts
//! it with the Metropolis probability `min(1, exp(-ΔE / k_B T))`.

use log::{debug, trace, warn};
use rand::Rng;

use super::proposal::propose_pivot;
use super::stats::TraceStatistics;
use super::traits::EnergyCalculator;
use crate::error::{Result, SimulationError};
use crate::polymer::Polymer;

/// Boltzmann constant in J/K.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// What a step does with a proposal that breaks the chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProposalPolicy {
    /// A broken proposal uses up the step; the chain stays where it is.
    #[default]
    EveryProposalCounts,
    /// Broken proposals are redrawn without using up the step, at most
    /// `max_attempts` draws per step.
    RetryUntilValid { max_attempts: usize },
}

/// Parameters for a Metropolis run.
#[derive(Copy, Clone, Debug)]
pub struct MetropolisParams {
    /// Number of steps (proposals) to process
    pub n_steps: usize,
    /// Temperature in Kelvin
    pub temperature: f64,
    /// Boltzmann constant, in the energy unit of the interaction matrix per Kelvin
    pub boltzmann: f64,
    pub policy: ProposalPolicy,
}

impl MetropolisParams {
    /// SI Boltzmann constant and the canonical proposal policy.
    pub fn new(n_steps: usize, temperature: f64) -> Self {
        Self {
            n_steps,
            temperature,
            boltzmann: BOLTZMANN,
            policy: ProposalPolicy::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.temperature.is_finite() && self.temperature > 0.0) {
            return Err(SimulationError::Configuration(format!(
                "temperature must be positive and finite, got {}",
                self.temperature
            )));
        }
        if !(self.boltzmann.is_finite() && self.boltzmann > 0.0) {
            return Err(SimulationError::Configuration(format!(
                "Boltzmann constant must be positive and finite, got {}",
                self.boltzmann
            )));
        }
        let thermal_energy = self.thermal_energy();
        if !(thermal_energy.is_finite() && thermal_energy > 0.0) {
            return Err(SimulationError::Configuration(format!(
                "k_B T = {} * {} is not a positive finite energy",
                self.boltzmann, self.temperature
            )));
        }
        if let ProposalPolicy::RetryUntilValid { max_attempts: 0 } = self.policy {
            return Err(SimulationError::Configuration(
                "retry policy needs at least one attempt per step".to_string(),
            ));
        }
        Ok(())
    }

    /// k_B T
    pub fn thermal_energy(&self) -> f64 {
        self.boltzmann * self.temperature
    }
}

/// The chain between steps.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainState {
    pub polymer: Polymer,
    pub energy: f64,
    /// Steps processed so far
    pub step: usize,
}

/// Everything needed to continue a run exactly where it stopped.
#[derive(Clone, Debug)]
pub struct Checkpoint<R> {
    pub state: ChainState,
    pub rng: R,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Accepted,
    /// Valid proposal turned down by the Metropolis test
    Rejected,
    /// Proposal broke self-avoidance or connectivity
    Invalid,
}

/// Results of a Metropolis run.
#[derive(Clone, Debug)]
pub struct MetropolisResults {
    pub polymer: Polymer,
    /// Energy after every processed step
    pub energies: Vec<f64>,
    pub accepted: usize,
    pub rejected: usize,
    pub invalid: usize,
    pub statistics: TraceStatistics,
}

impl MetropolisResults {
    /// Fraction of valid proposals that were accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        acceptance_ratio(self.accepted, self.rejected)
    }
}

fn acceptance_ratio(accepted: usize, rejected: usize) -> f64 {
    let valid = accepted + rejected;
    if valid == 0 {
        0.0
    } else {
        accepted as f64 / valid as f64
    }
}

/// Metropolis sampler for a single chain.
///
/// The energy model is borrowed for the whole run; the random source is owned
/// so that a run is reproducible from its seed.
pub struct MetropolisSampler<'a, E: EnergyCalculator, R: Rng> {
    model: &'a E,
    params: MetropolisParams,
    rng: R,
    state: ChainState,
    energies: Vec<f64>,
    accepted: usize,
    rejected: usize,
    invalid: usize,
}

impl<'a, E: EnergyCalculator, R: Rng> MetropolisSampler<'a, E, R> {
    /// Start a run from `initial`. All configuration errors are reported here,
    /// before any step is taken.
    pub fn new(initial: Polymer, model: &'a E, params: MetropolisParams, rng: R) -> Result<Self> {
        let state = ChainState {
            energy: 0.0,
            polymer: initial,
            step: 0,
        };
        Self::start(state, model, params, rng)
    }

    /// Continue from a checkpoint. The new trace covers only the remaining
    /// steps.
    pub fn resume(checkpoint: Checkpoint<R>, model: &'a E, params: MetropolisParams) -> Result<Self> {
        if checkpoint.state.step > params.n_steps {
            return Err(SimulationError::Configuration(format!(
                "checkpoint is at step {} but the run only has {} steps",
                checkpoint.state.step, params.n_steps
            )));
        }
        Self::start(checkpoint.state, model, params, checkpoint.rng)
    }

    fn start(mut state: ChainState, model: &'a E, params: MetropolisParams, rng: R) -> Result<Self> {
        params.validate()?;
        let length = state.polymer.len();
        if model.dimension() != length {
            return Err(SimulationError::DimensionMismatch {
                matrix: model.dimension(),
                polymer: length,
            });
        }
        if !state.polymer.is_intact(length) {
            return Err(SimulationError::Configuration(
                "initial polymer is not self-avoiding and connected".to_string(),
            ));
        }
        state.energy = model.energy(&state.polymer);
        debug!(
            "Metropolis sampler: {} monomers, step {}/{}, T = {} K, E = {:e}",
            length, state.step, params.n_steps, params.temperature, state.energy
        );
        Ok(Self {
            model,
            params,
            rng,
            energies: Vec::with_capacity(params.n_steps.saturating_sub(state.step)),
            state,
            accepted: 0,
            rejected: 0,
            invalid: 0,
        })
    }

    pub fn state(&self) -> &ChainState {
        &self.state
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn params(&self) -> &MetropolisParams {
        &self.params
    }

    pub fn is_finished(&self) -> bool {
        self.state.step >= self.params.n_steps
    }

    /// Fraction of valid proposals accepted so far.
    pub fn acceptance_ratio(&self) -> f64 {
        acceptance_ratio(self.accepted, self.rejected)
    }

    pub fn checkpoint(&self) -> Checkpoint<R>
    where
        R: Clone,
    {
        Checkpoint {
            state: self.state.clone(),
            rng: self.rng.clone(),
        }
    }

    /// Process one step. Returns `None` once the step budget is used up.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.is_finished() {
            return None;
        }

        let outcome = match self.valid_proposal() {
            None => {
                self.invalid += 1;
                StepOutcome::Invalid
            }
            Some(candidate) => {
                let energy = self.model.energy(&candidate);
                if self.metropolis_accept(energy - self.state.energy) {
                    self.state.polymer = candidate;
                    self.state.energy = energy;
                    self.accepted += 1;
                    StepOutcome::Accepted
                } else {
                    self.rejected += 1;
                    StepOutcome::Rejected
                }
            }
        };

        self.energies.push(self.state.energy);
        self.state.step += 1;
        trace!("step {}: {:?}, E = {:e}", self.state.step, outcome, self.state.energy);
        Some(outcome)
    }

    /// Run the remaining steps and hand back the final chain and its trace.
    pub fn run(mut self) -> MetropolisResults {
        while self.step().is_some() {}

        let statistics = TraceStatistics::from_trace(&self.energies);
        debug!(
            "Metropolis run finished: {} accepted, {} rejected, {} invalid, E = {:e}",
            self.accepted, self.rejected, self.invalid, self.state.energy
        );
        MetropolisResults {
            polymer: self.state.polymer,
            energies: self.energies,
            accepted: self.accepted,
            rejected: self.rejected,
            invalid: self.invalid,
            statistics,
        }
    }

    fn valid_proposal(&mut self) -> Option<Polymer> {
        let length = self.state.polymer.len();
        let attempts = match self.params.policy {
            ProposalPolicy::EveryProposalCounts => 1,
            ProposalPolicy::RetryUntilValid { max_attempts } => max_attempts,
        };
        for _ in 0..attempts {
            // Chains too short to pivot can never produce a proposal.
            match propose_pivot(&self.state.polymer, &mut self.rng)? {
                Ok(candidate) if candidate.is_intact(length) => return Some(candidate),
                Ok(_) => {}
                Err(e) => trace!("pivot move discarded at step {}: {}", self.state.step, e),
            }
        }
        if attempts > 1 {
            warn!(
                "no valid pivot move found in {} attempts at step {}",
                attempts, self.state.step
            );
        }
        None
    }

    fn metropolis_accept(&mut self, delta: f64) -> bool {
        if delta < 0.0 {
            return true;
        }
        let r: f64 = self.rng.gen();
        r < (-delta / self.params.thermal_energy()).exp()
    }
}
