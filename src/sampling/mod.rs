//! Sampling module - Monte Carlo sampling of lattice conformations.

mod metropolis;
mod proposal;
mod random_walk;
mod stats;
mod traits;

pub use metropolis::{
    ChainState, Checkpoint, MetropolisParams, MetropolisResults, MetropolisSampler,
    ProposalPolicy, StepOutcome, BOLTZMANN,
};
pub use random_walk::{random_walk, RandomWalkResults};
pub use stats::TraceStatistics;
pub use traits::EnergyCalculator;
