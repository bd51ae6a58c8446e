//! Lattice Fold - pivot-move Monte Carlo for polymers on a 2D square lattice
//!
//! This crate samples conformations of a self-avoiding lattice chain with a
//! pairwise contact-energy model, using pivot moves and Metropolis acceptance.

pub mod error;
pub mod polymer;
pub mod energy;
pub mod sampling;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Result, SimulationError};
pub use polymer::{generate_initial, is_intact, rotate, Polymer, Rotation, Site};
pub use energy::{build_interaction_matrix, calculate_energy, Fill, InteractionMatrix};
pub use sampling::{random_walk, ChainState, Checkpoint, EnergyCalculator, MetropolisParams, MetropolisResults, MetropolisSampler, ProposalPolicy, RandomWalkResults, StepOutcome, TraceStatistics, BOLTZMANN};
pub use io::{render, write_rendering, Palette, RenderOptions, SamplingMode, SimulationConfig, MAX_GRID_CELLS};
