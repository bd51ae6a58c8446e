//! Unweighted pivot walk: every self-avoiding proposal is taken.
//!
//! Shares the move and validity check with the Metropolis sampler but never
//! looks at energies, so it serves as a baseline for how freely the chain
//! moves.

use log::{debug, trace};
use rand::Rng;

use super::proposal::propose_pivot;
use crate::error::{Result, SimulationError};
use crate::polymer::Polymer;

#[derive(Clone, Debug)]
pub struct RandomWalkResults {
    pub polymer: Polymer,
    /// Proposals that kept the chain intact
    pub successful_moves: usize,
}

/// Attempt `n_steps` pivot moves from `initial`, keeping each one that leaves
/// the chain intact.
pub fn random_walk<R: Rng + ?Sized>(
    initial: Polymer,
    n_steps: usize,
    rng: &mut R,
) -> Result<RandomWalkResults> {
    let length = initial.len();
    if !initial.is_intact(length) {
        return Err(SimulationError::Configuration(
            "initial polymer is not self-avoiding and connected".to_string(),
        ));
    }

    let mut polymer = initial;
    let mut successful_moves = 0;
    for _ in 0..n_steps {
        let Some(proposal) = propose_pivot(&polymer, rng) else {
            break;
        };
        match proposal {
            Ok(candidate) if candidate.is_intact(length) => {
                polymer = candidate;
                successful_moves += 1;
            }
            Ok(_) => {}
            Err(e) => trace!("pivot move discarded: {}", e),
        }
    }

    debug!(
        "random walk: {} of {} pivot moves kept",
        successful_moves, n_steps
    );
    Ok(RandomWalkResults {
        polymer,
        successful_moves,
    })
}
