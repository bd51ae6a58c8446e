//! Traits for lattice Monte Carlo sampling.

use crate::energy::{calculate_energy, InteractionMatrix};
use crate::polymer::Polymer;

/// Scores a conformation. Implementors are shared read-only for a whole run.
pub trait EnergyCalculator {
    fn energy(&self, polymer: &Polymer) -> f64;
    /// Number of monomers the model is defined for.
    fn dimension(&self) -> usize;
}

impl EnergyCalculator for InteractionMatrix {
    fn energy(&self, polymer: &Polymer) -> f64 {
        calculate_energy(polymer, self)
    }

    fn dimension(&self) -> usize {
        self.size()
    }
}
