//! Polymer module - lattice chain representation and conformational moves.

mod chain;
mod pivot;

pub use chain::{generate_initial, is_intact, Polymer, Site};
pub(crate) use chain::squared_distance;
pub use pivot::{rotate, Rotation};
