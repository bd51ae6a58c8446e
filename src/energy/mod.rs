//! Energy module - contact couplings and the contact-energy model.

mod contact;
mod interaction;

pub use contact::calculate_energy;
pub use interaction::{build_interaction_matrix, Fill, InteractionMatrix};
