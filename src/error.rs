//! Error types shared by every stage of a lattice simulation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Interaction matrix is {matrix}x{matrix} but the polymer has {polymer} monomers")]
    DimensionMismatch { matrix: usize, polymer: usize },

    #[error("Pivot index {pivot} is not an interior monomer of a chain of length {length}")]
    PivotOutOfRange { pivot: usize, length: usize },

    #[error("Rotating about pivot {pivot} moves a monomer off the i32 lattice")]
    LatticeOverflow { pivot: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
