//! Construction of the pairwise contact-energy coupling matrix.

use std::ops::Index;

use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// How the non-bonded entries of an interaction matrix are filled.
///
/// In YAML a scalar is written as a number and a range as `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fill {
    /// Same coupling for every non-bonded pair.
    Scalar(f64),
    /// Independent uniform draw from `[low, high]` per pair.
    Range(f64, f64),
}

impl Fill {
    pub fn validate(&self) -> Result<()> {
        match *self {
            Fill::Scalar(value) if !value.is_finite() => Err(SimulationError::Configuration(
                format!("interaction strength {} is not finite", value),
            )),
            Fill::Range(low, high) if !(low.is_finite() && high.is_finite()) => {
                Err(SimulationError::Configuration(format!(
                    "interaction range [{}, {}] is not finite",
                    low, high
                )))
            }
            Fill::Range(low, high) if low > high => Err(SimulationError::Configuration(format!(
                "interaction range has low {} above high {}",
                low, high
            ))),
            Fill::Range(low, high) if !(high - low).is_finite() => {
                Err(SimulationError::Configuration(format!(
                    "interaction range [{}, {}] is too wide",
                    low, high
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Symmetric N×N contact couplings, zero on the diagonal and on both bands
/// next to it (chain-bonded pairs never count as contacts).
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionMatrix {
    values: DMatrix<f64>,
}

impl InteractionMatrix {
    /// Scalar-filled matrix; needs no random source.
    pub fn uniform(size: usize, value: f64) -> Result<Self> {
        check_size(size)?;
        Fill::Scalar(value).validate()?;
        let values = DMatrix::from_fn(size, size, |i, j| {
            if i.abs_diff(j) <= 1 {
                0.0
            } else {
                value
            }
        });
        Ok(Self { values })
    }

    /// Adopt an existing matrix after checking shape, symmetry and the zero
    /// bands.
    pub fn try_from_matrix(values: DMatrix<f64>) -> Result<Self> {
        if values.nrows() != values.ncols() {
            return Err(SimulationError::Configuration(format!(
                "interaction matrix must be square, got {}x{}",
                values.nrows(),
                values.ncols()
            )));
        }
        check_size(values.nrows())?;
        let n = values.nrows();
        for i in 0..n {
            for j in i..n {
                if j - i <= 1 && values[(i, j)] != 0.0 {
                    return Err(SimulationError::Configuration(format!(
                        "bonded entry ({}, {}) of the interaction matrix is non-zero",
                        i, j
                    )));
                }
                if values[(i, j)] != values[(j, i)] {
                    return Err(SimulationError::Configuration(format!(
                        "interaction matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }
        Ok(Self { values })
    }

    pub fn size(&self) -> usize {
        self.values.nrows()
    }

    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}

impl Index<(usize, usize)> for InteractionMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.values[index]
    }
}

fn check_size(size: usize) -> Result<()> {
    if size < 1 {
        return Err(SimulationError::Configuration(
            "interaction matrix size must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Build the coupling matrix for a chain of `size` monomers.
///
/// For [`Fill::Range`] the upper triangle is drawn row by row from `rng` and
/// mirrored, so the same seed always yields the same matrix.
pub fn build_interaction_matrix<R: Rng + ?Sized>(
    size: usize,
    fill: Fill,
    rng: &mut R,
) -> Result<InteractionMatrix> {
    check_size(size)?;
    fill.validate()?;
    match fill {
        Fill::Scalar(value) => InteractionMatrix::uniform(size, value),
        Fill::Range(low, high) => {
            let dist = Uniform::new_inclusive(low, high);
            let mut values = DMatrix::zeros(size, size);
            for i in 0..size {
                for j in i + 2..size {
                    let v = dist.sample(rng);
                    values[(i, j)] = v;
                    values[(j, i)] = v;
                }
            }
            Ok(InteractionMatrix { values })
        }
    }
}
