//! Contact energy of a lattice conformation.

use super::interaction::InteractionMatrix;
use crate::polymer::{squared_distance, Polymer};

/// Sum of `V[i, j]` over every non-bonded pair (`j - i >= 2`) sitting on
/// neighbouring lattice sites.
///
/// Only the upper triangle is visited, so each contact is counted once. Pairs
/// beyond the matrix dimension are ignored; the sampler rejects mismatched
/// dimensions before it ever calls this.
pub fn calculate_energy(polymer: &Polymer, interaction: &InteractionMatrix) -> f64 {
    let sites = polymer.monomers();
    let n = sites.len().min(interaction.size());
    let mut energy = 0.0;
    for i in 0..n {
        let a = &sites[i];
        for (j, b) in sites.iter().enumerate().take(n).skip(i + 2) {
            if squared_distance(a, b) == 1 {
                energy += interaction[(i, j)];
            }
        }
    }
    energy
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::energy::{build_interaction_matrix, Fill};

    fn spiral() -> Polymer {
        Polymer::from_coords(&[
            [0, 0],
            [1, 0],
            [1, 1],
            [0, 1],
            [-1, 1],
            [-1, 0],
            [-1, -1],
            [0, -1],
        ])
    }

    #[test]
    fn test_flat_polymer_has_no_contacts() {
        let v = InteractionMatrix::uniform(6, -1.0).unwrap();
        assert_relative_eq!(calculate_energy(&Polymer::straight(6).unwrap(), &v), 0.0);
    }

    #[test]
    fn test_single_contact() {
        let v = InteractionMatrix::uniform(6, -1.0).unwrap();
        let polymer = Polymer::from_coords(&[[0, 0], [1, 0], [1, 1], [0, 1], [-1, 1], [-2, 1]]);
        assert_relative_eq!(calculate_energy(&polymer, &v), -1.0);
    }

    #[test]
    fn test_two_contacts() {
        let v = InteractionMatrix::uniform(6, -1.0).unwrap();
        let polymer = Polymer::from_coords(&[[0, 0], [1, 0], [1, 1], [0, 1], [-1, 1], [-1, 0]]);
        assert_relative_eq!(calculate_energy(&polymer, &v), -2.0);
    }

    #[test]
    fn test_square_spiral() {
        let attractive = InteractionMatrix::uniform(8, -2.0).unwrap();
        let repulsive = InteractionMatrix::uniform(8, 2.0).unwrap();
        assert_relative_eq!(calculate_energy(&spiral(), &attractive), -6.0);
        assert_relative_eq!(calculate_energy(&spiral(), &repulsive), 6.0);
    }

    #[test]
    fn test_uses_individual_couplings() {
        // Distinct weight per pair so a wrong index shows up in the sum.
        let n = 8;
        let raw = DMatrix::from_fn(n, n, |i: usize, j: usize| {
            if i.abs_diff(j) <= 1 {
                0.0
            } else {
                (i.min(j) * 10 + i.max(j)) as f64
            }
        });
        let v = InteractionMatrix::try_from_matrix(raw).unwrap();
        let polymer = spiral();
        let mut expected = 0.0;
        for i in 0..n {
            for j in i + 2..n {
                let d = polymer[i] - polymer[j];
                if d.x * d.x + d.y * d.y == 1 {
                    expected += (i * 10 + j) as f64;
                }
            }
        }
        assert_relative_eq!(calculate_energy(&polymer, &v), expected);
    }

    #[test]
    fn test_straight_chain_zero_for_random_matrices() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for n in 2..30 {
            let v = build_interaction_matrix(n, Fill::Range(-5.0, 5.0), &mut rng).unwrap();
            assert_eq!(calculate_energy(&Polymer::straight(n).unwrap(), &v), 0.0);
        }
    }

    #[test]
    fn test_energy_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let v = build_interaction_matrix(8, Fill::Range(-1.0, 0.0), &mut rng).unwrap();
        let first = calculate_energy(&spiral(), &v);
        for _ in 0..10 {
            assert_eq!(calculate_energy(&spiral().clone(), &v), first);
        }
    }

    #[test]
    fn test_benchmark_fixture() {
        // Broken 11-monomer fixture: energy is still defined pair by pair.
        let v = InteractionMatrix::uniform(11, 1.0).unwrap();
        let polymer = Polymer::from_coords(&[
            [0, 0],
            [1, 0],
            [1, 1],
            [0, 1],
            [-1, 1],
            [-2, 1],
            [-2, 0],
            [-1, 0],
            [-2, -1],
            [-2, -2],
            [-2, -3],
        ]);
        assert!(!polymer.is_intact(11));
        // contacts: (0,3) (0,7) (4,7) (6,8)
        assert_relative_eq!(calculate_energy(&polymer, &v), 4.0);
    }
}
