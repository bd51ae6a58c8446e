//! Pivot move: rotate one side of the chain by 90 degrees about an interior
//! monomer.

use super::chain::{Polymer, Site};
use crate::error::{Result, SimulationError};

/// Sense of a quarter turn about the pivot.
///
/// `Clockwise` maps an offset `(dx, dy)` to `(dy, -dx)`,
/// `CounterClockwise` maps it to `(-dy, dx)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Quarter turn of `site` about `centre`, or `None` if the result does
    /// not fit in `i32` coordinates.
    #[inline]
    fn turn_about(self, centre: &Site, site: &Site) -> Option<Site> {
        let dx = i64::from(site.x) - i64::from(centre.x);
        let dy = i64::from(site.y) - i64::from(centre.y);
        let (rx, ry) = match self {
            Rotation::Clockwise => (dy, -dx),
            Rotation::CounterClockwise => (-dy, dx),
        };
        let x = i32::try_from(i64::from(centre.x) + rx).ok()?;
        let y = i32::try_from(i64::from(centre.y) + ry).ok()?;
        Some(Site::new(x, y))
    }
}

/// Rotate the shorter side of `polymer` a quarter turn about monomer `pivot`.
///
/// `pivot` is a 0-based index and must be interior (`1..=len-2`). The pivot
/// and the longer side are copied unchanged; ties rotate the tail. A move
/// that would carry a monomer past the `i32` range fails with
/// [`SimulationError::LatticeOverflow`].
pub fn rotate(polymer: &Polymer, pivot: usize, rotation: Rotation) -> Result<Polymer> {
    let length = polymer.len();
    if pivot == 0 || pivot + 1 >= length {
        return Err(SimulationError::PivotOutOfRange { pivot, length });
    }

    let centre = polymer[pivot];
    let head_len = pivot;
    let tail_len = length - pivot - 1;
    let moved = if tail_len <= head_len {
        pivot + 1..length
    } else {
        0..pivot
    };

    let mut sites = polymer.monomers().to_vec();
    for site in &mut sites[moved] {
        *site = rotation
            .turn_about(&centre, site)
            .ok_or(SimulationError::LatticeOverflow { pivot })?;
    }
    Ok(Polymer::from_sites(sites))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hook() -> Polymer {
        Polymer::from_coords(&[[0, 0], [1, 0], [1, 1], [0, 1], [-1, 1], [-2, 1], [-2, 0]])
    }

    #[test]
    fn test_rotate_tail_clockwise() {
        let polymer = Polymer::straight(5).unwrap();
        // [-2,0] [-1,0] [0,0] [1,0] [2,0]; pivot 3 -> tail is the last monomer
        let rotated = rotate(&polymer, 3, Rotation::Clockwise).unwrap();
        assert_eq!(
            rotated,
            Polymer::from_coords(&[[-2, 0], [-1, 0], [0, 0], [1, 0], [1, -1]])
        );
        let rotated = rotate(&polymer, 3, Rotation::CounterClockwise).unwrap();
        assert_eq!(
            rotated,
            Polymer::from_coords(&[[-2, 0], [-1, 0], [0, 0], [1, 0], [1, 1]])
        );
    }

    #[test]
    fn test_rotate_head_when_shorter() {
        let polymer = Polymer::straight(5).unwrap();
        let rotated = rotate(&polymer, 1, Rotation::Clockwise).unwrap();
        // offset of monomer 0 from pivot is (-1, 0) -> (0, 1)
        assert_eq!(
            rotated,
            Polymer::from_coords(&[[-1, 1], [-1, 0], [0, 0], [1, 0], [2, 0]])
        );
    }

    #[test]
    fn test_rotate_moves_only_shorter_side() {
        let polymer = hook();
        let rotated = rotate(&polymer, 2, Rotation::CounterClockwise).unwrap();
        // head has 2 monomers, tail has 4
        assert_eq!(&rotated.monomers()[2..], &polymer.monomers()[2..]);
        assert_ne!(&rotated.monomers()[..2], &polymer.monomers()[..2]);

        let rotated = rotate(&polymer, 4, Rotation::CounterClockwise).unwrap();
        assert_eq!(&rotated.monomers()[..5], &polymer.monomers()[..5]);
    }

    #[test]
    fn test_rotate_even_split_moves_tail() {
        let polymer = Polymer::straight(5).unwrap();
        let rotated = rotate(&polymer, 2, Rotation::Clockwise).unwrap();
        assert_eq!(&rotated.monomers()[..3], &polymer.monomers()[..3]);
        assert_eq!(rotated[3], Site::new(0, -1));
        assert_eq!(rotated[4], Site::new(0, -2));
    }

    #[test]
    fn test_rotate_does_not_mutate_input() {
        let polymer = hook();
        let copy = polymer.clone();
        let _ = rotate(&polymer, 3, Rotation::Clockwise).unwrap();
        assert_eq!(polymer, copy);
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        let polymer = hook();
        for pivot in 1..polymer.len() - 1 {
            for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
                let mut current = polymer.clone();
                for turn in 0..4 {
                    current = rotate(&current, pivot, rotation).unwrap();
                    if turn < 3 {
                        assert_ne!(current, polymer);
                    }
                }
                assert_eq!(current, polymer, "pivot {} {:?}", pivot, rotation);
            }
        }
    }

    #[test]
    fn test_inverse_rotation_undoes_turn() {
        let polymer = hook();
        let turned = rotate(&polymer, 3, Rotation::Clockwise).unwrap();
        let back = rotate(&turned, 3, Rotation::Clockwise.inverse()).unwrap();
        assert_eq!(back, polymer);
    }

    #[test]
    fn test_rotation_preserves_bonds() {
        let polymer = Polymer::straight(8).unwrap();
        for pivot in 1..7 {
            let rotated = rotate(&polymer, pivot, Rotation::Clockwise).unwrap();
            assert!(rotated.is_intact(8));
        }
    }

    #[test]
    fn test_pivot_out_of_range() {
        let polymer = Polymer::straight(4).unwrap();
        for pivot in [0, 3, 4, 10] {
            assert!(matches!(
                rotate(&polymer, pivot, Rotation::Clockwise),
                Err(SimulationError::PivotOutOfRange { length: 4, .. })
            ));
        }
        assert!(rotate(&Polymer::straight(2).unwrap(), 1, Rotation::Clockwise).is_err());
    }

    #[test]
    fn test_rotation_off_lattice_edge_is_an_error() {
        // Tail is the last monomer at x = MAX; a clockwise turn sends it to
        // y = MAX + 1.
        let polymer = Polymer::from_coords(&[
            [i32::MAX - 2, i32::MAX],
            [i32::MAX - 1, i32::MAX],
            [i32::MAX, i32::MAX],
        ]);
        assert!(matches!(
            rotate(&polymer, 1, Rotation::CounterClockwise),
            Err(SimulationError::LatticeOverflow { pivot: 1 })
        ));
        // The other sense stays on the lattice.
        let rotated = rotate(&polymer, 1, Rotation::Clockwise).unwrap();
        assert_eq!(rotated[2], Site::new(i32::MAX - 1, i32::MAX - 1));
        assert!(rotated.is_intact(3));
    }
}
