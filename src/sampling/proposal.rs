use rand::Rng;

use crate::error::Result;
use crate::polymer::{rotate, Polymer, Rotation};

/// Draw a random pivot move for `polymer`: pivot uniform over the interior
/// monomers, sense uniform over both rotations.
///
/// Returns `None` for chains without an interior monomer, and `Some(Err(_))`
/// when the drawn move would leave the `i32` lattice.
pub(crate) fn propose_pivot<R: Rng + ?Sized>(
    polymer: &Polymer,
    rng: &mut R,
) -> Option<Result<Polymer>> {
    let length = polymer.len();
    if length < 3 {
        return None;
    }
    let pivot = rng.gen_range(1..length - 1);
    let rotation = Rotation::from_clockwise(rng.gen_bool(0.5));
    Some(rotate(polymer, pivot, rotation))
}
