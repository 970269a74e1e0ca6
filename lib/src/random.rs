//! Random initial conditions.

use crate::neighborhood::Shape;
use rand::Rng;

/// Generates a configuration of `length` cells,
/// each chosen uniformly from the states of `shape`.
///
/// Any random number generator works; use a seeded one
/// to get reproducible configurations.
pub fn random_configuration<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    shape: Shape,
) -> Vec<usize> {
    (0..length)
        .map(|_| rng.gen_range(0..shape.num_states()))
        .collect()
}
