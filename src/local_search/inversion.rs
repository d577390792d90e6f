//! Intra-route inversion: reverse a random sub-sequence.

use rand::Rng;

use super::swap::distinct_positions;
use crate::error::{Result, TabuError};
use crate::models::{Instance, Route};

/// Picks `i < j` uniformly, reverses the customers in `i..=j`, and
/// recomputes the route length.
///
/// Fails with [`TabuError::RouteTooSmall`] if the route has fewer than two
/// customers.
pub fn inversion<R: Rng>(route: &mut Route, instance: &Instance, rng: &mut R) -> Result<()> {
    let n = route.len();
    if n < 2 {
        return Err(TabuError::RouteTooSmall {
            len: n,
            required: 2,
        });
    }
    let (a, b) = distinct_positions(n, rng);
    inversion_at(route, a.min(b), a.max(b), instance);
    Ok(())
}

/// Reverses the customers in `i..=j` and recomputes the route.
///
/// Applying the same inversion twice restores the original route.
///
/// # Panics
///
/// Panics if `i > j` or `j` is out of bounds.
pub fn inversion_at(route: &mut Route, i: usize, j: usize, instance: &Instance) {
    route.reverse_segment(i, j);
    route.recompute(instance);
}
