//! Intra-route swap: exchange two customers of the same route.

use rand::Rng;

use crate::error::{Result, TabuError};
use crate::models::{Instance, Route};

/// Swaps two distinct, uniformly chosen positions of `route` and recomputes
/// its length.
///
/// Fails with [`TabuError::RouteTooSmall`] if the route has fewer than two
/// customers.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Vehicle};
/// use u_tabu_routing::local_search::swap;
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 1),
///     Customer::new(2, 0.0, 1.0, 1),
/// ]);
/// let mut route = Route::from_customers(Vehicle::new(0, 10), vec![1, 2], &instance);
/// let mut rng = u_numflow::random::create_rng(7);
/// swap(&mut route, &instance, &mut rng).unwrap();
/// assert_eq!(route.customers(), &[2, 1]);
/// ```
pub fn swap<R: Rng>(route: &mut Route, instance: &Instance, rng: &mut R) -> Result<()> {
    let n = route.len();
    if n < 2 {
        return Err(TabuError::RouteTooSmall {
            len: n,
            required: 2,
        });
    }
    let (i, j) = distinct_positions(n, rng);
    swap_at(route, i, j, instance);
    Ok(())
}

/// Swaps the customers at positions `i` and `j` and recomputes the route.
///
/// Applying the same swap twice restores the original route.
///
/// # Panics
///
/// Panics if either position is out of bounds.
pub fn swap_at(route: &mut Route, i: usize, j: usize, instance: &Instance) {
    route.swap_positions(i, j);
    route.recompute(instance);
}

/// Draws two distinct positions in `0..n` uniformly. Requires `n >= 2`.
pub(crate) fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}
