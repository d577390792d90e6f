//! Intra-route 2-opt move.
//!
//! # Algorithm
//!
//! For each pair of edges around the customer segment `[i..=j]` (depot legs
//! included), compute the change in distance from reversing the segment:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! On an asymmetric matrix the edges inside the segment change direction too,
//! so their reversal cost is added to the delta.
//!
//! The single best improving move is applied (best-improvement, one pass).
//! Ties keep the smallest `i`, then the smallest `j`. When nothing improves,
//! a fallback transformation is applied once instead.
//!
//! # Complexity
//!
//! O(n²) per call.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use super::Transformation;
use crate::distance::DistanceMatrix;
use crate::error::{Result, TabuError};
use crate::evaluation::check_capacity;
use crate::models::{Instance, Route};

/// Smallest delta counted as an improvement.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Applies one best-improvement 2-opt move to `route`, returning the new route.
///
/// Reversal keeps the load unchanged, so on an over-capacity route (under a
/// capacitated vehicle) every move is rejected. If no improving feasible move
/// exists, `fallback` is applied once.
///
/// # Errors
///
/// - [`TabuError::RouteTooSmall`] if the route has fewer than four customers.
/// - [`TabuError::UnhandledTransformation`] if `fallback` is itself 2-opt.
/// - [`TabuError::CapacityExceeded`] if the fallback result is over capacity.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Vehicle};
/// use u_tabu_routing::local_search::{two_opt, Transformation};
///
/// // Square corners around a central depot, visited in a crossing order.
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 1.0, 1),   // NE
///     Customer::new(2, -1.0, -1.0, 1), // SW
///     Customer::new(3, -1.0, 1.0, 1),  // NW
///     Customer::new(4, 1.0, -1.0, 1),  // SE
/// ]);
/// let route = Route::from_customers(Vehicle::new(0, 10), vec![1, 2, 3, 4], &instance);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let improved = two_opt(&route, Transformation::Swap, &instance, &mut rng).unwrap();
/// assert_eq!(improved.customers(), &[1, 3, 2, 4]);
/// assert!(improved.total_length() < route.total_length());
/// ```
pub fn two_opt<R: Rng>(
    route: &Route,
    fallback: Transformation,
    instance: &Instance,
    rng: &mut R,
) -> Result<Route> {
    let n = route.len();
    if n < Transformation::TwoOpt.min_route_len() {
        return Err(TabuError::RouteTooSmall {
            len: n,
            required: Transformation::TwoOpt.min_route_len(),
        });
    }
    if fallback == Transformation::TwoOpt {
        return Err(TabuError::UnhandledTransformation {
            transformation: fallback.to_string(),
            reason: "2-opt cannot be its own fallback",
        });
    }

    if route.is_feasible() {
        let depot = route.vehicle().depot_id();
        let symmetric = instance.is_symmetric();
        if let Some((i, j)) = best_move(route.customers(), depot, instance.distances(), symmetric) {
            let seq = route.customers();
            let mut customers = Vec::with_capacity(n);
            customers.extend_from_slice(&seq[..i]);
            customers.extend(seq[i..=j].iter().rev());
            customers.extend_from_slice(&seq[j + 1..]);
            return Ok(Route::from_customers(
                route.vehicle().clone(),
                customers,
                instance,
            ));
        }
    }

    let mut fallen_back = route.clone();
    super::apply_transformation(&mut fallen_back, fallback, instance, rng)?;
    check_capacity(&fallen_back)?;
    Ok(fallen_back)
}

/// Finds the best improving segment reversal `[i..=j]`, if any.
fn best_move(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    symmetric: bool,
) -> Option<(usize, usize)> {
    let n = route.len();
    let mut best: Option<(usize, usize)> = None;
    let mut best_delta = -IMPROVEMENT_EPS;

    for i in 0..n - 1 {
        for j in i + 1..n {
            let mut delta = two_opt_delta(route, depot, distances, i, j);
            if !symmetric {
                delta += distances.reversal_delta(&route[i..=j]);
            }
            if delta < best_delta {
                best_delta = delta;
                best = Some((i, j));
            }
        }
    }

    best
}

/// Change in the two boundary edges from reversing positions `i..=j`.
///
/// Before: ...-prev_i - route[i] - route[i+1] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - route[j-1] - ... - route[i] - next_j-...
///
/// Interior edges are not counted; see [`DistanceMatrix::reversal_delta`].
fn two_opt_delta(
    route: &[usize],
    depot: usize,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { depot } else { route[i - 1] };
    let next_j = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}
