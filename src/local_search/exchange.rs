//! Inter-route meta-exchange.
//!
//! # Algorithm
//!
//! Repeatedly pick one customer from each of two routes uniformly at random
//! and swap them:
//!
//! A = [a₁, ..., aᵢ, ..., aₙ], B = [b₁, ..., bⱼ, ..., bₘ]
//! → A' = [a₁, ..., bⱼ, ..., aₙ], B' = [b₁, ..., aᵢ, ..., bₘ]
//!
//! A swap is kept only if the pair stays capacity-feasible and the combined
//! length does not increase; otherwise it is undone. A pair with either
//! vehicle relaxed is always feasible. Exactly `attempts` swaps are tried.

use rand::Rng;

use crate::models::{Instance, Route};

/// Tries `attempts` random customer exchanges between `route_a` and
/// `route_b`, keeping those that stay capacity-feasible and do not lengthen
/// the pair. Returns the number of accepted exchanges.
///
/// Capacity is not checked when either vehicle is relaxed.
///
/// Either route being empty makes every attempt a no-op. Both routes have
/// their metrics recomputed on exit.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Vehicle};
/// use u_tabu_routing::local_search::meta_exchange;
///
/// // Each route serves one east and one west customer.
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 5.0, 1.0, 10),
///     Customer::new(2, -5.0, -1.0, 10),
///     Customer::new(3, 5.0, -1.0, 10),
///     Customer::new(4, -5.0, 1.0, 10),
/// ]);
/// let v = Vehicle::new(0, 20);
/// let mut a = Route::from_customers(v.clone(), vec![1, 4], &instance);
/// let mut b = Route::from_customers(v, vec![3, 2], &instance);
/// let before = a.total_length() + b.total_length();
///
/// let mut rng = u_numflow::random::create_rng(42);
/// meta_exchange(&mut a, &mut b, 40, &instance, &mut rng);
/// assert!(a.total_length() + b.total_length() <= before);
/// ```
pub fn meta_exchange<R: Rng>(
    route_a: &mut Route,
    route_b: &mut Route,
    attempts: usize,
    instance: &Instance,
    rng: &mut R,
) -> usize {
    let mut accepted = 0;
    let relaxed = route_a.vehicle().is_uncapacitated() || route_b.vehicle().is_uncapacitated();

    if !route_a.is_empty() && !route_b.is_empty() {
        for _ in 0..attempts {
            let ia = rng.random_range(0..route_a.len());
            let ib = rng.random_range(0..route_b.len());
            let before = route_a.total_length() + route_b.total_length();

            let ca = route_a.customers()[ia];
            let cb = route_b.replace_customer(ib, ca);
            route_a.replace_customer(ia, cb);
            route_a.recompute(instance);
            route_b.recompute(instance);

            let feasible = relaxed || (route_a.is_feasible() && route_b.is_feasible());
            if feasible && route_a.total_length() + route_b.total_length() <= before {
                accepted += 1;
            } else {
                route_a.replace_customer(ia, ca);
                route_b.replace_customer(ib, cb);
                route_a.recompute(instance);
                route_b.recompute(instance);
            }
        }
    }

    route_a.recompute(instance);
    route_b.recompute(instance);
    accepted
}
