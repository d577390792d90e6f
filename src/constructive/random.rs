//! Randomized initial solutions.
//!
//! - [`random_routes`] shuffles the customers and packs them into routes in
//!   that order, opening a new route whenever the next customer does not fit.
//! - [`giant_route`] puts every shuffled customer on one route served by a
//!   relaxed vehicle, the starting point of the single-route search.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TabuError};
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution, Vehicle};

/// Builds capacity-feasible routes from a random customer order.
///
/// # Errors
///
/// [`TabuError::CapacityExceeded`] if a customer's demand alone exceeds the
/// vehicle capacity.
pub fn random_routes<R: Rng>(instance: &Instance, vehicle: &Vehicle, rng: &mut R) -> Result<Solution> {
    let evaluator = RouteEvaluator::new(instance, vehicle);
    let mut order: Vec<usize> = (1..instance.customers().len()).collect();
    order.shuffle(rng);

    let mut routes = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut load = 0;

    for c in order {
        let demand = instance.demand(c);
        if !vehicle.admits(demand) {
            return Err(TabuError::CapacityExceeded {
                load: demand,
                capacity: vehicle.capacity(),
            });
        }
        if !vehicle.admits(load + demand) {
            routes.push(evaluator.build_route(&current));
            current.clear();
            load = 0;
        }
        current.push(c);
        load += demand;
    }
    if !current.is_empty() {
        routes.push(evaluator.build_route(&current));
    }

    Ok(Solution::from_routes(routes))
}

/// Builds a single route over every customer in random order, served by a
/// relaxed copy of `vehicle`.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Vehicle};
/// use u_tabu_routing::constructive::giant_route;
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
/// ]);
/// let mut rng = u_numflow::random::create_rng(42);
/// let sol = giant_route(&instance, &Vehicle::new(0, 10), &mut rng);
/// assert_eq!(sol.num_routes(), 1);
/// assert!(sol.routes()[0].vehicle().is_uncapacitated());
/// ```
pub fn giant_route<R: Rng>(instance: &Instance, vehicle: &Vehicle, rng: &mut R) -> Solution {
    let relaxed = vehicle.relaxed();
    let evaluator = RouteEvaluator::new(instance, &relaxed);
    let mut order: Vec<usize> = (1..instance.customers().len()).collect();
    order.shuffle(rng);
    Solution::from_routes(vec![evaluator.build_route(&order)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn instance(n: usize) -> Instance {
        let mut customers = vec![Customer::depot(0.0, 0.0)];
        for i in 1..=n {
            customers.push(Customer::new(i, i as f64, (i % 3) as f64, 4));
        }
        Instance::new(customers)
    }

    #[test]
    fn test_random_routes_cover_everyone() {
        let instance = instance(12);
        let mut rng = u_numflow::random::create_rng(42);
        let sol = random_routes(&instance, &Vehicle::new(0, 10), &mut rng).expect("feasible");
        let mut ids = sol.customer_ids();
        ids.sort_unstable();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert!(sol.is_feasible());
        // two customers of demand 4 fit per route
        assert_eq!(sol.num_routes(), 6);
    }

    #[test]
    fn test_random_routes_keep_every_packed_route() {
        let instance = instance(9);
        let mut rng = u_numflow::random::create_rng(3);
        let sol = random_routes(&instance, &Vehicle::new(0, 4), &mut rng).expect("feasible");
        // one customer per route, none dropped
        assert_eq!(sol.num_routes(), 9);
        let sum: f64 = sol.routes().iter().map(|r| r.total_length()).sum();
        assert!((sol.global_cost() - sum).abs() < 1e-9);
    }

    #[test]
    fn test_random_routes_oversized_customer() {
        let instance = instance(3);
        let mut rng = u_numflow::random::create_rng(42);
        assert!(matches!(
            random_routes(&instance, &Vehicle::new(0, 3), &mut rng),
            Err(TabuError::CapacityExceeded { load: 4, .. })
        ));
    }

    #[test]
    fn test_giant_route_is_relaxed_permutation() {
        let instance = instance(15);
        let mut rng = u_numflow::random::create_rng(7);
        let sol = giant_route(&instance, &Vehicle::new(0, 10), &mut rng);
        assert_eq!(sol.num_routes(), 1);
        assert_eq!(sol.routes()[0].load(), 60);
        assert!(sol.is_feasible());
        let mut ids = sol.customer_ids();
        ids.sort_unstable();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }
}
