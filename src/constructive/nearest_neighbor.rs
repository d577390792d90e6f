//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unvisited customer that still fits. When nothing fits, start a new route.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use crate::error::{Result, TabuError};
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution, Vehicle};

/// Constructs a solution using the nearest-neighbor heuristic.
///
/// The fleet is homogeneous and unbounded: every route uses `vehicle`.
///
/// # Errors
///
/// [`TabuError::CapacityExceeded`] if a customer's demand alone exceeds the
/// vehicle capacity (under a capacitated vehicle).
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Vehicle};
/// use u_tabu_routing::constructive::nearest_neighbor;
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
///     Customer::new(3, 3.0, 0.0, 10),
/// ]);
///
/// let solution = nearest_neighbor(&instance, &Vehicle::new(0, 20)).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(solution.num_routes(), 2);
/// ```
pub fn nearest_neighbor(instance: &Instance, vehicle: &Vehicle) -> Result<Solution> {
    if let Some(c) = instance
        .customers()
        .iter()
        .skip(1)
        .find(|c| !vehicle.admits(c.demand()))
    {
        return Err(TabuError::CapacityExceeded {
            load: c.demand(),
            capacity: vehicle.capacity(),
        });
    }

    let evaluator = RouteEvaluator::new(instance, vehicle);
    let depot = vehicle.depot_id();
    let mut unvisited: Vec<usize> = (1..instance.customers().len()).collect();
    let mut routes = Vec::new();

    while !unvisited.is_empty() {
        let mut current = depot;
        let mut route_customers = Vec::new();
        let mut load: i32 = 0;

        loop {
            let fitting: Vec<usize> = unvisited
                .iter()
                .copied()
                .filter(|&c| vehicle.admits(load + instance.demand(c)))
                .collect();
            let Some(next) = instance.distances().nearest_neighbor(current, &fitting) else {
                break;
            };
            unvisited.retain(|&c| c != next);
            route_customers.push(next);
            load += instance.demand(next);
            current = next;
        }

        routes.push(evaluator.build_route(&route_customers));
    }

    Ok(Solution::from_routes(routes))
}
