//! Subdivision of a giant route into capacity-feasible routes.
//!
//! # Algorithm
//!
//! Given a giant tour (all customers in one sequence), finds the partition
//! into consecutive sub-routes such that each route respects vehicle capacity
//! and the total distance is minimized. Visit order is preserved: the
//! concatenation of the resulting routes equals the input tour.
//!
//! Models the problem as a shortest-path problem on an auxiliary graph where
//! node i represents the boundary after customer i, and edge (i, j) represents
//! serving customers i+1..=j in one route.
//!
//! # Complexity
//!
//! O(n²) worst case, usually much less thanks to capacity pruning.
//!
//! # Reference
//!
//! Prins, C. (2004). "A simple and effective evolutionary algorithm for the
//! vehicle routing problem", *Computers & Operations Research* 31(12), 1985-2002.

use tracing::debug;

use crate::error::{Result, TabuError};
use crate::evaluation::RouteEvaluator;
use crate::models::{Instance, Solution, Vehicle};

/// Result of the split algorithm.
#[derive(Debug, Clone)]
pub struct SplitResult {
    /// Routes as sequences of customer IDs.
    pub routes: Vec<Vec<usize>>,
    /// Total distance of all routes.
    pub total_distance: f64,
}

/// Splits a giant tour into optimal sub-routes using dynamic programming.
///
/// Each sub-route starts and ends at the vehicle's depot and respects its
/// capacity (the relaxation flag is ignored here). Returns `None` if some
/// customer alone exceeds the capacity.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Vehicle};
/// use u_tabu_routing::split::split;
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
///     Customer::new(3, 3.0, 0.0, 10),
/// ]);
///
/// let result = split(&[1, 2, 3], &instance, &Vehicle::new(0, 20)).unwrap();
/// assert_eq!(result.routes, vec![vec![1], vec![2, 3]]);
/// assert!((result.total_distance - 8.0).abs() < 1e-10);
/// ```
pub fn split(tour: &[usize], instance: &Instance, vehicle: &Vehicle) -> Option<SplitResult> {
    let n = tour.len();

    if n == 0 {
        return Some(SplitResult {
            routes: vec![],
            total_distance: 0.0,
        });
    }

    let depot = vehicle.depot_id();
    let capacity = vehicle.capacity();

    // cost[i] = minimum total distance to serve tour[0..i]
    // pred[i] = predecessor index (start of the last route ending at i)
    let mut cost = vec![f64::INFINITY; n + 1];
    let mut pred = vec![0usize; n + 1];
    cost[0] = 0.0;

    for i in 0..n {
        if cost[i] == f64::INFINITY {
            continue;
        }

        let mut load = 0i32;
        let mut route_dist = 0.0;

        for j in i..n {
            let cid = tour[j];
            load += instance.demand(cid);

            if load > capacity {
                break;
            }

            if j == i {
                route_dist = instance.distance(depot, cid);
            } else {
                route_dist += instance.distance(tour[j - 1], cid);
            }

            let new_cost = cost[i] + route_dist + instance.distance(cid, depot);

            if new_cost < cost[j + 1] {
                cost[j + 1] = new_cost;
                pred[j + 1] = i;
            }
        }
    }

    if cost[n] == f64::INFINITY {
        return None;
    }

    let mut routes = Vec::new();
    let mut j = n;
    while j > 0 {
        let i = pred[j];
        routes.push(tour[i..j].to_vec());
        j = i;
    }
    routes.reverse();

    Some(SplitResult {
        routes,
        total_distance: cost[n],
    })
}

/// Cuts the single route of `solution` into routes feasible for `vehicle`.
///
/// The new routes are served by `vehicle` with its capacity enforced.
///
/// # Errors
///
/// [`TabuError::SubdivisionFailed`] if `solution` does not hold exactly one
/// route, or if a customer's demand alone exceeds the capacity.
pub fn subdivide(solution: &Solution, instance: &Instance, vehicle: &Vehicle) -> Result<Solution> {
    let [route] = solution.routes() else {
        return Err(TabuError::SubdivisionFailed(format!(
            "expected a single route, got {}",
            solution.num_routes()
        )));
    };

    let result = split(route.customers(), instance, vehicle).ok_or_else(|| {
        TabuError::SubdivisionFailed(format!(
            "a customer demand exceeds vehicle capacity {}",
            vehicle.capacity()
        ))
    })?;

    let vehicle = vehicle.enforced();
    let evaluator = RouteEvaluator::new(instance, &vehicle);
    let routes = result
        .routes
        .iter()
        .map(|ids| evaluator.build_route(ids))
        .collect();
    let subdivided = Solution::from_routes(routes);

    debug!(
        routes = subdivided.num_routes(),
        cost = subdivided.global_cost(),
        "giant route subdivided"
    );
    Ok(subdivided)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Route};

    fn line_instance() -> Instance {
        Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 10),
            Customer::new(2, 2.0, 0.0, 10),
            Customer::new(3, 3.0, 0.0, 10),
        ])
    }

    #[test]
    fn test_split_single_route() {
        let instance = line_instance();
        let result = split(&[1, 2, 3], &instance, &Vehicle::new(0, 30)).expect("feasible");
        assert_eq!(result.routes, vec![vec![1, 2, 3]]);
        // 0→1→2→3→0 = 1+1+1+3 = 6
        assert!((result.total_distance - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_split_each_alone() {
        let instance = line_instance();
        let result = split(&[1, 2, 3], &instance, &Vehicle::new(0, 10)).expect("feasible");
        assert_eq!(result.routes.len(), 3);
        // (0→1→0)+(0→2→0)+(0→3→0) = 2+4+6 = 12
        assert!((result.total_distance - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_split_empty() {
        let instance = line_instance();
        let result = split(&[], &instance, &Vehicle::new(0, 30)).expect("feasible");
        assert!(result.routes.is_empty());
        assert_eq!(result.total_distance, 0.0);
    }

    #[test]
    fn test_split_infeasible_customer() {
        let instance = line_instance();
        assert!(split(&[1, 2, 3], &instance, &Vehicle::new(0, 5)).is_none());
    }

    #[test]
    fn test_split_optimal_partition() {
        let instance = Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 10),
            Customer::new(2, 2.0, 0.0, 10),
            Customer::new(3, 10.0, 0.0, 10),
            Customer::new(4, 11.0, 0.0, 10),
        ]);
        let result = split(&[1, 2, 3, 4], &instance, &Vehicle::new(0, 20)).expect("feasible");
        assert_eq!(result.routes, vec![vec![1, 2], vec![3, 4]]);
        // [1,2]: 4, [3,4]: 22
        assert!((result.total_distance - 26.0).abs() < 1e-10);
    }

    #[test]
    fn test_subdivide_preserves_order_and_capacity() {
        let instance = line_instance();
        let giant = Solution::from_routes(vec![Route::from_customers(
            Vehicle::new(0, 20).relaxed(),
            vec![3, 1, 2],
            &instance,
        )]);
        let out = subdivide(&giant, &instance, &Vehicle::new(0, 20)).expect("feasible");
        assert_eq!(out.customer_ids(), vec![3, 1, 2]);
        assert!(out.num_routes() >= 2);
        assert!(out.is_feasible());
        for route in out.routes() {
            assert!(!route.vehicle().is_uncapacitated());
            assert!(route.load() <= 20);
        }
        let expected: f64 = out.routes().iter().map(|r| r.total_length()).sum();
        assert!((out.global_cost() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_subdivide_rejects_multi_route() {
        let instance = line_instance();
        let v = Vehicle::new(0, 30);
        let sol = Solution::from_routes(vec![
            Route::from_customers(v.clone(), vec![1], &instance),
            Route::from_customers(v.clone(), vec![2, 3], &instance),
        ]);
        assert!(matches!(
            subdivide(&sol, &instance, &v),
            Err(TabuError::SubdivisionFailed(_))
        ));
    }

    #[test]
    fn test_subdivide_infeasible_demand() {
        let instance = line_instance();
        let giant = Solution::from_routes(vec![Route::from_customers(
            Vehicle::new(0, 5).relaxed(),
            vec![1, 2, 3],
            &instance,
        )]);
        assert!(matches!(
            subdivide(&giant, &instance, &Vehicle::new(0, 5)),
            Err(TabuError::SubdivisionFailed(_))
        ));
    }
}
