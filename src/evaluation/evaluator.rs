//! Route length and load evaluation.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TabuError};
use crate::models::{Customer, Instance, Route, Vehicle};

/// Computes the total distance of a route: `depot → route[0] → ... → route[n-1] → depot`.
///
/// Always sums from scratch. An empty route has length 0.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::Customer;
/// use u_tabu_routing::distance::DistanceMatrix;
/// use u_tabu_routing::evaluation::route_length;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 10),
///     Customer::new(2, 2.0, 0.0, 10),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// assert!((route_length(&[1, 2], 0, &dm) - 4.0).abs() < 1e-10);
/// assert_eq!(route_length(&[], 0, &dm), 0.0);
/// ```
pub fn route_length(route: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    let (first, last) = match (route.first(), route.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return 0.0,
    };
    let mut dist = distances.get(depot, first);
    for pair in route.windows(2) {
        dist += distances.get(pair[0], pair[1]);
    }
    dist + distances.get(last, depot)
}

/// Sum of demands of the customers in `route`.
pub fn route_load(route: &[usize], customers: &[Customer]) -> i32 {
    route.iter().map(|&c| customers[c].demand()).sum()
}

/// Builds routes served by one vehicle.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Vehicle};
/// use u_tabu_routing::evaluation::{check_capacity, RouteEvaluator};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 6.0, 8.0, 20),
/// ]);
/// let vehicle = Vehicle::new(0, 25);
/// let evaluator = RouteEvaluator::new(&instance, &vehicle);
///
/// let route = evaluator.build_route(&[1, 2]);
/// assert_eq!(route.load(), 30);
/// assert!(check_capacity(&route).is_err());
/// assert!(check_capacity(&evaluator.build_route(&[2])).is_ok());
/// ```
pub struct RouteEvaluator<'a> {
    instance: &'a Instance,
    vehicle: &'a Vehicle,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given instance and vehicle.
    pub fn new(instance: &'a Instance, vehicle: &'a Vehicle) -> Self {
        Self { instance, vehicle }
    }

    /// Builds a route from a sequence of customer IDs, computing length and load.
    pub fn build_route(&self, customer_ids: &[usize]) -> Route {
        Route::from_customers(self.vehicle.clone(), customer_ids.to_vec(), self.instance)
    }
}

/// Fails with [`TabuError::CapacityExceeded`] if `route` is over capacity
/// under a capacitated vehicle.
pub fn check_capacity(route: &Route) -> Result<()> {
    if route.is_feasible() {
        Ok(())
    } else {
        Err(TabuError::CapacityExceeded {
            load: route.load(),
            capacity: route.vehicle().capacity(),
        })
    }
}
