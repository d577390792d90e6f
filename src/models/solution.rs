//! Solution type.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::Route;

/// A complete solution to a routing problem.
///
/// Owns its routes and caches `global_cost`, the sum of route lengths.
/// Cloning deep-copies every route, so clones never alias each other.
///
/// Two solutions are equal when their route sequences are equal element-wise
/// (see [`Route`] equality). [`Solution::signature`] hashes the same content
/// and is used to speed up tabu membership tests.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Solution, Vehicle};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 0.0, 5.0, 10),
/// ]);
/// let vehicle = Vehicle::new(0, 20);
/// let mut sol = Solution::new();
/// assert!(sol.add_route(Route::from_customers(vehicle.clone(), vec![1], &instance)));
/// assert!(sol.add_route(Route::from_customers(vehicle.clone(), vec![2], &instance)));
/// assert!(!sol.add_route(Route::from_customers(vehicle, vec![2], &instance)));
/// assert_eq!(sol.num_routes(), 2);
/// assert!((sol.global_cost() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    global_cost: f64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            global_cost: 0.0,
        }
    }

    /// Creates a solution from routes and computes its global cost.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let mut solution = Self {
            routes,
            global_cost: 0.0,
        };
        solution.recompute_global_cost();
        solution
    }

    /// Adds a route unless an equal route is already present.
    ///
    /// Returns `false` and leaves the solution untouched on a duplicate.
    pub fn add_route(&mut self, route: Route) -> bool {
        if self.routes.contains(&route) {
            return false;
        }
        self.global_cost += route.total_length();
        self.routes.push(route);
        true
    }

    /// Removes the first route equal to `route`, returning it if found.
    pub fn remove_route(&mut self, route: &Route) -> Option<Route> {
        let pos = self.routes.iter().position(|r| r == route)?;
        let removed = self.routes.remove(pos);
        self.global_cost -= removed.total_length();
        Some(removed)
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    ///
    /// Call [`Solution::recompute_global_cost`] after mutating.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Returns the number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Cached sum of route lengths.
    pub fn global_cost(&self) -> f64 {
        self.global_cost
    }

    /// Recomputes the global cost from the cached route lengths.
    pub fn recompute_global_cost(&mut self) {
        self.global_cost = self.routes.iter().map(|r| r.total_length()).sum();
    }

    /// Customer IDs of every route, concatenated in visit order.
    pub fn customer_ids(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.customers().iter().copied())
            .collect()
    }

    /// Returns `true` if every route is within its vehicle's capacity.
    pub fn is_feasible(&self) -> bool {
        self.routes.iter().all(|r| r.is_feasible())
    }

    /// Content hash of the ordered route sequences.
    ///
    /// Equal solutions always share a signature.
    pub fn signature(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.routes == other.routes
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.routes.hash(state);
    }
}
