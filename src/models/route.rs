//! Route type.

use std::hash::{Hash, Hasher};

use super::{Instance, Vehicle};
use crate::evaluation::{route_length, route_load};

/// An ordered sequence of customer visits assigned to a single vehicle.
///
/// A route starts and ends at the vehicle's depot (not stored in the
/// sequence). `total_length` and `load` are caches refreshed by
/// [`Route::recompute`], which always sums from scratch.
///
/// Two routes are equal when their ordered customer sequences are equal;
/// the vehicle and cached metrics do not take part in comparisons.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Vehicle};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
///     Customer::new(2, 6.0, 8.0, 20),
/// ]);
/// let route = Route::from_customers(Vehicle::new(0, 100), vec![1, 2], &instance);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.load(), 30);
/// assert!((route.total_length() - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    vehicle: Vehicle,
    customers: Vec<usize>,
    total_length: f64,
    load: i32,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            customers: Vec::new(),
            total_length: 0.0,
            load: 0,
        }
    }

    /// Creates a route visiting `customers` in order and computes its metrics.
    pub fn from_customers(vehicle: Vehicle, customers: Vec<usize>, instance: &Instance) -> Self {
        let mut route = Self {
            vehicle,
            customers,
            total_length: 0.0,
            load: 0,
        };
        route.recompute(instance);
        route
    }

    /// Returns the vehicle serving this route.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Replaces the vehicle serving this route.
    pub fn set_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicle = vehicle;
    }

    /// Returns the customer IDs in visit order.
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Returns the number of customer visits (excluding depot).
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if this route has no customer visits.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Returns `true` if the route visits the given customer.
    pub fn contains(&self, customer_id: usize) -> bool {
        self.customers.contains(&customer_id)
    }

    /// Total length, depot legs included.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Sum of the demands served by this route.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Returns `true` if the vehicle can carry the route's load.
    pub fn is_feasible(&self) -> bool {
        self.vehicle.admits(self.load)
    }

    /// Recomputes `total_length` and `load` from scratch.
    pub fn recompute(&mut self, instance: &Instance) {
        self.total_length = route_length(
            &self.customers,
            self.vehicle.depot_id(),
            instance.distances(),
        );
        self.load = route_load(&self.customers, instance.customers());
    }

    /// Exchanges the customers at positions `i` and `j`.
    ///
    /// Cached metrics are not refreshed; call [`Route::recompute`].
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap_positions(&mut self, i: usize, j: usize) {
        self.customers.swap(i, j);
    }

    /// Reverses the customers in positions `i..=j`.
    ///
    /// Cached metrics are not refreshed; call [`Route::recompute`].
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j` is out of bounds.
    pub fn reverse_segment(&mut self, i: usize, j: usize) {
        self.customers[i..=j].reverse();
    }

    /// Removes the customer at `from` and reinserts it at `to` (an index
    /// into the shortened sequence).
    ///
    /// Cached metrics are not refreshed; call [`Route::recompute`].
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds or `to > len - 1`.
    pub fn move_customer(&mut self, from: usize, to: usize) {
        let customer = self.customers.remove(from);
        self.customers.insert(to, customer);
    }

    /// Puts `customer_id` at position `pos` and returns the customer it replaced.
    ///
    /// Cached metrics are not refreshed; call [`Route::recompute`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn replace_customer(&mut self, pos: usize, customer_id: usize) -> usize {
        std::mem::replace(&mut self.customers[pos], customer_id)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.customers == other.customers
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.customers.hash(state);
    }
}
