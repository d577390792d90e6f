//! Problem instance: locations, demands, and the distance oracle.

use super::Customer;
use crate::distance::DistanceMatrix;

/// A routing instance.
///
/// Index 0 of `customers` is the depot; indices `1..=N` are customers. The
/// distance matrix is the oracle every route length is computed from.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 3.0, 4.0, 10),
/// ]);
/// assert_eq!(instance.num_customers(), 1);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(instance.demand(1), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    customers: Vec<Customer>,
    distances: DistanceMatrix,
    symmetric: bool,
}

/// Tolerance under which two directed distances count as equal.
const SYMMETRY_TOL: f64 = 1e-9;

impl Instance {
    /// Creates an instance with Euclidean distances between customers.
    pub fn new(customers: Vec<Customer>) -> Self {
        let distances = DistanceMatrix::from_customers(&customers);
        Self {
            customers,
            distances,
            symmetric: true,
        }
    }

    /// Creates an instance with an explicit distance matrix.
    ///
    /// Returns `None` if the matrix size does not match the number of locations.
    pub fn with_distances(customers: Vec<Customer>, distances: DistanceMatrix) -> Option<Self> {
        if distances.size() != customers.len() {
            return None;
        }
        let symmetric = distances.is_symmetric(SYMMETRY_TOL);
        Some(Self {
            customers,
            distances,
            symmetric,
        })
    }

    /// Returns all locations (index 0 = depot).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Returns the distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of customers (excluding depot).
    pub fn num_customers(&self) -> usize {
        self.customers.len().saturating_sub(1)
    }

    /// Returns `true` if every distance equals its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Travel distance from location `from` to location `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Demand of the given location.
    pub fn demand(&self, id: usize) -> i32 {
        self.customers[id].demand()
    }

    /// Sum of all customer demands.
    pub fn total_demand(&self) -> i32 {
        self.customers.iter().skip(1).map(|c| c.demand()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_distances_size_mismatch() {
        let customers = vec![Customer::depot(0.0, 0.0), Customer::new(1, 1.0, 0.0, 1)];
        assert!(Instance::with_distances(customers.clone(), DistanceMatrix::new(3)).is_none());
        assert!(Instance::with_distances(customers, DistanceMatrix::new(2)).is_some());
    }

    #[test]
    fn test_symmetry_detected_once() {
        let customers = vec![Customer::depot(0.0, 0.0), Customer::new(1, 1.0, 0.0, 1)];
        assert!(Instance::new(customers.clone()).is_symmetric());

        let mut one_way = DistanceMatrix::new(2);
        one_way.set(0, 1, 1.0);
        one_way.set(1, 0, 3.0);
        let instance = Instance::with_distances(customers, one_way).expect("matching size");
        assert!(!instance.is_symmetric());
    }

    #[test]
    fn test_total_demand_skips_depot() {
        let instance = Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 4),
            Customer::new(2, 2.0, 0.0, 6),
        ]);
        assert_eq!(instance.total_demand(), 10);
        assert_eq!(instance.num_customers(), 2);
    }
}
