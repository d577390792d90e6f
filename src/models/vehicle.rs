//! Vehicle type with capacity and relaxation flag.

use serde::{Deserialize, Serialize};

/// A vehicle that services a route.
///
/// The `uncapacitated` flag is the relaxation used while optimizing a single
/// giant route: capacity checks are bypassed for routes served by a relaxed
/// vehicle. It travels with the vehicle rather than living in global state.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 200);
/// assert!(v.admits(200));
/// assert!(!v.admits(201));
///
/// let relaxed = v.relaxed();
/// assert!(relaxed.admits(10_000));
/// assert_eq!(relaxed.enforced(), v);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
    depot_id: usize,
    uncapacitated: bool,
}

impl Vehicle {
    /// Creates a capacitated vehicle with the given ID and capacity, based at depot 0.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self {
            id,
            capacity,
            depot_id: 0,
            uncapacitated: false,
        }
    }

    /// Sets the depot for this vehicle.
    pub fn with_depot(mut self, depot_id: usize) -> Self {
        self.depot_id = depot_id;
        self
    }

    /// Returns a copy of this vehicle whose capacity is ignored.
    pub fn relaxed(&self) -> Self {
        Self {
            uncapacitated: true,
            ..self.clone()
        }
    }

    /// Returns a copy of this vehicle whose capacity is honored.
    pub fn enforced(&self) -> Self {
        Self {
            uncapacitated: false,
            ..self.clone()
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Depot location ID (start and end of route).
    pub fn depot_id(&self) -> usize {
        self.depot_id
    }

    /// Returns `true` if capacity checks are bypassed.
    pub fn is_uncapacitated(&self) -> bool {
        self.uncapacitated
    }

    /// Returns `true` if this vehicle can carry `load`.
    pub fn admits(&self, load: i32) -> bool {
        self.uncapacitated || load <= self.capacity
    }
}
