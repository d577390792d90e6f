//! Domain model types for capacitated vehicle routing.
//!
//! Provides customers with demands, vehicles with capacity (and the
//! uncapacitated relaxation), routes as ordered visit sequences, solutions
//! as route collections, and the instance that ties them to a distance oracle.

mod customer;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use customer::Customer;
pub use instance::Instance;
pub use route::Route;
pub use solution::Solution;
pub use vehicle::Vehicle;
