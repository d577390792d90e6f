//! Constructive heuristics for initial solutions.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor route building
//! - [`random_routes`] — Random order packed into capacity-feasible routes
//! - [`giant_route`] — One relaxed route over every customer

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor;
pub use random::{giant_route, random_routes};
