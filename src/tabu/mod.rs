//! Tabu Search over routing solutions.
//!
//! Whole solutions are kept in a bounded FIFO tabu memory. Each iteration
//! samples a neighborhood of the incumbent, drops tabu candidates and moves
//! only on strict improvement; non-improving neighborhoods are memorized.
//!
//! # Modules
//!
//! - [`TabuConfig`] — Search parameters
//! - [`TabuList`] — Bounded FIFO memory of forbidden solutions
//! - [`neighborhood`] — Basic and complex neighborhood generation
//! - [`tabu_search`] — Main driver
//! - [`tabu_single_route`] — Relaxed giant-route search plus subdivision
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighborhood;
mod runner;
mod single_route;
mod types;

pub use config::TabuConfig;
pub use memory::TabuList;
pub use neighborhood::neighborhood;
pub use runner::{tabu_search, tabu_search_with_rng, TabuResult};
pub use single_route::{tabu_single_route, tabu_single_route_with_rng};
pub use types::NeighborhoodKind;
