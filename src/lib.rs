//! # u-tabu-routing
//!
//! Tabu Search for the capacitated vehicle routing problem. Whole solutions
//! are memorized in a bounded FIFO tabu list, neighborhoods are sampled by
//! applying randomized intra-route transformations (optionally mixed with
//! inter-route exchanges), and a giant-route mode optimizes under relaxed
//! capacity before splitting into feasible routes.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, Vehicle, Route, Solution, Instance)
//! - [`distance`] — Distance matrix
//! - [`evaluation`] — Route length, load, and capacity checks
//! - [`constructive`] — Initial solutions (Nearest Neighbor, random, giant route)
//! - [`local_search`] — Transformations (swap, shift-insert, inversion, 2-opt, meta-exchange)
//! - [`split`] — Prins split of a giant route into capacity-feasible routes
//! - [`tabu`] — Tabu Search driver and single-route wrapper
//! - [`error`] — Error type shared by every fallible operation

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod split;
pub mod tabu;

pub use error::{Result, TabuError};
