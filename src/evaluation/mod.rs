//! Route evaluation: length from the distance oracle, load, and capacity checks.

mod evaluator;

pub use evaluator::{check_capacity, route_length, route_load, RouteEvaluator};
