//! Error types for tabu routing.

use thiserror::Error;

/// Errors raised by transformations, neighborhood generation, and the tabu
/// drivers.
///
/// The drivers never swallow these: a failure while building a candidate
/// means a model invariant was broken and is returned to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabuError {
    /// The operation needs more customers than the route holds.
    #[error("route has {len} customers, at least {required} required")]
    RouteTooSmall {
        /// Customers in the route.
        len: usize,
        /// Minimum required by the operation.
        required: usize,
    },

    /// A capacitated route ended up carrying more than its vehicle allows.
    #[error("route load {load} exceeds vehicle capacity {capacity}")]
    CapacityExceeded {
        /// Load of the offending route.
        load: i32,
        /// Capacity of its vehicle.
        capacity: i32,
    },

    /// A transformation tried to materialize a route without customers.
    #[error("transformation produced an empty customer list")]
    EmptyClientList,

    /// The transformation is unknown or not valid in this context.
    #[error("transformation `{transformation}` is not handled: {reason}")]
    UnhandledTransformation {
        /// Name of the rejected transformation.
        transformation: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The neighborhood kind is not recognized.
    #[error("unknown neighborhood kind `{0}`")]
    UnhandledNeighborhoodKind(String),

    /// The single-route search was given a solution without exactly one route.
    #[error("single-route search expects exactly one route, got {0}")]
    InvalidSingleRouteInput(usize),

    /// The giant route could not be cut into capacity-feasible routes.
    #[error("subdivision failed: {0}")]
    SubdivisionFailed(String),
}

/// Result type alias for tabu routing operations.
pub type Result<T> = std::result::Result<T, TabuError>;
