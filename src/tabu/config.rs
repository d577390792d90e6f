//! Tabu Search configuration.

use serde::{Deserialize, Serialize};

use super::NeighborhoodKind;
use crate::local_search::Transformation;

/// Configuration parameters for the tabu drivers.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::local_search::Transformation;
/// use u_tabu_routing::tabu::{NeighborhoodKind, TabuConfig};
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_capacity(50)
///     .with_transformation(Transformation::TwoOpt)
///     .with_neighborhood_kind(NeighborhoodKind::Basic)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_capacity, 50);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Maximum number of solutions held in the tabu list.
    pub tabu_capacity: usize,
    /// Number of iterations (the only termination criterion).
    pub max_iterations: usize,
    /// Number of neighbors generated per iteration.
    pub neighborhood_size: usize,
    /// Transformation applied to routes.
    pub transformation: Transformation,
    /// How neighbors are generated.
    pub neighborhood_kind: NeighborhoodKind,
    /// Exchange attempts per route pair in the complex neighborhood.
    pub meta_exchange_attempts: usize,
    /// Run a second tabu pass after subdividing a giant route.
    pub double_pass: bool,
    /// Random seed (None for a fresh seed per run).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_capacity: 100,
            max_iterations: 500,
            neighborhood_size: 20,
            transformation: Transformation::Swap,
            neighborhood_kind: NeighborhoodKind::Basic,
            meta_exchange_attempts: 40,
            double_pass: false,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, n: usize) -> Self {
        self.tabu_capacity = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of neighbors generated per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the route transformation.
    pub fn with_transformation(mut self, t: Transformation) -> Self {
        self.transformation = t;
        self
    }

    /// Sets the neighborhood kind.
    pub fn with_neighborhood_kind(mut self, kind: NeighborhoodKind) -> Self {
        self.neighborhood_kind = kind;
        self
    }

    /// Sets the exchange attempts used by the complex neighborhood.
    pub fn with_meta_exchange_attempts(mut self, n: usize) -> Self {
        self.meta_exchange_attempts = n;
        self
    }

    /// Enables or disables the second pass of the single-route search.
    pub fn with_double_pass(mut self, double_pass: bool) -> Self {
        self.double_pass = double_pass;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
