//! Tabu Search driver over routing solutions.
//!
//! # Algorithm
//!
//! 1. Start from a copy of the initial solution as the incumbent
//! 2. At each iteration:
//!    a. Generate the neighborhood of the incumbent
//!    b. Drop candidates held in the tabu list
//!    c. Pick the cheapest survivor (first one on ties)
//!    d. Strictly cheaper: it becomes the incumbent and the swap partner
//!    e. Strictly costlier: every survivor enters the tabu list
//! 3. Terminate after `max_iterations`
//!
//! Equal-cost winners change nothing. An iteration whose candidates are all
//! tabu is skipped.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;
use tracing::{debug, info, trace};

use super::{neighborhood, TabuConfig, TabuList};
use crate::error::Result;
use crate::models::{Instance, Solution};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best solution found.
    pub best: Solution,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was last improved, if ever.
    pub best_iteration: Option<usize>,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Candidates removed because they were tabu.
    pub filtered: usize,
    /// Iterations in which no candidate survived the tabu filter.
    pub empty_iterations: usize,
    /// Largest tabu list length observed.
    pub max_tabu_len: usize,
}

/// Runs Tabu Search from `initial` with an RNG seeded from `config.seed`.
///
/// # Errors
///
/// Propagates neighborhood errors (see [`neighborhood`]).
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Solution, Vehicle};
/// use u_tabu_routing::tabu::{tabu_search, TabuConfig};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 1.0, 1),
///     Customer::new(2, -1.0, -1.0, 1),
///     Customer::new(3, -1.0, 1.0, 1),
///     Customer::new(4, 1.0, -1.0, 1),
/// ]);
/// let initial = Solution::from_routes(vec![Route::from_customers(
///     Vehicle::new(0, 10),
///     vec![1, 2, 3, 4],
///     &instance,
/// )]);
/// let config = TabuConfig::default().with_max_iterations(50).with_seed(42);
///
/// let result = tabu_search(&initial, &instance, &config).unwrap();
/// assert!(result.best_cost <= initial.global_cost());
/// ```
pub fn tabu_search(
    initial: &Solution,
    instance: &Instance,
    config: &TabuConfig,
) -> Result<TabuResult> {
    let mut rng = seeded_rng(config);
    tabu_search_with_rng(initial, instance, config, &mut rng)
}

/// Runs Tabu Search from `initial` using the given RNG.
///
/// `initial` is only read; the returned best is an independent copy.
pub fn tabu_search_with_rng<R: Rng>(
    initial: &Solution,
    instance: &Instance,
    config: &TabuConfig,
    rng: &mut R,
) -> Result<TabuResult> {
    let mut best = initial.clone();
    let mut best_cost = best.global_cost();
    let mut best_iteration = None;
    let mut swap_partner: Option<Solution> = None;

    let mut tabu = TabuList::new(config.tabu_capacity);
    let mut cost_history = Vec::with_capacity(config.max_iterations);
    let mut filtered = 0;
    let mut empty_iterations = 0;
    let mut max_tabu_len = 0;

    for iteration in 0..config.max_iterations {
        let mut candidates = neighborhood(&best, instance, config, swap_partner.as_ref(), rng)?;
        filtered += tabu.filter(&mut candidates);

        let Some(idx) = cheapest(&candidates) else {
            empty_iterations += 1;
            trace!(iteration, "no admissible candidate");
            cost_history.push(best_cost);
            continue;
        };

        let cost = candidates[idx].global_cost();
        if cost < best_cost {
            best = candidates.swap_remove(idx);
            best_cost = cost;
            best_iteration = Some(iteration);
            swap_partner = Some(best.clone());
            debug!(iteration, cost, routes = best.num_routes(), "new best solution");
        } else if cost > best_cost {
            tabu.extend(candidates);
        }

        max_tabu_len = max_tabu_len.max(tabu.len());
        cost_history.push(best_cost);
    }

    info!(
        event = "tabu_end",
        iterations = config.max_iterations,
        best_cost,
        filtered,
        empty_iterations,
        max_tabu_len,
    );

    Ok(TabuResult {
        best,
        best_cost,
        iterations: config.max_iterations,
        best_iteration,
        cost_history,
        filtered,
        empty_iterations,
        max_tabu_len,
    })
}

pub(crate) fn seeded_rng(config: &TabuConfig) -> impl Rng {
    u_numflow::random::create_rng(config.seed.unwrap_or_else(rand::random))
}

fn cheapest(candidates: &[Solution]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        if best.is_none_or(|b| candidate.global_cost() < candidates[b].global_cost()) {
            best = Some(i);
        }
    }
    best
}
