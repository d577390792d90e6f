//! Giant-route optimization followed by capacity subdivision.
//!
//! The single input route is searched with its vehicle relaxed, so moves
//! ignore capacity. The resulting tour is then split into feasible routes
//! for the real vehicle, and optionally refined by a second search.

use rand::Rng;
use tracing::info;

use super::runner::seeded_rng;
use super::{tabu_search_with_rng, TabuConfig};
use crate::error::{Result, TabuError};
use crate::models::{Instance, Solution};
use crate::split::subdivide;

/// Optimizes a one-route solution and subdivides it for the real capacity.
///
/// Uses an RNG seeded from `config.seed`.
///
/// # Errors
///
/// - [`TabuError::InvalidSingleRouteInput`] unless `initial` has exactly one route.
/// - [`TabuError::SubdivisionFailed`] if the tour cannot be split.
/// - Any search error.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Solution, Vehicle};
/// use u_tabu_routing::tabu::{tabu_single_route, TabuConfig};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 6),
///     Customer::new(2, 2.0, 0.0, 6),
///     Customer::new(3, -1.0, 0.0, 6),
///     Customer::new(4, -2.0, 0.0, 6),
/// ]);
/// let giant = Solution::from_routes(vec![Route::from_customers(
///     Vehicle::new(0, 12).relaxed(),
///     vec![1, 3, 2, 4],
///     &instance,
/// )]);
/// let config = TabuConfig::default().with_max_iterations(30).with_seed(42);
///
/// let best = tabu_single_route(&giant, &instance, &config).unwrap();
/// assert!(best.num_routes() >= 2);
/// assert!(best.is_feasible());
/// ```
pub fn tabu_single_route(
    initial: &Solution,
    instance: &Instance,
    config: &TabuConfig,
) -> Result<Solution> {
    let mut rng = seeded_rng(config);
    tabu_single_route_with_rng(initial, instance, config, &mut rng)
}

/// Same as [`tabu_single_route`] with an explicit RNG.
pub fn tabu_single_route_with_rng<R: Rng>(
    initial: &Solution,
    instance: &Instance,
    config: &TabuConfig,
    rng: &mut R,
) -> Result<Solution> {
    let [route] = initial.routes() else {
        return Err(TabuError::InvalidSingleRouteInput(initial.num_routes()));
    };
    let vehicle = route.vehicle().enforced();

    let mut relaxed = initial.clone();
    for r in relaxed.routes_mut() {
        r.set_vehicle(vehicle.relaxed());
    }

    info!(
        event = "relaxed_start",
        customers = route.len(),
        load = route.load(),
        capacity = vehicle.capacity(),
    );
    let phase_one = tabu_search_with_rng(&relaxed, instance, config, rng)?;

    let subdivided = subdivide(&phase_one.best, instance, &vehicle)?;
    info!(
        event = "subdivided",
        routes = subdivided.num_routes(),
        cost = subdivided.global_cost(),
    );

    if config.double_pass {
        let phase_two = tabu_search_with_rng(&subdivided, instance, config, rng)?;
        return Ok(phase_two.best);
    }
    Ok(subdivided)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Route, Vehicle};

    fn line_instance() -> Instance {
        Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 6),
            Customer::new(2, 2.0, 0.0, 6),
            Customer::new(3, -1.0, 0.0, 6),
            Customer::new(4, -2.0, 0.0, 6),
            Customer::new(5, 0.0, 3.0, 6),
        ])
    }

    fn giant(instance: &Instance, capacity: i32) -> Solution {
        Solution::from_routes(vec![Route::from_customers(
            Vehicle::new(0, capacity),
            vec![1, 3, 5, 2, 4],
            instance,
        )])
    }

    fn sorted_ids(sol: &Solution) -> Vec<usize> {
        let mut ids = sol.customer_ids();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_rejects_multi_route_input() {
        let instance = line_instance();
        let v = Vehicle::new(0, 30);
        let two = Solution::from_routes(vec![
            Route::from_customers(v.clone(), vec![1, 2], &instance),
            Route::from_customers(v, vec![3, 4, 5], &instance),
        ]);
        let config = TabuConfig::default().with_seed(1);
        assert_eq!(
            tabu_single_route(&two, &instance, &config),
            Err(TabuError::InvalidSingleRouteInput(2))
        );
        assert_eq!(
            tabu_single_route(&Solution::new(), &instance, &config),
            Err(TabuError::InvalidSingleRouteInput(0))
        );
    }

    #[test]
    fn test_overloaded_giant_route_is_subdivided() {
        let instance = line_instance();
        // load 30 against capacity 12
        let initial = giant(&instance, 12);
        let config = TabuConfig::default().with_max_iterations(40).with_seed(5);
        let best = tabu_single_route(&initial, &instance, &config).expect("ok");

        assert!(best.num_routes() >= 3);
        assert!(best.is_feasible());
        for route in best.routes() {
            assert!(!route.vehicle().is_uncapacitated());
            assert!(route.load() <= 12);
        }
        assert_eq!(sorted_ids(&best), vec![1, 2, 3, 4, 5]);
        // input untouched
        assert_eq!(initial.routes()[0].vehicle().capacity(), 12);
    }

    #[test]
    fn test_double_pass_keeps_feasibility() {
        let instance = line_instance();
        let initial = giant(&instance, 12);
        let config = TabuConfig::default()
            .with_max_iterations(20)
            .with_double_pass(true)
            .with_seed(8);
        let best = tabu_single_route(&initial, &instance, &config).expect("ok");
        assert!(best.is_feasible());
        assert_eq!(sorted_ids(&best), vec![1, 2, 3, 4, 5]);
    }
}
