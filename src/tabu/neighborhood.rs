//! Neighborhood generation for the tabu drivers.
//!
//! # Basic
//!
//! Each neighbor is a deep copy of the current solution in which the chosen
//! transformation was applied once to every route.
//!
//! # Complex
//!
//! Only defined for the swap transformation. For each route of each copy, a
//! fair coin decides between:
//!
//! - meta-exchange with the candidate's counterpart of every route of the
//!   previous best solution (when one exists), or
//! - a 2-opt move with swap fallback.
//!
//! The counterpart of a previous-best route `s` is the other candidate route
//! sharing the most customers with `s` (lowest index on ties). Exchanges
//! happen inside the candidate, so the previous best is only read.

use rand::Rng;

use super::{NeighborhoodKind, TabuConfig};
use crate::error::{Result, TabuError};
use crate::local_search::{apply_transformation, meta_exchange, Transformation};
use crate::models::{Instance, Route, Solution};

/// Generates `config.neighborhood_size` neighbors of `current`.
///
/// Neighbors are returned in generation order, each with a fresh
/// `global_cost`. `previous_best` feeds the complex neighborhood.
///
/// # Errors
///
/// - [`TabuError::UnhandledTransformation`] for a complex neighborhood with a
///   transformation other than swap.
/// - Any transformation error, propagated unchanged.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::{Customer, Instance, Route, Solution, Vehicle};
/// use u_tabu_routing::tabu::{neighborhood, TabuConfig};
///
/// let instance = Instance::new(vec![
///     Customer::depot(0.0, 0.0),
///     Customer::new(1, 1.0, 0.0, 1),
///     Customer::new(2, 0.0, 1.0, 1),
///     Customer::new(3, -1.0, 0.0, 1),
/// ]);
/// let current = Solution::from_routes(vec![Route::from_customers(
///     Vehicle::new(0, 10),
///     vec![1, 2, 3],
///     &instance,
/// )]);
/// let config = TabuConfig::default().with_neighborhood_size(5);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let neighbors = neighborhood(&current, &instance, &config, None, &mut rng).unwrap();
/// assert_eq!(neighbors.len(), 5);
/// ```
pub fn neighborhood<R: Rng>(
    current: &Solution,
    instance: &Instance,
    config: &TabuConfig,
    previous_best: Option<&Solution>,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    match config.neighborhood_kind {
        NeighborhoodKind::Basic => basic_neighborhood(
            current,
            instance,
            config.transformation,
            config.neighborhood_size,
            rng,
        ),
        NeighborhoodKind::Complex => complex_neighborhood(
            current,
            instance,
            config.transformation,
            config.neighborhood_size,
            config.meta_exchange_attempts,
            previous_best,
            rng,
        ),
    }
}

fn basic_neighborhood<R: Rng>(
    current: &Solution,
    instance: &Instance,
    transformation: Transformation,
    size: usize,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    let mut neighbors = Vec::with_capacity(size);
    for _ in 0..size {
        let mut neighbor = current.clone();
        for route in neighbor.routes_mut() {
            apply_transformation(route, transformation, instance, rng)?;
        }
        neighbor.recompute_global_cost();
        neighbors.push(neighbor);
    }
    Ok(neighbors)
}

fn complex_neighborhood<R: Rng>(
    current: &Solution,
    instance: &Instance,
    transformation: Transformation,
    size: usize,
    attempts: usize,
    previous_best: Option<&Solution>,
    rng: &mut R,
) -> Result<Vec<Solution>> {
    if transformation != Transformation::Swap {
        return Err(TabuError::UnhandledTransformation {
            transformation: transformation.to_string(),
            reason: "the complex neighborhood only supports swap",
        });
    }
    let partner = previous_best.filter(|p| p.num_routes() > 0);

    let mut neighbors = Vec::with_capacity(size);
    for _ in 0..size {
        let mut neighbor = current.clone();
        for r in 0..neighbor.num_routes() {
            let exchange = rng.random_bool(0.5);
            match partner {
                Some(partner) if exchange => {
                    for s in partner.routes() {
                        if let Some(k) = counterpart(neighbor.routes(), s, r) {
                            let (a, b) = pair_mut(neighbor.routes_mut(), r, k);
                            meta_exchange(a, b, attempts, instance, rng);
                        }
                    }
                }
                _ => apply_transformation(
                    &mut neighbor.routes_mut()[r],
                    Transformation::TwoOpt,
                    instance,
                    rng,
                )?,
            }
        }
        neighbor.recompute_global_cost();
        neighbors.push(neighbor);
    }
    Ok(neighbors)
}

/// Index of the route other than `skip` sharing the most customers with `target`.
fn counterpart(routes: &[Route], target: &Route, skip: usize) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (k, route) in routes.iter().enumerate() {
        if k == skip {
            continue;
        }
        let overlap = route
            .customers()
            .iter()
            .filter(|&&c| target.contains(c))
            .count();
        if overlap > 0 && best.is_none_or(|(_, o)| overlap > o) {
            best = Some((k, overlap));
        }
    }
    best.map(|(k, _)| k)
}

/// Mutable references to two distinct routes.
fn pair_mut(routes: &mut [Route], a: usize, b: usize) -> (&mut Route, &mut Route) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = routes.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = routes.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Vehicle};

    fn instance() -> Instance {
        Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 5.0, 1.0, 5),
            Customer::new(2, -5.0, -1.0, 5),
            Customer::new(3, 5.0, -1.0, 5),
            Customer::new(4, -5.0, 1.0, 5),
            Customer::new(5, 6.0, 0.0, 5),
            Customer::new(6, -6.0, 0.0, 5),
        ])
    }

    fn interleaved(instance: &Instance) -> Solution {
        let v = Vehicle::new(0, 20);
        Solution::from_routes(vec![
            Route::from_customers(v.clone(), vec![1, 4, 5], instance),
            Route::from_customers(v, vec![2, 3, 6], instance),
        ])
    }

    fn sorted_ids(sol: &Solution) -> Vec<usize> {
        let mut ids = sol.customer_ids();
        ids.sort_unstable();
        ids
    }

    fn cost_is_fresh(sol: &Solution) -> bool {
        let sum: f64 = sol.routes().iter().map(|r| r.total_length()).sum();
        (sol.global_cost() - sum).abs() < 1e-9
    }

    #[test]
    fn test_basic_size_zero_is_empty() {
        let instance = instance();
        let current = interleaved(&instance);
        let config = TabuConfig::default().with_neighborhood_size(0);
        let mut rng = u_numflow::random::create_rng(42);
        let neighbors = neighborhood(&current, &instance, &config, None, &mut rng).expect("ok");
        assert!(neighbors.is_empty());
    }

    #[test]
    fn test_basic_preserves_customers_and_costs() {
        let instance = instance();
        let current = interleaved(&instance);
        let mut rng = u_numflow::random::create_rng(42);
        for t in Transformation::ALL {
            let config = TabuConfig::default()
                .with_neighborhood_size(10)
                .with_transformation(t);
            let neighbors =
                neighborhood(&current, &instance, &config, None, &mut rng).expect("ok");
            assert_eq!(neighbors.len(), 10);
            for n in &neighbors {
                assert_eq!(sorted_ids(n), vec![1, 2, 3, 4, 5, 6]);
                assert_eq!(n.num_routes(), 2);
                assert!(cost_is_fresh(n));
                assert!(n.is_feasible());
            }
        }
        // the source solution is untouched
        assert_eq!(current, interleaved(&instance));
    }

    #[test]
    fn test_complex_rejects_non_swap() {
        let instance = instance();
        let current = interleaved(&instance);
        let config = TabuConfig::default()
            .with_neighborhood_kind(NeighborhoodKind::Complex)
            .with_transformation(Transformation::Inversion);
        let mut rng = u_numflow::random::create_rng(42);
        assert!(matches!(
            neighborhood(&current, &instance, &config, None, &mut rng),
            Err(TabuError::UnhandledTransformation { .. })
        ));
    }

    #[test]
    fn test_complex_with_partner_preserves_customers() {
        let instance = instance();
        let current = interleaved(&instance);
        let partner = current.clone();
        let config = TabuConfig::default()
            .with_neighborhood_kind(NeighborhoodKind::Complex)
            .with_neighborhood_size(20);
        let mut rng = u_numflow::random::create_rng(42);
        let neighbors =
            neighborhood(&current, &instance, &config, Some(&partner), &mut rng).expect("ok");
        assert_eq!(neighbors.len(), 20);
        for n in &neighbors {
            assert_eq!(sorted_ids(n), vec![1, 2, 3, 4, 5, 6]);
            assert!(n.is_feasible());
            assert!(cost_is_fresh(n));
        }
        assert_eq!(partner, current);
        // exchanges that separate the clusters shorten the pair
        assert!(neighbors
            .iter()
            .any(|n| n.global_cost() < current.global_cost() - 1e-9));
    }

    #[test]
    fn test_complex_without_partner_uses_two_opt() {
        let instance = instance();
        let current = interleaved(&instance);
        let config = TabuConfig::default()
            .with_neighborhood_kind(NeighborhoodKind::Complex)
            .with_neighborhood_size(5);
        let mut rng = u_numflow::random::create_rng(42);
        let neighbors = neighborhood(&current, &instance, &config, None, &mut rng).expect("ok");
        for n in &neighbors {
            // 2-opt and swap never move customers between routes
            let mut r0 = n.routes()[0].customers().to_vec();
            r0.sort_unstable();
            assert_eq!(r0, vec![1, 4, 5]);
        }
    }

    #[test]
    fn test_counterpart_picks_largest_overlap() {
        let instance = instance();
        let v = Vehicle::new(0, 100);
        let routes = vec![
            Route::from_customers(v.clone(), vec![1, 2], &instance),
            Route::from_customers(v.clone(), vec![3, 4], &instance),
            Route::from_customers(v.clone(), vec![5, 6], &instance),
        ];
        let target = Route::from_customers(v.clone(), vec![3, 4, 5], &instance);
        assert_eq!(counterpart(&routes, &target, 0), Some(1));
        assert_eq!(counterpart(&routes, &target, 1), Some(2));
        let stranger = Route::from_customers(v, vec![1], &instance);
        assert_eq!(counterpart(&routes, &stranger, 0), None);
    }

    #[test]
    fn test_pair_mut_order() {
        let instance = instance();
        let v = Vehicle::new(0, 100);
        let mut routes = vec![
            Route::from_customers(v.clone(), vec![1], &instance),
            Route::from_customers(v.clone(), vec![2], &instance),
            Route::from_customers(v, vec![3], &instance),
        ];
        let (a, b) = pair_mut(&mut routes, 2, 0);
        assert_eq!(a.customers(), &[3]);
        assert_eq!(b.customers(), &[1]);
    }
}
