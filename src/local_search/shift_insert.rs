//! Intra-route shift-insert: move one customer to another position.

use rand::Rng;

use crate::error::{Result, TabuError};
use crate::models::{Instance, Route};

/// Removes a uniformly chosen customer and reinserts it at a uniformly chosen
/// position, then recomputes the route length. Reinserting in place is allowed.
///
/// Fails with [`TabuError::RouteTooSmall`] on an empty route.
pub fn shift_insert<R: Rng>(route: &mut Route, instance: &Instance, rng: &mut R) -> Result<()> {
    let n = route.len();
    if n < 1 {
        return Err(TabuError::RouteTooSmall {
            len: n,
            required: 1,
        });
    }
    let from = rng.random_range(0..n);
    // after removal there are n - 1 customers and n insertion points
    let to = rng.random_range(0..n);
    shift_insert_at(route, from, to, instance);
    Ok(())
}

/// Moves the customer at `from` to index `to` of the shortened sequence and
/// recomputes the route.
///
/// # Panics
///
/// Panics if `from >= len` or `to >= len`.
pub fn shift_insert_at(route: &mut Route, from: usize, to: usize, instance: &Instance) {
    route.move_customer(from, to);
    route.recompute(instance);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Vehicle};

    fn line() -> Instance {
        Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 0.0, 1),
            Customer::new(2, 2.0, 0.0, 1),
            Customer::new(3, 3.0, 0.0, 1),
            Customer::new(4, 4.0, 0.0, 1),
        ])
    }

    #[test]
    fn test_shift_insert_empty_route() {
        let instance = line();
        let mut route = Route::new(Vehicle::new(0, 10));
        let mut rng = u_numflow::random::create_rng(42);
        assert!(matches!(
            shift_insert(&mut route, &instance, &mut rng),
            Err(TabuError::RouteTooSmall { len: 0, .. })
        ));
    }

    #[test]
    fn test_shift_insert_single_is_noop() {
        let instance = line();
        let mut route = Route::from_customers(Vehicle::new(0, 10), vec![3], &instance);
        let mut rng = u_numflow::random::create_rng(42);
        shift_insert(&mut route, &instance, &mut rng).expect("non-empty");
        assert_eq!(route.customers(), &[3]);
        assert!((route.total_length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_shift_insert_at() {
        let instance = line();
        let mut route = Route::from_customers(Vehicle::new(0, 10), vec![1, 2, 3, 4], &instance);
        shift_insert_at(&mut route, 0, 3, &instance);
        assert_eq!(route.customers(), &[2, 3, 4, 1]);
        // 0→2→3→4→1→0 = 2+1+1+3+1
        assert!((route.total_length() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_shift_insert_keeps_customers() {
        let instance = line();
        let mut route = Route::from_customers(Vehicle::new(0, 10), vec![1, 2, 3, 4], &instance);
        let mut rng = u_numflow::random::create_rng(5);
        for _ in 0..100 {
            shift_insert(&mut route, &instance, &mut rng).expect("non-empty");
            let mut ids = route.customers().to_vec();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4]);
        }
    }
}
