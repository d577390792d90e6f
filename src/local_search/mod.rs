//! Transformation catalog used to build tabu neighborhoods.
//!
//! - [`swap`] — Exchange two customers of a route
//! - [`shift_insert`] — Move one customer to another position
//! - [`inversion`] — Reverse a sub-sequence
//! - [`two_opt`] — Best-improvement 2-opt with a fallback move
//! - [`meta_exchange`] — Customer exchange between two routes

mod exchange;
mod inversion;
mod shift_insert;
mod swap;
mod two_opt;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabuError};
use crate::models::{Instance, Route};

pub use exchange::meta_exchange;
pub use inversion::{inversion, inversion_at};
pub use shift_insert::{shift_insert, shift_insert_at};
pub use swap::{swap, swap_at};
pub use two_opt::two_opt;

/// Intra-route transformation applied to every route of a neighbor.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::local_search::Transformation;
///
/// let t: Transformation = "2-opt".parse().unwrap();
/// assert_eq!(t, Transformation::TwoOpt);
/// assert_eq!(t.min_route_len(), 4);
/// assert!("three-opt".parse::<Transformation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transformation {
    /// Exchange two customers.
    Swap,
    /// Remove one customer and reinsert it elsewhere.
    ShiftInsert,
    /// Reverse a sub-sequence.
    Inversion,
    /// Best-improvement 2-opt, falling back to a swap.
    #[serde(rename = "2-opt")]
    TwoOpt,
}

impl Transformation {
    /// Every transformation, in declaration order.
    pub const ALL: [Transformation; 4] = [
        Transformation::Swap,
        Transformation::ShiftInsert,
        Transformation::Inversion,
        Transformation::TwoOpt,
    ];

    /// Fewest customers a route needs for this transformation.
    pub fn min_route_len(self) -> usize {
        match self {
            Transformation::Swap => 2,
            Transformation::ShiftInsert => 1,
            Transformation::Inversion => 2,
            Transformation::TwoOpt => 4,
        }
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Transformation::Swap => "swap",
            Transformation::ShiftInsert => "shift-insert",
            Transformation::Inversion => "inversion",
            Transformation::TwoOpt => "2-opt",
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = TabuError;

    fn from_str(s: &str) -> Result<Self> {
        Transformation::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TabuError::UnhandledTransformation {
                transformation: s.to_string(),
                reason: "unknown transformation",
            })
    }
}

/// Applies `transformation` once to `route` in place.
///
/// A route shorter than [`Transformation::min_route_len`] has no neighbor
/// under that move and is left unchanged, except that 2-opt on two or three
/// customers applies its swap fallback directly.
///
/// # Errors
///
/// Propagates any error raised by the transformation itself.
pub fn apply_transformation<R: Rng>(
    route: &mut Route,
    transformation: Transformation,
    instance: &Instance,
    rng: &mut R,
) -> Result<()> {
    match transformation {
        Transformation::TwoOpt if route.len() >= Transformation::TwoOpt.min_route_len() => {
            *route = two_opt(route, Transformation::Swap, instance, rng)?;
            Ok(())
        }
        Transformation::TwoOpt => apply_transformation(route, Transformation::Swap, instance, rng),
        t if route.len() < t.min_route_len() => Ok(()),
        Transformation::Swap => swap(route, instance, rng),
        Transformation::ShiftInsert => shift_insert(route, instance, rng),
        Transformation::Inversion => inversion(route, instance, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, Vehicle};

    fn instance() -> Instance {
        Instance::new(vec![
            Customer::depot(0.0, 0.0),
            Customer::new(1, 1.0, 1.0, 1),
            Customer::new(2, -1.0, 1.0, 1),
            Customer::new(3, -1.0, -1.0, 1),
            Customer::new(4, 1.0, -1.0, 1),
        ])
    }

    #[test]
    fn test_parse_and_display() {
        for t in Transformation::ALL {
            assert_eq!(t.to_string().parse::<Transformation>(), Ok(t));
        }
        assert_eq!(
            " Shift-Insert ".parse::<Transformation>(),
            Ok(Transformation::ShiftInsert)
        );
        assert!(matches!(
            "or-opt".parse::<Transformation>(),
            Err(TabuError::UnhandledTransformation { .. })
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Transformation::TwoOpt).expect("serialize");
        assert_eq!(json, "\"2-opt\"");
        let back: Transformation = serde_json::from_str("\"shift-insert\"").expect("deserialize");
        assert_eq!(back, Transformation::ShiftInsert);
    }

    #[test]
    fn test_apply_skips_undersized_routes() {
        let instance = instance();
        let mut rng = u_numflow::random::create_rng(42);
        for t in [Transformation::Swap, Transformation::Inversion] {
            let mut route = Route::from_customers(Vehicle::new(0, 10), vec![3], &instance);
            apply_transformation(&mut route, t, &instance, &mut rng).expect("skipped");
            assert_eq!(route.customers(), &[3]);
        }
        let mut empty = Route::new(Vehicle::new(0, 10));
        apply_transformation(&mut empty, Transformation::ShiftInsert, &instance, &mut rng)
            .expect("skipped");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_apply_two_opt_short_route_falls_back_to_swap() {
        let instance = instance();
        let mut rng = u_numflow::random::create_rng(42);
        let mut route = Route::from_customers(Vehicle::new(0, 10), vec![1, 2], &instance);
        apply_transformation(&mut route, Transformation::TwoOpt, &instance, &mut rng)
            .expect("fallback");
        assert_eq!(route.customers(), &[2, 1]);

        let mut single = Route::from_customers(Vehicle::new(0, 10), vec![1], &instance);
        apply_transformation(&mut single, Transformation::TwoOpt, &instance, &mut rng)
            .expect("skipped");
        assert_eq!(single.customers(), &[1]);
    }

    #[test]
    fn test_apply_keeps_metrics_fresh() {
        let instance = instance();
        let mut rng = u_numflow::random::create_rng(8);
        for t in Transformation::ALL {
            let mut route =
                Route::from_customers(Vehicle::new(0, 10), vec![1, 3, 2, 4], &instance);
            apply_transformation(&mut route, t, &instance, &mut rng).expect("applies");
            let expected =
                crate::evaluation::route_length(route.customers(), 0, instance.distances());
            assert!((route.total_length() - expected).abs() < 1e-10);
        }
    }
}
