//! Distance oracle.
//!
//! Every route length in the crate is computed from a dense distance matrix.

mod matrix;

pub use matrix::DistanceMatrix;
