//! Dense distance matrix.

use crate::models::Customer;

/// Row-major travel distances between every pair of locations.
///
/// Location 0 is the depot. Distances may be asymmetric: `get(a, b)` and
/// `get(b, a)` are stored independently.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 9.0],
///     vec![3.0, 0.0, 1.0],
///     vec![9.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 2.0);
/// assert_eq!(dm.get(1, 0), 3.0);
/// assert!(!dm.is_symmetric(1e-9));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Zero-filled matrix over `size` locations.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Euclidean distances between customer coordinates.
    pub fn from_customers(customers: &[Customer]) -> Self {
        let mut dm = Self::new(customers.len());
        for (i, a) in customers.iter().enumerate() {
            for (j, b) in customers.iter().enumerate().skip(i + 1) {
                let d = a.distance_to(b);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Returns `None` unless every row has one entry per row.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.concat(),
            size,
        })
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Overwrites the distance from `from` to `to` only.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(a, b)` and `get(b, a)` differ by at most `tol`
    /// for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }

    /// Change in length when `path` is traversed backwards, end edges excluded.
    ///
    /// Always zero on a symmetric matrix.
    pub fn reversal_delta(&self, path: &[usize]) -> f64 {
        path.windows(2)
            .map(|w| self.get(w[1], w[0]) - self.get(w[0], w[1]))
            .sum()
    }

    /// Closest of `candidates` to `from`; ties go to the first listed.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
