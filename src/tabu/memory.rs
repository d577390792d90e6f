//! Bounded FIFO tabu memory of solutions.

use std::collections::VecDeque;

use crate::models::Solution;

/// FIFO buffer of forbidden solutions with a fixed capacity.
///
/// Membership compares signatures first and confirms with full solution
/// equality, so hash collisions never forbid a distinct solution.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::models::Solution;
/// use u_tabu_routing::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.extend(vec![Solution::new(), Solution::new(), Solution::new()]);
/// assert_eq!(tabu.len(), 2);
/// assert!(tabu.contains(&Solution::new()));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    entries: VecDeque<(u64, Solution)>,
}

impl TabuList {
    /// Creates an empty tabu list holding at most `capacity` solutions.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Maximum number of stored solutions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored solutions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a solution equal to `solution` is stored.
    pub fn contains(&self, solution: &Solution) -> bool {
        let sig = solution.signature();
        self.entries.iter().any(|(s, stored)| *s == sig && stored == solution)
    }

    /// Appends `solutions` in order, then evicts the oldest entries until the
    /// list is back within capacity.
    pub fn extend(&mut self, solutions: impl IntoIterator<Item = Solution>) {
        for solution in solutions {
            self.entries.push_back((solution.signature(), solution));
        }
        let excess = self.entries.len().saturating_sub(self.capacity);
        self.entries.drain(..excess);
    }

    /// Removes from `candidates` every solution stored in this list.
    ///
    /// Returns the number of candidates removed.
    pub fn filter(&self, candidates: &mut Vec<Solution>) -> usize {
        let before = candidates.len();
        candidates.retain(|c| !self.contains(c));
        before - candidates.len()
    }

    /// Iterates over stored solutions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.entries.iter().map(|(_, s)| s)
    }
}
