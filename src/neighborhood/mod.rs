//! Randomized neighborhood operators over packings.
//!
//! Both operators take a [`Solution`] by reference and return a fresh one
//! reflecting a single change. Only moves that literally fit are applied,
//! so a feasible input always yields a feasible output. When no valid move
//! exists the operators return an unchanged copy.
//!
//! Candidate moves are enumerated directly instead of drawing at random
//! and retrying on failure, but the sampling weights are chosen so the
//! resulting distribution is the one the draw-and-retry scheme converges
//! to. See [`relocate`] and [`swap`] for the exact weights.

mod relocate;
mod swap;

pub use relocate::relocate;
pub use swap::swap;

use crate::packing::{Solution, Weight};
use rand::Rng;

/// A neighborhood operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Move one item into another container with enough free space.
    Relocate,
    /// Exchange two items between containers.
    Swap,
}

impl Move {
    pub const ALL: [Move; 2] = [Move::Relocate, Move::Swap];

    /// Picks an operator uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Applies this operator to `solution`.
    pub fn apply<R: Rng>(self, solution: &Solution, capacity: Weight, rng: &mut R) -> Solution {
        match self {
            Move::Relocate => relocate(solution, capacity, rng),
            Move::Swap => swap(solution, capacity, rng),
        }
    }
}

/// Applies a uniformly chosen operator to `solution`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_binpack::neighborhood::random_neighbor;
/// use u_binpack::packing::Solution;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let current = Solution::from(vec![vec![1, 2, 3], vec![6]]);
/// let next = random_neighbor(&current, 10, &mut rng);
/// assert_eq!(next.sorted_weights(), current.sorted_weights());
/// assert!(next.is_feasible(10));
/// ```
pub fn random_neighbor<R: Rng>(solution: &Solution, capacity: Weight, rng: &mut R) -> Solution {
    Move::random(rng).apply(solution, capacity, rng)
}
