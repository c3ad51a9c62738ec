//! Core trait for Simulated Annealing and the bin-packing problem.

use crate::neighborhood::random_neighbor;
use crate::packing::{best_fit, Solution, Weight};
use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The problem supplies the starting point, the cost and the neighborhood.
/// [`SaRunner`](super::SaRunner) handles temperature, acceptance and the
/// stall-based stopping rule, which is why solutions must be comparable.
///
/// SA minimizes the cost function.
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + PartialEq + Send;

    /// Creates the initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the current solution without modifying it.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}

/// One-dimensional bin packing over a fixed list of weights.
///
/// Starts from [`best_fit`], moves with a uniformly chosen relocate or swap
/// and scores a packing by the number of containers that are not filled
/// exactly to capacity.
#[derive(Debug, Clone, Copy)]
pub struct BinPackingProblem<'a> {
    weights: &'a [Weight],
    capacity: Weight,
}

impl<'a> BinPackingProblem<'a> {
    pub fn new(weights: &'a [Weight], capacity: Weight) -> Self {
        Self { weights, capacity }
    }

    pub fn weights(&self) -> &'a [Weight] {
        self.weights
    }

    pub fn capacity(&self) -> Weight {
        self.capacity
    }
}

impl SaProblem for BinPackingProblem<'_> {
    type Solution = Solution;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Solution {
        best_fit(self.weights, self.capacity)
    }

    fn cost(&self, solution: &Solution) -> f64 {
        solution.unfilled_count(self.capacity) as f64
    }

    fn neighbor<R: Rng>(&self, solution: &Solution, rng: &mut R) -> Solution {
        random_neighbor(solution, self.capacity, rng)
    }
}
