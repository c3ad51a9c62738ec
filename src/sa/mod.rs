//! Simulated Annealing (SA) for bin packing.
//!
//! Starts from the Best-Fit packing and explores relocate and swap moves
//! under the Metropolis acceptance rule with geometric cooling. The search
//! stops once a configured number of consecutive temperature phases leave
//! the solution unchanged.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::{BinPackingProblem, SaProblem};

use crate::packing::{Solution, Weight};

/// Packs `weights` with Best-Fit and refines the packing by annealing.
///
/// Returns the solution the chain converged on.
///
/// # Panics
///
/// Panics if `config` fails [`SaConfig::validate`].
///
/// # Examples
///
/// ```
/// use u_binpack::sa::{anneal, SaConfig};
///
/// let weights = [4, 8, 1, 4, 2, 1, 7, 3, 6, 5];
/// let config = SaConfig::new(100.0, 0.8, 50, 5)
///     .with_max_iterations(10_000)
///     .with_seed(42);
/// let solution = anneal(&weights, 10, &config);
///
/// assert!(solution.is_feasible(10));
/// assert_eq!(solution.item_count(), weights.len());
/// ```
pub fn anneal(weights: &[Weight], capacity: Weight, config: &SaConfig) -> Solution {
    SaRunner::run(&BinPackingProblem::new(weights, capacity), config).solution
}
