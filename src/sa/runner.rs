//! SA execution loop.
//!
//! The run moves through three states:
//!
//! 1. **Constructing**: the problem builds its initial solution.
//! 2. **Searching**: each temperature phase evaluates `L` neighbors under
//!    the Metropolis rule, then cools `T` by the ratio `r`. A phase that
//!    ends on the solution it started from bumps the stall counter; any
//!    other phase resets it.
//! 3. **Converged**: the stall counter reached `E`.
//!
//! An optional iteration budget or cancellation flag ends the search
//! early, before the stall counter gets there.

use super::config::SaConfig;
use super::types::SaProblem;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SaResult<S: Clone> {
    /// The solution the chain ended on.
    pub solution: S,

    /// Cost of the final solution.
    pub cost: f64,

    /// The lowest-cost solution visited.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Number of completed temperature phases.
    pub phases: usize,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Stall counter when the loop stopped. Equals the configured limit
    /// unless cancelled or out of iteration budget.
    pub stall_count: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Current cost at the start and after every phase.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> SaResult<P::Solution> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token, checked before each
    /// temperature phase.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult<P::Solution> {
        if let Err(e) = config.validate() {
            panic!("invalid SaConfig: {e}");
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut stall_count = 0usize;
        let mut phases = 0usize;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![current_cost];

        debug!("initial solution: cost {current_cost}");

        while stall_count < config.stall_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let snapshot = current.clone();
            let mut out_of_budget = false;

            for _ in 0..config.steps_per_temperature {
                if config.max_iterations > 0 && total_iterations >= config.max_iterations {
                    out_of_budget = true;
                    break;
                }

                let neighbor = problem.neighbor(&current, &mut rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis acceptance criterion
                let accept = if delta <= 0.0 {
                    if delta < 0.0 {
                        improving_moves += 1;
                    }
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) <= probability
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                    }
                }

                total_iterations += 1;
            }

            // A phase cut short by the budget is not a completed phase
            if out_of_budget {
                break;
            }

            temperature *= config.cooling_ratio;
            phases += 1;

            if current == snapshot {
                stall_count += 1;
            } else {
                stall_count = 0;
            }

            cost_history.push(current_cost);

            debug!(
                "phase {phases}: stall {stall_count}/{}, T = {temperature:.6e}, cost {current_cost}",
                config.stall_limit
            );
        }

        if cancelled {
            info!("annealing cancelled after {phases} phases, cost {current_cost}");
        } else if stall_count < config.stall_limit {
            info!("annealing stopped at the budget of {total_iterations} steps, cost {current_cost}");
        } else {
            info!(
                "annealing converged after {phases} phases ({total_iterations} steps), cost {current_cost}"
            );
        }

        SaResult {
            solution: current,
            cost: current_cost,
            best,
            best_cost,
            phases,
            iterations: total_iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            stall_count,
            cancelled,
            cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::Solution;
    use crate::sa::BinPackingProblem;

    // ---- A chain that never moves: every phase stalls ----

    struct FrozenProblem;

    impl SaProblem for FrozenProblem {
        type Solution = u32;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u32 {
            7
        }

        fn cost(&self, x: &u32) -> f64 {
            *x as f64
        }

        fn neighbor<R: Rng>(&self, x: &u32, _rng: &mut R) -> u32 {
            *x
        }
    }

    // ---- Counts down to zero, then stays ----

    struct CountdownProblem;

    impl SaProblem for CountdownProblem {
        type Solution = u32;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u32 {
            5
        }

        fn cost(&self, x: &u32) -> f64 {
            *x as f64
        }

        fn neighbor<R: Rng>(&self, x: &u32, _rng: &mut R) -> u32 {
            x.saturating_sub(1)
        }
    }

    #[test]
    fn test_stops_after_stall_limit() {
        let config = SaConfig::new(10.0, 0.5, 4, 3).with_seed(42);
        let result = SaRunner::run(&FrozenProblem, &config);

        assert_eq!(result.phases, 3);
        assert_eq!(result.stall_count, 3);
        assert_eq!(result.iterations, 12);
        assert!((result.final_temperature - 1.25).abs() < 1e-12);
        assert_eq!(result.cost_history.len(), 4);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_stall_resets_on_change() {
        // One step per phase: phases 1..=5 each move, then 3 stalls.
        let config = SaConfig::new(10.0, 0.9, 1, 3).with_seed(42);
        let result = SaRunner::run(&CountdownProblem, &config);

        assert_eq!(result.solution, 0);
        assert_eq!(result.phases, 8);
        assert_eq!(result.improving_moves, 5);
        assert_eq!(result.cost_history, vec![5.0, 4.0, 3.0, 2.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cancellation() {
        let config = SaConfig::new(1e10, 0.999, 100, 1000).with_seed(42);

        // Set cancel flag before running so cancellation is deterministic.
        let cancel = Arc::new(AtomicBool::new(true));

        let result = SaRunner::run_with_cancel(&FrozenProblem, &config, Some(cancel));
        assert!(result.cancelled);
        assert_eq!(result.phases, 0);
        assert_eq!(result.solution, 7);
    }

    #[test]
    fn test_max_iterations_limit() {
        // Counts down forever: never stalls on its own.
        struct EndlessProblem;

        impl SaProblem for EndlessProblem {
            type Solution = u64;

            fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u64 {
                u64::MAX
            }

            fn cost(&self, x: &u64) -> f64 {
                *x as f64
            }

            fn neighbor<R: Rng>(&self, x: &u64, _rng: &mut R) -> u64 {
                x - 1
            }
        }

        let config = SaConfig::new(10.0, 0.9, 10, 3)
            .with_max_iterations(95)
            .with_seed(42);
        let result = SaRunner::run(&EndlessProblem, &config);

        assert_eq!(result.iterations, 95);
        assert_eq!(result.phases, 9);
        assert_eq!(result.stall_count, 0);
    }

    #[test]
    fn test_budget_on_phase_boundary_completes_phase() {
        let config = SaConfig::new(10.0, 0.5, 4, 3)
            .with_max_iterations(12)
            .with_seed(42);
        let result = SaRunner::run(&FrozenProblem, &config);

        assert_eq!(result.iterations, 12);
        assert_eq!(result.phases, 3);
        assert_eq!(result.stall_count, 3);
        assert!((result.final_temperature - 1.25).abs() < 1e-12);
    }

    // ---- Every neighbor is exactly one unit worse ----

    struct UphillProblem;

    impl SaProblem for UphillProblem {
        type Solution = u64;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> u64 {
            0
        }

        fn cost(&self, x: &u64) -> f64 {
            *x as f64
        }

        fn neighbor<R: Rng>(&self, x: &u64, _rng: &mut R) -> u64 {
            x + 1
        }
    }

    #[test]
    fn test_metropolis_accepts_uphill_at_high_temperature() {
        let config = SaConfig::new(1e9, 0.5, 1000, 1)
            .with_max_iterations(1000)
            .with_seed(42);
        let result = SaRunner::run(&UphillProblem, &config);

        assert_eq!(result.iterations, 1000);
        assert_eq!(result.improving_moves, 0);
        assert!(
            result.accepted_moves >= 990,
            "expected nearly all uphill moves accepted, got {}",
            result.accepted_moves
        );
    }

    #[test]
    fn test_metropolis_acceptance_rate_at_unit_temperature() {
        // delta = 1, T = 1 for the whole first phase: rate exp(-1).
        let steps = 20_000;
        let config = SaConfig::new(1.0, 0.5, steps, 1)
            .with_max_iterations(steps)
            .with_seed(42);
        let result = SaRunner::run(&UphillProblem, &config);

        assert_eq!(result.iterations, steps);
        let rate = result.accepted_moves as f64 / steps as f64;
        let expected = (-1.0f64).exp();
        assert!(
            (rate - expected).abs() < 0.02,
            "acceptance rate {rate}, expected about {expected}"
        );
        assert_eq!(result.solution as usize, result.accepted_moves);
    }

    #[test]
    fn test_metropolis_rejects_uphill_at_tiny_temperature() {
        let config = SaConfig::new(1e-9, 0.5, 100, 3).with_seed(42);
        let result = SaRunner::run(&UphillProblem, &config);

        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.solution, 0);
        assert_eq!(result.phases, 3);
        assert_eq!(result.stall_count, 3);
    }

    #[test]
    #[should_panic(expected = "invalid SaConfig")]
    fn test_invalid_config_panics() {
        let config = SaConfig::new(10.0, 1.5, 10, 3);
        let _ = SaRunner::run(&FrozenProblem, &config);
    }

    #[test]
    fn test_bin_packing_empty_input() {
        let weights: [i64; 0] = [];
        let problem = BinPackingProblem::new(&weights, 10);
        let config = SaConfig::new(100.0, 0.8, 20, 3).with_seed(42);
        let result = SaRunner::run(&problem, &config);

        assert_eq!(result.solution, Solution::from(vec![vec![]]));
        assert_eq!(result.phases, 3);
    }

    #[test]
    fn test_bin_packing_same_seed_same_result() {
        let weights = [4, 8, 1, 4, 2, 1, 7, 3, 6, 5, 5, 9, 2, 8];
        let problem = BinPackingProblem::new(&weights, 10);
        let config = SaConfig::new(100.0, 0.8, 50, 5)
            .with_max_iterations(20_000)
            .with_seed(7);

        let a = SaRunner::run(&problem, &config);
        let b = SaRunner::run(&problem, &config);
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.phases, b.phases);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_bin_packing_preserves_items_and_capacity() {
        let weights = [4, 8, 1, 4, 2, 1, 7, 3, 6, 5, 5, 9, 2, 8, 3, 3];
        let problem = BinPackingProblem::new(&weights, 10);
        let config = SaConfig::new(50.0, 0.85, 100, 5)
            .with_max_iterations(20_000)
            .with_seed(3);
        let result = SaRunner::run(&problem, &config);

        let mut expected = weights.to_vec();
        expected.sort_unstable();
        assert_eq!(result.solution.sorted_weights(), expected);
        assert!(result.solution.is_feasible(10));
        assert!(result.best_cost <= result.cost_history[0]);
    }

    #[test]
    fn test_bin_packing_non_positive_capacity_terminates() {
        let weights = [3, 1, 2];
        let problem = BinPackingProblem::new(&weights, 0);
        let config = SaConfig::new(10.0, 0.5, 10, 2).with_seed(1);
        let result = SaRunner::run(&problem, &config);

        assert_eq!(result.solution.len(), 3);
        assert_eq!(result.stall_count, 2);
    }
}
