//! One-dimensional bin packing by Best-Fit construction and Simulated
//! Annealing refinement.
//!
//! - **Packing model**: [`packing::Container`] and [`packing::Solution`],
//!   plus the deterministic [`packing::best_fit`] heuristic.
//! - **Neighborhoods**: randomized [`neighborhood::relocate`] and
//!   [`neighborhood::swap`] moves that never break capacity.
//! - **Simulated Annealing**: [`sa::SaRunner`] with geometric cooling and a
//!   stall-count stopping rule; [`sa::anneal`] wires it to bin packing.
//! - **Collaborators**: instance parsing ([`instance`]), fill statistics
//!   ([`report`]) and multi-configuration runs ([`sweep`]).
//!
//! # Example
//!
//! ```
//! use u_binpack::packing::best_fit;
//! use u_binpack::report::PackingReport;
//! use u_binpack::sa::{anneal, SaConfig};
//!
//! let weights = [6, 5, 5, 4, 4, 3, 3, 2, 2, 6];
//! let initial = best_fit(&weights, 10);
//!
//! let config = SaConfig::new(1000.0, 0.8, 100, 5).with_seed(1);
//! let refined = anneal(&weights, 10, &config);
//!
//! let report = PackingReport::new(&refined, 10);
//! assert_eq!(report.item_count, weights.len());
//! assert!(initial.is_feasible(10) && refined.is_feasible(10));
//! ```

pub mod instance;
pub mod neighborhood;
pub mod packing;
pub mod report;
pub mod sa;
pub mod sweep;
