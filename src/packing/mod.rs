//! Packing model and the Best-Fit construction heuristic.
//!
//! A [`Solution`] is an ordered list of [`Container`]s that together hold
//! every item of an instance. Container order carries no meaning, but
//! equality is positional so that two runs can be compared step by step.
//!
//! # References
//!
//! - Johnson, D. S. (1974), "Fast algorithms for bin packing",
//!   *Journal of Computer and System Sciences* 8(3), 272-314.

mod best_fit;
mod container;
mod solution;

pub use best_fit::best_fit;
pub use container::{Container, Weight};
pub use solution::Solution;
