//! Fill statistics for a finished packing.

use crate::packing::{Solution, Weight};
use std::fmt;

/// Fill level of one container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContainerFill {
    pub sum: Weight,
    pub padding: Weight,
    /// `(capacity - padding) / capacity * 100`.
    pub fill_percent: f64,
}

/// Summary of a packing against a capacity.
///
/// # Examples
///
/// ```
/// use u_binpack::packing::Solution;
/// use u_binpack::report::PackingReport;
///
/// let solution = Solution::from(vec![vec![6, 4], vec![5]]);
/// let report = PackingReport::new(&solution, 10);
/// assert_eq!(report.container_count, 2);
/// assert!((report.average_fill_percent - 75.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackingReport {
    pub capacity: Weight,
    pub container_count: usize,
    pub item_count: usize,
    pub total_weight: Weight,
    pub total_padding: Weight,
    /// Containers not filled exactly to capacity.
    pub unfilled_count: usize,
    pub containers: Vec<ContainerFill>,
    /// Mean of the per-container fill percentages; 0 when there are no
    /// containers or the capacity is not positive.
    pub average_fill_percent: f64,
}

impl PackingReport {
    pub fn new(solution: &Solution, capacity: Weight) -> Self {
        let containers: Vec<ContainerFill> = solution
            .containers()
            .iter()
            .map(|c| {
                let padding = c.padding(capacity);
                ContainerFill {
                    sum: c.sum(),
                    padding,
                    fill_percent: fill_percent(capacity - padding, capacity),
                }
            })
            .collect();

        let average_fill_percent = if containers.is_empty() || capacity <= 0 {
            0.0
        } else {
            containers.iter().map(|c| c.fill_percent).sum::<f64>() / containers.len() as f64
        };

        Self {
            capacity,
            container_count: solution.len(),
            item_count: solution.item_count(),
            total_weight: solution.total_weight(),
            total_padding: solution.total_padding(capacity),
            unfilled_count: solution.unfilled_count(capacity),
            containers,
            average_fill_percent,
        }
    }
}

fn fill_percent(filled: Weight, capacity: Weight) -> f64 {
    if capacity <= 0 {
        return 0.0;
    }
    filled as f64 / capacity as f64 * 100.0
}

impl fmt::Display for PackingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "containers: {}", self.container_count)?;
        for (i, c) in self.containers.iter().enumerate() {
            writeln!(f, "{i:5}:\t{:6.2}%", c.fill_percent)?;
        }
        write!(f, "average fill: {:.2}%", self.average_fill_percent)
    }
}
