//! Problem instances and their text format.
//!
//! An instance file holds the container capacity on the first line, the
//! number of items on the second, and one item weight per line after that.
//! Blank lines are ignored.
//!
//! ```text
//! 10
//! 4
//! 6
//! 4
//! 7
//! 3
//! ```

use crate::packing::Weight;
use anyhow::{bail, ensure, Context, Result};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A validated bin-packing instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    capacity: Weight,
    weights: Vec<Weight>,
}

impl Instance {
    /// Creates an instance, rejecting negative weights.
    ///
    /// Also rejects instances whose container sums or paddings could leave
    /// the range of [`Weight`]: every packing of `n` items uses at most
    /// `max(n, 1)` containers, so `max(n, 1) * |capacity| + total` must fit.
    pub fn new(capacity: Weight, weights: Vec<Weight>) -> Result<Self> {
        if let Some((i, w)) = weights.iter().enumerate().find(|(_, &w)| w < 0) {
            bail!("item {i} has negative weight {w}");
        }
        let total = weights
            .iter()
            .try_fold(0 as Weight, |acc, &w| acc.checked_add(w))
            .context("total weight overflows")?;
        Weight::try_from(weights.len().max(1))
            .ok()
            .and_then(|n| n.checked_mul(capacity.checked_abs()?))
            .and_then(|span| span.checked_add(total))
            .with_context(|| {
                format!("capacity {capacity} is too large for {} items", weights.len())
            })?;
        Ok(Self { capacity, weights })
    }

    /// Parses the text format described in the module docs.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, line) = lines.next().context("missing capacity line")?;
        let capacity: Weight = line
            .parse()
            .with_context(|| format!("line {line_no}: invalid capacity {line:?}"))?;

        let (line_no, line) = lines.next().context("missing item count line")?;
        let count: usize = line
            .parse()
            .with_context(|| format!("line {line_no}: invalid item count {line:?}"))?;

        let weights = lines
            .map(|(line_no, line)| {
                line.parse::<Weight>()
                    .with_context(|| format!("line {line_no}: invalid weight {line:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        ensure!(
            weights.len() == count,
            "item count is {count} but {} weights were given",
            weights.len()
        );

        Self::new(capacity, weights)
    }

    /// Reads and parses an instance file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read instance file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("could not parse {}", path.display()))
    }

    pub fn capacity(&self) -> Weight {
        self.capacity
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn total_weight(&self) -> Weight {
        self.weights.iter().sum()
    }

    /// Containers needed if items could be split: `ceil(total / capacity)`.
    ///
    /// `None` when the capacity is not positive.
    pub fn lower_bound(&self) -> Option<usize> {
        if self.capacity <= 0 {
            return None;
        }
        let total = self.total_weight() as u64;
        Some(total.div_ceil(self.capacity as u64) as usize)
    }
}

impl FromStr for Instance {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
