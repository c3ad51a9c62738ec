//! A complete packing of all items.

use super::container::{Container, Weight};

/// An ordered collection of containers representing one packing.
///
/// `PartialEq` compares positionally: same number of containers and equal
/// containers at each index. Use [`Solution::same_packing`] for an
/// order-insensitive comparison.
///
/// Sums are plain [`Weight`] arithmetic. [`Instance::new`] rejects inputs
/// whose sums or paddings would not fit.
///
/// [`Instance::new`]: crate::instance::Instance::new
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Solution {
    containers: Vec<Container>,
}

impl Solution {
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn into_containers(self) -> Vec<Container> {
        self.containers
    }

    /// Number of containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Number of items across all containers.
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    pub fn total_weight(&self) -> Weight {
        self.containers.iter().map(Container::sum).sum()
    }

    /// Sum of `capacity - sum` over all containers.
    pub fn total_padding(&self, capacity: Weight) -> Weight {
        self.containers.iter().map(|c| c.padding(capacity)).sum()
    }

    /// Number of containers that are not filled exactly to capacity.
    ///
    /// This is the annealing objective. Lower is better.
    pub fn unfilled_count(&self, capacity: Weight) -> usize {
        self.containers
            .iter()
            .filter(|c| !c.is_full(capacity))
            .count()
    }

    /// Whether no container exceeds `capacity`.
    pub fn is_feasible(&self, capacity: Weight) -> bool {
        self.containers.iter().all(|c| c.sum() <= capacity)
    }

    /// All weights in the solution, sorted ascending.
    pub fn sorted_weights(&self) -> Vec<Weight> {
        let mut all: Vec<Weight> = self
            .containers
            .iter()
            .flat_map(|c| c.weights().iter().copied())
            .collect();
        all.sort_unstable();
        all
    }

    /// Order-insensitive equality: both solutions hold the same multiset of
    /// containers, each compared as a multiset of weights.
    pub fn same_packing(&self, other: &Solution) -> bool {
        self.len() == other.len() && self.canonical() == other.canonical()
    }

    fn canonical(&self) -> Vec<Vec<Weight>> {
        let mut bins: Vec<Vec<Weight>> = self
            .containers
            .iter()
            .map(|c| {
                let mut w = c.weights().to_vec();
                w.sort_unstable();
                w
            })
            .collect();
        bins.sort_unstable();
        bins
    }

    pub(crate) fn container_mut(&mut self, index: usize) -> &mut Container {
        &mut self.containers[index]
    }

    /// Removes the container at `index`; the last container takes its slot.
    pub(crate) fn swap_remove(&mut self, index: usize) -> Container {
        self.containers.swap_remove(index)
    }
}

impl From<Vec<Container>> for Solution {
    fn from(containers: Vec<Container>) -> Self {
        Self::new(containers)
    }
}

impl From<Vec<Vec<Weight>>> for Solution {
    fn from(bins: Vec<Vec<Weight>>) -> Self {
        Self::new(bins.into_iter().map(Container::from_weights).collect())
    }
}
