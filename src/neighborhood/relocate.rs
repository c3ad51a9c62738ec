//! Item relocation between containers.

use crate::packing::{Solution, Weight};
use log::trace;
use rand::Rng;

/// A single relocation: item `item` of container `source` goes to
/// `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Relocation {
    destination: usize,
    source: usize,
    item: usize,
}

/// Moves one item into a different, under-capacity container.
///
/// Sampling is three-stage and uniform at every stage:
///
/// 1. a destination among the under-capacity containers that some item of
///    another container fits into,
/// 2. a source among the other containers holding at least one item that
///    fits the destination's free space,
/// 3. one of those fitting items.
///
/// If the source is left empty it is removed; the last container takes its
/// slot. The input is never modified.
pub fn relocate<R: Rng>(solution: &Solution, capacity: Weight, rng: &mut R) -> Solution {
    let mut next = solution.clone();

    let Some(mv) = pick(solution, capacity, rng) else {
        trace!("relocate: no item fits any under-capacity container");
        return next;
    };

    let weight = next.container_mut(mv.source).swap_remove(mv.item);
    next.container_mut(mv.destination).append(weight);
    if next.containers()[mv.source].is_empty() {
        next.swap_remove(mv.source);
    }
    next
}

fn pick<R: Rng>(solution: &Solution, capacity: Weight, rng: &mut R) -> Option<Relocation> {
    let containers = solution.containers();

    // Smallest weight per non-empty container, ascending. A container can
    // supply an item for free space `f` iff its smallest weight is <= f,
    // so the eligible sources for `f` are a prefix of this list.
    let mut by_min: Vec<(Weight, usize)> = containers
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.weights().iter().min().map(|&m| (m, i)))
        .collect();
    by_min.sort_unstable();

    let eligible_sources = |destination: usize, free: Weight| -> usize {
        let prefix = by_min.partition_point(|&(m, _)| m <= free);
        let own = containers[destination]
            .weights()
            .iter()
            .min()
            .is_some_and(|&m| m <= free);
        prefix - usize::from(own)
    };

    let destinations: Vec<(usize, Weight, usize)> = containers
        .iter()
        .enumerate()
        .filter(|(_, c)| c.sum() < capacity)
        .filter_map(|(d, c)| {
            let free = c.padding(capacity);
            let count = eligible_sources(d, free);
            (count > 0).then_some((d, free, count))
        })
        .collect();

    if destinations.is_empty() {
        return None;
    }

    let (destination, free, count) = destinations[rng.random_range(0..destinations.len())];

    let prefix = by_min.partition_point(|&(m, _)| m <= free);
    let &(_, source) = by_min[..prefix]
        .iter()
        .filter(|&&(_, c)| c != destination)
        .nth(rng.random_range(0..count))?;

    let fitting: Vec<usize> = containers[source]
        .weights()
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w <= free)
        .map(|(j, _)| j)
        .collect();
    let item = fitting[rng.random_range(0..fitting.len())];

    Some(Relocation {
        destination,
        source,
        item,
    })
}
