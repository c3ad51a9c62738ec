//! Item exchange between containers.

use crate::packing::{Container, Solution, Weight};
use log::trace;
use rand::Rng;

/// Exchange of item `first_item` in container `first` with item
/// `second_item` in container `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Exchange {
    first: usize,
    first_item: usize,
    second: usize,
    second_item: usize,
}

/// Exchanges one item between two different containers.
///
/// The first item is chosen as "uniform container, then uniform item
/// within it", conditioned on the item having at least one exchange
/// partner: a pair `(A, i)` is drawn with weight `1 / |A|` among the pairs
/// that have a partner. The partner container is then uniform among those
/// holding a compatible item, and the partner item uniform within it.
///
/// Items `a` in `A` and `b` in `B` are compatible when `b` fits into `A`
/// without `a` and `a` fits into `B` without `b`. Container sizes never
/// change, so no container is removed. The input is never modified.
pub fn swap<R: Rng>(solution: &Solution, capacity: Weight, rng: &mut R) -> Solution {
    let mut next = solution.clone();

    let Some(mv) = pick(solution, capacity, rng) else {
        trace!("swap: no compatible item pair");
        return next;
    };

    let a = solution.containers()[mv.first].weights()[mv.first_item];
    let b = next.container_mut(mv.second).replace(mv.second_item, a);
    next.container_mut(mv.first).replace(mv.first_item, b);
    next
}

fn pick<R: Rng>(solution: &Solution, capacity: Weight, rng: &mut R) -> Option<Exchange> {
    let containers = solution.containers();
    let sums: Vec<Weight> = containers.iter().map(Container::sum).collect();

    // Weighted random order without replacement (Efraimidis-Spirakis):
    // key = u^(1/w) with w = 1/|A|, compared in log space. The first pair
    // in this order that has a partner is distributed exactly as the
    // draw-and-retry scheme.
    let mut order: Vec<(f64, usize, usize)> = Vec::with_capacity(solution.item_count());
    for (a, container) in containers.iter().enumerate() {
        let len = container.len() as f64;
        for i in 0..container.len() {
            let u: f64 = rng.random();
            order.push(((1.0 - u).ln() * len, a, i));
        }
    }
    order.sort_unstable_by(|x, y| y.0.total_cmp(&x.0));

    for &(_, first, first_item) in &order {
        let partners = partners(containers, &sums, capacity, first, first_item);
        if partners.is_empty() {
            continue;
        }

        let (second, items) = &partners[rng.random_range(0..partners.len())];
        let second_item = items[rng.random_range(0..items.len())];
        return Some(Exchange {
            first,
            first_item,
            second: *second,
            second_item,
        });
    }

    None
}

/// Compatible items for `containers[first][item]`, grouped by container.
fn partners(
    containers: &[Container],
    sums: &[Weight],
    capacity: Weight,
    first: usize,
    item: usize,
) -> Vec<(usize, Vec<usize>)> {
    let a = containers[first].weights()[item];
    let room_in_first = capacity - (sums[first] - a);

    containers
        .iter()
        .enumerate()
        .filter(|&(b, _)| b != first)
        .filter_map(|(b, container)| {
            let items: Vec<usize> = container
                .weights()
                .iter()
                .enumerate()
                .filter(|&(_, &w)| w <= room_in_first && a <= capacity - (sums[b] - w))
                .map(|(j, _)| j)
                .collect();
            (!items.is_empty()).then_some((b, items))
        })
        .collect()
}
