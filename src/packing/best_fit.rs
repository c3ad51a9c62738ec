//! Best-Fit construction heuristic.

use super::container::{Container, Weight};
use super::solution::Solution;

/// Packs `weights` greedily, each into the container it fills most tightly.
///
/// For every item the containers are scanned in order and the one leaving
/// the smallest non-negative `capacity - (sum + item)` wins; ties go to the
/// first such container. If none can hold the item a new container is
/// opened. Runs in O(n·m) and is fully deterministic.
///
/// The result always contains at least one container: an empty input
/// yields a single empty container. With `capacity` below some weight the
/// oversized items each get a container of their own.
///
/// # Examples
///
/// ```
/// use u_binpack::packing::{best_fit, Solution};
///
/// let solution = best_fit(&[1, 2, 3, 4], 5);
/// assert_eq!(solution, Solution::from(vec![vec![1, 2], vec![3], vec![4]]));
/// ```
pub fn best_fit(weights: &[Weight], capacity: Weight) -> Solution {
    let mut containers = vec![Container::new()];

    let Some((&first, rest)) = weights.split_first() else {
        return Solution::new(containers);
    };
    containers[0].append(first);

    for &weight in rest {
        let mut best: Option<(usize, Weight)> = None;
        for (i, container) in containers.iter().enumerate() {
            let delta = capacity - (container.sum() + weight);
            if delta >= 0 && best.is_none_or(|(_, min)| delta < min) {
                best = Some((i, delta));
            }
        }

        match best {
            Some((i, _)) => containers[i].append(weight),
            None => containers.push(Container::from_weights(vec![weight])),
        }
    }

    Solution::new(containers)
}
