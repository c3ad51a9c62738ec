//! A single bin holding item weights.

/// Item weight and container capacity.
///
/// Signed so that [`Container::padding`] can report an overfull container
/// as a negative value instead of wrapping.
pub type Weight = i64;

/// A multiset of item weights packed into one bin.
///
/// Equality is positional: two containers are equal iff they hold the same
/// weights in the same order.
///
/// # Examples
///
/// ```
/// use u_binpack::packing::Container;
///
/// let mut c = Container::new();
/// c.append(3);
/// c.append(4);
/// assert_eq!(c.sum(), 7);
/// assert_eq!(c.padding(10), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Container {
    weights: Vec<Weight>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container holding `weights` in the given order.
    pub fn from_weights(weights: Vec<Weight>) -> Self {
        Self { weights }
    }

    /// The packed weights, in insertion order.
    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Total of the contained weights.
    pub fn sum(&self) -> Weight {
        self.weights.iter().sum()
    }

    /// Unused space, `capacity - sum()`.
    ///
    /// Negative when the container is over capacity. This is a diagnostic
    /// value; nothing here enforces the capacity.
    pub fn padding(&self, capacity: Weight) -> Weight {
        capacity - self.sum()
    }

    /// Whether the container is filled exactly to `capacity`.
    pub fn is_full(&self, capacity: Weight) -> bool {
        self.padding(capacity) == 0
    }

    /// Adds one weight. Always succeeds.
    pub fn append(&mut self, weight: Weight) {
        self.weights.push(weight);
    }

    /// Removes the weight at `index`, moving the last weight into its slot.
    pub(crate) fn swap_remove(&mut self, index: usize) -> Weight {
        self.weights.swap_remove(index)
    }

    /// Replaces the weight at `index` and returns the previous one.
    pub(crate) fn replace(&mut self, index: usize, weight: Weight) -> Weight {
        std::mem::replace(&mut self.weights[index], weight)
    }
}

impl From<Vec<Weight>> for Container {
    fn from(weights: Vec<Weight>) -> Self {
        Self::from_weights(weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(Container::new().sum(), 0);
        assert_eq!(Container::from_weights(vec![1, 2, 3, 4]).sum(), 10);
        assert_eq!(Container::from_weights(vec![0, 0, 0, 0, 0]).sum(), 0);
    }

    #[test]
    fn test_padding() {
        let cases = [
            (vec![1, 2, 3, 7], 15, 2),
            (vec![1, 2, 3], 10, 4),
            (vec![], 10, 10),
            (vec![1, 2, 3], 6, 0),
            (vec![1, 2, 3], 1, -5),
        ];
        for (weights, capacity, expected) in cases {
            let c = Container::from_weights(weights);
            assert_eq!(c.padding(capacity), expected, "container {:?}", c);
        }
    }

    #[test]
    fn test_is_full() {
        let c = Container::from_weights(vec![4, 6]);
        assert!(c.is_full(10));
        assert!(!c.is_full(11));
        assert!(!c.is_full(9));
    }

    #[test]
    fn test_equality_is_positional() {
        assert_eq!(Container::new(), Container::new());
        assert_eq!(Container::new(), Container::from_weights(vec![]));
        assert_ne!(Container::from_weights(vec![1]), Container::new());
        assert_ne!(
            Container::from_weights(vec![1, 2, 3, 4]),
            Container::from_weights(vec![4, 3, 2, 1])
        );
    }

    #[test]
    fn test_append() {
        let mut c = Container::new();
        c.append(5);
        c.append(2);
        assert_eq!(c.weights(), &[5, 2]);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_swap_remove_moves_last_into_slot() {
        let mut c = Container::from_weights(vec![1, 2, 3, 4]);
        assert_eq!(c.swap_remove(1), 2);
        assert_eq!(c.weights(), &[1, 4, 3]);
    }
}
