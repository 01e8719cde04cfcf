use super::{Element, PrefixSumTreeError, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Prefix sums over a fixed-size sequence, stored as a Fenwick tree.
///
/// The conceptual array is never kept; `nodes[k]` holds the sum of the
/// elements in `[k & (k + 1), k]`. Equality compares these encoded nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrefixSumTree<T> {
    nodes: Vec<T>,
}

// next node whose range covers `node`
fn covering_node(node: usize) -> usize {
    node | (node + 1)
}

// node holding the sums just before the range of `node`
fn preceding_node(node: usize) -> Option<usize> {
    match node & (node + 1) {
        0 => None,
        first => Some(first - 1),
    }
}

impl<T: Element> PrefixSumTree<T> {
    pub fn new() -> Self {
        Self { nodes: vec![] }
    }

    /// Replaces the contents of the tree with `values`.
    pub fn construct<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<T>,
    {
        let values: Vec<T> = values.into_iter().map(Into::into).collect();
        self.nodes = vec![T::zero(); values.len()];
        for (index, value) in values.into_iter().enumerate() {
            self.propagate(index, value);
        }
        debug!(size = self.size(), "constructed prefix sum tree");
    }

    /// Sum of every element, zero for an empty tree.
    pub fn sum(&self) -> T {
        match self.size() {
            0 => T::zero(),
            size => self.prefix_sum_unchecked(size - 1),
        }
    }

    /// Sum of the elements in `[0, index]`.
    pub fn prefix_sum(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.prefix_sum_unchecked(index))
    }

    /// Sum of the elements in `[start, end]`.
    pub fn range_sum(&self, start: usize, end: usize) -> Result<T> {
        check_range(start, end)?;
        let upper = self.prefix_sum(end)?;
        if start == 0 {
            return Ok(upper);
        }
        let lower = self.prefix_sum(start - 1)?;
        Ok(upper - lower)
    }

    /// Element at `index` of the conceptual array.
    pub fn value(&self, index: usize) -> Result<T> {
        self.range_sum(index, index)
    }

    /// Adds `delta` to the element at `index`.
    pub fn add(&mut self, index: usize, delta: T) -> Result<()> {
        self.check_index(index)?;
        self.propagate(index, delta);
        Ok(())
    }

    /// Adds `delta` to every element in `[start, end]`.
    ///
    /// Returns `Ok(false)` without touching the tree when the range reaches
    /// past the last element, and an error when `start > end`.
    pub fn update(&mut self, start: usize, end: usize, delta: T) -> Result<bool> {
        check_range(start, end)?;
        if end >= self.size() {
            trace!(start, end, size = self.size(), "update out of bounds");
            return Ok(false);
        }
        for index in start..=end {
            self.propagate(index, delta);
        }
        Ok(true)
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        debug!("cleared prefix sum tree");
    }

    /// Encoded node at `index`, not the element of the conceptual array.
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.nodes[index])
    }

    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size() {
            Ok(())
        } else {
            Err(PrefixSumTreeError::OutOfRange {
                index,
                size: self.size(),
            })
        }
    }

    // assumes index < size
    fn prefix_sum_unchecked(&self, index: usize) -> T {
        let mut sum = T::zero();
        let mut node = Some(index);
        while let Some(current) = node {
            sum += self.nodes[current];
            node = preceding_node(current);
        }
        sum
    }

    fn propagate(&mut self, mut node: usize, delta: T) {
        while node < self.nodes.len() {
            self.nodes[node] += delta;
            node = covering_node(node);
        }
    }
}

fn check_range(start: usize, end: usize) -> Result<()> {
    if start > end {
        Err(PrefixSumTreeError::InvalidRange { start, end })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_tree() -> PrefixSumTree<i32> {
        [1i32, 6, 2, 4, 3, 5].into_iter().collect()
    }

    #[test]
    fn node_links() {
        assert_eq!(covering_node(0), 1);
        assert_eq!(covering_node(1), 3);
        assert_eq!(covering_node(4), 5);
        assert_eq!(preceding_node(0), None);
        assert_eq!(preceding_node(3), None);
        assert_eq!(preceding_node(5), Some(3));
        assert_eq!(preceding_node(6), Some(5));
    }

    #[test]
    fn construct_encodes_nodes() {
        let tree = scenario_tree();
        assert_eq!(tree.nodes(), &[1, 7, 2, 13, 3, 8]);
        assert_eq!(tree.size(), 6);
    }

    #[test]
    fn sums() {
        let tree = scenario_tree();
        assert_eq!(tree.sum(), 21);
        assert_eq!(tree.prefix_sum(3), Ok(13));
        assert_eq!(tree.range_sum(3, 4), Ok(7));
        assert_eq!(tree.range_sum(0, 5), Ok(21));
        assert_eq!(tree.value(1), Ok(6));
    }

    #[test]
    fn update_single_element() {
        let mut tree = scenario_tree();
        assert_eq!(tree.update(3, 3, -1), Ok(true));
        assert_eq!(tree.range_sum(3, 4), Ok(6));
        assert_eq!(tree.sum(), 20);
    }

    #[test]
    fn update_range() {
        let mut tree = scenario_tree();
        assert_eq!(tree.update(1, 3, 10), Ok(true));
        let values: Vec<i32> = (0..6).map(|i| tree.value(i).unwrap()).collect();
        assert_eq!(values, vec![1, 16, 12, 14, 3, 5]);
    }

    #[test]
    fn update_reaching_last_element() {
        let mut tree = scenario_tree();
        assert_eq!(tree.update(4, 5, 2), Ok(true));
        assert_eq!(tree.sum(), 25);
    }

    #[test]
    fn update_out_of_bounds_is_rejected() {
        let mut tree = scenario_tree();
        let before = tree.clone();
        assert_eq!(tree.update(4, 6, 2), Ok(false));
        assert_eq!(tree.update(6, 6, 2), Ok(false));
        assert_eq!(tree, before);
        assert_eq!(PrefixSumTree::<i32>::new().update(0, 0, 1), Ok(false));
    }

    #[test]
    fn inverted_ranges() {
        let mut tree = scenario_tree();
        assert_eq!(
            tree.range_sum(2, 0),
            Err(PrefixSumTreeError::InvalidRange { start: 2, end: 0 })
        );
        assert_eq!(
            tree.update(2, 0, 1),
            Err(PrefixSumTreeError::InvalidRange { start: 2, end: 0 })
        );
    }

    #[test]
    fn out_of_range() {
        let mut tree = scenario_tree();
        let err = PrefixSumTreeError::OutOfRange {
            index: 100,
            size: 6,
        };
        assert_eq!(tree.prefix_sum(100), Err(err));
        assert_eq!(tree.get(100), Err(err));
        assert_eq!(tree.add(100, 1), Err(err));
        assert_eq!(tree.range_sum(0, 100), Err(err));
        assert_eq!(
            tree.prefix_sum(usize::MAX),
            Err(PrefixSumTreeError::OutOfRange {
                index: usize::MAX,
                size: 6
            })
        );
        assert_eq!(
            tree.prefix_sum(6).unwrap_err().to_string(),
            "index 6 is out of range for a tree of size 6"
        );
    }

    #[test]
    fn add_point() {
        let mut tree = scenario_tree();
        tree.add(0, 4).unwrap();
        assert_eq!(tree.prefix_sum(0), Ok(5));
        assert_eq!(tree.sum(), 25);
    }

    #[test]
    fn clear_resets() {
        let mut tree = scenario_tree();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.size(), 0);
        assert_eq!(tree.sum(), 0);
        assert!(tree.prefix_sum(0).is_err());
    }

    #[test]
    fn construct_replaces_state() {
        let mut tree = scenario_tree();
        tree.construct([2u8, 3]);
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.sum(), 5);
    }

    #[test]
    fn equality_is_over_nodes() {
        let mut tree = scenario_tree();
        assert_eq!(tree, scenario_tree());
        tree.update(0, 0, 0).unwrap();
        assert_eq!(tree, scenario_tree());
        tree.update(5, 5, 1).unwrap();
        assert_ne!(tree, scenario_tree());
    }

    #[test]
    fn unsigned_and_float_elements() {
        let tree: PrefixSumTree<u64> = [5u64, 0, 7].into_iter().collect();
        assert_eq!(tree.range_sum(1, 2), Ok(7));
        let tree: PrefixSumTree<f64> = [0.5f32, 1.5, 2.0].into_iter().collect();
        assert_eq!(tree.sum(), 4.0);
        assert_eq!(tree.range_sum(1, 1), Ok(1.5));
    }
}
