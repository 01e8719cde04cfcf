use super::{Element, PrefixSumTree};
use std::fmt;
use std::ops::Index;

impl<T: Element> Default for PrefixSumTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, V: Into<T>> FromIterator<V> for PrefixSumTree<T> {
    fn from_iter<I: IntoIterator<Item = V>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.construct(values);
        tree
    }
}

// panics like slice indexing; `get` is the checked form
impl<T: Element> Index<usize> for PrefixSumTree<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.nodes()[index]
    }
}

// every node is followed by a space, including the last one
impl<T: Element + fmt::Display> fmt::Display for PrefixSumTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{} ", node)?;
        }
        Ok(())
    }
}
