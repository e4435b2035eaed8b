use core::iter::FusedIterator;

use super::RbTree;
use crate::{
    node::{Link, Node, NodeId, Side},
    utils::Arena,
};

/// In-order iterator over the keys of an [`RbTree`], created by
/// [`RbTree::traverse`].
///
/// Walks parent links instead of keeping a stack, so it holds no allocation.
/// Iterates from both ends.
pub struct Traverse<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Traverse<'a, T> {
    pub(super) fn new<O>(tree: &'a RbTree<T, O>) -> Self {
        Self {
            nodes: &tree.nodes,
            front: tree.root.map(|root| tree.extreme(root, Side::Left)),
            back: tree.root.map(|root| tree.extreme(root, Side::Right)),
            remaining: tree.len(),
        }
    }

    /// The next key past `id` in the direction of `side`: the extreme of the
    /// `side` subtree if there is one, otherwise the first ancestor reached
    /// from its opposite side.
    fn neighbor(&self, id: NodeId, side: Side) -> Link {
        let nodes = self.nodes;

        if let Some(mut next) = nodes[id].child(side) {
            while let Some(child) = nodes[next].child(side.opposite()) {
                next = child;
            }
            return Some(next);
        }

        let mut current = id;
        while let Some(parent) = nodes[current].parent {
            if nodes[parent].child(side.opposite()) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.neighbor(id, Side::Right);

        let nodes: &'a Arena<Node<T>> = self.nodes;
        Some(&nodes[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Traverse<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.neighbor(id, Side::Left);

        let nodes: &'a Arena<Node<T>> = self.nodes;
        Some(&nodes[id].key)
    }
}

impl<T> ExactSizeIterator for Traverse<'_, T> {}

impl<T> FusedIterator for Traverse<'_, T> {}

impl<T> Clone for Traverse<'_, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Descending, RbTree};

    #[test]
    fn test_traverse_empty_tree() {
        let tree = RbTree::<u8>::new();
        let mut iter = tree.traverse();

        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_traverse_yields_sorted_keys() {
        let mut tree = RbTree::new();
        for key in [50, 25, 75, 12, 37, 62, 87, 6, 18, 31, 43] {
            tree.insert(key).unwrap();
        }

        let keys: Vec<_> = tree.traverse().copied().collect();
        assert_eq!(keys, [6, 12, 18, 25, 31, 37, 43, 50, 62, 75, 87]);

        let reversed: Vec<_> = tree.traverse().rev().copied().collect();
        assert_eq!(reversed, [87, 75, 62, 50, 43, 37, 31, 25, 18, 12, 6]);
    }

    #[test]
    fn test_traverse_is_restartable() {
        let mut tree = RbTree::new();
        for key in 1..=5 {
            tree.insert(key).unwrap();
        }

        let first: Vec<_> = tree.traverse().collect();
        let second: Vec<_> = (&tree).into_iter().collect();
        assert_eq!(first, second);

        tree.delete(&3).unwrap();
        assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 2, 4, 5]);
    }

    #[test]
    fn test_traverse_from_both_ends_meets_in_middle() {
        let mut tree = RbTree::new();
        for key in 1..=5 {
            tree.insert(key).unwrap();
        }

        let mut iter = tree.traverse();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&5));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_traverse_follows_tree_order() {
        let mut tree = RbTree::with_order(Descending);
        for key in ["pear", "apple", "fig", "kiwi"] {
            tree.insert(key).unwrap();
        }

        let keys: Vec<_> = tree.traverse().copied().collect();
        assert_eq!(keys, ["pear", "kiwi", "fig", "apple"]);
        assert_eq!(tree.min(), Some(&"pear"));
        assert_eq!(tree.max(), Some(&"apple"));
    }

    #[test]
    fn test_debug_renders_ordered_set() {
        let mut tree = RbTree::new();
        for key in [3, 1, 2] {
            tree.insert(key).unwrap();
        }
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }
}
