use core::{cmp::Ordering, fmt};

use crate::{
    Ascending, Error, KeyOrder,
    node::{Link, Node, NodeId, Side},
    utils::Arena,
};

mod insert;
mod links;
mod remove;
mod traverse;
mod validate;

#[cfg(test)]
mod tests;

pub use traverse::Traverse;

/// An ordered set of unique keys kept balanced as a Red-Black tree.
///
/// Nodes are stored in an arena and refer to each other by slot index, so the
/// parent back-references never form ownership cycles and a removed node's
/// slot is recycled by the next insertion.
///
/// Every operation is O(log n) in the worst case:
/// - Insertion attaches a red leaf and repairs the tree bottom-up
/// - Deletion reduces to unlinking a node with at most one child, then
///   repairs any black-height deficiency bottom-up
/// - Lookups walk a single root-to-leaf path
///
/// Keys are ordered by `O`, which defaults to the keys' own [`Ord`].
#[derive(Clone)]
pub struct RbTree<T, O = Ascending> {
    /// Node storage; children are owned through their slot in here
    nodes: Arena<Node<T>>,

    /// Slot of the root node, `None` when the tree is empty
    root: Link,

    /// Ordering policy applied to every key comparison
    order: O,
}

impl<T: Ord> RbTree<T> {
    /// Creates an empty tree ordered ascending by `T`'s [`Ord`]. Does not allocate.
    pub const fn new() -> Self {
        Self::with_order(Ascending)
    }

    /// Creates an empty tree with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, Ascending)
    }
}

impl<T: Ord> Default for RbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> RbTree<T, O> {
    /// Creates an empty tree using `order` to compare keys.
    pub const fn with_order(order: O) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            order,
        }
    }

    /// Creates an empty tree using `order`, pre-sized for `capacity` nodes.
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            order,
        }
    }

    /// Number of keys stored.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes the tree can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// The ordering policy of this tree.
    #[inline]
    pub const fn order(&self) -> &O {
        &self.order
    }

    /// First key in the tree's order, if any.
    pub fn min(&self) -> Option<&T> {
        self.root
            .map(|root| &self.node(self.extreme(root, Side::Left)).key)
    }

    /// Last key in the tree's order, if any.
    pub fn max(&self) -> Option<&T> {
        self.root
            .map(|root| &self.node(self.extreme(root, Side::Right)).key)
    }

    /// Number of edges on the longest root-to-leaf path; 0 for an empty or
    /// single-node tree.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.levels(root) - 1)
    }

    fn levels(&self, id: NodeId) -> usize {
        let node = self.node(id);
        let left = node.left.map_or(0, |left| self.levels(left));
        let right = node.right.map_or(0, |right| self.levels(right));
        1 + left.max(right)
    }

    /// Removes every key, keeping the allocated node storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Lazily yields the keys in order. Each call starts a fresh traversal.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse::new(self)
    }
}

impl<T, O: KeyOrder<T>> RbTree<T, O> {
    /// Returns the stored key equal to `key`.
    pub fn find(&self, key: &T) -> Option<&T> {
        self.find_node(key).map(|id| &self.node(id).key)
    }

    /// Whether a key equal to `key` is stored.
    pub fn contains(&self, key: &T) -> bool {
        self.find_node(key).is_some()
    }

    fn find_node(&self, key: &T) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            match self.order.compare(key, &node.key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Inserts `key`.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if an equal key is already stored; the tree is
    /// left untouched and `key` is dropped.
    pub fn insert(&mut self, key: T) -> Result<(), Error> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            side = match self.order.compare(&key, &node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    log::debug!("insert rejected: key equal to node {id} already present");
                    return Err(Error::DuplicateKey);
                }
            };
            parent = Some(id);
            current = node.child(side);
        }

        let new_id = self.nodes.allocate(Node::leaf(key, parent));
        match parent {
            Some(parent) => self.node_mut(parent).set_child(side, Some(new_id)),
            None => self.root = Some(new_id),
        }

        self.fix_insertion_violations(new_id);

        debug_assert!(
            self.check_invariants().is_ok(),
            "RB tree invariants violated after insertion"
        );

        Ok(())
    }

    /// Removes the key equal to `key` and returns the stored key.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no equal key is stored; the tree is left untouched.
    pub fn delete(&mut self, key: &T) -> Result<T, Error> {
        let Some(target) = self.find_node(key) else {
            log::debug!("delete missed: key not present");
            return Err(Error::NotFound);
        };

        let removed = self.delete_node(target);

        debug_assert!(
            self.check_invariants().is_ok(),
            "RB tree invariants violated after removal"
        );

        Ok(removed)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for RbTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse()).finish()
    }
}

impl<'a, T, O> IntoIterator for &'a RbTree<T, O> {
    type Item = &'a T;
    type IntoIter = Traverse<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}
