use core::cmp::Ordering;

use super::RbTree;
use crate::{
    InvariantViolation, KeyOrder,
    node::{Color, Link, NodeId},
};

impl<T, O: KeyOrder<T>> RbTree<T, O> {
    /// Checks every structural property of the tree.
    ///
    /// Keys must be strictly increasing in order, parent links must mirror
    /// child links, the root must be black, no red node may have a red child,
    /// and every path from a node down to an absent child must cross the same
    /// number of black nodes.
    ///
    /// Returns that black count for the root (root included, 0 when empty).
    ///
    /// # Errors
    ///
    /// The first [`InvariantViolation`] found, scanning depth-first.
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return Ok(0);
        };

        match self.nodes.get(root) {
            Some(node) if node.parent.is_none() => {}
            _ => return Err(InvariantViolation::BrokenParentLink),
        }
        if self.is_red(Some(root)) {
            return Err(InvariantViolation::RedRoot);
        }

        self.check_subtree(root, None, None)
    }

    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<usize, InvariantViolation> {
        let node = self.node(id);

        let above_lower = lower.is_none_or(|lower| self.order.compare(lower, &node.key) == Ordering::Less);
        let below_upper = upper.is_none_or(|upper| self.order.compare(&node.key, upper) == Ordering::Less);
        if !above_lower || !below_upper {
            return Err(InvariantViolation::OrderViolation);
        }

        let left = self.check_child(id, node.left, lower, Some(&node.key))?;
        let right = self.check_child(id, node.right, Some(&node.key), upper)?;

        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { left, right });
        }

        Ok(left + usize::from(node.color == Color::Black))
    }

    fn check_child(
        &self,
        parent: NodeId,
        child: Link,
        lower: Option<&T>,
        upper: Option<&T>,
    ) -> Result<usize, InvariantViolation> {
        let Some(child) = child else {
            return Ok(0);
        };

        match self.nodes.get(child) {
            Some(node) if node.parent == Some(parent) => {}
            _ => return Err(InvariantViolation::BrokenParentLink),
        }
        if self.is_red(Some(parent)) && self.is_red(Some(child)) {
            return Err(InvariantViolation::RedRedEdge);
        }

        self.check_subtree(child, lower, upper)
    }
}
