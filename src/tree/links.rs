//! Structural primitives: link lookups, color queries, family relations and
//! rotations. None of these compare keys.

use super::RbTree;
use crate::node::{Color, Link, Node, NodeId, Side};

impl<T, O> RbTree<T, O> {
    #[inline]
    pub(super) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    #[inline]
    pub(super) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }

    #[inline]
    pub(super) fn parent_of(&self, id: NodeId) -> Link {
        self.node(id).parent
    }

    #[inline]
    pub(super) fn child_of(&self, id: NodeId, side: Side) -> Link {
        self.node(id).child(side)
    }

    /// Absent links are black.
    #[inline]
    pub(super) fn color_of(&self, link: Link) -> Color {
        link.map_or(Color::Black, |id| self.node(id).color)
    }

    #[inline]
    pub(super) fn is_red(&self, link: Link) -> bool {
        self.color_of(link) == Color::Red
    }

    #[inline]
    pub(super) fn is_black(&self, link: Link) -> bool {
        self.color_of(link) == Color::Black
    }

    #[inline]
    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Which child slot of `parent` holds `child`.
    #[inline]
    pub(super) fn side_in(&self, parent: NodeId, child: NodeId) -> Side {
        if self.node(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Side of `id` under its parent, `None` for the root.
    pub(super) fn side_of(&self, id: NodeId) -> Option<Side> {
        self.parent_of(id).map(|parent| self.side_in(parent, id))
    }

    pub(super) fn is_left_child(&self, id: NodeId) -> bool {
        self.side_of(id) == Some(Side::Left)
    }

    pub(super) fn is_right_child(&self, id: NodeId) -> bool {
        self.side_of(id) == Some(Side::Right)
    }

    pub(super) fn grandparent_of(&self, id: NodeId) -> Link {
        self.parent_of(id).and_then(|parent| self.parent_of(parent))
    }

    /// The other child of `id`'s parent; `None` for the root or when that
    /// slot is empty.
    pub(super) fn sibling_of(&self, id: NodeId) -> Link {
        let parent = self.parent_of(id)?;
        self.child_of(parent, self.side_in(parent, id).opposite())
    }

    pub(super) fn uncle_of(&self, id: NodeId) -> Link {
        self.parent_of(id).and_then(|parent| self.sibling_of(parent))
    }

    /// Walks down from `id` always taking `side`, returning the last node.
    pub(super) fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.child_of(id, side) {
            id = next;
        }
        id
    }

    /// Points whatever referenced `old` (its parent's child slot, or the root)
    /// at `new` instead. `old`'s own links are left alone.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_in(parent, old);
                self.node_mut(parent).set_child(side, new);
            }
        }
    }

    /// Puts the subtree `new` where `old` hangs, rewiring `new`'s parent link.
    pub(super) fn transplant(&mut self, old: NodeId, new: Link) {
        let parent = self.parent_of(old);
        self.replace_child(parent, old, new);

        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Rotates around `x` so it moves down towards `side`.
    ///
    /// The child of `x` on the opposite side is promoted into `x`'s position,
    /// `x` becomes its `side` child, and the promoted node's former `side`
    /// subtree becomes `x`'s new opposite child. No-op without that child.
    pub(super) fn rotate(&mut self, x: NodeId, side: Side) {
        let Some(y) = self.child_of(x, side.opposite()) else {
            return;
        };
        log::trace!("rotate {side:?} at node {x}, promoting node {y}");

        let inner = self.child_of(y, side);
        self.node_mut(x).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let x_parent = self.parent_of(x);
        self.node_mut(y).parent = x_parent;
        self.replace_child(x_parent, x, Some(y));

        self.node_mut(y).set_child(side, Some(x));
        self.node_mut(x).parent = Some(y);
    }

    #[inline]
    pub(super) fn rotate_left(&mut self, x: NodeId) {
        self.rotate(x, Side::Left);
    }

    #[inline]
    pub(super) fn rotate_right(&mut self, x: NodeId) {
        self.rotate(x, Side::Right);
    }
}
