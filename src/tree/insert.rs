use super::RbTree;
use crate::node::{Color, NodeId};

impl<T, O> RbTree<T, O> {
    /// Restores the red-black properties after `node` was attached as a red
    /// leaf. Only a red-red edge between `node` and its parent (or a red root)
    /// can be wrong on entry; the loop climbs two levels per recoloring step
    /// and stops after at most two rotations.
    pub(super) fn fix_insertion_violations(&mut self, mut node: NodeId) {
        loop {
            let Some(parent) = self.parent_of(node) else {
                log::trace!("insert case 1: node {node} is root");
                self.set_color(node, Color::Black);
                return;
            };

            if self.is_black(Some(parent)) {
                log::trace!("insert case 2: parent {parent} is black");
                return;
            }

            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.grandparent_of(node) else {
                self.set_color(parent, Color::Black);
                return;
            };

            match self.uncle_of(node) {
                Some(uncle) if self.is_red(Some(uncle)) => {
                    log::trace!("insert case 3: recolor around grandparent {grandparent}");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    node = grandparent;
                    continue;
                }
                _ => {}
            }

            if self.is_right_child(parent) && self.is_left_child(node) {
                log::trace!("insert case 4: node {node} is an inner grandchild");
                self.rotate_right(parent);
                node = parent;
            } else if self.is_left_child(parent) && self.is_right_child(node) {
                log::trace!("insert case 4: node {node} is an inner grandchild");
                self.rotate_left(parent);
                node = parent;
            }

            let Some(parent) = self.parent_of(node) else {
                return;
            };

            log::trace!("insert case 5: rotate grandparent {grandparent}");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if self.is_left_child(node) {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            return;
        }
    }
}
