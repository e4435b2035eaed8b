use super::RbTree;
use crate::node::{Color, NodeId, Side};

impl<T, O> RbTree<T, O> {
    /// Unlinks `target`, repairs the tree and frees the vacated slot, handing
    /// back the key that was stored at `target`.
    pub(super) fn delete_node(&mut self, target: NodeId) -> T {
        let doomed = self.reduce_to_single_child(target);

        let node = self.node(doomed);
        let (color, child, parent) = (node.color, node.left.or(node.right), node.parent);
        let side = self.side_of(doomed);

        self.transplant(doomed, child);

        match (color, child) {
            (Color::Red, _) => {}
            (Color::Black, Some(child)) if self.is_red(Some(child)) => {
                self.set_color(child, Color::Black);
            }
            (Color::Black, _) => {
                let deficit = parent.zip(side);
                self.fix_deletion_violations(deficit);
            }
        }

        let freed = self.nodes.release(doomed);
        freed.key
    }

    /// Moves the key of `target` into the node that will be physically
    /// removed. A node with two children trades keys with its in-order
    /// successor, which has no left child.
    fn reduce_to_single_child(&mut self, target: NodeId) -> NodeId {
        let node = self.node(target);
        let (Some(_), Some(right)) = (node.left, node.right) else {
            return target;
        };

        let successor = self.extreme(right, Side::Left);
        let (target_node, successor_node) = self.nodes.pair_mut(target, successor);
        core::mem::swap(&mut target_node.key, &mut successor_node.key);
        successor
    }

    /// Repairs a missing black node on the `side` child slot of a parent.
    ///
    /// `deficit` names the parent and the side whose subtree is one black
    /// node short; the slot itself may be empty. `None` means the deficit
    /// reached the root, where it is absorbed.
    fn fix_deletion_violations(&mut self, mut deficit: Option<(NodeId, Side)>) {
        while let Some((parent, side)) = deficit {
            let far_side = side.opposite();

            let mut sibling = self.child_of(parent, far_side);
            match sibling {
                Some(red) if self.is_red(sibling) => {
                    log::trace!("delete case 2: red sibling {red} under parent {parent}");
                    self.set_color(red, Color::Black);
                    self.set_color(parent, Color::Red);
                    self.rotate(parent, side);
                    sibling = self.child_of(parent, far_side);
                }
                _ => {}
            }

            // A black-height deficit on one side implies a real node opposite.
            let Some(sibling) = sibling else {
                break;
            };

            let near = self.child_of(sibling, side);
            let far = self.child_of(sibling, far_side);

            if self.is_black(near) && self.is_black(far) {
                self.set_color(sibling, Color::Red);
                if self.is_red(Some(parent)) {
                    log::trace!("delete case 4: red parent {parent} absorbs the deficit");
                    self.set_color(parent, Color::Black);
                    break;
                }
                log::trace!("delete case 3: deficit moves up to parent {parent}");
                deficit = self.deficit_above(parent);
                continue;
            }

            let sibling = match near {
                Some(near) if self.is_black(far) => {
                    log::trace!("delete case 5: rotate sibling {sibling} away");
                    self.set_color(sibling, Color::Red);
                    self.set_color(near, Color::Black);
                    self.rotate(sibling, far_side);
                    near
                }
                _ => sibling,
            };

            log::trace!("delete case 6: rotate parent {parent} towards the deficit");
            let parent_color = self.color_of(Some(parent));
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            if let Some(far) = self.child_of(sibling, far_side) {
                self.set_color(far, Color::Black);
            }
            self.rotate(parent, side);
            break;
        }

        if deficit.is_none() {
            log::trace!("delete case 1: deficit reached the root");
        }
    }

    /// The position of `id` expressed as (parent, side), or `None` at the root.
    fn deficit_above(&self, id: NodeId) -> Option<(NodeId, Side)> {
        self.parent_of(id)
            .map(|parent| (parent, self.side_in(parent, id)))
    }
}
