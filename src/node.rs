/// Slot index of a node inside the tree's arena.
pub(crate) type NodeId = usize;

/// An optional edge to another node. `None` is an absent child (or the
/// parent of the root) and counts as black.
pub(crate) type Link = Option<NodeId>;

/// Red-Black tree node colors used to maintain tree balance properties.
///
/// Red-Black trees maintain balance by ensuring:
/// - Red nodes have black children
/// - All paths from a node to its absent children have equal black node counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Red node - must have black children, cannot be adjacent to other red nodes
    Red,
    /// Black node - can have children of any color, contributes to black height
    Black,
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A node in the Red-Black tree containing a key and structural information.
///
/// Children are owned through the arena slot they point at; `parent` is a
/// back-reference used only to walk upwards and never frees anything.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The stored key
    pub key: T,

    /// Color of this node (Red or Black) used for Red-Black tree balancing
    pub color: Color,

    /// Slot of the parent node (`None` if this is root)
    pub parent: Link,

    /// Slot of the left child (`None` if no left child)
    pub left: Link,

    /// Slot of the right child (`None` if no right child)
    pub right: Link,
}

impl<T> Node<T> {
    /// A fresh red leaf hanging below `parent`.
    pub const fn leaf(key: T, parent: Link) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub const fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub const fn set_child(&mut self, side: Side, child: Link) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
