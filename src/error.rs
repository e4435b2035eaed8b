/// Failure of a tree operation. The tree is never modified when one of these
/// is returned.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum Error {
    /// An equal key is already stored, so the insertion was rejected.
    #[error("key already present")]
    DuplicateKey,
    /// No stored key compares equal to the one asked for.
    #[error("key not found")]
    NotFound,
}

/// A broken red-black or search-tree property reported by
/// [`RbTree::check_invariants`](crate::RbTree::check_invariants).
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("root node is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRedEdge,
    /// Two paths from the same node down to absent children cross a different
    /// number of black nodes.
    #[error("black height differs between sibling subtrees ({left} vs {right})")]
    BlackHeightMismatch {
        /// Black height of the left subtree
        left: usize,
        /// Black height of the right subtree
        right: usize,
    },
    /// In-order keys are not strictly increasing under the tree's ordering.
    #[error("keys are not in strictly increasing order")]
    OrderViolation,
    /// A child's parent link does not point back at its parent, or the root
    /// has a parent.
    #[error("parent back-reference is inconsistent")]
    BrokenParentLink,
}
