use core::cmp::Ordering;

/// Total order over the keys of a tree.
///
/// Two keys for which [`compare`](KeyOrder::compare) returns
/// [`Ordering::Equal`] are the same key as far as the tree is concerned, so
/// inserting the second one is rejected as a duplicate.
///
/// Any closure `Fn(&T, &T) -> Ordering` is an order:
///
/// ```
/// use arena_rbtree::RbTree;
///
/// let mut tree = RbTree::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("ccc").unwrap();
/// tree.insert("a").unwrap();
/// assert!(tree.insert("zzz").is_err());
/// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), ["a", "ccc"]);
/// ```
pub trait KeyOrder<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Order policy using the keys' own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascending;

/// Order policy reversing the keys' own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Descending;

impl<T: Ord + ?Sized> KeyOrder<T> for Ascending {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> KeyOrder<T> for Descending {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T: ?Sized, F> KeyOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
