use super::*;
use crate::Descending;

use alloc::collections::BTreeSet;
use ordered_float::OrderedFloat;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-64i16..64).prop_map(Op::Insert),
        2 => (-64i16..64).prop_map(Op::Delete),
    ]
}

fn keys<T: Copy, O>(tree: &RbTree<T, O>) -> Vec<T> {
    tree.traverse().copied().collect()
}

proptest! {
    /// Every operation result and the resulting key sequence match a
    /// `BTreeSet` fed the same operations, and the tree stays valid.
    #[test]
    fn prop_matches_btreeset_model(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    let expected = if model.insert(key) { Ok(()) } else { Err(Error::DuplicateKey) };
                    prop_assert_eq!(tree.insert(key), expected);
                }
                Op::Delete(key) => {
                    let expected = if model.remove(&key) { Ok(key) } else { Err(Error::NotFound) };
                    prop_assert_eq!(tree.delete(&key), expected);
                }
            }
            prop_assert!(tree.check_invariants().is_ok());
        }

        prop_assert_eq!(keys(&tree), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.min(), model.first());
        prop_assert_eq!(tree.max(), model.last());
    }

    /// Inserting a fresh key and deleting it again restores the traversal.
    #[test]
    fn prop_insert_then_delete_round_trips(
        initial in prop::collection::btree_set(any::<i32>(), 0..100),
        key: i32,
    ) {
        prop_assume!(!initial.contains(&key));
        let mut tree = RbTree::new();
        for &k in &initial {
            tree.insert(k).unwrap();
        }
        let before = keys(&tree);

        prop_assert_eq!(tree.insert(key), Ok(()));
        prop_assert_eq!(tree.delete(&key), Ok(key));

        prop_assert_eq!(keys(&tree), before);
        prop_assert!(tree.check_invariants().is_ok());
    }

    /// Failed operations do not modify the tree.
    #[test]
    fn prop_failed_operations_leave_tree_unchanged(
        initial in prop::collection::btree_set(0u32..1000, 1..100),
        missing in 1000u32..2000,
    ) {
        let mut tree = RbTree::new();
        for &k in &initial {
            tree.insert(k).unwrap();
        }
        let before = keys(&tree);
        let present = *initial.iter().next().unwrap();

        prop_assert_eq!(tree.insert(present), Err(Error::DuplicateKey));
        prop_assert_eq!(tree.delete(&missing), Err(Error::NotFound));

        prop_assert_eq!(keys(&tree), before);
        prop_assert_eq!(tree.len(), initial.len());
    }

    /// Traversal length equals successful inserts minus successful deletes.
    #[test]
    fn prop_len_counts_successful_operations(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let mut tree = RbTree::new();
        let mut inserted = 0usize;
        let mut deleted = 0usize;

        for op in ops {
            match op {
                Op::Insert(key) => inserted += usize::from(tree.insert(key).is_ok()),
                Op::Delete(key) => deleted += usize::from(tree.delete(&key).is_ok()),
            }
        }

        prop_assert_eq!(tree.traverse().count(), inserted - deleted);
        prop_assert_eq!(tree.len(), inserted - deleted);
    }

    /// Height never exceeds 2 * log2(n + 1).
    #[test]
    fn prop_height_is_logarithmic(initial in prop::collection::btree_set(any::<u16>(), 1..500)) {
        let mut tree = RbTree::new();
        for &k in &initial {
            tree.insert(k).unwrap();
        }
        let levels = tree.height() + 1;
        let bound = 2 * (usize::BITS - (initial.len() + 1).leading_zeros()) as usize;
        prop_assert!(levels <= bound, "levels {} above bound {}", levels, bound);
    }
}

#[test]
fn test_sequence_of_operations() {
    let mut tree = RbTree::new();
    let operations = [
        (true, 50),
        (true, 25),
        (true, 75),
        (true, 12),
        (true, 37),
        (false, 25),
        (true, 100),
        (false, 50),
        (true, 1),
        (false, 12),
        (true, 200),
        (true, 150),
        (false, 75),
        (true, 300),
        (false, 1),
    ];

    for (is_insert, key) in operations {
        if is_insert {
            tree.insert(key).unwrap();
        } else {
            tree.delete(&key).unwrap();
        }
        assert!(tree.check_invariants().is_ok());
    }

    assert_eq!(keys(&tree), [37, 100, 150, 200, 300]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut tree = RbTree::with_capacity(16);
    for i in 1..=5 {
        tree.insert(i).unwrap();
    }
    let capacity = tree.capacity();

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.capacity(), capacity);
    assert_eq!(tree.check_invariants(), Ok(0));

    tree.insert(42).unwrap();
    assert_eq!(keys(&tree), [42]);
}

#[test]
fn test_clone_is_independent() {
    let mut original = RbTree::new();
    for key in [3, 1, 2] {
        original.insert(key).unwrap();
    }

    let mut copy = original.clone();
    copy.delete(&2).unwrap();
    copy.insert(4).unwrap();

    assert_eq!(keys(&original), [1, 2, 3]);
    assert_eq!(keys(&copy), [1, 3, 4]);
}

#[test]
fn test_custom_order_treats_equal_keys_as_duplicates() {
    let mut tree =
        RbTree::with_order(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));

    tree.insert(String::from("Apple")).unwrap();
    tree.insert(String::from("banana")).unwrap();

    assert_eq!(tree.insert(String::from("APPLE")), Err(Error::DuplicateKey));
    assert_eq!(tree.find(&String::from("aPpLe")).map(String::as_str), Some("Apple"));
    assert_eq!(tree.delete(&String::from("apple")), Ok(String::from("Apple")));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_descending_order_tree() {
    let mut tree = RbTree::with_capacity_and_order(8, Descending);
    for key in 1..=7 {
        tree.insert(key).unwrap();
    }

    assert_eq!(keys(&tree), [7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.order(), &Descending);
    assert_eq!(tree.delete(&4), Ok(4));
    assert_eq!(keys(&tree), [7, 6, 5, 3, 2, 1]);
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn test_float_keys_with_total_order() {
    let mut tree = RbTree::new();

    tree.insert(OrderedFloat(1.0)).unwrap();
    tree.insert(OrderedFloat(f64::NAN)).unwrap();
    tree.insert(OrderedFloat(f64::NEG_INFINITY)).unwrap();
    tree.insert(OrderedFloat(f64::INFINITY)).unwrap();
    tree.insert(OrderedFloat(-0.0)).unwrap();

    assert_eq!(tree.insert(OrderedFloat(0.0)), Err(Error::DuplicateKey));
    assert_eq!(tree.insert(OrderedFloat(f64::NAN)), Err(Error::DuplicateKey));

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.min(), Some(&OrderedFloat(f64::NEG_INFINITY)));
    assert!(tree.max().is_some_and(|max| max.0.is_nan()));
    assert!(tree.contains(&OrderedFloat(f64::INFINITY)));
}

#[test]
fn test_keys_without_copy_or_clone() {
    #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
    struct Ticket(u32);

    let mut tree = RbTree::new();
    for id in [30, 10, 20] {
        tree.insert(Ticket(id)).unwrap();
    }

    assert_eq!(tree.delete(&Ticket(10)), Ok(Ticket(10)));
    assert_eq!(tree.traverse().collect::<Vec<_>>(), [&Ticket(20), &Ticket(30)]);
}
