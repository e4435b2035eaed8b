use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

/// Slot storage with index reuse through a free list.
///
/// Values are addressed by the slot index returned from [`Arena::allocate`].
/// Releasing a slot pushes its index onto a LIFO free list so the next
/// allocation reuses it, keeping indices held elsewhere stable while the
/// arena grows and shrinks.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    /// Occupied slots hold `Some`, vacated slots hold `None`
    slots: Vec<Option<T>>,

    /// Stack of vacated slot indices available for reuse
    free_list: Vec<usize>,

    /// Number of occupied slots
    len: usize,
}

impl<T> Arena<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `value` and returns the index of its slot.
    pub fn allocate(&mut self, value: T) -> usize {
        self.len += 1;
        match self.free_list.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none());
                self.slots[idx] = Some(value);
                idx
            }
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `idx` and hands its value back.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant.
    pub fn release(&mut self, idx: usize) -> T {
        match self.slots[idx].take() {
            Some(value) => {
                self.free_list.push(idx);
                self.len -= 1;
                value
            }
            None => panic!("release of vacant arena slot {idx}"),
        }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Mutable access to two distinct occupied slots at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either slot is vacant.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut requires distinct slots");
        let (lo, hi, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi);
        match (head[lo].as_mut(), tail[0].as_mut()) {
            (Some(first), Some(second)) if swapped => (second, first),
            (Some(first), Some(second)) => (first, second),
            _ => panic!("pair_mut on vacant arena slot ({a}, {b})"),
        }
    }

    /// Drops every value and forgets all slots, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Some(value) => value,
            None => panic!("access to vacant arena slot {idx}"),
        }
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        match &mut self.slots[idx] {
            Some(value) => value,
            None => panic!("access to vacant arena slot {idx}"),
        }
    }
}
