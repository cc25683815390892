//! A fixed-capacity deque over owned values, built on [`RingIndex`](crate::RingIndex).

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::behavior::{Behavior, Saturating, Wrapping};
use crate::error::{CapacityError, Result};
use crate::ringindex::{self, RingIndex};
use crate::slots::Slots;

mod trait_impls;

pub use self::trait_impls::IntoIter;

/// Backing storage of a `RingDeque`: one `Option<T>` per cursor.
struct SlotVec<T> {
    slots: Vec<Option<T>>,
    // Last element reported through `delete`, handed back by pushes.
    evicted: Option<T>,
    on_evict: Option<Box<dyn FnMut(&T)>>,
}

impl<T> Slots for SlotVec<T> {
    fn delete(&mut self, cursor: usize) {
        if let Some(element) = self.slots[cursor].take() {
            if let Some(hook) = self.on_evict.as_mut() {
                hook(&element);
            }
            self.evicted = Some(element);
        }
    }

    fn copy(&mut self, dst: usize, src: usize) {
        let element = self.slots[src].take();
        self.slots[dst] = element;
    }
}

/// `RingDeque` is a fixed capacity ring buffer built on [`RingIndex`].
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. Iterating over
/// `RingDeque` goes front to back.
///
/// What happens when pushing into a full deque is decided by `B`:
/// [`Saturating`] hands the element back, [`Wrapping`] overwrites.
///
/// # Examples
///
/// ```
/// use ringindex::{RingDeque, Wrapping};
///
/// let mut recent: RingDeque<u32, Wrapping> = RingDeque::new(3).unwrap();
/// for n in 0..5 {
///     recent.push_back(n);
/// }
/// assert_eq!(recent, vec![2, 3, 4]);
/// ```
pub struct RingDeque<T, B: Behavior = Saturating> {
    ring: RingIndex<SlotVec<T>>,
    marker: PhantomData<B>,
}

/// `RingDeque` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    slots: &'a [Option<T>],
    cursors: ringindex::Iter,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            cursors: self.cursors.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let slots = self.slots;
        self.cursors.next().and_then(|cursor| slots[cursor].as_ref())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursors.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        let slots = self.slots;
        self.cursors.next_back().and_then(|cursor| slots[cursor].as_ref())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T, B: Behavior> RingDeque<T, B> {
    /// Creates an empty `RingDeque` holding at most `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringindex::RingDeque;
    ///
    /// let deque: RingDeque<usize> = RingDeque::new(3).unwrap();
    /// assert_eq!(deque.capacity(), 3);
    /// assert!(RingDeque::<usize>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hook(capacity, None)
    }

    /// Creates an empty `RingDeque` that shows every element it discards
    /// (overwritten, removed by predicate or cleared) to `hook` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use std::cell::RefCell;
    /// use ringindex::{RingDeque, Wrapping};
    ///
    /// let dropped = Rc::new(RefCell::new(Vec::new()));
    /// let sink = dropped.clone();
    /// let mut deque: RingDeque<char, Wrapping> =
    ///     RingDeque::with_evict_hook(2, move |c: &char| sink.borrow_mut().push(*c)).unwrap();
    /// deque.extend("abcd".chars());
    /// assert_eq!(*dropped.borrow(), ['a', 'b']);
    /// ```
    pub fn with_evict_hook<F>(capacity: usize, hook: F) -> Result<Self>
    where
        F: FnMut(&T) + 'static,
    {
        Self::with_hook(capacity, Some(Box::new(hook)))
    }

    fn with_hook(capacity: usize, on_evict: Option<Box<dyn FnMut(&T)>>) -> Result<Self> {
        // Validate before allocating `capacity + 1` slots.
        let ring = RingIndex::new(
            capacity,
            SlotVec {
                slots: Vec::new(),
                evicted: None,
                on_evict,
            },
        )?;
        let mut deque = RingDeque {
            ring,
            marker: PhantomData,
        };
        let allocation_size = deque.ring.allocation_size();
        deque.storage().slots.resize_with(allocation_size, || None);
        Ok(deque)
    }

    #[inline]
    fn storage(&mut self) -> &mut SlotVec<T> {
        self.ring.slots_mut()
    }

    #[inline]
    fn take_evicted(&mut self) -> Option<T> {
        self.storage().evicted.take()
    }

    #[inline]
    fn write(&mut self, cursor: usize, element: T) {
        debug_assert!(self.ring.slots().slots[cursor].is_none());
        self.storage().slots[cursor] = Some(element);
    }

    /// Maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the number of elements in the `RingDeque`.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the `RingDeque` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns true if the `RingDeque` is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Retrieves an element in the `RingDeque` by index.
    ///
    /// Element at index 0 is the front of the queue.
    pub fn get(&self, index: usize) -> Option<&T> {
        let cursor = self.ring.map_index(index).ok()?;
        self.ring.slots().slots[cursor].as_ref()
    }

    /// Retrieves an element in the `RingDeque` mutably by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let cursor = self.ring.map_index(index).ok()?;
        self.storage().slots[cursor].as_mut()
    }

    /// Provides a reference to the front element, or `None` if the
    /// `RingDeque` is empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the back element, or `None` if the
    /// `RingDeque` is empty.
    pub fn back(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Removes the first element and returns it, or `None` if the
    /// `RingDeque` is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let cursor = self.ring.pop_head().ok()?;
        self.storage().slots[cursor].take()
    }

    /// Removes the last element and returns it, or `None` if the
    /// `RingDeque` is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let cursor = self.ring.pop_tail().ok()?;
        self.storage().slots[cursor].take()
    }

    /// Removes and returns the element at `index` from the `RingDeque`.
    /// Whichever end is closer to the removal point will be moved to make
    /// room, and all the affected elements will be moved to new positions.
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringindex::RingDeque;
    ///
    /// let mut buf: RingDeque<_> = RingDeque::new(4).unwrap();
    /// buf.extend(1..4);
    ///
    /// assert_eq!(buf.remove(1), Some(2));
    /// assert_eq!(buf.get(1), Some(&3));
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let cursor = self.ring.map_index(index).ok()?;
        let element = self.storage().slots[cursor].take();
        self.ring.remove(index).ok()?;
        element
    }

    /// Removes and returns the first element, front to back, matching `f`.
    pub fn remove_first<F>(&mut self, mut f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let found = self
            .ring
            .remove_first(|storage, cursor| storage.slots[cursor].as_ref().map_or(false, &mut f));
        if found {
            self.take_evicted()
        } else {
            None
        }
    }

    /// Removes and returns the first element, back to front, matching `f`.
    pub fn remove_last<F>(&mut self, mut f: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let found = self
            .ring
            .remove_last(|storage, cursor| storage.slots[cursor].as_ref().map_or(false, &mut f));
        if found {
            self.take_evicted()
        } else {
            None
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns false.
    /// This method operates in place, in a single pass, and preserves the
    /// order of the retained elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringindex::RingDeque;
    ///
    /// let mut buf: RingDeque<_> = RingDeque::new(5).unwrap();
    /// buf.extend(1..5);
    /// buf.retain(|&x| x % 2 == 0);
    ///
    /// assert_eq!(buf, vec![2, 4]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.ring.remove_all(|storage, cursor| {
            storage.slots[cursor].as_ref().map_or(false, |element| !f(element))
        });
        self.take_evicted();
    }

    /// Clears the `RingDeque`, dropping every element front to back.
    pub fn clear(&mut self) {
        self.ring.clear();
        self.take_evicted();
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.ring.slots().slots,
            cursors: self.ring.iter(),
        }
    }
}

impl<T> RingDeque<T, Saturating> {
    /// Adds an element to the back of the deque.
    ///
    /// Returns `Err(CapacityError { element })` without any mutation if the
    /// deque is full.
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [_, _, 1] -> Ok
    /// [_, _, 1] <-(+)- 2 => [_, 1, 2] -> Ok
    /// [_, 1, 2] <-(+)- 3 => [1, 2, 3] -> Ok
    /// [1, 2, 3] <-(+)- 4 => [1, 2, 3] -> Err(4)
    /// ```
    pub fn push_back(&mut self, element: T) -> core::result::Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        let cursor = self.ring.acquire_back();
        self.write(cursor, element);
        Ok(())
    }

    /// Adds an element to the front of the deque.
    ///
    /// Returns `Err(CapacityError { element })` without any mutation if the
    /// deque is full.
    pub fn push_front(&mut self, element: T) -> core::result::Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        let cursor = self.ring.acquire_front();
        self.write(cursor, element);
        Ok(())
    }

    /// Inserts an element at `index` within the `RingDeque`. Whichever
    /// end is closer to the insertion point will be moved to make room.
    ///
    /// Returns `Err(CapacityError { element })` if the deque is full.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than `RingDeque`'s length
    ///
    /// # Examples
    /// ```
    /// use ringindex::RingDeque;
    ///
    /// let mut buf: RingDeque<_> = RingDeque::new(3).unwrap();
    /// buf.push_back(10).unwrap();
    /// buf.push_back(12).unwrap();
    /// buf.insert(1, 11).unwrap();
    /// let overflow = buf.insert(0, 9);
    ///
    /// assert_eq!(buf.get(1), Some(&11));
    /// assert_eq!(overflow.unwrap_err().element, 9);
    /// ```
    pub fn insert(
        &mut self,
        index: usize,
        element: T,
    ) -> core::result::Result<(), CapacityError<T>> {
        assert!(index <= self.len(), "index out of bounds");
        if self.is_full() {
            return Err(CapacityError { element });
        }
        match self.ring.acquire_index(index) {
            Ok(cursor) => self.write(cursor, element),
            Err(_) => unreachable!("index checked above"),
        }
        Ok(())
    }
}

impl<T> RingDeque<T, Wrapping> {
    /// Adds an element to the back of the deque.
    ///
    /// Returns `Some(existing)` if the deque was full, where `existing` is the
    /// front element it overwrote.
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [_, _, 1] -> None
    /// [_, _, 1] <-(+)- 2 => [_, 1, 2] -> None
    /// [_, 1, 2] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(1)
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        let cursor = self.ring.acquire_back();
        self.write(cursor, element);
        self.take_evicted()
    }

    /// Adds an element to the front of the deque.
    ///
    /// Returns `Some(existing)` if the deque was full, where `existing` is the
    /// back element it overwrote.
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [1, _, _] -> None
    /// 2 -(+)-> [1, _, _] => [2, 1, _] -> None
    /// 3 -(+)-> [2, 1, _] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(1)
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        let cursor = self.ring.acquire_front();
        self.write(cursor, element);
        self.take_evicted()
    }

    /// Inserts an element at `index` within the `RingDeque`.
    ///
    /// Returns `Some(existing)` if the deque was full, where `existing` is the
    /// front element it overwrote. The front is dropped before inserting, so
    /// the new element lands one position earlier than `index` in that case.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than `RingDeque`'s length
    pub fn insert(&mut self, index: usize, element: T) -> Option<T> {
        assert!(index <= self.len(), "index out of bounds");
        match self.ring.acquire_index(index) {
            Ok(cursor) => self.write(cursor, element),
            Err(_) => unreachable!("index checked above"),
        }
        self.take_evicted()
    }
}
