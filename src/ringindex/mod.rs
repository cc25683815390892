use core::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::logic::{self, CircularIndex, Parameters};
use crate::slots::{FnSlots, Slots};
use crate::utils::*;
use crate::MAX_CAPACITY;

mod cursors;

pub use self::cursors::{Cursors, Iter};

/// Index engine of a fixed-capacity ring buffer.
///
/// `RingIndex` decides which physical slot is written, read or vacated and
/// keeps `head`, `tail` and the element count consistent. Element storage
/// stays with the caller and is only touched through the [`Slots`] value the
/// engine owns.
///
/// # Capacity
///
/// The caller's storage must hold [`allocation_size()`](RingIndex::allocation_size)
/// slots, one more than `capacity()`. The spare slot lets `head` and `tail`
/// tell a full ring from an empty one.
///
/// # Examples
///
/// ```
/// use ringindex::{RingIndex, Slots};
///
/// struct Store(Vec<Option<char>>);
///
/// impl Slots for Store {
///     fn delete(&mut self, cursor: usize) {
///         self.0[cursor] = None;
///     }
///
///     fn copy(&mut self, dst: usize, src: usize) {
///         self.0[dst] = self.0[src].take();
///     }
/// }
///
/// let mut ring = RingIndex::new(3, Store(vec![None; 4])).unwrap();
/// for value in "abcd".chars() {
///     let cursor = ring.acquire_back();
///     ring.slots_mut().0[cursor] = Some(value);
/// }
///
/// let live: String = ring.iter().map(|c| ring.slots().0[c].unwrap()).collect();
/// assert_eq!(live, "bcd");
/// ```
pub struct RingIndex<S> {
    slots: S,
    capacity: usize,
    head: usize,
    tail: usize,
    len: usize,
}

/// Assembles a [`RingIndex`] driven by two closures.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use ringindex::{Builder, Error};
///
/// let deleted = RefCell::new(Vec::new());
/// let mut ring = Builder::new(2)
///     .on_delete(|cursor| deleted.borrow_mut().push(cursor))
///     .on_copy(|_dst, _src| {})
///     .build()
///     .unwrap();
///
/// let first = ring.acquire_back();
/// ring.acquire_back();
/// ring.acquire_back();
/// assert_eq!(*deleted.borrow(), [first]);
///
/// let missing = Builder::new(2).on_delete(|_| {}).build();
/// assert_eq!(missing.err(), Some(Error::MissingCallback("copy")));
/// ```
pub struct Builder<D, C> {
    capacity: usize,
    delete: Option<D>,
    copy: Option<C>,
}

impl Builder<fn(usize), fn(usize, usize)> {
    /// Starts a builder for a ring holding at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Builder {
            capacity,
            delete: None,
            copy: None,
        }
    }
}

impl<D, C> Builder<D, C> {
    /// Sets the hook called with the cursor of every element that leaves.
    pub fn on_delete<D2>(self, delete: D2) -> Builder<D2, C>
    where
        D2: FnMut(usize),
    {
        Builder {
            capacity: self.capacity,
            delete: Some(delete),
            copy: self.copy,
        }
    }

    /// Sets the hook called as `copy(dst, src)` whenever an element moves.
    pub fn on_copy<C2>(self, copy: C2) -> Builder<D, C2>
    where
        C2: FnMut(usize, usize),
    {
        Builder {
            capacity: self.capacity,
            delete: self.delete,
            copy: Some(copy),
        }
    }

    /// Validates the capacity and both hooks.
    pub fn build(self) -> Result<RingIndex<FnSlots<D, C>>>
    where
        D: FnMut(usize),
        C: FnMut(usize, usize),
    {
        check_capacity(self.capacity)?;
        let delete = self.delete.ok_or(Error::MissingCallback("delete"))?;
        let copy = self.copy.ok_or(Error::MissingCallback("copy"))?;
        RingIndex::new(self.capacity, FnSlots::new(delete, copy))
    }
}

#[inline]
fn check_capacity(capacity: usize) -> Result<()> {
    if capacity == 0 || capacity > MAX_CAPACITY {
        return Err(Error::InvalidCapacity { capacity });
    }
    Ok(())
}

impl<S: Slots> RingIndex<S> {
    /// Creates an empty engine for `capacity` elements.
    ///
    /// Fails with [`Error::InvalidCapacity`] unless
    /// `1 <= capacity <= MAX_CAPACITY`.
    pub fn new(capacity: usize, slots: S) -> Result<RingIndex<S>> {
        check_capacity(capacity)?;
        debug!(capacity, "ring index created");
        Ok(RingIndex {
            slots,
            capacity,
            head: 0,
            tail: capacity,
            len: 0,
        })
    }

    /// Maximum number of live elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots the caller's storage must provide: `capacity() + 1`.
    #[inline]
    pub fn allocation_size(&self) -> usize {
        self.capacity + 1
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no element is live.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next acquire at either end evicts.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Cursor of the oldest element. Meaningless while empty.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Cursor of the newest element. Meaningless while empty.
    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// The storage collaborator.
    #[inline]
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// The storage collaborator, mutably, e.g. to write into an acquired slot.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Gives the collaborator back, dropping the engine.
    pub fn into_slots(self) -> S {
        self.slots
    }

    /// Translates a logical position (0 is the head) into a cursor.
    #[inline]
    pub fn map_index(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(wrap_add(self.head, index, self.allocation_size()))
    }

    /// Returns the cursor to write a new newest element to.
    ///
    /// A full ring first evicts its head through `delete`.
    pub fn acquire_back(&mut self) -> usize {
        if self.is_full() {
            let evicted = self.head;
            trace!(cursor = evicted, "evicting head");
            self.slots.delete(evicted);
            self.head = self.next(evicted);
            self.len -= 1;
        }
        self.tail = self.next(self.tail);
        self.len += 1;
        self.tail
    }

    /// Returns the cursor to write a new oldest element to.
    ///
    /// A full ring first evicts its tail through `delete`.
    pub fn acquire_front(&mut self) -> usize {
        if self.is_full() {
            let evicted = self.tail;
            trace!(cursor = evicted, "evicting tail");
            self.slots.delete(evicted);
            self.tail = self.prev(evicted);
            self.len -= 1;
        }
        self.head = self.prev(self.head);
        self.len += 1;
        self.head
    }

    /// Opens a slot so that the element written there ends up at logical
    /// position `index`, shifting whichever side of it is shorter.
    ///
    /// `index == len()` behaves like [`acquire_back`](RingIndex::acquire_back).
    /// A full ring evicts its head first; when the head is the insertion
    /// point the evicted slot is reused as is.
    ///
    /// Equal distances shift the tail side.
    pub fn acquire_index(&mut self, index: usize) -> Result<usize> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        if index == self.len {
            return Ok(self.acquire_back());
        }

        let cursor = wrap_add(self.head, index, self.allocation_size());
        let mut index = index;
        if self.is_full() {
            let evicted = self.head;
            trace!(cursor = evicted, "evicting head for insert");
            self.slots.delete(evicted);
            if evicted == cursor {
                return Ok(cursor);
            }
            self.head = self.next(evicted);
            self.len -= 1;
            index -= 1;
        }

        let params = Parameters {
            cursor,
            distance_to_head: index,
            distance_to_tail: self.len - index,
        };
        trace!(
            cursor,
            distance_to_head = params.distance_to_head,
            distance_to_tail = params.distance_to_tail,
            "opening gap"
        );
        let opened = logic::insert::open(self, params);
        self.len += 1;
        self.debug_check_len();
        Ok(opened)
    }

    /// Detaches the head and returns its cursor. `delete` is not called:
    /// the caller reads the value out itself.
    pub fn pop_head(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let freed = self.head;
        self.head = self.next(freed);
        self.len -= 1;
        Ok(freed)
    }

    /// Detaches the tail and returns its cursor. `delete` is not called.
    pub fn pop_tail(&mut self) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let freed = self.tail;
        self.tail = self.prev(freed);
        self.len -= 1;
        Ok(freed)
    }

    /// Closes the gap at logical position `index` without calling `delete`;
    /// the caller has already taken the value out.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        let cursor = self.map_index(index)?;
        self.close_gap(index, cursor);
        Ok(())
    }

    /// Deletes the first element, scanning from the head, for which `f`
    /// holds. Returns whether one was found.
    pub fn remove_first<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&S, usize) -> bool,
    {
        let mut cursor = self.head;
        for index in 0..self.len {
            if f(&self.slots, cursor) {
                self.slots.delete(cursor);
                self.close_gap(index, cursor);
                return true;
            }
            cursor = self.next(cursor);
        }
        false
    }

    /// Deletes the first element, scanning back from the tail, for which `f`
    /// holds. Returns whether one was found.
    pub fn remove_last<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&S, usize) -> bool,
    {
        let mut cursor = self.tail;
        for index in (0..self.len).rev() {
            if f(&self.slots, cursor) {
                self.slots.delete(cursor);
                self.close_gap(index, cursor);
                return true;
            }
            cursor = self.prev(cursor);
        }
        false
    }

    /// Deletes every element for which `f` holds, compacting the survivors
    /// in one pass while keeping their order. Returns whether anything was
    /// removed.
    ///
    /// Each slot a survivor is copied out of is passed to `delete` right
    /// after the copy, so storage whose `copy` duplicates ends up with no
    /// values outside the live region.
    pub fn remove_all<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&S, usize) -> bool,
    {
        let len = self.len;
        let removed =
            logic::retain::remove_matching(self, len, |ring, cursor| f(&ring.slots, cursor));
        if removed > 0 {
            trace!(removed, len = len - removed, "removed matching elements");
        }
        self.len = len - removed;
        self.debug_check_len();
        removed > 0
    }

    /// Deletes every element, head to tail, and resets to empty.
    pub fn clear(&mut self) {
        let mut cursor = self.head;
        for _ in 0..self.len {
            self.slots.delete(cursor);
            cursor = self.next(cursor);
        }
        debug!(removed = self.len, "cleared ring");
        self.reset();
    }

    /// Resets to empty without calling `delete`, for callers that already
    /// disposed of every value.
    pub fn clear_unreported(&mut self) {
        self.reset();
    }

    /// Snapshot of the live cursors, head to tail. Reverse it for tail to head.
    pub fn iter(&self) -> Iter {
        Iter::new(self.head, self.tail, self.len, self.allocation_size())
    }

    /// Head-to-tail walker supporting removal of the current element.
    pub fn cursors(&mut self) -> Cursors<'_, S> {
        Cursors::forward(self)
    }

    /// Tail-to-head walker supporting removal of the current element.
    pub fn cursors_rev(&mut self) -> Cursors<'_, S> {
        Cursors::backward(self)
    }

    #[inline]
    fn reset(&mut self) {
        self.head = 0;
        self.tail = self.capacity;
        self.len = 0;
    }

    /// Closes the vacant slot at `cursor`, logical position `index`.
    fn close_gap(&mut self, index: usize, cursor: usize) {
        debug_assert!(index < self.len);
        let params = Parameters {
            cursor,
            distance_to_head: index,
            distance_to_tail: self.len - 1 - index,
        };
        trace!(
            cursor,
            distance_to_head = params.distance_to_head,
            distance_to_tail = params.distance_to_tail,
            "closing gap"
        );
        logic::remove::close(self, params);
        self.len -= 1;
        self.debug_check_len();
    }

    #[inline]
    fn debug_check_len(&self) {
        debug_assert_eq!(
            count(self.head, self.next(self.tail), self.allocation_size()),
            self.len
        );
    }
}

impl<S: Slots> CircularIndex for RingIndex<S> {
    #[inline]
    fn allocation_size(&self) -> usize {
        self.capacity + 1
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn tail(&self) -> usize {
        self.tail
    }

    #[inline]
    fn set_head(&mut self, head: usize) {
        debug_assert!(head <= self.capacity);
        self.head = head;
    }

    #[inline]
    fn set_tail(&mut self, tail: usize) {
        debug_assert!(tail <= self.capacity);
        self.tail = tail;
    }

    #[inline]
    fn copy(&mut self, dst: usize, src: usize) {
        self.slots.copy(dst, src)
    }

    #[inline]
    fn delete(&mut self, cursor: usize) {
        self.slots.delete(cursor)
    }
}

impl<S> fmt::Debug for RingIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RingIndex")
            .field("capacity", &self.capacity)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("len", &self.len)
            .finish()
    }
}
