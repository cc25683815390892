use super::RingIndex;
use crate::error::{Error, Result};
use crate::slots::Slots;
use crate::utils::*;

/// Live cursors of a [`RingIndex`], head to tail.
///
/// Built by [`RingIndex::iter`]. The iterator copies the boundaries it needs,
/// so the ring's storage stays free to use while iterating; mutating the
/// ring itself invalidates the snapshot.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct Iter {
    front: usize,
    back: usize,
    remaining: usize,
    modulus: usize,
}

impl Iter {
    pub(super) fn new(head: usize, tail: usize, len: usize, modulus: usize) -> Iter {
        Iter {
            front: head,
            back: tail,
            remaining: len,
            modulus,
        }
    }
}

impl Iterator for Iter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let cursor = self.front;
        self.front = next(cursor, self.modulus);
        self.remaining -= 1;
        Some(cursor)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter {
    #[inline]
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let cursor = self.back;
        self.back = prev(cursor, self.modulus);
        self.remaining -= 1;
        Some(cursor)
    }
}

impl ExactSizeIterator for Iter {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Walker over a [`RingIndex`] that can remove the element it stands on.
///
/// Obtained from [`RingIndex::cursors`] (head to tail) or
/// [`RingIndex::cursors_rev`] (tail to head). Each successful
/// [`advance`](Cursors::advance) allows at most one
/// [`remove_current`](Cursors::remove_current).
///
/// # Examples
///
/// ```
/// use ringindex::{RingIndex, Slots};
///
/// struct Store(Vec<Option<u32>>);
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
/// let mut ring = RingIndex::new(5, Store(vec![None; 6])).unwrap();
/// for value in 1..=5 {
///     let cursor = ring.acquire_back();
///     ring.slots_mut().0[cursor] = Some(value);
/// }
///
/// let mut walker = ring.cursors();
/// while walker.has_next() {
///     let cursor = walker.advance().unwrap();
///     if walker.slots().0[cursor] == Some(2) || walker.slots().0[cursor] == Some(3) {
///         walker.remove_current().unwrap();
///     }
/// }
///
/// let left: Vec<u32> = ring.iter().map(|c| ring.slots().0[c].unwrap()).collect();
/// assert_eq!(left, [1, 4, 5]);
/// ```
#[derive(Debug)]
pub struct Cursors<'a, S: 'a> {
    ring: &'a mut RingIndex<S>,
    direction: Direction,
    // Forward: logical index of the next element to visit.
    // Backward: number of elements not visited yet.
    position: usize,
    current: Option<usize>,
}

impl<'a, S: Slots> Cursors<'a, S> {
    pub(super) fn forward(ring: &'a mut RingIndex<S>) -> Cursors<'a, S> {
        Cursors {
            ring,
            direction: Direction::Forward,
            position: 0,
            current: None,
        }
    }

    pub(super) fn backward(ring: &'a mut RingIndex<S>) -> Cursors<'a, S> {
        let position = ring.len();
        Cursors {
            ring,
            direction: Direction::Backward,
            position,
            current: None,
        }
    }

    /// Whether another live element is left in the walking direction.
    #[inline]
    pub fn has_next(&self) -> bool {
        match self.direction {
            Direction::Forward => self.position < self.ring.len(),
            Direction::Backward => self.position > 0,
        }
    }

    /// Steps onto the next element and returns its cursor.
    pub fn advance(&mut self) -> Result<usize> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        let index = match self.direction {
            Direction::Forward => {
                self.position += 1;
                self.position - 1
            }
            Direction::Backward => {
                self.position -= 1;
                self.position
            }
        };
        self.current = Some(index);
        self.ring.map_index(index)
    }

    /// Cursor of the element last returned by `advance`, unless it has been
    /// removed since.
    pub fn current(&self) -> Option<usize> {
        self.current.and_then(|index| self.ring.map_index(index).ok())
    }

    /// Deletes the current element and closes the gap from the nearer end.
    ///
    /// Elements not visited yet keep their relative order and are still
    /// returned by later calls to `advance`.
    pub fn remove_current(&mut self) -> Result<()> {
        let index = self.current.take().ok_or(Error::NoCurrent)?;
        let cursor = self.ring.map_index(index)?;
        self.ring.slots.delete(cursor);
        self.ring.close_gap(index, cursor);
        if self.direction == Direction::Forward {
            // Everything after the removed element moved down one position.
            self.position -= 1;
        }
        Ok(())
    }

    /// The ring's storage collaborator.
    #[inline]
    pub fn slots(&self) -> &S {
        self.ring.slots()
    }

    /// The ring's storage collaborator, mutably.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut S {
        self.ring.slots_mut()
    }
}
