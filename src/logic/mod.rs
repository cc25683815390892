//! Gap opening and closing shared by every shifting operation.
//!
//! The routines here only move cursors around through [`CircularIndex`];
//! the live-element count is kept by the caller.

pub mod insert;
pub mod remove;
pub mod retain;

use crate::utils;

/// What the shifting routines need to see of a ring.
pub trait CircularIndex {
    fn allocation_size(&self) -> usize;

    fn head(&self) -> usize;
    fn tail(&self) -> usize;

    fn set_head(&mut self, head: usize);
    fn set_tail(&mut self, tail: usize);

    /// Moves the element at `src` into `dst`.
    fn copy(&mut self, dst: usize, src: usize);
    /// Reports that the element at `cursor` leaves the ring.
    fn delete(&mut self, cursor: usize);

    #[inline]
    fn next(&self, cursor: usize) -> usize {
        utils::next(cursor, self.allocation_size())
    }

    #[inline]
    fn prev(&self, cursor: usize) -> usize {
        utils::prev(cursor, self.allocation_size())
    }
}

/// Where a gap sits relative to both ends of the live region.
#[derive(Clone, Copy, Debug)]
pub struct Parameters {
    pub cursor: usize,
    pub distance_to_head: usize,
    pub distance_to_tail: usize,
}

impl Parameters {
    /// Head-side shifting only wins when strictly cheaper.
    #[inline]
    pub fn closer_to_head(&self) -> bool {
        self.distance_to_head < self.distance_to_tail
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::vec::Vec;

    use super::CircularIndex;
    use crate::utils;

    /// Bare ring over a `Vec<Option<char>>` for exercising the routines
    /// without the engine.
    pub struct Ring {
        pub slots: Vec<Option<char>>,
        pub head: usize,
        pub tail: usize,
        pub copies: usize,
        pub deleted: Vec<char>,
        // Leave the source in place on `copy`, like storage of plain values.
        pub duplicate_on_copy: bool,
    }

    impl Ring {
        /// Lays `values` out starting at physical slot `start`.
        pub fn with(allocation_size: usize, start: usize, values: &str) -> Ring {
            let mut slots = vec![None; allocation_size];
            let mut cursor = start;
            let mut tail = utils::prev(start, allocation_size);
            for value in values.chars() {
                slots[cursor] = Some(value);
                tail = cursor;
                cursor = utils::next(cursor, allocation_size);
            }
            Ring {
                slots,
                head: start,
                tail,
                copies: 0,
                deleted: Vec::new(),
                duplicate_on_copy: false,
            }
        }

        pub fn read(&self, len: usize) -> std::string::String {
            let mut out = std::string::String::new();
            let mut cursor = self.head;
            for _ in 0..len {
                out.push(self.slots[cursor].expect("live slot is empty"));
                cursor = self.next(cursor);
            }
            assert_eq!(self.next(self.tail), cursor);
            out
        }
    }

    impl CircularIndex for Ring {
        fn allocation_size(&self) -> usize {
            self.slots.len()
        }

        fn head(&self) -> usize {
            self.head
        }

        fn tail(&self) -> usize {
            self.tail
        }

        fn set_head(&mut self, head: usize) {
            self.head = head;
        }

        fn set_tail(&mut self, tail: usize) {
            self.tail = tail;
        }

        fn copy(&mut self, dst: usize, src: usize) {
            self.copies += 1;
            self.slots[dst] = if self.duplicate_on_copy {
                self.slots[src]
            } else {
                self.slots[src].take()
            };
        }

        fn delete(&mut self, cursor: usize) {
            // moved-out slots are reported too and are already empty
            if let Some(value) = self.slots[cursor].take() {
                self.deleted.push(value);
            }
        }
    }
}
