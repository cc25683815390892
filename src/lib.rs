//! Index bookkeeping for fixed-capacity ring buffers, kept apart from the
//! storage of the elements themselves.
//!
//! [`RingIndex`] decides which physical slot a new element goes to, which
//! element is evicted when the ring is full and how the remaining elements
//! shift when one is inserted or removed in the middle. Whatever holds the
//! elements (a `Vec`, a memory-mapped file, a GPU buffer) only has to follow
//! two hooks, `delete` and `copy`, described by the [`Slots`] trait.
//!
//! [`RingDeque`] is a ready-made deque over owned values built on top of it.
//!
//! # Feature Flags
//! The **ringindex** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringindex = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringindex = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Storage handed to a `RingIndex` must be `capacity + 1` slots long. The
//! spare slot is what tells a full ring from an empty one, so `head` and
//! `tail` alone describe the live region.
//!
//! # Logging
//!
//! Construction and `clear` emit `tracing` events at `DEBUG`; evictions and
//! gap shifting emit them at `TRACE`. Without a subscriber installed they
//! cost nothing.
//!
//! # Examples
//! ```
//! use ringindex::{RingIndex, Slots};
//!
//! struct Lines(Vec<Option<String>>);
//!
//! impl Slots for Lines {
//!     fn delete(&mut self, cursor: usize) {
//!         self.0[cursor] = None;
//!     }
//!
//!     fn copy(&mut self, dst: usize, src: usize) {
//!         self.0[dst] = self.0[src].take();
//!     }
//! }
//!
//! let mut ring = RingIndex::new(3, Lines(vec![None; 4])).unwrap();
//! for line in ["one", "two", "three"] {
//!     let cursor = ring.acquire_back();
//!     ring.slots_mut().0[cursor] = Some(line.to_string());
//! }
//!
//! let cursor = ring.acquire_index(1).unwrap();
//! ring.slots_mut().0[cursor] = Some("one and a half".to_string());
//!
//! ring.remove_all(|lines, cursor| lines.0[cursor].as_deref() == Some("three"));
//!
//! let text: Vec<&str> = ring
//!     .iter()
//!     .map(|c| ring.slots().0[c].as_deref().unwrap())
//!     .collect();
//! assert_eq!(text, ["one and a half", "two"]);
//! ```
//!
//! # Owned values
//! ```
//! use ringindex::{RingDeque, Saturating, Wrapping};
//!
//! let mut bounded: RingDeque<_, Saturating> = RingDeque::new(2).unwrap();
//! bounded.push_back(1).unwrap();
//! bounded.push_back(2).unwrap();
//! assert_eq!(bounded.push_back(3).unwrap_err().element, 3);
//!
//! let mut latest: RingDeque<_, Wrapping> = RingDeque::new(2).unwrap();
//! latest.extend(1..=3);
//! assert_eq!(latest.pop_front(), Some(2));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod behavior;
pub mod error;
mod logic;
pub mod ringdeque;
mod ringindex;
mod slots;
mod utils;

pub use crate::behavior::{Behavior, Saturating, Wrapping};
pub use crate::error::{CapacityError, Error, Result};
pub use crate::ringdeque::RingDeque;
pub use crate::ringindex::{Builder, Cursors, Iter, RingIndex};
pub use crate::slots::{FnSlots, Slots};

/// Largest capacity a [`RingIndex`] accepts.
///
/// Cursors and counts stay representable as a signed 32-bit integer, so
/// storage with 32-bit addressing can hold every cursor.
pub const MAX_CAPACITY: usize = i32::MAX as usize - 2;
