//! The collaborator through which [`RingIndex`](crate::RingIndex) touches
//! element storage.

/// Caller-side storage hooks.
///
/// The caller owns storage of length
/// [`allocation_size()`](crate::RingIndex::allocation_size), addressed by the
/// same cursors the engine hands out. The engine never reads or writes that
/// storage itself; it only calls these two hooks when content has to move or
/// disappear, and never from inside another hook.
pub trait Slots {
    /// The slot at `cursor` no longer belongs to a live element and should be
    /// cleared.
    ///
    /// Called exactly once per element that leaves the ring (eviction,
    /// predicate removal, cursor removal or `clear`). `remove_all` also
    /// passes every slot a survivor was copied out of, which is already
    /// empty when `copy` moves; clearing an empty slot must be a no-op.
    fn delete(&mut self, cursor: usize);

    /// The element at `src` moves to `dst`.
    ///
    /// Either moving out of `src` (e.g. `Option::take`) or leaving a
    /// duplicate behind works. Apart from the `remove_all` case above, `src`
    /// is never passed to `delete` afterwards.
    fn copy(&mut self, dst: usize, src: usize);
}

impl<'a, S: Slots + ?Sized> Slots for &'a mut S {
    #[inline]
    fn delete(&mut self, cursor: usize) {
        (**self).delete(cursor)
    }

    #[inline]
    fn copy(&mut self, dst: usize, src: usize) {
        (**self).copy(dst, src)
    }
}

/// [`Slots`] made of two closures, as produced by
/// [`Builder`](crate::Builder).
pub struct FnSlots<D, C> {
    delete: D,
    copy: C,
}

impl<D, C> FnSlots<D, C>
where
    D: FnMut(usize),
    C: FnMut(usize, usize),
{
    /// Pairs a `delete(cursor)` and a `copy(dst, src)` closure.
    pub fn new(delete: D, copy: C) -> FnSlots<D, C> {
        FnSlots { delete, copy }
    }
}

impl<D, C> Slots for FnSlots<D, C>
where
    D: FnMut(usize),
    C: FnMut(usize, usize),
{
    #[inline]
    fn delete(&mut self, cursor: usize) {
        (self.delete)(cursor)
    }

    #[inline]
    fn copy(&mut self, dst: usize, src: usize) {
        (self.copy)(dst, src)
    }
}
