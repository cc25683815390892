//! Overflow semantics for `RingDeque`.

/// Tagging trait for providing behaviors to `RingDeque`.
pub trait Behavior {}

/// Behavior for `RingDeque` that specifies wrapping write semantics.
///
/// The deque never checks for room and relies on the eviction built into
/// [`RingIndex`](crate::RingIndex).
///
/// ### Pushing to back:
///
/// Pushing to the **back** of a deque that is **already full** overwrites
/// the element at the **front**, which the push returns.
///
/// ### Pushing to front:
///
/// Pushing to the **front** of a deque that is **already full** overwrites
/// the element at the **back**, which the push returns.
pub struct Wrapping;
impl Behavior for Wrapping {}

/// Behavior for `RingDeque` that specifies saturating write semantics.
///
/// ### Pushing to back:
///
/// Pushing to the **back** of a deque that is **already full** returns the
/// element in a `CapacityError` **without performing any mutation**.
///
/// ### Pushing to front:
///
/// Pushing to the **front** of a deque that is **already full** returns the
/// element in a `CapacityError` **without performing any mutation**.
pub struct Saturating;
impl Behavior for Saturating {}
