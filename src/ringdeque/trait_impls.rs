use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Index, IndexMut};

use super::{Iter, RingDeque};
use crate::behavior::{Behavior, Saturating, Wrapping};

impl<T: PartialEq, B: Behavior> PartialEq for RingDeque<T, B> {
    fn eq(&self, other: &RingDeque<T, B>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T: PartialEq, B: Behavior> PartialEq<&'a [T]> for RingDeque<T, B> {
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, B: Behavior> PartialEq<Vec<T>> for RingDeque<T, B> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other.as_slice()
    }
}

impl<T: Eq, B: Behavior> Eq for RingDeque<T, B> {}

impl<T: PartialOrd, B: Behavior> PartialOrd for RingDeque<T, B> {
    fn partial_cmp(&self, other: &RingDeque<T, B>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, B: Behavior> Ord for RingDeque<T, B> {
    #[inline]
    fn cmp(&self, other: &RingDeque<T, B>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, B: Behavior> Hash for RingDeque<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T, B: Behavior> Index<usize> for RingDeque<T, B> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T, B: Behavior> IndexMut<usize> for RingDeque<T, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

/// By-value `RingDeque` iterator
pub struct IntoIter<T, B: Behavior> {
    inner: RingDeque<T, B>,
}

impl<T, B: Behavior> Iterator for IntoIter<T, B> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, B: Behavior> DoubleEndedIterator for IntoIter<T, B> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, B: Behavior> ExactSizeIterator for IntoIter<T, B> {}

impl<T, B: Behavior> IntoIterator for RingDeque<T, B> {
    type Item = T;
    type IntoIter = IntoIter<T, B>;

    fn into_iter(self) -> IntoIter<T, B> {
        IntoIter { inner: self }
    }
}

impl<'a, T, B: Behavior> IntoIterator for &'a RingDeque<T, B> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Extend the `RingDeque` with an iterator.
///
/// Does not extract more items than there is space for. No error
/// occurs if there are more iterator elements.
impl<T> Extend<T> for RingDeque<T, Saturating> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let take = self.capacity() - self.len();
        for element in iter.into_iter().take(take) {
            let pushed = self.push_back(element);
            debug_assert!(pushed.is_ok(), "room was counted above");
        }
    }
}

/// Extend the `RingDeque` with an iterator.
///
/// Every element is pushed; once full, each push drops the front.
impl<T> Extend<T> for RingDeque<T, Wrapping> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T: fmt::Debug, B: Behavior> fmt::Debug for RingDeque<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::format;
    use std::hash::{Hash, Hasher};
    use std::vec::Vec;

    use super::RingDeque;
    use crate::behavior::{Saturating, Wrapping};

    fn hash<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_eq_ignores_layout() {
        let mut a: RingDeque<_> = RingDeque::new(4).unwrap();
        let mut b: RingDeque<_> = RingDeque::new(4).unwrap();
        for _ in 0..3 {
            b.push_back(0).unwrap();
            b.pop_front();
        }
        a.extend(vec![1, 2, 3]);
        b.extend(vec![1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert_eq!(a, &[1, 2, 3][..]);
        b.pop_back();
        assert!(a != b);
        assert!(b < a);
    }

    #[test]
    fn test_extend_saturating_stops_when_full() {
        let mut tester: RingDeque<_, Saturating> = RingDeque::new(3).unwrap();
        tester.extend(0..10);
        assert_eq!(tester, vec![0, 1, 2]);

        tester.pop_front();
        tester.extend(vec![7, 8]);
        assert_eq!(tester, vec![1, 2, 7]);
    }

    #[test]
    fn test_extend_wrapping_keeps_latest() {
        let mut tester: RingDeque<_, Wrapping> = RingDeque::new(3).unwrap();
        tester.extend(0..10);
        assert_eq!(tester, vec![7, 8, 9]);
    }

    #[test]
    fn test_into_iter() {
        let mut tester: RingDeque<_> = RingDeque::new(4).unwrap();
        tester.push_front(2).unwrap();
        tester.push_front(1).unwrap();
        tester.push_back(3).unwrap();
        let mut iter = tester.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_index_mut() {
        let mut tester: RingDeque<_> = RingDeque::new(2).unwrap();
        tester.extend(vec![1, 2]);
        tester[1] = 5;
        assert_eq!(tester, vec![1, 5]);
    }

    #[test]
    fn test_fmt() {
        let mut tester: RingDeque<_, Wrapping> = RingDeque::new(3).unwrap();
        tester.extend(1..5);
        assert_eq!(format!("{:?}", tester), "[2, 3, 4]");
        assert_eq!(format!("{:?}", tester.iter()), "[2, 3, 4]");
    }
}
