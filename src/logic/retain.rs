use super::CircularIndex;

/// Drops every live cursor for which `matches` holds in a single pass from
/// head to tail, sliding survivors toward the head. Returns the number of
/// removed elements.
///
/// Matches are passed to `delete`. A survivor that slides is copied and the
/// slot it leaves is passed to `delete` as well, so once the pass is done
/// nothing past the new tail still holds a value, even for storage whose
/// `copy` does not move.
///
/// ```text
///        H                   T
///       [a x b c x x d . . . .]
///
///        H       T
///       [a b c d . . . . . . .]
///          M M M
/// ```
pub fn remove_matching<B, F>(buffer: &mut B, len: usize, mut matches: F) -> usize
where
    B: CircularIndex,
    F: FnMut(&B, usize) -> bool,
{
    let mut read = buffer.head();
    let mut write = read;
    let mut kept = 0;

    for _ in 0..len {
        if matches(&*buffer, read) {
            buffer.delete(read);
        } else {
            if write != read {
                buffer.copy(write, read);
                buffer.delete(read);
            }
            write = buffer.next(write);
            kept += 1;
        }
        read = buffer.next(read);
    }

    let removed = len - kept;
    if removed > 0 {
        // `write` is one past the last survivor; with no survivors that is
        // the head itself and the ring becomes empty.
        let new_tail = buffer.prev(write);
        buffer.set_tail(new_tail);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::testing::Ring;

    fn is_upper(ring: &Ring, cursor: usize) -> bool {
        ring.slots[cursor].map_or(false, |c| c.is_ascii_uppercase())
    }

    #[test]
    fn test_remove_matching_preserves_order() {
        for start in 0..10 {
            let mut ring = Ring::with(10, start, "aXbcYZd");
            let removed = remove_matching(&mut ring, 7, is_upper);
            assert_eq!(removed, 3);
            assert_eq!(ring.read(4), "abcd");
            assert_eq!(ring.deleted, ['X', 'Y', 'Z']);
            assert_eq!(ring.copies, 3);
        }
    }

    #[test]
    fn test_remove_matching_nothing() {
        let mut ring = Ring::with(5, 3, "abcd");
        assert_eq!(remove_matching(&mut ring, 4, is_upper), 0);
        assert_eq!(ring.read(4), "abcd");
        assert_eq!(ring.copies, 0);
        assert_eq!((ring.head, ring.tail), (3, 1));
    }

    #[test]
    fn test_remove_matching_everything() {
        let mut ring = Ring::with(5, 3, "ABCD");
        assert_eq!(remove_matching(&mut ring, 4, is_upper), 4);
        assert_eq!(ring.read(0), "");
        assert_eq!(ring.deleted, ['A', 'B', 'C', 'D']);
        assert_eq!(ring.copies, 0);
    }

    #[test]
    fn test_remove_matching_clears_vacated_slots() {
        for start in 0..8 {
            let mut ring = Ring::with(8, start, "aXbYc");
            ring.duplicate_on_copy = true;
            assert_eq!(remove_matching(&mut ring, 5, is_upper), 2);
            assert_eq!(ring.read(3), "abc");
            assert_eq!(ring.deleted, ['X', 'b', 'Y', 'c']);

            // only the three live slots still hold a value
            let filled = ring.slots.iter().filter(|slot| slot.is_some()).count();
            assert_eq!(filled, 3);
        }
    }

    #[test]
    fn test_remove_matching_prefix_only_shifts_survivors() {
        let mut ring = Ring::with(6, 0, "ABcd");
        assert_eq!(remove_matching(&mut ring, 4, is_upper), 2);
        assert_eq!(ring.read(2), "cd");
        assert_eq!(ring.copies, 2);
        assert_eq!((ring.head, ring.tail), (0, 1));
    }
}
