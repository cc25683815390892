use super::{CircularIndex, Parameters};

/// Closes the gap at `params.cursor` from whichever side is cheaper.
///
/// The slot at `params.cursor` must already be vacant (read out by the
/// caller or reported through `delete`).
#[inline]
pub fn close<B: CircularIndex>(buffer: &mut B, params: Parameters) {
    match params.closer_to_head() {
        true => HeadSide::remove(buffer, params),
        false => TailSide::remove(buffer, params),
    }
}

pub struct HeadSide;

impl HeadSide {
    #[inline]
    pub fn remove<B: CircularIndex>(buffer: &mut B, params: Parameters) {
        // remove closer to head:
        //
        //             H     R             T
        //      [. . . o o o x o o o o o o o . .]
        //
        //               H                 T
        //      [. . . . o o o o o o o o o o . .]
        //               M M M

        let Parameters { cursor, distance_to_head, .. } = params;

        let mut dst = cursor;
        for _ in 0..distance_to_head {
            let src = buffer.prev(dst);
            buffer.copy(dst, src);
            dst = src;
        }
        debug_assert_eq!(dst, buffer.head());

        let new_head = buffer.next(buffer.head());
        buffer.set_head(new_head);
    }
}

pub struct TailSide;

impl TailSide {
    #[inline]
    pub fn remove<B: CircularIndex>(buffer: &mut B, params: Parameters) {
        // remove closer to tail:
        //
        //             H           R     T
        //      [. . . o o o o o o o x o o . . .]
        //
        //             H               T
        //      [. . . o o o o o o o o o . . . .]
        //                           M M
        //
        // remove closer to tail, wrapping:
        //
        //     R   T                     H
        //    [x o o . . . . . . . . . . o o o]
        //
        //       T                       H
        //    [o o . . . . . . . . . . . o o o]
        //     M M

        let Parameters { cursor, distance_to_tail, .. } = params;

        let mut dst = cursor;
        for _ in 0..distance_to_tail {
            let src = buffer.next(dst);
            buffer.copy(dst, src);
            dst = src;
        }
        debug_assert_eq!(dst, buffer.tail());

        let new_tail = buffer.prev(buffer.tail());
        buffer.set_tail(new_tail);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::testing::Ring;

    fn remove_at(ring: &mut Ring, len: usize, index: usize) -> char {
        let cursor = crate::utils::wrap_add(ring.head, index, ring.slots.len());
        let value = ring.slots[cursor].take().unwrap();
        let params = Parameters {
            cursor,
            distance_to_head: index,
            distance_to_tail: len - 1 - index,
        };
        close(ring, params);
        value
    }

    #[test]
    fn test_remove_every_position_and_padding() {
        const ALLOC: usize = 9;
        let base = "abcdefgh";
        for len in 1..ALLOC {
            for start in 0..ALLOC {
                for index in 0..len {
                    let mut ring = Ring::with(ALLOC, start, &base[..len]);
                    let removed = remove_at(&mut ring, len, index);

                    let mut expected = std::string::String::from(&base[..len]);
                    assert_eq!(expected.remove(index), removed);
                    assert_eq!(ring.read(len - 1), expected);
                    assert_eq!(ring.copies, core::cmp::min(index, len - 1 - index));
                }
            }
        }
    }

    #[test]
    fn test_tie_shifts_tail_side() {
        // [a b c d e], remove c: two elements on each side.
        let mut ring = Ring::with(6, 0, "abcde");
        remove_at(&mut ring, 5, 2);
        assert_eq!(ring.read(4), "abde");
        assert_eq!(ring.head, 0);
        assert_eq!(ring.tail, 3);
    }

    #[test]
    fn test_remove_last_element_leaves_canonical_empty() {
        let mut ring = Ring::with(4, 2, "a");
        remove_at(&mut ring, 1, 0);
        assert_eq!(ring.copies, 0);
        assert_eq!((ring.head, ring.tail), (2, 1));
    }
}
