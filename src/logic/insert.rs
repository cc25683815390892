use super::{CircularIndex, Parameters};

/// Opens a slot in front of `params.cursor`, moving whichever side is
/// cheaper, and returns it.
///
/// The ring must have room for one more element and `params.cursor` must be
/// live, so `distance_to_tail >= 1`.
#[inline]
pub fn open<B: CircularIndex>(buffer: &mut B, params: Parameters) -> usize {
    debug_assert!(params.distance_to_tail >= 1);
    match params.closer_to_head() {
        true => HeadSide::insert(buffer, params),
        false => TailSide::insert(buffer, params),
    }
}

pub struct HeadSide;

impl HeadSide {
    #[inline]
    pub fn insert<B: CircularIndex>(buffer: &mut B, params: Parameters) -> usize {
        // insert closer to head:
        //
        //             H       A         T
        //      [. . . o o o o o o o o o . . . .]
        //
        //           H       I           T
        //      [. . o o o o . A o o o o . . . .]
        //           M M M M
        //
        // insert at head:
        //
        //       H A               T
        //      [o o o o o o o o o o . . . . . .]
        //
        //                         T         H
        //      [o o o o o o o o o o . . . . . I]

        let Parameters { distance_to_head, .. } = params;

        let new_head = buffer.prev(buffer.head());
        let mut dst = new_head;
        let mut src = buffer.head();
        for _ in 0..distance_to_head {
            buffer.copy(dst, src);
            dst = src;
            src = buffer.next(src);
        }
        buffer.set_head(new_head);

        debug_assert_eq!(dst, buffer.prev(params.cursor));
        dst
    }
}

pub struct TailSide;

impl TailSide {
    #[inline]
    pub fn insert<B: CircularIndex>(buffer: &mut B, params: Parameters) -> usize {
        // insert closer to tail:
        //
        //             H         A     T
        //      [. . . o o o o o o o o . . . . .]
        //
        //             H         I       T
        //      [. . . o o o o o . A o o o . . .]
        //                           M M M
        //
        // insert closer to tail, wrapping:
        //
        //         A   T                   H
        //      [o o o o . . . . . . . . . o o o]
        //
        //         I     T                 H
        //      [o . o o o . . . . . . . . o o o]
        //           M M M

        let Parameters { distance_to_tail, .. } = params;

        let new_tail = buffer.next(buffer.tail());
        let mut dst = new_tail;
        let mut src = buffer.tail();
        for _ in 0..distance_to_tail {
            buffer.copy(dst, src);
            dst = src;
            src = buffer.prev(src);
        }
        buffer.set_tail(new_tail);

        debug_assert_eq!(dst, params.cursor);
        dst
    }
}
