//! Cursor arithmetic over a fixed modulus.
//!
//! Every function takes the allocation size (`capacity + 1`) as the modulus.

#[inline]
pub fn wrap_add(index: usize, addend: usize, modulus: usize) -> usize {
    debug_assert!(index < modulus);
    debug_assert!(addend <= modulus);
    let room = modulus - index;
    if addend < room {
        index + addend
    } else {
        addend - room
    }
}

#[inline]
pub fn next(cursor: usize, modulus: usize) -> usize {
    debug_assert!(cursor < modulus);
    if cursor + 1 == modulus {
        0
    } else {
        cursor + 1
    }
}

#[inline]
pub fn prev(cursor: usize, modulus: usize) -> usize {
    debug_assert!(cursor < modulus);
    if cursor == 0 {
        modulus - 1
    } else {
        cursor - 1
    }
}

/// Number of steps needed to walk from `from` to `to`.
#[inline]
pub fn count(from: usize, to: usize, modulus: usize) -> usize {
    debug_assert!(from < modulus);
    debug_assert!(to < modulus);
    if to >= from {
        to - from
    } else {
        modulus + to - from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(next(0, 4), 1);
        assert_eq!(next(3, 4), 0);
        assert_eq!(prev(0, 4), 3);
        assert_eq!(prev(3, 4), 2);
        assert_eq!(next(0, 1), 0);
        assert_eq!(prev(0, 1), 0);
    }

    #[test]
    fn test_wrap_add() {
        for modulus in 1..9 {
            for index in 0..modulus {
                for step in 0..modulus + 1 {
                    let mut expected = index;
                    for _ in 0..step {
                        expected = next(expected, modulus);
                    }
                    assert_eq!(wrap_add(index, step, modulus), expected);
                }
            }
        }
    }

    #[test]
    fn test_wrap_add_near_usize_max() {
        let modulus = usize::MAX;
        assert_eq!(wrap_add(modulus - 1, 1, modulus), 0);
        assert_eq!(wrap_add(modulus - 2, modulus - 1, modulus), modulus - 3);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(2, 2, 5), 0);
        assert_eq!(count(1, 4, 5), 3);
        assert_eq!(count(4, 1, 5), 2);
        assert_eq!(count(0, 4, 5), 4);
    }
}
