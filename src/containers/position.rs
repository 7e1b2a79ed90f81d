//! Position normalisation shared by the array and list containers.
//!
//! Positions are signed. A negative position wraps from the end using the
//! current length (`len - (|p| mod len)`), a positive position past the end is
//! clamped. The insert form may address the slot one past the last element
//! (append); the element form always addresses an existing element.

/// Normalises a position for insertion into a sequence of `len` elements.
///
/// The result is in `0..=len`. On an empty sequence every position maps to 0.
#[inline]
pub fn normalize_insert(position: isize, len: usize) -> usize {
    if position < 0 {
        if len == 0 {
            return 0;
        }
        len - (position.unsigned_abs() % len)
    } else {
        (position as usize).min(len)
    }
}

/// Normalises a position that must address an existing element.
///
/// Returns `None` for an empty sequence. Positions that normalise past the
/// last element are clamped to it.
#[inline]
pub fn normalize_index(position: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(normalize_insert(position, len).min(len - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_positive() {
        assert_eq!(normalize_insert(0, 3), 0);
        assert_eq!(normalize_insert(2, 3), 2);
        assert_eq!(normalize_insert(3, 3), 3);
        assert_eq!(normalize_insert(100, 3), 3);
    }

    #[test]
    fn test_insert_negative_wraps() {
        // 3 - (1 mod 3) = 2
        assert_eq!(normalize_insert(-1, 3), 2);
        assert_eq!(normalize_insert(-2, 3), 1);
        // 3 - (3 mod 3) = 3, i.e. append
        assert_eq!(normalize_insert(-3, 3), 3);
        assert_eq!(normalize_insert(-4, 3), 2);
        assert_eq!(normalize_insert(isize::MIN, 3), 3 - (isize::MIN.unsigned_abs() % 3));
    }

    #[test]
    fn test_insert_empty() {
        assert_eq!(normalize_insert(-5, 0), 0);
        assert_eq!(normalize_insert(0, 0), 0);
        assert_eq!(normalize_insert(7, 0), 0);
    }

    #[test]
    fn test_index() {
        assert_eq!(normalize_index(0, 0), None);
        assert_eq!(normalize_index(-1, 0), None);
        assert_eq!(normalize_index(0, 4), Some(0));
        assert_eq!(normalize_index(-1, 4), Some(3));
        assert_eq!(normalize_index(-4, 4), Some(3));
        assert_eq!(normalize_index(4, 4), Some(3));
        assert_eq!(normalize_index(99, 4), Some(3));
    }
}
