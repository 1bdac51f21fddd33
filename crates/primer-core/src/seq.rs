//! Growable sequences and `[start, end)` views
//!
//! Slicing follows half-open bounds: start inclusive, end exclusive, both
//! zero-indexed. An omitted start is 0 and an omitted end is the length.
//! `try_slice` reports bad bounds; `slice` faults on them.

use std::ops::{Bound, RangeBounds};

use crate::error::{SliceError, SliceResult};
use crate::kdebug;

/// Append one item, returning the grown sequence
///
/// The sequence is consumed, so the caller reassigns:
/// `places = append(places, "Seattle")`. Growth may reallocate.
pub fn append<T>(mut seq: Vec<T>, item: T) -> Vec<T> {
    let cap = seq.capacity();
    seq.push(item);
    if seq.capacity() != cap {
        kdebug!("append reallocated: capacity {} -> {}", cap, seq.capacity());
    }
    seq
}

/// Resolve range bounds against a length, without checking them
fn resolve<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    (start, end)
}

/// Borrow `seq[range]`, or report why the bounds are invalid
///
/// Valid iff `start <= end <= seq.len()`.
pub fn try_slice<T, R: RangeBounds<usize>>(seq: &[T], range: R) -> SliceResult<&[T]> {
    let len = seq.len();
    let (start, end) = resolve(&range, len);

    if end > len {
        return Err(SliceError::EndOutOfRange { end, len });
    }
    if start > end {
        return Err(SliceError::StartAfterEnd { start, end });
    }
    Ok(&seq[start..end])
}

/// Borrow `seq[range]`, faulting on invalid bounds
///
/// # Panics
///
/// Panics with the `SliceError` message when the bounds are invalid.
/// There is no truncation to the valid part.
#[track_caller]
pub fn slice<T, R: RangeBounds<usize>>(seq: &[T], range: R) -> &[T] {
    match try_slice(seq, range) {
        Ok(view) => view,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn places() -> Vec<&'static str> {
        vec!["New York City", "Los Angeles", "Chicago", "Toronto", "Victoria", "Seattle"]
    }

    #[test]
    fn test_append_reassigns() {
        let mut seq = vec!["New York City", "Los Angeles", "Chicago"];
        seq = append(seq, "Seattle");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq[3], "Seattle");
    }

    #[test]
    fn test_slice_bounds() {
        let p = places();
        assert_eq!(slice(&p, 3..5), ["Toronto", "Victoria"]);
        assert_eq!(slice(&p, ..3), ["New York City", "Los Angeles", "Chicago"]);
        assert_eq!(slice(&p, 5..), ["Seattle"]);
        assert_eq!(slice(&p, ..).len(), 6);
        assert_eq!(slice(&p, 2..=3), ["Chicago", "Toronto"]);
    }

    #[test]
    fn test_empty_views() {
        let p = places();
        assert!(slice(&p, 6..).is_empty());
        assert!(slice(&p, 2..2).is_empty());
        let empty: Vec<u8> = Vec::new();
        assert!(slice(&empty, ..).is_empty());
    }

    #[test]
    fn test_try_slice_errors() {
        let p = places();
        assert_eq!(try_slice(&p, 0..7), Err(SliceError::EndOutOfRange { end: 7, len: 6 }));
        assert_eq!(try_slice(&p, 7..), Err(SliceError::StartAfterEnd { start: 7, end: 6 }));
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = try_slice(&p, 4..2);
        assert_eq!(inverted, Err(SliceError::StartAfterEnd { start: 4, end: 2 }));
    }

    #[test]
    #[should_panic(expected = "slice bounds out of range [:7] with length 6")]
    fn test_slice_faults_past_end() {
        let p = places();
        let _ = slice(&p, 5..7);
    }

    #[test]
    #[should_panic(expected = "slice bounds out of range [4:2]")]
    fn test_slice_faults_inverted() {
        let p = places();
        #[allow(clippy::reversed_empty_ranges)]
        let _ = slice(&p, 4..2);
    }

    proptest! {
        #[test]
        fn test_append_grows_by_one(seq in prop::collection::vec(any::<u32>(), 0..64), item in any::<u32>()) {
            let len = seq.len();
            let grown = append(seq, item);
            prop_assert_eq!(grown.len(), len + 1);
            prop_assert_eq!(grown[len], item);
        }

        #[test]
        fn test_slice_valid_iff_ordered(n in 0usize..16, a in 0usize..20, b in 0usize..20) {
            let seq: Vec<usize> = (0..n).collect();
            let result = try_slice(&seq, a..b);
            if a <= b && b <= n {
                let view = result.unwrap();
                prop_assert_eq!(view.len(), b - a);
                prop_assert_eq!(view.first().copied(), if a < b { Some(a) } else { None });
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}
