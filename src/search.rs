//! Binary search over sorted slices of primitive integers.
//!
//! Example:
//! ```
//! use dsa_drills::search::{binary_search, binary_search_unchecked};
//! let sorted = [1, 3, 5, 7, 9];
//! assert_eq!(binary_search(&sorted, 7), Some(3));
//! assert_eq!(binary_search(&sorted, 4), None);
//! assert_eq!(binary_search_unchecked(&sorted, 4), -1);
//! ```

use num_traits::PrimInt;

/// Returns the index of `target` in ascending `sorted`; `None` if it is absent.
/// When `target` occurs more than once, any one of its indices may be returned.
/// Behavior on an unsorted slice is _unspecified_ (but never out of bounds).
pub fn binary_search<T: PrimInt>(sorted: &[T], target: T) -> Option<usize> {
    // half-open window [left, right)
    let (mut left, mut right) = (0, sorted.len());
    while left < right {
        let middle = left + (right - left) / 2;
        let probe = sorted[middle];
        if probe == target {
            return Some(middle);
        } else if probe < target {
            left = middle + 1;
        } else {
            right = middle;
        }
    }
    None
}

/// Returns the index of `target` in ascending `sorted`, or `-1` if it is absent.
pub fn binary_search_unchecked<T: PrimInt>(sorted: &[T], target: T) -> isize {
    // slice lengths never exceed isize::MAX
    binary_search(sorted, target).map_or(-1, |i| i as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_element() {
        let sorted = [-20, -3, 0, 4, 4, 9, 100];
        for (i, &x) in sorted.iter().enumerate() {
            let found = binary_search(&sorted, x).unwrap();
            assert_eq!(sorted[found], x);
            if x != 4 {
                assert_eq!(found, i);
            }
        }
    }

    #[test]
    fn misses_return_sentinel() {
        let sorted = [2u8, 4, 6];
        assert_eq!(binary_search(&sorted, 1), None);
        assert_eq!(binary_search(&sorted, 5), None);
        assert_eq!(binary_search(&sorted, 7), None);
        assert_eq!(binary_search_unchecked(&sorted, 5), -1);
        assert_eq!(binary_search_unchecked(&sorted, 6), 2);
        assert_eq!(binary_search::<i32>(&[], 0), None);
    }

    #[test]
    fn extremes() {
        let sorted = [i64::MIN, 0, i64::MAX];
        assert_eq!(binary_search(&sorted, i64::MIN), Some(0));
        assert_eq!(binary_search(&sorted, i64::MAX), Some(2));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn agrees_with_linear_scan(
                mut elems in proptest::collection::vec(-50i32..50, 0..64),
                target in -60i32..60,
            ) {
                elems.sort();
                let present = elems.contains(&target);
                match binary_search(&elems, target) {
                    Some(i) => {
                        prop_assert_eq!(elems[i], target);
                    }
                    None => {
                        prop_assert!(!present);
                    }
                }
            }
        }
    }
}
