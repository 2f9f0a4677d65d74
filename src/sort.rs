//! Insertion sort: stable, in place, quadratic in the worst case and linear on sorted input.
//!
//! Example:
//! ```
//! use dsa_drills::sort::insertion_sort;
//! let mut a = [5, 2, 4, 6, 1, 3];
//! insertion_sort(&mut a);
//! assert_eq!(a, [1, 2, 3, 4, 5, 6]);
//! ```

use core::cmp::Ordering;

/// Sorts `elems` in ascending order.
/// Pairs that do not compare (e.g. `NaN`) are treated as equal and keep their relative order.
pub fn insertion_sort<T: PartialOrd>(elems: &mut [T]) {
    insertion_sort_by(elems, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Sorts `elems` with the comparator `cmp`. Equal elements keep their relative order.
pub fn insertion_sort_by<T, F>(elems: &mut [T], mut cmp: F)
    where
        F: FnMut(&T, &T) -> Ordering {
    for i in 1..elems.len() {
        let mut j = i;
        while j > 0 && cmp(&elems[j - 1], &elems[j]) == Ordering::Greater {
            elems.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::vec;
    use std::vec::Vec;
    use super::*;

    #[test]
    fn sorts_small_inputs() {
        let mut empty: [i32; 0] = [];
        insertion_sort(&mut empty);
        let mut one = [7];
        insertion_sort(&mut one);
        assert_eq!(one, [7]);
        let mut rev = [5, 4, 3, 2, 1, 0, -1];
        insertion_sort(&mut rev);
        assert_eq!(rev, [-1, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn is_stable() {
        let mut pairs = vec![(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd'), (2, 'e')];
        insertion_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        assert_eq!(pairs, vec![(1, 'b'), (1, 'd'), (2, 'e'), (3, 'a'), (3, 'c')]);
    }

    #[test]
    fn descending_by_comparator() {
        let mut a = [1, 3, 2];
        insertion_sort_by(&mut a, |a, b| b.cmp(a));
        assert_eq!(a, [3, 2, 1]);
    }

    #[test]
    fn floats() {
        let mut a = [2.5f32, -1.0, 0.0, 10.25];
        insertion_sort(&mut a);
        assert_eq!(a, [-1.0, 0.0, 2.5, 10.25]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_std_sort(elems in proptest::collection::vec(any::<i32>(), 0..100)) {
                let mut ours = elems.clone();
                insertion_sort(&mut ours);
                let mut expected: Vec<i32> = elems;
                expected.sort();
                prop_assert_eq!(ours, expected);
            }
        }
    }
}
