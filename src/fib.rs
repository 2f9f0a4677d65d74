//! Fibonacci numbers, memoized top-down or tabulated bottom-up.
//!
//! `F(0) = 0`, `F(1) = 1`, `F(n) = F(n - 1) + F(n - 2)`. Results are `u64`; the largest index
//! that fits is [`MAX_FIB_INDEX`], and anything past it yields `None`.
//!
//! The top-down variant keeps its memo in a caller-owned [`FibMemo`], so nothing is shared between
//! callers unless they share the memo on purpose.
//!
//! Example:
//! ```
//! use dsa_drills::fib::{fib_bottom_up, fib_top_down, FibMemo};
//! let mut memo = FibMemo::new();
//! assert_eq!(fib_top_down(50, &mut memo), Some(12_586_269_025));
//! assert_eq!(fib_bottom_up(50), Some(12_586_269_025));
//! assert_eq!(fib_bottom_up(94), None);
//! ```

use alloc::vec::Vec;

/// Largest `n` for which `F(n)` fits in a `u64`.
pub const MAX_FIB_INDEX: usize = 93;

/// Memo table for [`fib_top_down`]; slot `n` holds `F(n)` once computed.
#[derive(Clone, Debug, Default)]
pub struct FibMemo {
    table: Vec<Option<u64>>,
}

impl FibMemo {
    /// Creates an empty memo.
    pub fn new() -> Self { Self { table: Vec::new() } }

    /// Returns the memoized `F(n)`, if any.
    pub fn get(&self, n: usize) -> Option<u64> {
        self.table.get(n).copied().flatten()
    }

    /// Returns how many values are memoized.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|v| v.is_some()).count()
    }

    /// Returns whether nothing is memoized.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Forgets every memoized value.
    pub fn clear(&mut self) { self.table.clear(); }

    fn insert(&mut self, n: usize, value: u64) {
        if self.table.len() <= n {
            self.table.resize(n + 1, None);
        }
        self.table[n] = Some(value);
    }
}

/// Computes `F(n)` recursively, reusing and filling `memo`.
/// Returns `None` if `n > MAX_FIB_INDEX`.
pub fn fib_top_down(n: usize, memo: &mut FibMemo) -> Option<u64> {
    // also bounds the recursion depth
    if n > MAX_FIB_INDEX {
        return None;
    }
    if n < 2 {
        return Some(n as u64);
    }
    if let Some(value) = memo.get(n) {
        return Some(value);
    }
    let value = fib_top_down(n - 1, memo)?.checked_add(fib_top_down(n - 2, memo)?)?;
    memo.insert(n, value);
    Some(value)
}

/// Computes `F(n)` iteratively from `F(0)` upwards.
/// Returns `None` if `n > MAX_FIB_INDEX`.
pub fn fib_bottom_up(n: usize) -> Option<u64> {
    let (mut prev, mut curr) = (0u64, 1u64);
    if n == 0 {
        return Some(prev);
    }
    for _ in 1..n {
        (prev, curr) = (curr, prev.checked_add(curr)?);
    }
    Some(curr)
}
