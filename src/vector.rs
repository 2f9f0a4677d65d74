use alloc::vec::Vec;
use core::{
    alloc::Layout,
    fmt::{Debug, Formatter},
    ops::{Index, IndexMut},
};

use crate::error::AllocError;

/// A growable, contiguous array of `i32` with amortized O(1) append.
///
/// The array owns `capacity` slots, of which the first `len` hold valid elements.
/// When a [`Self::push_back`] finds the array full, the capacity is doubled first, so the total
/// copying cost over `N` appends stays within `2 * N`.
///
/// Capacity never shrinks on its own; only [`Self::reserve`] sets it to an arbitrary value, after
/// which doubling resumes from that value.
///
/// ## Summary of supported operations
///
/// - push / pop at the back.
/// - Read the front, the back, or any index.
/// - Capacity introspection and explicit reservation.
///
/// ## Sentinel accessors
///
/// Reads that can find nothing ([`Self::pop_back`], [`Self::back`], [`Self::front`],
/// [`Self::at`]) return [`Self::SENTINEL`] (`-1`) on an empty array or an out-of-bounds index.
/// Since `-1` is also a valid element, each of them has an [`Option`]-returning twin:
/// [`Self::pop`], [`Self::last`], [`Self::first`], [`Self::get`].
///
/// Allocation failure is never a sentinel: [`Self::create`], [`Self::push_back`] and
/// [`Self::reserve`] return [`AllocError`] and leave the existing contents untouched.
///
/// Example:
/// ```
/// use dsa_drills::GrowableArray;
/// let mut v = GrowableArray::create(2)?;
/// assert_eq!(v.capacity(), 4);
/// for x in 1..=5 {
///     v.push_back(x)?;
/// }
/// assert_eq!(v.capacity(), 8);
/// assert_eq!(v.at(4), 5);
/// assert_eq!(v.at(5), -1);
/// assert_eq!(v.get(5), None);
/// # Ok::<(), dsa_drills::AllocError>(())
/// ```
///
pub struct GrowableArray {
    /// Backing store; always exactly `capacity` slots long, zero-filled past what was written.
    slots: Vec<i32>,
    /// Number of valid elements at the front of `slots`.
    len: usize,
}

impl GrowableArray {
    /// Returned by the sentinel accessors when there is nothing to return.
    pub const SENTINEL: i32 = -1;
    /// Capacity multiplier applied when a push finds the array full.
    pub const GROWTH_FACTOR: usize = 2;
    /// Capacity of an array created with a zero size hint.
    pub const MIN_CAPACITY: usize = 1;

    ////////////////////////////////////////////////////////////////////
    // lifecycle

    /// Creates an empty array with room for `hint * 2` elements (or one element if `hint == 0`).
    ///
    /// The hint only sizes the allocation; the new array always has length 0.
    pub fn create(hint: usize) -> Result<Self, AllocError> {
        let capacity = if hint == 0 {
            Self::MIN_CAPACITY
        } else {
            hint.saturating_mul(Self::GROWTH_FACTOR)
        };
        let mut slots = Vec::new();
        grow_slots(&mut slots, capacity)?;
        Ok(Self { slots, len: 0 })
    }

    /// Releases the backing store. The array cannot be used afterwards.
    ///
    /// Dropping the array does the same; this exists to make the release explicit at call sites.
    pub fn destroy(self) {}

    ////////////////////////////////////////////////////////////////////
    // basics

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize { self.len }

    /// Returns whether the array holds no elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Overwrites every element with `0` and sets the length to 0. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots[..self.len].fill(0);
        self.len = 0;
    }

    /// Sets the capacity to exactly `capacity` slots, keeping the length and every element below
    /// it.
    ///
    /// Callers are expected to ask for at least [`Self::len`] slots. If they ask for less, the
    /// elements past the new capacity are discarded and the length is cut down to match.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity >= self.slots.len() {
            grow_slots(&mut self.slots, capacity)
        } else {
            self.slots.truncate(capacity);
            self.slots.shrink_to_fit();
            self.len = self.len.min(capacity);
            Ok(())
        }
    }

    ////////////////////////////////////////////////////////////////////
    // push / pop

    /// Appends `elem` at index [`Self::len`], doubling the capacity first if the array is full.
    pub fn push_back(&mut self, elem: i32) -> Result<(), AllocError> {
        if self.len == self.slots.len() {
            let grown = match self.slots.len() {
                0 => Self::MIN_CAPACITY,
                n => n.saturating_mul(Self::GROWTH_FACTOR),
            };
            grow_slots(&mut self.slots, grown)?;
        }
        self.slots[self.len] = elem;
        self.len += 1;
        Ok(())
    }

    /// Removes the last element and returns it; `None` if the array is empty.
    pub fn pop(&mut self) -> Option<i32> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.slots[self.len])
    }

    /// Removes the last element and returns it, or [`Self::SENTINEL`] if the array is empty.
    pub fn pop_back(&mut self) -> i32 {
        self.pop().unwrap_or(Self::SENTINEL)
    }

    ////////////////////////////////////////////////////////////////////
    // reads

    /// Returns the element at `index`; `None` if `index >= len`.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.as_slice().get(index).copied()
    }

    /// Returns the element at `index`, or [`Self::SENTINEL`] if `index` is negative or not below
    /// [`Self::len`].
    pub fn at(&self, index: isize) -> i32 {
        usize::try_from(index).ok()
            .and_then(|i| self.get(i))
            .unwrap_or(Self::SENTINEL)
    }

    /// Returns the first element; `None` if the array is empty.
    pub fn first(&self) -> Option<i32> { self.as_slice().first().copied() }

    /// Returns the first element, or [`Self::SENTINEL`] if the array is empty.
    pub fn front(&self) -> i32 { self.first().unwrap_or(Self::SENTINEL) }

    /// Returns the last element; `None` if the array is empty.
    pub fn last(&self) -> Option<i32> { self.as_slice().last().copied() }

    /// Returns the last element, or [`Self::SENTINEL`] if the array is empty.
    pub fn back(&self) -> i32 { self.last().unwrap_or(Self::SENTINEL) }

    /// Returns the valid elements as a slice.
    pub fn as_slice(&self) -> &[i32] { &self.slots[..self.len] }

    /// Returns every allocated slot, including the ones past [`Self::len`].
    ///
    /// Slots that were never written read as `0`; slots left behind by [`Self::pop`] keep their
    /// old value until overwritten.
    pub fn raw_slots(&self) -> &[i32] { &self.slots }

    /// Iterates over the valid elements in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, i32> { self.as_slice().iter() }

    /// Prints every element on its own line, in index order.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        for elem in self.iter() {
            std::println!("{elem}");
        }
    }
}

/// Grows `slots` to exactly `capacity` zero-filled slots.
/// On failure `slots` is left untouched.
///
/// A saturated `usize::MAX` request always fails the layout check, so callers may saturate
/// instead of checking for overflow themselves.
fn grow_slots(slots: &mut Vec<i32>, capacity: usize) -> Result<(), AllocError> {
    debug_assert!(capacity >= slots.len());
    Layout::array::<i32>(capacity)
        .map_err(|_| AllocError::CapacityOverflow { requested: capacity })?;
    slots.try_reserve_exact(capacity - slots.len())
        .map_err(|_| AllocError::OutOfMemory { requested: capacity })?;
    slots.resize(capacity, 0);
    Ok(())
}

impl Index<usize> for GrowableArray {
    type Output = i32;

    /// Panics if `index >= len`.
    fn index(&self, index: usize) -> &i32 { &self.as_slice()[index] }
}

impl IndexMut<usize> for GrowableArray {
    /// Panics if `index >= len`.
    fn index_mut(&mut self, index: usize) -> &mut i32 { &mut self.slots[..self.len][index] }
}

impl PartialEq for GrowableArray {
    /// Compares the valid elements only; capacities may differ.
    fn eq(&self, other: &Self) -> bool { self.as_slice() == other.as_slice() }
}

impl Eq for GrowableArray {}

impl TryFrom<&[i32]> for GrowableArray {
    type Error = AllocError;

    /// Creates an array holding a copy of `elems`, sized as if `elems.len()` were the hint.
    fn try_from(elems: &[i32]) -> Result<Self, Self::Error> {
        let mut v = Self::create(elems.len())?;
        v.slots[..elems.len()].copy_from_slice(elems);
        v.len = elems.len();
        Ok(v)
    }
}

impl<'a> IntoIterator for &'a GrowableArray {
    type Item = &'a i32;
    type IntoIter = core::slice::Iter<'a, i32>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Debug for GrowableArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, elem) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", elem)?;
            } else {
                write!(f, ", {:?}", elem)?;
            }
        }
        write!(f, "]")
    }
}
