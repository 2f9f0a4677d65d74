use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::error::AllocError;

/// One link of the list. While a slot sits on the free list, `next` chains to the next free slot.
#[derive(Copy, Clone)]
struct Node {
    value: i32,
    next: Option<usize>,
}

/// A singly linked list of `i32`.
///
/// Nodes live in an index arena owned by the list, so no node is ever reachable from outside it.
/// Slots released by a pop are threaded onto a free list and reused by the next push.
///
/// ## Costs
///
/// - [`Self::push_front`], [`Self::push_back`], [`Self::pop_front`]: constant time.
/// - [`Self::pop_back`]: linear, since the new tail can only be found by walking from the head.
///
/// Like [`crate::GrowableArray`], reads that can find nothing return `-1`, and each of them has an
/// [`Option`]-returning twin.
///
/// Example:
/// ```
/// use dsa_drills::SinglyLinkedList;
/// let mut l = SinglyLinkedList::new();
/// l.push_back(2)?;
/// l.push_front(1)?;
/// l.push_back(3)?;
/// assert_eq!(l.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(l.pop_back(), 3);
/// assert_eq!(l.back(), 2);
/// # Ok::<(), dsa_drills::AllocError>(())
/// ```
#[derive(Clone, Default)]
pub struct SinglyLinkedList {
    nodes: Vec<Node>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl SinglyLinkedList {
    /// Returned by the sentinel accessors when the list is empty.
    pub const SENTINEL: i32 = -1;

    /// Creates an empty list. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self { nodes: Vec::new(), free: None, head: None, tail: None, len: 0 }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize { self.len }

    /// Returns whether the list holds no elements.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Removes every element and releases the arena.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    ////////////////////////////////////////////////////////////////////
    // push

    /// Inserts `value` before the current head.
    pub fn push_front(&mut self, value: i32) -> Result<(), AllocError> {
        let idx = self.alloc(Node { value, next: self.head })?;
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends `value` after the current tail.
    pub fn push_back(&mut self, value: i32) -> Result<(), AllocError> {
        let idx = self.alloc(Node { value, next: None })?;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // pop

    /// Removes the head and returns its value; `None` if the list is empty.
    pub fn pop_front_checked(&mut self) -> Option<i32> {
        let head = self.head?;
        let Node { value, next } = self.nodes[head];
        self.head = next;
        if next.is_none() {
            self.tail = None;
        }
        self.release(head);
        self.len -= 1;
        Some(value)
    }

    /// Removes the head and returns its value, or [`Self::SENTINEL`] if the list is empty.
    pub fn pop_front(&mut self) -> i32 {
        self.pop_front_checked().unwrap_or(Self::SENTINEL)
    }

    /// Removes the tail and returns its value; `None` if the list is empty.
    pub fn pop_back_checked(&mut self) -> Option<i32> {
        let tail = self.tail?;
        if self.head == Some(tail) {
            return self.pop_front_checked();
        }
        let mut cursor = self.head?;
        while let Some(next) = self.nodes[cursor].next {
            if next == tail {
                break;
            }
            cursor = next;
        }
        let value = self.nodes[tail].value;
        self.nodes[cursor].next = None;
        self.tail = Some(cursor);
        self.release(tail);
        self.len -= 1;
        Some(value)
    }

    /// Removes the tail and returns its value, or [`Self::SENTINEL`] if the list is empty.
    pub fn pop_back(&mut self) -> i32 {
        self.pop_back_checked().unwrap_or(Self::SENTINEL)
    }

    ////////////////////////////////////////////////////////////////////
    // reads

    /// Returns the value at the head; `None` if the list is empty.
    pub fn first(&self) -> Option<i32> { self.head.map(|i| self.nodes[i].value) }

    /// Returns the value at the head, or [`Self::SENTINEL`] if the list is empty.
    pub fn front(&self) -> i32 { self.first().unwrap_or(Self::SENTINEL) }

    /// Returns the value at the tail; `None` if the list is empty.
    pub fn last(&self) -> Option<i32> { self.tail.map(|i| self.nodes[i].value) }

    /// Returns the value at the tail, or [`Self::SENTINEL`] if the list is empty.
    pub fn back(&self) -> i32 { self.last().unwrap_or(Self::SENTINEL) }

    /// Iterates over the values from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter { list: self, cursor: self.head, remaining: self.len }
    }

    /// Prints every value on its own line, from head to tail.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        for value in self.iter() {
            std::println!("{value}");
        }
    }

    ////////////////////////////////////////////////////////////////////
    // arena

    fn alloc(&mut self, node: Node) -> Result<usize, AllocError> {
        if let Some(idx) = self.free {
            self.free = self.nodes[idx].next;
            self.nodes[idx] = node;
            return Ok(idx);
        }
        let requested = self.nodes.len() + 1;
        self.nodes.try_reserve(1)
            .map_err(|_| AllocError::OutOfMemory { requested })?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    fn release(&mut self, idx: usize) {
        self.nodes[idx] = Node { value: 0, next: self.free };
        self.free = Some(idx);
    }
}

/// Iterator over the values of a [`SinglyLinkedList`], head to tail.
pub struct Iter<'a> {
    list: &'a SinglyLinkedList,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let Node { value, next } = self.list.nodes[self.cursor?];
        self.cursor = next;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> { self.iter() }
}

impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

impl Debug for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i == 0 {
                write!(f, "{:?}", value)?;
            } else {
                write!(f, ", {:?}", value)?;
            }
        }
        write!(f, "]")
    }
}
