#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod list;
mod vector;

pub mod fib;
pub mod math;
pub mod search;
pub mod sort;

pub use self::{
    error::AllocError,
    list::{Iter as ListIter, SinglyLinkedList},
    vector::GrowableArray,
};
