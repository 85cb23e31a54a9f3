#![doc = include_str!("./lib.md")]
#![cfg_attr(not(test), no_std)] // Link `std` only when building a test (`cfg(test)`)
#![warn(missing_docs)]
pub mod error;
pub mod heap;
pub mod order;

pub use self::{
    error::{CreateError, Full, RemoveError, ResultCode},
    heap::Heap,
    order::{HeapOrder, MaxFirst, MinFirst},
};
