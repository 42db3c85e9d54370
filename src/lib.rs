//! Fixed-capacity, allocation-free container primitives.
//!
//! All containers in this crate have their capacity fixed at construction
//! time and never allocate afterwards, which makes them suitable for
//! embedded firmware, real-time loops and interrupt-context code where the
//! heap is unavailable or off-limits.
//!
//! Two container families are provided:
//!
//! + [`queue`]: a lock-free single-producer/single-consumer circular queue
//!   with element-wise and block (contiguous-run) access.
//! + [`list`]: a doubly-linked list whose nodes live in a caller-chosen
//!   fixed [`NodePool`](list::NodePool) arena and are addressed by index.
//!
//! # Queue
//!
//! ```
//! use fixcap::{StaticQueue, Consumer, Producer, SplitRef};
//!
//! // Five physical slots, four of them usable.
//! let mut queue = StaticQueue::<i32, 5>::default();
//! let (mut prod, mut cons) = queue.split_ref();
//!
//! assert_eq!(prod.try_push(1), Ok(()));
//! assert_eq!(prod.try_push(2), Ok(()));
//! assert_eq!(cons.try_pop(), Some(1));
//! assert_eq!(cons.try_pop(), Some(2));
//! assert_eq!(cons.try_pop(), None);
//! ```
//!
//! # List
//!
//! ```
//! use fixcap::StaticList;
//!
//! let mut list = StaticList::<u32, 8>::new();
//! list.try_push_back(1).unwrap();
//! list.try_push_front(0).unwrap();
//! assert_eq!(list.len(), 2);
//! assert!(list.iter().eq([0u32, 1].iter()));
//! ```
#![no_std]
#![allow(clippy::type_complexity)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod list;
pub mod queue;
pub mod storage;
mod utils;

#[cfg(test)]
mod tests;

#[cfg(feature = "alloc")]
pub use list::HeapList;
pub use list::{Full, LinkedList, StaticList};
#[cfg(feature = "alloc")]
pub use queue::HeapQueue;
pub use queue::{CircularQueue, Consumer, Observer, Producer, Ring, Split, SplitRef, StaticQueue};
