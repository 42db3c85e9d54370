//! Lock-free single-producer/single-consumer circular queue.
//!
//! The queue stores items in `capacity + 1` physical slots; the spare slot
//! stays vacant so that full and empty states are distinguishable from the
//! `head`/`tail` indices alone, without a shared counter.
//!
//! Exactly two roles may touch a queue concurrently: a producer (writes
//! `tail`, reads `head`) and a consumer (writes `head`, reads `tail`).
//! Neither role ever blocks; operations report their outcome immediately
//! and backpressure policy is left to the caller. Use [`SplitRef::split_ref`]
//! (or [`Split::split`] with `alloc`) to obtain the [`Prod`]/[`Cons`] role
//! handles that can be moved to separate threads.
//!
//! Besides element-wise access the consumer side exposes the longest
//! physically contiguous run of live items ([`Consumer::occupied_block`])
//! for zero-copy draining:
//!
//! ```
//! use fixcap::{HeapQueue, Consumer, Observer, Producer};
//!
//! let mut q = HeapQueue::<u8>::new(16);
//! q.try_push_all(b"hello").unwrap();
//!
//! let mut out = Vec::new();
//! while !q.is_empty() {
//!     let block = q.occupied_block();
//!     out.extend_from_slice(block);
//!     let n = block.len();
//!     q.skip(n);
//! }
//! assert_eq!(out, b"hello");
//! ```

pub mod consumer;
pub mod halves;
pub mod observer;
pub mod producer;
pub mod ring;
pub mod shared;
mod split;

pub use consumer::{Consumer, PopIter};
pub use halves::{Cons, Direct, Obs, Prod, QueueRef};
pub use observer::Observer;
pub use producer::{Producer, SliceFull};
pub use ring::Ring;
pub use shared::CircularQueue;
pub use split::{Split, SplitRef};

use crate::storage::Array;
#[cfg(feature = "alloc")]
use crate::storage::Heap;

/// Stack-allocated queue with `N` physical slots.
///
/// Logical capacity is `N - 1`: one slot is reserved for full/empty
/// disambiguation. `N` must be at least 2.
pub type StaticQueue<T, const N: usize> = CircularQueue<T, Array<T, N>>;

/// Heap-allocated queue; [`CircularQueue::new`] takes the logical capacity.
#[cfg(feature = "alloc")]
pub type HeapQueue<T> = CircularQueue<T, Heap<T>>;
