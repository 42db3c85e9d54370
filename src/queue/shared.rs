#[cfg(feature = "alloc")]
use super::split::Split;
use super::{
    consumer::Consumer,
    halves::{Cons, Prod},
    observer::Observer,
    producer::Producer,
    ring::Ring,
    split::SplitRef,
};
use crate::{
    storage::{Array, Container, Shared},
    utils::uninit_array,
};
#[cfg(feature = "alloc")]
use crate::storage::Heap;
#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
use core::{
    mem::{ManuallyDrop, MaybeUninit},
    num::NonZeroUsize,
    ops::Range,
    ptr,
};
#[cfg(not(feature = "portable-atomic"))]
use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
#[cfg(feature = "portable-atomic")]
use portable_atomic::{AtomicBool, AtomicUsize, Ordering};
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;
use crossbeam_utils::CachePadded;

/// Splits the physical span running from `start` forward to `end` at the
/// storage boundary. `start == end` means an empty span, never a full one:
/// the spare slot guarantees no span covers the whole storage.
#[inline]
pub(crate) fn ranges(slots: NonZeroUsize, start: usize, end: usize) -> (Range<usize>, Range<usize>) {
    if start <= end {
        (start..end, 0..0)
    } else {
        (start..slots.get(), 0..end)
    }
}

/// Lock-free single-producer/single-consumer circular queue.
///
/// The backing container supplies `capacity + 1` slots; `head` and `tail`
/// are physical slot indices published atomically. A consumer that observes
/// a published `tail` value is guaranteed to see the correspondingly written
/// items (the index store is `Release`, the load `Acquire`).
///
/// There is no explicit requirement of `T: Send` on the type itself; the
/// queue works fine with `T: !Send` until you try to move one of its role
/// handles to another thread.
#[cfg_attr(
    feature = "std",
    doc = r##"
```
use std::thread;
use fixcap::{HeapQueue, Split, Producer, Consumer};

let q = HeapQueue::<i32>::new(256);
let (mut prod, mut cons) = q.split();
thread::spawn(move || {
    prod.try_push(123).unwrap();
})
.join()
.unwrap();
thread::spawn(move || {
    assert_eq!(cons.try_pop().unwrap(), 123);
})
.join()
.unwrap();
```
"##
)]
pub struct CircularQueue<T, C: Container<T>> {
    storage: Shared<T, C>,
    head: CachePadded<AtomicUsize>,
    tail: CachePadded<AtomicUsize>,
    head_held: AtomicBool,
    tail_held: AtomicBool,
}

impl<T, C: Container<T>> CircularQueue<T, C> {
    /// Wraps a container, treating every slot as vacant.
    ///
    /// *Panics if the container has fewer than two slots* (a queue of zero
    /// logical capacity cannot be constructed).
    pub fn from_container(container: C) -> Self {
        unsafe { Self::from_raw_parts(container, 0, 0) }
    }

    /// Constructs a queue from a container and indices.
    ///
    /// # Safety
    ///
    /// Slots in the `head..tail` (wrapping) span must be initialized, slots
    /// outside it must be uninitialized. Both indices must be less than the
    /// slot count.
    pub unsafe fn from_raw_parts(container: C, head: usize, tail: usize) -> Self {
        Self {
            storage: Shared::new(container),
            head: CachePadded::new(AtomicUsize::new(head)),
            tail: CachePadded::new(AtomicUsize::new(tail)),
            head_held: AtomicBool::new(false),
            tail_held: AtomicBool::new(false),
        }
    }

    /// Destructures the queue into its container and `head`/`tail` indices.
    ///
    /// # Safety
    ///
    /// Initialized contents of the container must be properly dropped.
    pub unsafe fn into_raw_parts(self) -> (C, usize, usize) {
        let this = ManuallyDrop::new(self);
        (ptr::read(&this.storage).into_inner(), this.head_index(), this.tail_index())
    }
}

impl<T, C: Container<T>> Observer for CircularQueue<T, C> {
    type Item = T;

    #[inline]
    fn capacity(&self) -> usize {
        self.storage.len().get() - 1
    }

    #[inline]
    fn head_index(&self) -> usize {
        self.head.load(Ordering::Acquire)
    }
    #[inline]
    fn tail_index(&self) -> usize {
        self.tail.load(Ordering::Acquire)
    }

    unsafe fn unsafe_slices(&self, start: usize, end: usize) -> (&[MaybeUninit<T>], &[MaybeUninit<T>]) {
        let (first, second) = ranges(self.storage.len(), start, end);
        (self.storage.slice(first), self.storage.slice(second))
    }
    unsafe fn unsafe_slices_mut(&self, start: usize, end: usize) -> (&mut [MaybeUninit<T>], &mut [MaybeUninit<T>]) {
        let (first, second) = ranges(self.storage.len(), start, end);
        (self.storage.slice_mut(first), self.storage.slice_mut(second))
    }

    #[inline]
    fn head_is_held(&self) -> bool {
        self.head_held.load(Ordering::Relaxed)
    }
    #[inline]
    fn tail_is_held(&self) -> bool {
        self.tail_held.load(Ordering::Relaxed)
    }
}

impl<T, C: Container<T>> Producer for CircularQueue<T, C> {
    #[inline]
    unsafe fn set_tail_index(&self, value: usize) {
        self.tail.store(value, Ordering::Release);
    }
}

impl<T, C: Container<T>> Consumer for CircularQueue<T, C> {
    #[inline]
    unsafe fn set_head_index(&self, value: usize) {
        self.head.store(value, Ordering::Release);
    }
}

impl<T, C: Container<T>> Ring for CircularQueue<T, C> {
    #[inline]
    unsafe fn hold_head(&self, flag: bool) -> bool {
        self.head_held.swap(flag, Ordering::Relaxed)
    }
    #[inline]
    unsafe fn hold_tail(&self, flag: bool) -> bool {
        self.tail_held.swap(flag, Ordering::Relaxed)
    }
}

impl<T, C: Container<T>> Drop for CircularQueue<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> Default for CircularQueue<T, Array<T, N>> {
    fn default() -> Self {
        Self::from_container(uninit_array())
    }
}

#[cfg(feature = "alloc")]
impl<T> CircularQueue<T, Heap<T>> {
    /// Creates a heap-backed queue holding up to `capacity` items.
    ///
    /// One extra slot is allocated for full/empty disambiguation.
    ///
    /// *Panics if allocation failed or `capacity` is zero.*
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be nonzero");
        let container: Heap<T> = core::iter::repeat_with(MaybeUninit::uninit).take(capacity + 1).collect();
        Self::from_container(container)
    }
}

#[cfg(feature = "alloc")]
impl<T, C: Container<T>> Split for CircularQueue<T, C> {
    type Prod = Prod<Arc<Self>>;
    type Cons = Cons<Arc<Self>>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        Arc::new(self).split()
    }
}
#[cfg(feature = "alloc")]
impl<T, C: Container<T>> Split for Arc<CircularQueue<T, C>> {
    type Prod = Prod<Self>;
    type Cons = Cons<Self>;

    fn split(self) -> (Self::Prod, Self::Cons) {
        (Prod::new(self.clone()), Cons::new(self))
    }
}

impl<T, C: Container<T>> SplitRef for CircularQueue<T, C> {
    type RefProd<'a> = Prod<&'a Self> where Self: 'a;
    type RefCons<'a> = Cons<&'a Self> where Self: 'a;

    fn split_ref(&mut self) -> (Self::RefProd<'_>, Self::RefCons<'_>) {
        (Prod::new(self), Cons::new(self))
    }
}
