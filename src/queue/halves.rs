use super::{consumer::Consumer, observer::Observer, producer::Producer, ring::Ring};
#[cfg(all(feature = "alloc", not(feature = "portable-atomic")))]
use alloc::sync::Arc;
use core::{
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};
#[cfg(all(feature = "alloc", feature = "portable-atomic"))]
use portable_atomic_util::Arc;

/// Shared reference to an owned queue, held by role handles.
///
/// # Safety
///
/// [`Self::queue`] must return the same queue on every call.
pub unsafe trait QueueRef: Clone {
    type Target: Ring;

    /// The underlying queue.
    fn queue(&self) -> &Self::Target;
}

unsafe impl<'a, Q: Ring> QueueRef for &'a Q {
    type Target = Q;
    fn queue(&self) -> &Q {
        self
    }
}
#[cfg(feature = "alloc")]
unsafe impl<Q: Ring> QueueRef for Arc<Q> {
    type Target = Q;
    fn queue(&self) -> &Q {
        self
    }
}

/// Role handle over a shared queue.
///
/// `P` grants the produce role, `C` the consume role. A handle claims its
/// role(s) for its whole lifetime, so at most one producer and one consumer
/// handle can exist at a time; passive observers are unrestricted.
pub struct Direct<R: QueueRef, const P: bool, const C: bool> {
    queue: R,
}

/// Observer handle: passive state inspection only.
pub type Obs<R> = Direct<R, false, false>;
/// Producer handle.
pub type Prod<R> = Direct<R, true, false>;
/// Consumer handle.
pub type Cons<R> = Direct<R, false, true>;

impl<R: QueueRef> Clone for Obs<R> {
    fn clone(&self) -> Self {
        Self { queue: self.queue.clone() }
    }
}

impl<R: QueueRef, const P: bool, const C: bool> Direct<R, P, C> {
    /// Creates a handle, claiming its role(s).
    ///
    /// *Panics if a claimed role is already held by another handle.*
    pub fn new(queue: R) -> Self {
        if P {
            assert!(!unsafe { queue.queue().hold_tail(true) }, "producer role is already held");
        }
        if C {
            assert!(!unsafe { queue.queue().hold_head(true) }, "consumer role is already held");
        }
        Self { queue }
    }

    /// Creates a passive observer of the same queue.
    pub fn observe(&self) -> Obs<R> {
        Obs { queue: self.queue.clone() }
    }

    /// Releases the held role(s), letting a new handle claim them.
    pub fn close(&mut self) {
        if P {
            unsafe { self.queue.queue().hold_tail(false) };
        }
        if C {
            unsafe { self.queue.queue().hold_head(false) };
        }
    }

    /// Releases the role(s) and returns the underlying queue reference.
    pub fn into_queue_ref(mut self) -> R {
        self.close();
        let this = ManuallyDrop::new(self);
        unsafe { ptr::read(&this.queue) }
    }
}

impl<R: QueueRef, const P: bool, const C: bool> Drop for Direct<R, P, C> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<R: QueueRef, const P: bool, const C: bool> Observer for Direct<R, P, C> {
    type Item = <R::Target as Observer>::Item;

    #[inline]
    fn capacity(&self) -> usize {
        self.queue.queue().capacity()
    }
    #[inline]
    fn head_index(&self) -> usize {
        self.queue.queue().head_index()
    }
    #[inline]
    fn tail_index(&self) -> usize {
        self.queue.queue().tail_index()
    }
    #[inline]
    unsafe fn unsafe_slices(&self, start: usize, end: usize) -> (&[MaybeUninit<Self::Item>], &[MaybeUninit<Self::Item>]) {
        self.queue.queue().unsafe_slices(start, end)
    }
    #[inline]
    unsafe fn unsafe_slices_mut(&self, start: usize, end: usize) -> (&mut [MaybeUninit<Self::Item>], &mut [MaybeUninit<Self::Item>]) {
        self.queue.queue().unsafe_slices_mut(start, end)
    }
    #[inline]
    fn head_is_held(&self) -> bool {
        self.queue.queue().head_is_held()
    }
    #[inline]
    fn tail_is_held(&self) -> bool {
        self.queue.queue().tail_is_held()
    }
}

impl<R: QueueRef> Producer for Prod<R> {
    #[inline]
    unsafe fn set_tail_index(&self, value: usize) {
        self.queue.queue().set_tail_index(value)
    }
}

impl<R: QueueRef> Consumer for Cons<R> {
    #[inline]
    unsafe fn set_head_index(&self, value: usize) {
        self.queue.queue().set_head_index(value)
    }
}
