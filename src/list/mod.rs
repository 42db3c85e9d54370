//! Doubly-linked list over a fixed node arena.
//!
//! Nodes live in a [`NodePool`] injected at construction and are addressed
//! by index, so no pointer into the arena can dangle: an index held across
//! frees of sibling nodes stays well-defined. End insertion and removal are
//! O(1); removal by value or position is a linear scan.
//!
//! The pool decides the memory regime. [`StaticList`] keeps its nodes in an
//! inline array and never allocates; [`HeapList`] (`alloc` feature) grows on
//! demand for tests and variable-capacity use.
//!
//! ```
//! use fixcap::StaticList;
//!
//! let mut list = StaticList::<i32, 4>::try_from_iter([1, 2, 3]).unwrap();
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.back(), Some(&3));
//!
//! list.try_push_back(4).unwrap();
//! assert!(list.is_full());
//! assert_eq!(list.try_push_back(5).unwrap_err().into_inner(), 5);
//! ```

mod iter;
mod pool;

pub use iter::{CursorMut, IntoIter, Iter, IterMut};
#[cfg(feature = "alloc")]
pub use pool::HeapPool;
pub use pool::{Full, Node, NodePool, Pool};

use core::fmt;
use pool::NIL;

/// Doubly-linked list storing its nodes in the pool `P`.
///
/// The list owns its pool, so the allocator cannot be dropped while any node
/// is alive; swapping a static arena for a heap pool is a type-parameter
/// change, nothing else.
pub struct LinkedList<T, P: NodePool<T>> {
    head: usize,
    tail: usize,
    len: usize,
    pool: P,
}

/// List over an inline arena of `N` nodes.
pub type StaticList<T, const N: usize> = LinkedList<T, Pool<T, N>>;

/// List over the heap-delegating pool.
#[cfg(feature = "alloc")]
pub type HeapList<T> = LinkedList<T, HeapPool<T>>;

impl<T, P: NodePool<T> + Default> LinkedList<T, P> {
    /// Creates an empty list over a fresh pool.
    pub fn new() -> Self {
        Self::with_pool(P::default())
    }

    /// Builds a list from a sequence.
    ///
    /// Fails with [`Full`] carrying the first element that did not fit; a
    /// sequence longer than the pool capacity is never silently truncated.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Full<T>> {
        let mut list = Self::new();
        list.try_extend(iter)?;
        Ok(list)
    }
}

impl<T, P: NodePool<T> + Default> Default for LinkedList<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: NodePool<T>> LinkedList<T, P> {
    /// Creates an empty list over a caller-supplied pool.
    ///
    /// Nodes already claimed in the pool stay claimed and count against
    /// capacity.
    pub fn with_pool(pool: P) -> Self {
        Self {
            head: NIL,
            tail: NIL,
            len: 0,
            pool,
        }
    }

    /// The number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the pool can supply no further node.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pool.remaining() == 0
    }

    /// Maximum node count of the underlying pool.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// The underlying pool.
    pub fn pool(&self) -> &P {
        &self.pool
    }

    /// Appends an element at the back.
    ///
    /// Fails with [`Full`], handing the element back, when the pool is
    /// exhausted.
    pub fn try_push_back(&mut self, elem: T) -> Result<(), Full<T>> {
        let index = self.pool.try_alloc(elem)?;
        {
            let node = self.pool.node_mut(index).expect("invalid index");
            node.set_prev(self.tail);
            node.set_next(NIL);
        }
        if self.tail != NIL {
            self.pool.node_mut(self.tail).expect("invalid index").set_next(index);
        } else {
            self.head = index;
        }
        self.tail = index;
        self.len += 1;
        Ok(())
    }

    /// Prepends an element at the front.
    ///
    /// Fails with [`Full`], handing the element back, when the pool is
    /// exhausted.
    pub fn try_push_front(&mut self, elem: T) -> Result<(), Full<T>> {
        let index = self.pool.try_alloc(elem)?;
        {
            let node = self.pool.node_mut(index).expect("invalid index");
            node.set_next(self.head);
            node.set_prev(NIL);
        }
        if self.head != NIL {
            self.pool.node_mut(self.head).expect("invalid index").set_prev(index);
        } else {
            self.tail = index;
        }
        self.head = index;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the back element; `None` on an empty list.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        let index = self.tail;
        self.unlink(index);
        self.pool.free(index)
    }

    /// Removes and returns the front element; `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        let index = self.head;
        self.unlink(index);
        self.pool.free(index)
    }

    /// The front element; `None` on an empty list.
    pub fn front(&self) -> Option<&T> {
        self.pool.node(self.head).map(Node::elem)
    }

    /// Mutable front element; `None` on an empty list.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.pool.node_mut(self.head).map(Node::elem_mut)
    }

    /// The back element; `None` on an empty list.
    pub fn back(&self) -> Option<&T> {
        self.pool.node(self.tail).map(Node::elem)
    }

    /// Mutable back element; `None` on an empty list.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.pool.node_mut(self.tail).map(Node::elem_mut)
    }

    /// Removes the first element equal to `value`, keeping the order of the
    /// rest. Returns whether anything was removed; an absent value is a
    /// no-op.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut index = self.head;
        while index != NIL {
            let node = self.pool.node(index).expect("invalid index");
            let next = node.next();
            if node.elem() == value {
                self.unlink(index);
                self.pool.free(index);
                return true;
            }
            index = next;
        }
        false
    }

    /// Removes the element at the zero-based `position`, found by linear
    /// traversal. Returns `None` (no-op) when `position >= len()`.
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        if position >= self.len {
            return None;
        }
        let mut index = self.head;
        for _ in 0..position {
            index = self.pool.node(index)?.next();
        }
        self.unlink(index);
        self.pool.free(index)
    }

    /// Returns every node to the pool, leaving the list empty. O(n).
    pub fn clear(&mut self) {
        let mut index = self.head;
        while index != NIL {
            let next = self.pool.node(index).map(|node| node.next()).unwrap_or(NIL);
            self.pool.free(index);
            index = next;
        }
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Forward iterator over the elements in list order.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter::new(&self.pool, self.head, self.len)
    }

    /// Forward iterator yielding mutable element references.
    ///
    /// Mutation through it touches only elements, never links or the pool.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, P> {
        IterMut::new(&mut self.pool, self.head, self.len)
    }

    /// A cursor starting at the front element, for edit-during-traversal.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, P> {
        CursorMut::new(self)
    }

    /// Appends every element of `iter`, stopping at the first that does not
    /// fit and handing it back in [`Full`]. Elements appended before the
    /// failure stay in the list.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Full<T>> {
        for elem in iter {
            self.try_push_back(elem)?;
        }
        Ok(())
    }

    /// Unlinks a live node from the chain without freeing it.
    fn unlink(&mut self, index: usize) {
        let (prev, next) = {
            let node = self.pool.node(index).expect("invalid index");
            (node.prev(), node.next())
        };
        if prev != NIL {
            self.pool.node_mut(prev).expect("invalid index").set_next(next);
        } else {
            self.head = next;
        }
        if next != NIL {
            self.pool.node_mut(next).expect("invalid index").set_prev(prev);
        } else {
            self.tail = prev;
        }
        self.len -= 1;
    }
}

impl<T: Clone, P: NodePool<T> + Default> LinkedList<T, P> {
    /// Deep-copies the elements into a fresh pool of the same type.
    ///
    /// The pool itself is never shared between copies. Fails with [`Full`]
    /// when the source holds more elements than a fresh pool can.
    pub fn try_clone(&self) -> Result<Self, Full<T>> {
        Self::try_from_iter(self.iter().cloned())
    }
}

impl<T: fmt::Debug, P: NodePool<T>> fmt::Debug for LinkedList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, P1: NodePool<T>, P2: NodePool<T>> PartialEq<LinkedList<T, P2>> for LinkedList<T, P1> {
    fn eq(&self, other: &LinkedList<T, P2>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, P: NodePool<T>> Eq for LinkedList<T, P> {}

impl<'a, T, P: NodePool<T>> IntoIterator for &'a LinkedList<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: NodePool<T>> IntoIterator for &'a mut LinkedList<T, P> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, P: NodePool<T>> IntoIterator for LinkedList<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T, P>;

    /// Consumes the list into a front-to-back draining iterator.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
