//! DoublyLinkedList: arena-backed doubly-linked sequence
//!
//! Nodes are stored in a [`NodeArena`] and linked by `u32` handles, so the
//! list has a single owner for every node and no reference cycles. Push and
//! pop at either end are O(1); positional operations walk from the nearer
//! end.
//!
//! Positional insert and erase saturate instead of wrapping: a position at or
//! before the front acts on the front, a position at or past the back acts on
//! the back. Element access wraps negative indices like
//! [`DynamicArray`](crate::DynamicArray).

use crate::containers::arena::{Node, NodeArena, Slot, NIL};
use crate::containers::cursor::{ListCursor, ListCursorMut};
use crate::containers::position::normalize_index;
use crate::containers::LIFECYCLE_TARGET;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

/// Doubly-linked list owning its nodes
///
/// # Examples
///
/// ```rust
/// use orderly::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::from([5, 3, 3, 1]);
/// assert_eq!(list.unique(), 1);
/// assert_eq!(list.to_string(), "5 - 3 - 1");
///
/// list.bubble_sort();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub struct DoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: u32,
    tail: u32,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    /// Create an empty list. No memory is allocated.
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the list holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node and release the node storage.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    /// Move the contents out, leaving this list empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange contents with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Prepend `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`](crate::OrderlyError::OutOfMemory)
    /// if the node storage cannot grow; the list is unchanged.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.link_after(NIL, value).map(|_| ())
    }

    /// Append `value`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`](crate::OrderlyError::OutOfMemory)
    /// if the node storage cannot grow; the list is unchanged.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.link_before(NIL, value).map(|_| ())
    }

    /// Remove and return the first element.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }
        Some(self.unlink(self.head))
    }

    /// Remove and return the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }
        Some(self.unlink(self.tail))
    }

    /// Insert `value` so that it ends up at `position`.
    ///
    /// `position <= 0` pushes to the front and `position >= len` pushes to
    /// the back; anything else is spliced after the node at `position - 1`.
    pub fn insert(&mut self, position: isize, value: T) -> Result<()> {
        if position <= 0 {
            return self.push_front(value);
        }
        let position = position as usize;
        if position >= self.len {
            return self.push_back(value);
        }
        let anchor = self.handle_at(position - 1);
        self.link_after(anchor, value).map(|_| ())
    }

    /// Remove the element at `position` and return it.
    ///
    /// `position <= 0` pops the front and `position >= len - 1` pops the
    /// back. Returns `None` on an empty list.
    pub fn erase(&mut self, position: isize) -> Option<T> {
        if position <= 0 || self.len == 0 {
            return self.pop_front();
        }
        let position = position as usize;
        if position >= self.len - 1 {
            return self.pop_back();
        }
        let handle = self.handle_at(position);
        Some(self.unlink(handle))
    }

    /// Reverse the list by swapping every node's links, then head and tail.
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while current != NIL {
            let node = self.arena.node_mut(current);
            mem::swap(&mut node.prev, &mut node.next);
            // the old `next` now sits in `prev`
            current = node.prev;
        }
        mem::swap(&mut self.head, &mut self.tail);
    }

    /// Element at `index` after negative/overflow normalisation. O(index).
    pub fn get(&self, index: isize) -> Option<&T> {
        let index = normalize_index(index, self.len)?;
        Some(&self.arena.node(self.handle_at(index)).data)
    }

    /// Mutable element at `index` after normalisation. O(index).
    pub fn get_mut(&mut self, index: isize) -> Option<&mut T> {
        let index = normalize_index(index, self.len)?;
        let handle = self.handle_at(index);
        Some(&mut self.arena.node_mut(handle).data)
    }

    /// First element
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.arena.get(self.head).map(|node| &node.data)
    }

    /// Last element
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.arena.get(self.tail).map(|node| &node.data)
    }

    /// Mutable first element
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.arena.get_mut(self.head).map(|node| &mut node.data)
    }

    /// Mutable last element
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.arena.get_mut(self.tail).map(|node| &mut node.data)
    }

    /// Borrowing iterator from front to back
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Mutable iterator from front to back
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            slots: self.arena.slots_ptr(),
            front: self.head,
            back: self.tail,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Read-only cursor positioned on the first element
    pub fn cursor(&self) -> ListCursor<'_, T> {
        ListCursor::new(self, self.head, 0)
    }

    /// Read-only cursor positioned on the last element
    pub fn cursor_back(&self) -> ListCursor<'_, T> {
        ListCursor::new(self, self.tail, self.len.saturating_sub(1))
    }

    /// Editing cursor positioned on the first element
    pub fn cursor_mut(&mut self) -> ListCursorMut<'_, T> {
        let head = self.head;
        ListCursorMut::new(self, head, 0)
    }

    /// Append every item of `iter`, stopping at the first allocation failure.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Verify the link structure, panicking on the first broken invariant.
    ///
    /// A broken chain can only come from a bug inside this module, so it is
    /// reported as a panic rather than an error value.
    pub fn check_invariants(&self) {
        if self.len == 0 {
            assert_eq!(self.head, NIL, "empty list has a head");
            assert_eq!(self.tail, NIL, "empty list has a tail");
            assert!(self.arena.is_empty(), "empty list owns nodes");
            assert_eq!(self.arena.slot_count(), 0, "empty list holds vacant slots");
            return;
        }

        assert_eq!(self.arena.len(), self.len, "node count differs from length");
        assert_eq!(self.arena.node(self.head).prev, NIL, "head has a predecessor");
        assert_eq!(self.arena.node(self.tail).next, NIL, "tail has a successor");
        if self.len == 1 {
            assert_eq!(self.head, self.tail, "single-node list with head != tail");
        }

        let mut count = 1;
        let mut current = self.head;
        loop {
            let next = self.arena.node(current).next;
            if next == NIL {
                break;
            }
            assert_eq!(
                self.arena.node(next).prev,
                current,
                "node {} does not point back at {}",
                next,
                current
            );
            current = next;
            count += 1;
            assert!(count <= self.len, "cycle in node chain");
        }
        assert_eq!(current, self.tail, "forward walk does not end at the tail");
        assert_eq!(count, self.len, "forward walk length differs from length");
    }

    #[inline]
    pub(crate) fn head_handle(&self) -> u32 {
        self.head
    }

    #[inline]
    pub(crate) fn tail_handle(&self) -> u32 {
        self.tail
    }

    #[inline]
    pub(crate) fn node(&self, handle: u32) -> &Node<T> {
        self.arena.node(handle)
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, handle: u32) -> &mut Node<T> {
        self.arena.node_mut(handle)
    }

    /// Handle of the node at `index`; `index` must be below `len`.
    fn handle_at(&self, index: usize) -> u32 {
        debug_assert!(index < self.len);
        if index <= self.len / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.arena.node(current).next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..self.len - 1 - index {
                current = self.arena.node(current).prev;
            }
            current
        }
    }

    /// Link a new node after `anchor` (`NIL` means at the front).
    pub(crate) fn link_after(&mut self, anchor: u32, value: T) -> Result<u32> {
        let handle = self.arena.try_insert(value)?;
        let next = if anchor == NIL {
            self.head
        } else {
            self.arena.node(anchor).next
        };

        let node = self.arena.node_mut(handle);
        node.prev = anchor;
        node.next = next;

        if anchor == NIL {
            self.head = handle;
        } else {
            self.arena.node_mut(anchor).next = handle;
        }
        if next == NIL {
            self.tail = handle;
        } else {
            self.arena.node_mut(next).prev = handle;
        }

        self.len += 1;
        Ok(handle)
    }

    /// Link a new node before `anchor` (`NIL` means at the back).
    pub(crate) fn link_before(&mut self, anchor: u32, value: T) -> Result<u32> {
        let handle = self.arena.try_insert(value)?;
        let prev = if anchor == NIL {
            self.tail
        } else {
            self.arena.node(anchor).prev
        };

        let node = self.arena.node_mut(handle);
        node.prev = prev;
        node.next = anchor;

        if prev == NIL {
            self.head = handle;
        } else {
            self.arena.node_mut(prev).next = handle;
        }
        if anchor == NIL {
            self.tail = handle;
        } else {
            self.arena.node_mut(anchor).prev = handle;
        }

        self.len += 1;
        Ok(handle)
    }

    /// Detach the node at `handle`, free its slot and return its value.
    ///
    /// Unlinking the last node releases the arena's storage.
    pub(crate) fn unlink(&mut self, handle: u32) -> T {
        let node = match self.arena.remove(handle) {
            Some(node) => node,
            None => panic!("corrupt node chain: unlink of free handle {}", handle),
        };

        if node.prev == NIL {
            self.head = node.next;
        } else {
            self.arena.node_mut(node.prev).next = node.next;
        }
        if node.next == NIL {
            self.tail = node.prev;
        } else {
            self.arena.node_mut(node.next).prev = node.prev;
        }

        self.len -= 1;
        if self.len == 0 {
            self.arena.clear();
        }
        node.data
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// `true` if some element equals `value`.
    pub fn linear_search(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Remove every element equal to its immediate predecessor.
    ///
    /// Only adjacent duplicates are collapsed; returns how many were removed.
    pub fn unique(&mut self) -> usize {
        if self.head == NIL {
            return 0;
        }

        let mut removed = 0;
        let mut current = self.head;
        loop {
            let next = self.arena.node(current).next;
            if next == NIL {
                break;
            }
            if self.arena.node(current).data == self.arena.node(next).data {
                self.unlink(next);
                removed += 1;
            } else {
                current = next;
            }
        }
        removed
    }

    /// Remove every element equal to `value`, returning how many were removed.
    pub fn remove(&mut self, value: &T) -> usize {
        let mut removed = 0;
        let mut current = self.head;
        while current != NIL {
            let next = self.arena.node(current).next;
            if self.arena.node(current).data == *value {
                self.unlink(current);
                removed += 1;
            }
            current = next;
        }
        removed
    }
}

impl<T: PartialOrd> DoublyLinkedList<T> {
    /// Ascending bubble sort over node values.
    ///
    /// Links are left in place and values are swapped. Each pass stops at the
    /// last swap of the previous pass; a pass without swaps ends the sort.
    pub fn bubble_sort(&mut self) {
        self.bubble_sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// `true` if no adjacent pair is out of ascending order.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }
}

impl<T> DoublyLinkedList<T> {
    /// Bubble sort with a caller-supplied ordering.
    ///
    /// Only pairs comparing `Greater` are swapped, so equal elements keep
    /// their relative order.
    pub fn bubble_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }

        // first node that is already in its final place
        let mut end = NIL;
        loop {
            let mut last_swap = NIL;
            let mut current = self.head;
            loop {
                let next = self.arena.node(current).next;
                if next == NIL || next == end {
                    break;
                }
                let order = compare(&self.arena.node(current).data, &self.arena.node(next).data);
                if order == Ordering::Greater {
                    self.arena.swap_data(current, next);
                    last_swap = next;
                }
                current = next;
            }
            if last_swap == NIL {
                break;
            }
            end = last_swap;
        }
    }

    /// `true` if no adjacent pair compares `Greater` under `compare`.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.iter();
        let Some(mut prev) = items.next() else {
            return true;
        };
        for item in items {
            if compare(prev, item) == Ordering::Greater {
                return false;
            }
            prev = item;
        }
        true
    }
}

impl DoublyLinkedList<char> {
    /// Render the characters with no separators.
    pub fn concat(&self) -> String {
        self.iter().collect()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        if self.len > 0 {
            log::trace!(target: LIFECYCLE_TARGET, "dropping DoublyLinkedList of {} nodes", self.len);
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        log::trace!(target: LIFECYCLE_TARGET, "deep copy of DoublyLinkedList ({} nodes)", self.len);
        Self {
            arena: self.arena.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

/// # Panics
///
/// Panics if the node storage cannot grow, like any std collection.
impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend(iter) {
            panic!("DoublyLinkedList::extend: {}", e);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        log::trace!(target: LIFECYCLE_TARGET, "DoublyLinkedList built from {} elements", list.len);
        list
    }
}

impl<T> From<Vec<T>> for DoublyLinkedList<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DoublyLinkedList<T> {
    fn from(elements: &[T]) -> Self {
        elements.iter().cloned().collect()
    }
}

impl<T> Index<isize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: isize) -> &Self::Output {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index {} into an empty DoublyLinkedList", index),
        }
    }
}

impl<T> IndexMut<isize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index {} into an empty DoublyLinkedList", index),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Elements joined by `" - "`, no trailing separator.
impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.iter();
        if let Some(first) = items.next() {
            write!(f, "{}", first)?;
            for item in items {
                write!(f, " - {}", item)?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

// ============================================================================
// Iterators
// ============================================================================

/// Borrowing iterator over a [`DoublyLinkedList`]
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Mutable iterator over a [`DoublyLinkedList`]
pub struct IterMut<'a, T> {
    slots: *mut Slot<T>,
    front: u32,
    back: u32,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: the iterator holds the list's exclusive borrow, so the slot
        // vector cannot reallocate. `remaining` guarantees each handle is
        // yielded once from either end, so no two returned references alias.
        let (data, _, next) = unsafe { NodeArena::data_at(self.slots, self.front) };
        self.front = next;
        self.remaining -= 1;
        Some(data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        // SAFETY: as in `next`.
        let (data, prev, _) = unsafe { NodeArena::data_at(self.slots, self.back) };
        self.back = prev;
        self.remaining -= 1;
        Some(data)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`DoublyLinkedList`]
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
