//! Double-ended queue over a [`DoublyLinkedList`]

use crate::containers::linked_list::{self, DoublyLinkedList};
use crate::error::Result;
use std::fmt;

/// FIFO queue that also accepts work at the front
///
/// A thin wrapper around [`DoublyLinkedList`]: every operation is O(1)
/// except indexed access, which walks from the nearer end.
///
/// # Examples
///
/// ```rust
/// use orderly::Queue;
///
/// let mut queue = Queue::new();
/// queue.push_back("b").unwrap();
/// queue.push_front("a").unwrap();
/// assert_eq!(queue.pop_front(), Some("a"));
/// assert_eq!(queue.to_string(), "b");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    /// Number of queued items
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// `true` if nothing is queued
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Enqueue at the back.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.list.push_back(value)
    }

    /// Enqueue at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.list.push_front(value)
    }

    /// Dequeue from the front.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Dequeue from the back.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Next item to be dequeued
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Most recently enqueued item
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }

    /// Item at `index` with the list's negative/overflow normalisation.
    pub fn get(&self, index: isize) -> Option<&T> {
        self.list.get(index)
    }

    /// Drop every queued item.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Exchange contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.list.swap(&mut other.list);
    }

    /// Items from front to back
    pub fn iter(&self) -> linked_list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> From<DoublyLinkedList<T>> for Queue<T> {
    fn from(list: DoublyLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            list: DoublyLinkedList::from(items),
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = linked_list::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.list).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = Queue::new();
        for value in 1..=3 {
            queue.push_back(value).unwrap();
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.back(), Some(&3));
        assert_eq!(queue.pop_front(), Some(1));
        assert_eq!(queue.pop_front(), Some(2));
        assert_eq!(queue.pop_front(), Some(3));
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn test_both_ends() {
        let mut queue = Queue::from([2, 3]);
        queue.push_front(1).unwrap();
        assert_eq!(queue.pop_back(), Some(3));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(queue.get(-1), Some(&2));
    }

    #[test]
    fn test_swap_clear_display() {
        let mut a: Queue<i32> = (1..=3).collect();
        let mut b = Queue::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(b.to_string(), "1 - 2 - 3");

        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.to_string(), "");
    }
}
