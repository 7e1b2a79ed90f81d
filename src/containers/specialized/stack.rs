//! Fixed-capacity stack over a preallocated [`DynamicArray`]

use crate::containers::position::normalize_index;
use crate::containers::DynamicArray;
use crate::error::{OrderlyError, Result};
use std::fmt;
use std::mem;

/// LIFO stack with a capacity fixed at construction
///
/// The backing array is sized to the capacity up front, so `push` and `pop`
/// never allocate. Pushing onto a full stack is rejected with
/// [`OrderlyError::CapacityExceeded`] and leaves the stack unchanged.
///
/// # Examples
///
/// ```rust
/// use orderly::BoundedStack;
///
/// let mut stack = BoundedStack::with_capacity(2).unwrap();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(stack.push(3).is_err());
///
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.peek(), Some(&1));
/// ```
#[derive(Clone, PartialEq)]
pub struct BoundedStack<T> {
    slots: DynamicArray<T>,
    items: usize,
}

impl<T: Default> BoundedStack<T> {
    /// Create a stack able to hold `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the slots cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: DynamicArray::with_len(capacity)?,
            items: 0,
        })
    }

    /// Push `value` on top.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::CapacityExceeded`] when the stack is full.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            log::warn!(
                "stack overflow: {} of {} slots in use",
                self.items,
                self.capacity()
            );
            return Err(OrderlyError::capacity_exceeded(self.capacity()));
        }
        self.slots.as_mut_slice()[self.items] = value;
        self.items += 1;
        Ok(())
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> Option<T> {
        if self.items == 0 {
            return None;
        }
        self.items -= 1;
        Some(mem::take(&mut self.slots.as_mut_slice()[self.items]))
    }

    /// Drop every item; the capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots.as_mut_slice()[..self.items] {
            *slot = T::default();
        }
        self.items = 0;
    }
}

impl<T> BoundedStack<T> {
    /// Maximum number of items
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of items currently on the stack
    #[inline]
    pub fn items(&self) -> usize {
        self.items
    }

    /// `true` if the stack holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// `true` if another push would fail
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items == self.capacity()
    }

    /// Top item
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.live().last()
    }

    /// Item at `index` counted from the bottom, with negative indices
    /// wrapping from the top and overflow clamped to the top.
    pub fn get(&self, index: isize) -> Option<&T> {
        normalize_index(index, self.items).map(|idx| &self.live()[idx])
    }

    /// Exchange contents and capacity with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.slots.swap(&mut other.slots);
        mem::swap(&mut self.items, &mut other.items);
    }

    /// Items from bottom to top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.live().iter()
    }

    #[inline]
    fn live(&self) -> &[T] {
        &self.slots.as_slice()[..self.items]
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity())
            .field("items", &self.live())
            .finish()
    }
}

/// One numbered line per item, top first: `"2. top"`, `"1. bottom"`.
impl<T: fmt::Display> fmt::Display for BoundedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, item) in (1..=self.items).rev().zip(self.live().iter().rev()) {
            write!(f, "{}. {}", number, item)?;
            if number > 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_peek() {
        let mut stack = BoundedStack::with_capacity(3).unwrap();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);

        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.items(), 2);
        assert_eq!(stack.peek(), Some(&2));

        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_overflow_is_rejected() {
        let mut stack = BoundedStack::with_capacity(2).unwrap();
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert!(stack.is_full());

        let err = stack.push('c').unwrap_err();
        assert_eq!(err.category(), "capacity");
        assert!(err.is_recoverable());
        assert_eq!(stack.items(), 2);
        assert_eq!(stack.peek(), Some(&'b'));
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack: BoundedStack<i32> = BoundedStack::with_capacity(0).unwrap();
        assert!(stack.is_full());
        assert!(stack.push(1).is_err());
        assert_eq!(stack.get(0), None);
    }

    #[test]
    fn test_get_normalises() {
        let mut stack = BoundedStack::with_capacity(5).unwrap();
        for value in [10, 20, 30] {
            stack.push(value).unwrap();
        }
        assert_eq!(stack.get(0), Some(&10));
        assert_eq!(stack.get(-1), Some(&30));
        // overflow addresses the top, never an empty slot
        assert_eq!(stack.get(4), Some(&30));
    }

    #[test]
    fn test_clear_and_swap() {
        let mut a = BoundedStack::with_capacity(2).unwrap();
        a.push(String::from("x")).unwrap();
        let mut b = BoundedStack::with_capacity(4).unwrap();

        a.swap(&mut b);
        assert_eq!(a.capacity(), 4);
        assert!(a.is_empty());
        assert_eq!(b.peek().map(String::as_str), Some("x"));

        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.capacity(), 2);
    }

    #[test]
    fn test_display() {
        let mut stack = BoundedStack::with_capacity(4).unwrap();
        stack.push("bottom").unwrap();
        stack.push("top").unwrap();
        assert_eq!(stack.to_string(), "2. top\n1. bottom");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["bottom", "top"]);
    }
}
