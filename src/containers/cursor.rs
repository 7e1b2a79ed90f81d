//! Positional cursors over the sequence containers
//!
//! A cursor sits on one element, or on the "ghost" position between the
//! last and the first element. Moving forward from the ghost lands on the
//! first element, moving backward lands on the last, so a cursor can walk a
//! container in either direction and wrap around.
//!
//! [`Cursor`] is implemented by the read-only cursors of both containers, so
//! position-based algorithms can be written once. [`ListCursorMut`] adds
//! in-place editing for the linked list.

use crate::containers::arena::NIL;
use crate::containers::linked_list::DoublyLinkedList;
use crate::error::Result;

/// Read-only bidirectional cursor
pub trait Cursor<'a> {
    /// Element type
    type Item: 'a;

    /// Element under the cursor, `None` on the ghost position
    fn current(&self) -> Option<&'a Self::Item>;

    /// Zero-based position of the cursor, `None` on the ghost position
    fn index(&self) -> Option<usize>;

    /// Advance one element (ghost → first element)
    fn move_next(&mut self);

    /// Step back one element (ghost → last element)
    fn move_prev(&mut self);

    /// Element the cursor would reach with `move_next`
    fn peek_next(&self) -> Option<&'a Self::Item>;

    /// Element the cursor would reach with `move_prev`
    fn peek_prev(&self) -> Option<&'a Self::Item>;

    /// `true` on the ghost position
    #[inline]
    fn is_ghost(&self) -> bool {
        self.index().is_none()
    }
}

/// Cursor over a contiguous array
#[derive(Debug)]
pub struct ArrayCursor<'a, T> {
    items: &'a [T],
    /// `items.len()` marks the ghost position
    index: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    pub(crate) fn new(items: &'a [T], index: usize) -> Self {
        Self {
            items,
            index: index.min(items.len()),
        }
    }
}

impl<T> Clone for ArrayCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            index: self.index,
        }
    }
}

impl<'a, T> Cursor<'a> for ArrayCursor<'a, T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&'a T> {
        self.items.get(self.index)
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        (self.index < self.items.len()).then_some(self.index)
    }

    fn move_next(&mut self) {
        let len = self.items.len();
        self.index = if self.index >= len { 0 } else { self.index + 1 };
    }

    fn move_prev(&mut self) {
        let len = self.items.len();
        self.index = if self.index >= len {
            len.saturating_sub(1)
        } else if self.index == 0 {
            len
        } else {
            self.index - 1
        };
    }

    fn peek_next(&self) -> Option<&'a T> {
        let mut ahead = self.clone();
        ahead.move_next();
        ahead.current()
    }

    fn peek_prev(&self) -> Option<&'a T> {
        let mut ahead = self.clone();
        ahead.move_prev();
        ahead.current()
    }
}

/// Read-only cursor over a [`DoublyLinkedList`]
pub struct ListCursor<'a, T> {
    list: &'a DoublyLinkedList<T>,
    handle: u32,
    index: usize,
}

impl<'a, T> ListCursor<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>, handle: u32, index: usize) -> Self {
        let index = if handle == NIL { list.len() } else { index };
        Self {
            list,
            handle,
            index,
        }
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            handle: self.handle,
            index: self.index,
        }
    }
}

impl<'a, T> Cursor<'a> for ListCursor<'a, T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&'a T> {
        if self.handle == NIL {
            return None;
        }
        Some(&self.list.node(self.handle).data)
    }

    #[inline]
    fn index(&self) -> Option<usize> {
        (self.handle != NIL).then_some(self.index)
    }

    fn move_next(&mut self) {
        if self.handle == NIL {
            self.handle = self.list.head_handle();
            self.index = 0;
        } else {
            self.handle = self.list.node(self.handle).next;
            self.index += 1;
        }
        if self.handle == NIL {
            self.index = self.list.len();
        }
    }

    fn move_prev(&mut self) {
        if self.handle == NIL {
            self.handle = self.list.tail_handle();
            self.index = self.list.len().saturating_sub(1);
        } else {
            self.handle = self.list.node(self.handle).prev;
            self.index = self.index.saturating_sub(1);
        }
        if self.handle == NIL {
            self.index = self.list.len();
        }
    }

    fn peek_next(&self) -> Option<&'a T> {
        let mut ahead = self.clone();
        ahead.move_next();
        ahead.current()
    }

    fn peek_prev(&self) -> Option<&'a T> {
        let mut ahead = self.clone();
        ahead.move_prev();
        ahead.current()
    }
}

/// Editing cursor over a [`DoublyLinkedList`]
///
/// Splices and removals at the cursor are O(1).
pub struct ListCursorMut<'a, T> {
    list: &'a mut DoublyLinkedList<T>,
    handle: u32,
    index: usize,
}

impl<'a, T> ListCursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut DoublyLinkedList<T>, handle: u32, index: usize) -> Self {
        let index = if handle == NIL { list.len() } else { index };
        Self {
            list,
            handle,
            index,
        }
    }

    /// Element under the cursor
    pub fn current(&mut self) -> Option<&mut T> {
        if self.handle == NIL {
            return None;
        }
        Some(&mut self.list.node_mut(self.handle).data)
    }

    /// Zero-based position, `None` on the ghost position
    pub fn index(&self) -> Option<usize> {
        (self.handle != NIL).then_some(self.index)
    }

    /// Advance one element (ghost → first element)
    pub fn move_next(&mut self) {
        if self.handle == NIL {
            self.handle = self.list.head_handle();
            self.index = 0;
        } else {
            self.handle = self.list.node(self.handle).next;
            self.index += 1;
        }
        if self.handle == NIL {
            self.index = self.list.len();
        }
    }

    /// Step back one element (ghost → last element)
    pub fn move_prev(&mut self) {
        if self.handle == NIL {
            self.handle = self.list.tail_handle();
            self.index = self.list.len().saturating_sub(1);
        } else {
            self.handle = self.list.node(self.handle).prev;
            self.index = self.index.saturating_sub(1);
        }
        if self.handle == NIL {
            self.index = self.list.len();
        }
    }

    /// Remove the element under the cursor and move onto its successor.
    ///
    /// Returns `None` on the ghost position.
    pub fn remove_current(&mut self) -> Option<T> {
        if self.handle == NIL {
            return None;
        }
        let next = self.list.node(self.handle).next;
        let value = self.list.unlink(self.handle);
        self.handle = next;
        if next == NIL {
            self.index = self.list.len();
        }
        Some(value)
    }

    /// Insert `value` before the cursor; on the ghost position this appends.
    pub fn insert_before(&mut self, value: T) -> Result<()> {
        self.list.link_before(self.handle, value)?;
        self.index += 1;
        Ok(())
    }

    /// Insert `value` after the cursor; on the ghost position this prepends.
    pub fn insert_after(&mut self, value: T) -> Result<()> {
        self.list.link_after(self.handle, value)?;
        if self.handle == NIL {
            self.index = self.list.len();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::dynamic_array::DynamicArray;

    fn walk_back<'a, C: Cursor<'a>>(mut cursor: C) -> Vec<&'a C::Item> {
        let mut seen = Vec::new();
        while let Some(item) = cursor.current() {
            seen.push(item);
            cursor.move_prev();
        }
        seen
    }

    #[test]
    fn test_array_cursor_walk() {
        let arr = DynamicArray::from([1, 2, 3]);
        let mut cursor = arr.cursor();
        assert_eq!(cursor.current(), Some(&1));
        assert_eq!(cursor.index(), Some(0));
        assert_eq!(cursor.peek_prev(), None);
        assert_eq!(cursor.peek_next(), Some(&2));

        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&3));
        cursor.move_next();
        assert!(cursor.is_ghost());
        cursor.move_next();
        assert_eq!(cursor.current(), Some(&1));
        cursor.move_prev();
        assert!(cursor.is_ghost());
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&3));
    }

    #[test]
    fn test_list_cursor_walk() {
        let list = DoublyLinkedList::from(['a', 'b', 'c']);
        let mut cursor = list.cursor();
        assert_eq!(cursor.current(), Some(&'a'));
        cursor.move_next();
        assert_eq!(cursor.index(), Some(1));
        assert_eq!(cursor.peek_next(), Some(&'c'));
        assert_eq!(cursor.peek_prev(), Some(&'a'));
        cursor.move_prev();
        cursor.move_prev();
        assert!(cursor.is_ghost());
        cursor.move_prev();
        assert_eq!(cursor.current(), Some(&'c'));
        assert_eq!(cursor.index(), Some(2));
    }

    #[test]
    fn test_generic_cursor_walk() {
        let arr = DynamicArray::from([1, 2, 3]);
        let list = DoublyLinkedList::from([1, 2, 3]);
        assert_eq!(walk_back(arr.cursor_back()), vec![&3, &2, &1]);
        assert_eq!(walk_back(list.cursor_back()), vec![&3, &2, &1]);
    }

    #[test]
    fn test_empty_cursors() {
        let arr: DynamicArray<i32> = DynamicArray::new();
        let mut cursor = arr.cursor();
        assert!(cursor.is_ghost());
        cursor.move_next();
        cursor.move_prev();
        assert!(cursor.is_ghost());

        let list: DoublyLinkedList<i32> = DoublyLinkedList::new();
        let mut cursor = list.cursor();
        assert!(cursor.is_ghost());
        cursor.move_prev();
        assert!(cursor.current().is_none());
    }

    #[test]
    fn test_cursor_mut_edits() {
        let mut list = DoublyLinkedList::from([1, 2, 4, 5]);
        {
            let mut cursor = list.cursor_mut();
            cursor.move_next();
            cursor.move_next();
            assert_eq!(cursor.current(), Some(&mut 4));
            cursor.insert_before(3).unwrap();
            assert_eq!(cursor.index(), Some(3));

            cursor.move_next();
            assert_eq!(cursor.remove_current(), Some(5));
            assert!(cursor.index().is_none());

            cursor.insert_before(6).unwrap();
            cursor.insert_after(0).unwrap();

            cursor.move_next();
            *cursor.current().unwrap() += 10;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 1, 2, 3, 4, 6]);
        list.check_invariants();
    }
}
