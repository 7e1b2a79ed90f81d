//! DynamicArray: exactly-sized contiguous array
//!
//! The array owns a single boxed slice whose length is always the number of
//! elements; there is no spare capacity. Every structural change (insert,
//! erase, resize) builds a new buffer of the target size and discards the old
//! one. The new buffer is reserved fallibly before the old one is touched, so
//! a failed allocation reports [`OrderlyError::OutOfMemory`] and leaves the
//! array exactly as it was.
//!
//! Positions are signed: negative positions wrap from the end and positions
//! past the end are clamped (see [`crate::containers::position`]).

use crate::containers::cursor::ArrayCursor;
use crate::containers::position::{normalize_index, normalize_insert};
use crate::containers::LIFECYCLE_TARGET;
use crate::error::{check_bounds, check_range, OrderlyError, Result};
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

/// Reserves a vector able to hold exactly `len` elements without growing.
fn allocate<T>(len: usize) -> Result<Vec<T>> {
    let mut fresh = Vec::new();
    fresh
        .try_reserve_exact(len)
        .map_err(|_| OrderlyError::out_of_memory(len.saturating_mul(mem::size_of::<T>())))?;
    Ok(fresh)
}

/// Resizable contiguous array without spare capacity
///
/// # Examples
///
/// ```rust
/// use orderly::DynamicArray;
///
/// let mut arr = DynamicArray::from([1, 2, 3]);
/// arr.insert(-1, 9).unwrap();
/// assert_eq!(arr.as_slice(), &[1, 2, 9, 3]);
///
/// arr.bubble_sort();
/// assert_eq!(arr.search(&9), Some(3));
/// ```
pub struct DynamicArray<T> {
    buf: Box<[T]>,
}

impl<T> DynamicArray<T> {
    /// Create a new empty array. No memory is allocated.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Box::default(),
        }
    }

    /// Get the number of elements in the array
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the array is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the array as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Get the array as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Release the buffer and set the length to zero.
    pub fn clear(&mut self) {
        self.buf = Box::default();
    }

    /// Move the contents out, leaving this array empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchange contents with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
    }

    /// Insert `value` at `position`.
    ///
    /// Negative positions wrap (`len - (|position| mod len)`), positions past
    /// the end append. On an empty array every position inserts at 0.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the new buffer cannot be
    /// allocated; the array is left unchanged.
    pub fn insert(&mut self, position: isize, value: T) -> Result<()> {
        let position = normalize_insert(position, self.len());
        self.insert_at(position, value)
    }

    /// Remove the element at `position` and return it.
    ///
    /// Uses the same normalisation as [`insert`](Self::insert); a position at
    /// or past the end addresses the last element. Returns `Ok(None)` on an
    /// empty array.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the shrunk buffer cannot be
    /// allocated; the array is left unchanged.
    pub fn erase(&mut self, position: isize) -> Result<Option<T>> {
        match normalize_index(position, self.len()) {
            Some(position) => self.erase_at(position).map(Some),
            None => Ok(None),
        }
    }

    /// Append `value`.
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.insert_at(self.len(), value)
    }

    /// Prepend `value`.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Result<()> {
        self.insert_at(0, value)
    }

    /// Remove the last element.
    #[inline]
    pub fn pop_back(&mut self) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.erase_at(self.len() - 1).map(Some)
    }

    /// Remove the first element.
    #[inline]
    pub fn pop_front(&mut self) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.erase_at(0).map(Some)
    }

    fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        // the kept prefix `0..position` must lie inside the buffer
        check_range(0, position, self.len())?;
        let new_len = self
            .len()
            .checked_add(1)
            .ok_or_else(|| OrderlyError::out_of_memory(usize::MAX))?;

        let mut fresh = allocate(new_len)?;
        let mut old = mem::take(&mut self.buf).into_vec().into_iter();
        fresh.extend(old.by_ref().take(position));
        fresh.push(value);
        fresh.extend(old);

        self.buf = fresh.into_boxed_slice();
        Ok(())
    }

    fn erase_at(&mut self, position: usize) -> Result<T> {
        let len = self.len();
        check_bounds(position, len)?;

        let mut fresh = allocate(len - 1)?;
        let mut old = mem::take(&mut self.buf).into_vec().into_iter();
        fresh.extend(old.by_ref().take(position));
        let removed = old.next();
        fresh.extend(old);

        self.buf = fresh.into_boxed_slice();
        removed.ok_or_else(|| OrderlyError::out_of_bounds(position, len))
    }

    /// Reverse the elements in place by swapping from both ends.
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }
        let mut front = 0;
        let mut back = self.len() - 1;
        while front < back {
            self.buf.swap(front, back);
            front += 1;
            back -= 1;
        }
    }

    /// Element at `position` after negative/overflow normalisation.
    ///
    /// Returns `None` only when the array is empty.
    #[inline]
    pub fn get(&self, position: isize) -> Option<&T> {
        normalize_index(position, self.len()).map(|idx| &self.buf[idx])
    }

    /// Mutable element at `position` after normalisation.
    #[inline]
    pub fn get_mut(&mut self, position: isize) -> Option<&mut T> {
        normalize_index(position, self.len()).map(move |idx| &mut self.buf[idx])
    }

    /// First element
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.buf.first()
    }

    /// Last element
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.buf.last()
    }

    /// Forward/backward iterator over the elements
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Mutable iterator over the elements
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Bidirectional cursor starting at the first element
    #[inline]
    pub fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(&self.buf, 0)
    }

    /// Bidirectional cursor starting at the last element
    #[inline]
    pub fn cursor_back(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(&self.buf, self.len().saturating_sub(1))
    }

    /// Append every item of `iter`, building one new buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the combined buffer cannot be
    /// allocated; the array is left unchanged.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        let incoming: Vec<T> = iter.into_iter().collect();
        if incoming.is_empty() {
            return Ok(());
        }
        let new_len = self
            .len()
            .checked_add(incoming.len())
            .ok_or_else(|| OrderlyError::out_of_memory(usize::MAX))?;

        let mut fresh = allocate(new_len)?;
        fresh.extend(mem::take(&mut self.buf).into_vec());
        fresh.extend(incoming);
        self.buf = fresh.into_boxed_slice();
        Ok(())
    }
}

impl<T: Default> DynamicArray<T> {
    /// Create an array of `len` default values.
    pub fn with_len(len: usize) -> Result<Self> {
        let mut arr = Self::new();
        arr.resize(len)?;
        Ok(arr)
    }

    /// Resize to `new_len` elements.
    ///
    /// Keeps the first `min(len, new_len)` elements and fills any new slots
    /// with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the buffer cannot be
    /// allocated. The array keeps its previous length and contents.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len == self.len() {
            return Ok(());
        }

        let mut fresh = match allocate(new_len) {
            Ok(fresh) => fresh,
            Err(e) => {
                log::warn!(
                    "resize to {} failed ({}); length of array remains {}",
                    new_len,
                    e,
                    self.len()
                );
                return Err(e);
            }
        };

        let old = mem::take(&mut self.buf).into_vec();
        fresh.extend(old.into_iter().take(new_len));
        fresh.resize_with(new_len, T::default);

        self.buf = fresh.into_boxed_slice();
        Ok(())
    }
}

impl<T: PartialOrd> DynamicArray<T> {
    /// Classic ascending bubble sort (O(n²) adjacent swaps).
    pub fn bubble_sort(&mut self) {
        let n = self.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - 1 - i {
                if self.buf[j] > self.buf[j + 1] {
                    self.buf.swap(j, j + 1);
                }
            }
        }
    }

    /// `true` if no adjacent pair is out of ascending order.
    pub fn is_sorted(&self) -> bool {
        self.buf.windows(2).all(|pair| !(pair[0] > pair[1]))
    }

    /// Find `value`, returning its index.
    ///
    /// Uses binary search when the array is ascending, a linear scan
    /// otherwise.
    pub fn search(&self, value: &T) -> Option<usize> {
        if self.is_sorted() {
            self.bisect(value)
        } else {
            self.linear_search(value)
        }
    }

    /// Binary search on an ascending array.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::PreconditionViolation`] if the array is not in
    /// ascending order. The check always runs, in every build profile.
    pub fn binary_search(&self, value: &T) -> Result<Option<usize>> {
        if !self.is_sorted() {
            return Err(OrderlyError::precondition(
                "binary search requires elements in ascending order",
            ));
        }
        Ok(self.bisect(value))
    }

    /// Inclusive-bracket binary search; equality wins immediately.
    fn bisect(&self, value: &T) -> Option<usize> {
        let mut low = 0usize;
        // one past the inclusive upper bound
        let mut high = self.len();
        while low < high {
            let mid = low + (high - 1 - low) / 2;
            let pivot = &self.buf[mid];
            if value == pivot {
                return Some(mid);
            } else if value < pivot {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        None
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Index of the first element equal to `value`.
    pub fn linear_search(&self, value: &T) -> Option<usize> {
        self.buf.iter().position(|item| item == value)
    }

    /// `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.linear_search(value).is_some()
    }
}

impl DynamicArray<char> {
    /// Render the characters with no separators.
    pub fn concat(&self) -> String {
        self.buf.iter().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            log::trace!(target: LIFECYCLE_TARGET, "dropping DynamicArray of {} elements", self.buf.len());
        }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        log::trace!(target: LIFECYCLE_TARGET, "deep copy of DynamicArray ({} elements)", self.len());
        Self {
            buf: self.buf.clone(),
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(elements: Vec<T>) -> Self {
        log::trace!(target: LIFECYCLE_TARGET, "DynamicArray built from {} elements", elements.len());
        Self {
            buf: elements.into_boxed_slice(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(elements: &[T]) -> Self {
        Self::from(elements.to_vec())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

/// Infallible counterpart of [`DynamicArray::try_extend`]; allocation failure
/// aborts like any `Vec` growth.
impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut grown = Vec::from(mem::take(self));
        grown.extend(iter);
        self.buf = grown.into_boxed_slice();
    }
}

impl<T> From<DynamicArray<T>> for Vec<T> {
    fn from(mut arr: DynamicArray<T>) -> Self {
        mem::take(&mut arr.buf).into_vec()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Index<isize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, position: isize) -> &Self::Output {
        match self.get(position) {
            Some(item) => item,
            None => panic!("index {} into an empty DynamicArray", position),
        }
    }
}

impl<T> IndexMut<isize> for DynamicArray<T> {
    fn index_mut(&mut self, position: isize) -> &mut Self::Output {
        match self.get_mut(position) {
            Some(item) => item,
            None => panic!("index {} into an empty DynamicArray", position),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

/// Space-separated elements, no trailing separator.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.buf.iter();
        if let Some(first) = items.next() {
            write!(f, "{}", first)?;
            for item in items {
                write!(f, " {}", item)?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}
