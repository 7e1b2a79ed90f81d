//! Sparse matrix as a linked list of non-zero entries

use crate::containers::linked_list::{self, DoublyLinkedList};
use crate::containers::specialized::Matrix;
use crate::error::{OrderlyError, Result};
use std::fmt;

/// One stored cell of a [`SparseMatrix`]
///
/// Entries are ordered by [`key`](Self::key) alone; the value never takes
/// part in sorting.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry<T> {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Entry<T> {
    /// Create an entry for `(row, col)`.
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Sort key: `(row, col)`
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// `rows × cols` matrix that stores only explicit entries
///
/// Entries are kept in insertion order; [`bubble_sort`](Self::bubble_sort)
/// puts them in `(row, col)` order. Cells without an entry read as
/// `T::default()`.
///
/// # Examples
///
/// ```rust
/// use orderly::{Entry, SparseMatrix};
///
/// let mut m = SparseMatrix::new(2, 3);
/// m.insert(0, Entry::new(1, 2, 5)).unwrap();
/// m.insert(0, Entry::new(0, 0, 1)).unwrap();
/// assert!(m.insert(0, Entry::new(2, 0, 9)).is_err());
///
/// assert_eq!(m.get(1, 2).unwrap(), 5);
/// assert_eq!(m.get(1, 1).unwrap(), 0);
/// assert_eq!(m.to_string(), "1 0 0 \n0 0 5 \n");
/// ```
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: DoublyLinkedList<Entry<T>>,
}

impl<T> SparseMatrix<T> {
    /// Create an empty `rows × cols` matrix.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: DoublyLinkedList::new(),
        }
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no entry is stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store `entry` at list `position` (list insert semantics).
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfRange`] when the entry's coordinates lie
    /// outside the matrix; nothing is stored.
    pub fn insert(&mut self, position: isize, entry: Entry<T>) -> Result<()> {
        if entry.row >= self.rows || entry.col >= self.cols {
            log::warn!(
                "sparse entry ({}, {}) rejected: matrix is {}x{}",
                entry.row,
                entry.col,
                self.rows,
                self.cols
            );
            return Err(OrderlyError::out_of_range(
                entry.row, entry.col, self.rows, self.cols,
            ));
        }
        self.entries.insert(position, entry)
    }

    /// Remove the entry at list `position`.
    pub fn erase(&mut self, position: isize) -> Option<Entry<T>> {
        self.entries.erase(position)
    }

    /// Entry at list `position`, with list index normalisation
    pub fn entry(&self, position: isize) -> Option<&Entry<T>> {
        self.entries.get(position)
    }

    /// Mutable entry at list `position`
    ///
    /// Only the value should be changed; coordinates are not re-checked.
    pub fn entry_mut(&mut self, position: isize) -> Option<&mut Entry<T>> {
        self.entries.get_mut(position)
    }

    /// Entries in list order
    pub fn iter(&self) -> linked_list::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Drop every entry; dimensions are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn check_coordinates(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(OrderlyError::out_of_range(row, col, self.rows, self.cols));
        }
        Ok(())
    }

    /// Entries sorted by `(row, col)` without touching the list
    fn ordered(&self) -> Vec<&Entry<T>> {
        let mut ordered: Vec<&Entry<T>> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.key());
        ordered
    }

    /// Bubble-sort the entries into `(row, col)` order.
    ///
    /// Entries sharing a cell keep their relative order.
    pub fn bubble_sort(&mut self) {
        self.entries.bubble_sort_by(|a, b| a.key().cmp(&b.key()));
    }

    /// `true` if the entries are in ascending `(row, col)` order.
    pub fn is_sorted(&self) -> bool {
        self.entries.is_sorted_by(|a, b| a.key().cmp(&b.key()))
    }
}

impl<T: Clone + Default> SparseMatrix<T> {
    /// Value at `(row, col)`; `T::default()` when no entry is stored.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfRange`] outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.check_coordinates(row, col)?;
        Ok(self
            .entries
            .iter()
            .find(|e| e.row == row && e.col == col)
            .map(|e| e.value.clone())
            .unwrap_or_default())
    }

    /// Expand into a dense [`Matrix`].
    ///
    /// When several entries share a cell the one stored first wins.
    pub fn to_dense(&self) -> Result<Matrix<T>> {
        let mut dense = Matrix::new(self.rows, self.cols)?;
        for entry in self.entries.iter().rev() {
            *dense.get_mut(entry.row, entry.col)? = entry.value.clone();
        }
        Ok(dense)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Dense view in `(row, col)` order: one line per row, each value followed
/// by a space, `T::default()` for cells without an entry.
impl<T: fmt::Display + Default> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zero = T::default();
        let mut pending = self.ordered().into_iter().peekable();

        for r in 0..self.rows {
            for c in 0..self.cols {
                match pending.peek() {
                    Some(&entry) if entry.row == r && entry.col == c => {
                        write!(f, "{} ", entry.value)?;
                        // later duplicates of the same cell are hidden
                        while pending.peek().map_or(false, |e| e.row == r && e.col == c) {
                            pending.next();
                        }
                    }
                    _ => write!(f, "{} ", zero)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix<i32> {
        let mut m = SparseMatrix::new(3, 3);
        m.insert(0, Entry::new(2, 1, 8)).unwrap();
        m.insert(9, Entry::new(0, 2, 4)).unwrap();
        m.insert(9, Entry::new(1, 0, 6)).unwrap();
        m
    }

    #[test]
    fn test_insert_and_get() {
        let m = sample();
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(2, 1).unwrap(), 8);
        assert_eq!(m.get(0, 0).unwrap(), 0);
        assert_eq!(m.get(3, 0).unwrap_err().category(), "range");
    }

    #[test]
    fn test_out_of_range_insert_leaves_matrix_unchanged() {
        let mut m = sample();
        let err = m.insert(0, Entry::new(0, 3, 1)).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(m.len(), 3);
        assert_eq!(m.entry(0), Some(&Entry::new(2, 1, 8)));
    }

    #[test]
    fn test_sort_by_coordinates() {
        let mut m = sample();
        assert!(!m.is_sorted());
        m.bubble_sort();
        assert!(m.is_sorted());
        let coords: Vec<(usize, usize)> = m.iter().map(|e| (e.row, e.col)).collect();
        assert_eq!(coords, vec![(0, 2), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_sort_ignores_values_within_a_cell() {
        let mut m = SparseMatrix::new(1, 1);
        m.insert(9, Entry::new(0, 0, 5)).unwrap();
        m.insert(9, Entry::new(0, 0, 3)).unwrap();
        assert!(m.is_sorted());
        assert_eq!(m.to_string(), "5 \n");

        m.bubble_sort();
        assert_eq!(m.to_string(), "5 \n");
        assert_eq!(m.entry(0), Some(&Entry::new(0, 0, 5)));
        assert_eq!(m.to_dense().unwrap()[(0, 0)], 5);

        // a shared cell stays in insertion order among sorted neighbours
        let mut wide = SparseMatrix::new(2, 2);
        wide.insert(9, Entry::new(1, 1, 2)).unwrap();
        wide.insert(9, Entry::new(0, 1, 9)).unwrap();
        wide.insert(9, Entry::new(0, 1, 1)).unwrap();
        wide.bubble_sort();
        let values: Vec<i32> = wide.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![9, 1, 2]);
        assert_eq!(wide.get(0, 1).unwrap(), 9);
    }

    #[test]
    fn test_erase_and_entry_mut() {
        let mut m = sample();
        m.entry_mut(-1).unwrap().value = 60;
        assert_eq!(m.get(1, 0).unwrap(), 60);

        assert_eq!(m.erase(0), Some(Entry::new(2, 1, 8)));
        assert_eq!(m.get(2, 1).unwrap(), 0);
        assert_eq!(m.len(), 2);

        m.clear();
        assert!(m.is_empty());
        assert_eq!((m.rows(), m.cols()), (3, 3));
    }

    #[test]
    fn test_display_is_order_independent() {
        let m = sample();
        let rendered = m.to_string();
        assert_eq!(rendered, "0 0 4 \n6 0 0 \n0 8 0 \n");

        // rendering does not reorder the stored entries
        assert_eq!(m.entry(0), Some(&Entry::new(2, 1, 8)));
    }

    #[test]
    fn test_to_dense() {
        let dense = sample().to_dense().unwrap();
        assert_eq!(dense.row(0).unwrap(), &[0, 0, 4]);
        assert_eq!(dense.row(1).unwrap(), &[6, 0, 0]);
        assert_eq!(dense.row(2).unwrap(), &[0, 8, 0]);
    }

    #[test]
    fn test_empty_matrix_display() {
        let m: SparseMatrix<f32> = SparseMatrix::new(1, 2);
        assert_eq!(m.to_string(), "0 0 \n");
    }
}
