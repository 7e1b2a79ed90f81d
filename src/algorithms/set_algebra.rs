//! Ordered-set algebra over sequence containers
//!
//! Four two-pointer operations over ascending sequences:
//!
//! - `merge`: multiset merge, keeps every element of both inputs
//! - `set_union`: each equal pair emitted once
//! - `set_difference`: elements of the first input absent from the second
//! - `set_intersection`: elements present in both inputs
//!
//! All four work on any [`OrderedSequence`] (both [`DynamicArray`] and
//! [`DoublyLinkedList`]) and return a new container of the same kind.
//! `merge` borrows its inputs and requires them to be ascending (or sorts
//! copies, see [`MergeInputs`]); the set operations take their inputs by
//! value and sort them first.
//!
//! # Examples
//!
//! ```
//! use orderly::algorithms::{set_difference, set_intersection, set_union};
//! use orderly::DynamicArray;
//!
//! let a = DynamicArray::from([3, 1, 2]);
//! let b = DynamicArray::from([5, 3, 4]);
//!
//! let union = set_union(a.clone(), b.clone()).unwrap();
//! assert_eq!(union.as_slice(), &[1, 2, 3, 4, 5]);
//!
//! let difference = set_difference(a.clone(), b.clone()).unwrap();
//! assert_eq!(difference.as_slice(), &[1, 2]);
//!
//! let intersection = set_intersection(a, b).unwrap();
//! assert_eq!(intersection.as_slice(), &[3]);
//! ```

use crate::config::{AlgebraConfig, Config, MergeInputs, SortStrategy};
use crate::containers::{linked_list, DoublyLinkedList, DynamicArray};
use crate::error::{OrderlyError, Result};
use std::cmp::Ordering;
use std::mem;
use std::slice;

/// A sequence container the set algebra can read and build
pub trait OrderedSequence: Sized {
    /// Element type
    type Item;

    /// Front-to-back borrowing iterator
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements
    fn len(&self) -> usize;

    /// `true` if the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate front to back
    fn iter(&self) -> Self::Iter<'_>;

    /// Append one element
    fn push_back(&mut self, value: Self::Item) -> Result<()>;

    /// The container's own ascending bubble sort
    fn bubble_sort(&mut self)
    where
        Self::Item: PartialOrd;

    /// `true` if the sequence is ascending
    fn is_sorted(&self) -> bool
    where
        Self::Item: PartialOrd;

    /// Build a container holding `items` in order
    fn from_vec(items: Vec<Self::Item>) -> Self;

    /// Move the elements out in order
    fn into_vec(self) -> Vec<Self::Item>;
}

impl<T> OrderedSequence for DynamicArray<T> {
    type Item = T;
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        DynamicArray::iter(self)
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        DynamicArray::push_back(self, value)
    }

    fn bubble_sort(&mut self)
    where
        T: PartialOrd,
    {
        DynamicArray::bubble_sort(self)
    }

    fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        DynamicArray::is_sorted(self)
    }

    fn from_vec(items: Vec<T>) -> Self {
        DynamicArray::from(items)
    }

    fn into_vec(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T> OrderedSequence for DoublyLinkedList<T> {
    type Item = T;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;

    fn len(&self) -> usize {
        DoublyLinkedList::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        DoublyLinkedList::iter(self)
    }

    fn push_back(&mut self, value: T) -> Result<()> {
        DoublyLinkedList::push_back(self, value)
    }

    fn bubble_sort(&mut self)
    where
        T: PartialOrd,
    {
        DoublyLinkedList::bubble_sort(self)
    }

    fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        DoublyLinkedList::is_sorted(self)
    }

    fn from_vec(items: Vec<T>) -> Self {
        DoublyLinkedList::from(items)
    }

    fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

/// Counters collected by a [`SetAlgebra`] engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgebraStats {
    /// Operations run
    pub operations: usize,
    /// Element comparisons performed by the scans
    pub comparisons: usize,
    /// Input elements examined
    pub elements_examined: usize,
    /// Elements written to results
    pub output_elements: usize,
}

/// Set-algebra engine with configurable sorting and statistics
///
/// The free functions ([`merge`], [`set_union`], ...) run a default engine;
/// use this type to pick a sort strategy, relax the merge precondition or
/// read counters.
#[derive(Debug, Clone)]
pub struct SetAlgebra {
    config: AlgebraConfig,
    stats: AlgebraStats,
}

impl SetAlgebra {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: AlgebraConfig::default(),
            stats: AlgebraStats::default(),
        }
    }

    /// Create an engine with a validated custom configuration.
    pub fn with_config(config: AlgebraConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: AlgebraStats::default(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AlgebraConfig {
        &self.config
    }

    /// Counters accumulated since creation or the last reset
    pub fn stats(&self) -> &AlgebraStats {
        &self.stats
    }

    /// Zero all counters.
    pub fn reset_stats(&mut self) {
        self.stats = AlgebraStats::default();
    }

    /// Merge two ascending sequences, keeping every element.
    ///
    /// The smaller front is taken first and ties take the left element, so
    /// equal elements of `a` precede those of `b`. The result has
    /// `a.len() + b.len()` elements.
    ///
    /// # Errors
    ///
    /// With [`MergeInputs::Verify`] an unsorted input is rejected with
    /// [`OrderlyError::PreconditionViolation`]. [`OrderlyError::OutOfMemory`]
    /// if the result cannot be allocated.
    pub fn merge<C>(&mut self, a: &C, b: &C) -> Result<C>
    where
        C: OrderedSequence + Clone,
        C::Item: PartialOrd + Clone,
    {
        let (left, right) = match self.config.merge_inputs {
            MergeInputs::Verify => {
                if !a.is_sorted() || !b.is_sorted() {
                    log::warn!(
                        "merge rejected unsorted input ({} and {} elements)",
                        a.len(),
                        b.len()
                    );
                    return Err(OrderlyError::precondition(
                        "merge requires both inputs in ascending order",
                    ));
                }
                (
                    a.iter().cloned().collect::<Vec<_>>(),
                    b.iter().cloned().collect::<Vec<_>>(),
                )
            }
            MergeInputs::Sort => (self.sorted_copy(a.clone()), self.sorted_copy(b.clone())),
        };

        let (left_len, right_len) = (left.len(), right.len());
        let mut out = reserve_output(left_len + right_len)?;
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        loop {
            let order = match (left.peek(), right.peek()) {
                (Some(x), Some(y)) => self.compare(y, x),
                _ => break,
            };
            if order == Ordering::Less {
                out.extend(right.next());
            } else {
                out.extend(left.next());
            }
        }
        out.extend(left);
        out.extend(right);

        Ok(self.finish("merge", left_len, right_len, out))
    }

    /// Union of two sequences; equal pairs appear once.
    pub fn set_union<C>(&mut self, a: C, b: C) -> Result<C>
    where
        C: OrderedSequence,
        C::Item: PartialOrd,
    {
        let left = self.sorted_copy(a);
        let right = self.sorted_copy(b);
        let (left_len, right_len) = (left.len(), right.len());

        let mut out = reserve_output(left_len + right_len)?;
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        loop {
            let order = match (left.peek(), right.peek()) {
                (Some(x), Some(y)) => self.compare(x, y),
                _ => break,
            };
            match order {
                Ordering::Less => out.extend(left.next()),
                Ordering::Greater => out.extend(right.next()),
                Ordering::Equal => {
                    out.extend(left.next());
                    right.next();
                }
            }
        }
        out.extend(left);
        out.extend(right);

        Ok(self.finish("set_union", left_len, right_len, out))
    }

    /// Elements of `a` that have no equal partner in `b`.
    pub fn set_difference<C>(&mut self, a: C, b: C) -> Result<C>
    where
        C: OrderedSequence,
        C::Item: PartialOrd,
    {
        let left = self.sorted_copy(a);
        let right = self.sorted_copy(b);
        let (left_len, right_len) = (left.len(), right.len());

        let mut out = reserve_output(left_len)?;
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        loop {
            let order = match (left.peek(), right.peek()) {
                (Some(x), Some(y)) => self.compare(x, y),
                _ => break,
            };
            match order {
                Ordering::Less => out.extend(left.next()),
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    left.next();
                    right.next();
                }
            }
        }
        out.extend(left);

        Ok(self.finish("set_difference", left_len, right_len, out))
    }

    /// Elements present in both sequences, each matched pair once.
    pub fn set_intersection<C>(&mut self, a: C, b: C) -> Result<C>
    where
        C: OrderedSequence,
        C::Item: PartialOrd,
    {
        let left = self.sorted_copy(a);
        let right = self.sorted_copy(b);
        let (left_len, right_len) = (left.len(), right.len());

        let mut out = reserve_output(left_len.min(right_len))?;
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        loop {
            let order = match (left.peek(), right.peek()) {
                (Some(x), Some(y)) => self.compare(x, y),
                _ => break,
            };
            match order {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    out.extend(left.next());
                    right.next();
                }
            }
        }

        Ok(self.finish("set_intersection", left_len, right_len, out))
    }

    /// Sort `seq` with the configured strategy and move its elements out.
    fn sorted_copy<C>(&self, mut seq: C) -> Vec<C::Item>
    where
        C: OrderedSequence,
        C::Item: PartialOrd,
    {
        if seq.is_sorted() {
            return seq.into_vec();
        }

        let use_bubble = match self.config.sort_strategy {
            SortStrategy::Bubble => true,
            SortStrategy::Stable => false,
            SortStrategy::Adaptive => seq.len() <= self.config.adaptive_threshold,
        };

        if use_bubble {
            seq.bubble_sort();
            seq.into_vec()
        } else {
            let mut items = seq.into_vec();
            items.sort_by(ascending);
            items
        }
    }

    #[inline]
    fn compare<T: PartialOrd>(&mut self, x: &T, y: &T) -> Ordering {
        if self.config.collect_stats {
            self.stats.comparisons += 1;
        }
        ascending(x, y)
    }

    fn finish<C: OrderedSequence>(
        &mut self,
        operation: &str,
        left_len: usize,
        right_len: usize,
        out: Vec<C::Item>,
    ) -> C {
        if self.config.collect_stats {
            self.stats.operations += 1;
            self.stats.elements_examined += left_len + right_len;
            self.stats.output_elements += out.len();
        }
        log::debug!(
            "{}: {} + {} elements -> {} elements",
            operation,
            left_len,
            right_len,
            out.len()
        );
        C::from_vec(out)
    }
}

impl Default for SetAlgebra {
    fn default() -> Self {
        Self::new()
    }
}

/// `<` / `>` ordering; incomparable values count as equal.
fn ascending<T: PartialOrd>(x: &T, y: &T) -> Ordering {
    if x < y {
        Ordering::Less
    } else if x > y {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

fn reserve_output<T>(len: usize) -> Result<Vec<T>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|_| OrderlyError::out_of_memory(len.saturating_mul(mem::size_of::<T>())))?;
    Ok(out)
}

/// Merge two ascending sequences with a default engine.
///
/// See [`SetAlgebra::merge`].
pub fn merge<C>(a: &C, b: &C) -> Result<C>
where
    C: OrderedSequence + Clone,
    C::Item: PartialOrd + Clone,
{
    SetAlgebra::new().merge(a, b)
}

/// Union of two sequences with a default engine.
pub fn set_union<C>(a: C, b: C) -> Result<C>
where
    C: OrderedSequence,
    C::Item: PartialOrd,
{
    SetAlgebra::new().set_union(a, b)
}

/// Difference `a \ b` with a default engine.
pub fn set_difference<C>(a: C, b: C) -> Result<C>
where
    C: OrderedSequence,
    C::Item: PartialOrd,
{
    SetAlgebra::new().set_difference(a, b)
}

/// Intersection of two sequences with a default engine.
pub fn set_intersection<C>(a: C, b: C) -> Result<C>
where
    C: OrderedSequence,
    C::Item: PartialOrd,
{
    SetAlgebra::new().set_intersection(a, b)
}
