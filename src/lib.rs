//! # Orderly: owning sequence containers with ordered-set algebra
//!
//! Two owning sequence containers and the set algebra over them:
//!
//! ## Key Features
//!
//! - **`DynamicArray<T>`**: exactly-sized contiguous array; every structural
//!   change rebuilds the buffer and fails atomically with `OutOfMemory`
//! - **`DoublyLinkedList<T>`**: doubly-linked list over an index arena, O(1)
//!   push/pop at both ends, in-place bubble sort, `unique` and `remove`
//! - **Signed positions**: negative indices wrap from the end, overflow clamps
//! - **Iterators and cursors**: double-ended iterators plus wrap-around
//!   cursors for both containers
//! - **Set algebra**: `merge`, `set_union`, `set_difference`,
//!   `set_intersection` over either container, with a configurable engine
//! - **Built-on containers**: `BoundedStack`, `Queue`, `Matrix`,
//!   `SparseMatrix`
//!
//! ## Quick Start
//!
//! ```rust
//! use orderly::{set_union, DoublyLinkedList, DynamicArray};
//!
//! let mut arr = DynamicArray::from([1, 2, 3]);
//! arr.insert(-1, 9).unwrap();
//! assert_eq!(arr.to_string(), "1 2 9 3");
//!
//! let mut list = DoublyLinkedList::from([4, 2, 3, 1]);
//! list.bubble_sort();
//! assert_eq!(list.to_string(), "1 - 2 - 3 - 4");
//!
//! let union = set_union(DynamicArray::from([1, 2, 3]), DynamicArray::from([3, 4, 5])).unwrap();
//! assert_eq!(union.as_slice(), &[1, 2, 3, 4, 5]);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use containers::{
    ArrayCursor, Cursor, DoublyLinkedList, DynamicArray, ListCursor, ListCursorMut,
};
pub use error::{OrderlyError, Result};

// Re-export built-on containers
pub use containers::{BoundedStack, Entry, Matrix, Queue, SparseMatrix};

// Re-export the set algebra
pub use algorithms::{
    merge, set_difference, set_intersection, set_union, AlgebraStats, OrderedSequence,
    SetAlgebra,
};
pub use config::{AlgebraConfig, Config};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently just logs the version)
pub fn init() {
    log::debug!("Initializing orderly v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.contains('.'));
        // semver like "0.1.0"
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_reexports_work_together() {
        let a = DoublyLinkedList::from([1, 2, 3]);
        let b = DoublyLinkedList::from([3, 4, 5]);
        let merged = merge(&a, &b).unwrap();
        assert_eq!(merged.to_string(), "1 - 2 - 3 - 3 - 4 - 5");

        let mut engine = SetAlgebra::with_config(AlgebraConfig::faithful_preset()).unwrap();
        let common = engine.set_intersection(a, b).unwrap();
        assert_eq!(common.len(), 1);
        assert_eq!(engine.stats().operations, 1);
    }
}
