//! Sequence containers
//!
//! ## Core Containers
//!
//! - **`DynamicArray<T>`** - contiguous array with no spare capacity; every
//!   structural change rebuilds the buffer, fallibly and atomically
//! - **`DoublyLinkedList<T>`** - doubly-linked list over an index arena
//!
//! Both accept signed positions (see [`position`]), iterate in both
//! directions, and expose a [`Cursor`].
//!
//! ## Specialized Containers
//!
//! - **`BoundedStack<T>`**, **`Queue<T>`**, **`Matrix<T>`**,
//!   **`SparseMatrix<T>`** (see [`specialized`])
//!
//! ## Lifecycle events
//!
//! Construction from literals or iterators, deep copies and drops of
//! non-empty containers are reported with `log::trace!` under the
//! [`LIFECYCLE_TARGET`] target.

pub mod arena;
pub mod cursor;
pub mod dynamic_array;
pub mod linked_list;
pub mod position;
pub mod specialized;

pub use arena::{NodeArena, NIL};
pub use cursor::{ArrayCursor, Cursor, ListCursor, ListCursorMut};
pub use dynamic_array::DynamicArray;
pub use linked_list::DoublyLinkedList;
pub use specialized::{BoundedStack, Entry, Matrix, Queue, SparseMatrix};

/// Log target for container lifecycle events
pub const LIFECYCLE_TARGET: &str = "orderly::lifecycle";
