//! Containers built on the core sequence types
//!
//! - **`BoundedStack<T>`** - fixed-capacity LIFO over a preallocated `DynamicArray`
//! - **`Queue<T>`** - double-ended queue over `DoublyLinkedList`
//! - **`Matrix<T>`** - dense row-major matrix with arithmetic
//! - **`SparseMatrix<T>`** - coordinate list of non-zero entries
//!
//! These types only use the public surface of the core containers.

mod matrix;
mod queue;
mod sparse_matrix;
mod stack;

pub use matrix::Matrix;
pub use queue::Queue;
pub use sparse_matrix::{Entry, SparseMatrix};
pub use stack::BoundedStack;
