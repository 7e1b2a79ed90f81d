//! Integration tests for the containers built on the core sequences

use orderly::{BoundedStack, Entry, Matrix, OrderlyError, Queue, SparseMatrix};
use proptest::prelude::*;

// =============================================================================
// BOUNDED STACK
// =============================================================================

#[test]
fn test_stack_lifecycle() {
    let mut stack = BoundedStack::with_capacity(3).unwrap();
    for word in ["alpha", "beta", "gamma"] {
        stack.push(word.to_string()).unwrap();
    }
    assert!(stack.is_full());

    let err = stack.push("delta".to_string()).unwrap_err();
    assert!(matches!(err, OrderlyError::CapacityExceeded { capacity: 3 }));
    assert_eq!(stack.items(), 3);

    assert_eq!(stack.to_string(), "3. gamma\n2. beta\n1. alpha");
    assert_eq!(stack.get(-1).map(String::as_str), Some("gamma"));
    assert_eq!(stack.get(0).map(String::as_str), Some("alpha"));

    assert_eq!(stack.pop().as_deref(), Some("gamma"));
    assert_eq!(stack.peek().map(String::as_str), Some("beta"));

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack.capacity(), 3);
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_stack_swap() {
    let mut small = BoundedStack::with_capacity(1).unwrap();
    let mut large = BoundedStack::with_capacity(4).unwrap();
    small.push(1).unwrap();
    large.push(7).unwrap();
    large.push(8).unwrap();

    small.swap(&mut large);
    assert_eq!(small.capacity(), 4);
    assert_eq!(small.iter().copied().collect::<Vec<_>>(), vec![7, 8]);
    assert_eq!(large.peek(), Some(&1));
}

#[test]
fn test_zero_capacity_stack_rejects_push() {
    let mut stack: BoundedStack<u8> = BoundedStack::with_capacity(0).unwrap();
    assert!(stack.is_empty() && stack.is_full());
    assert!(stack.push(1).is_err());
}

// =============================================================================
// QUEUE
// =============================================================================

#[test]
fn test_queue_fifo_and_deque_ends() {
    let mut queue = Queue::new();
    queue.push_back(1).unwrap();
    queue.push_back(2).unwrap();
    queue.push_front(0).unwrap();

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.front(), Some(&0));
    assert_eq!(queue.back(), Some(&2));
    assert_eq!(queue.get(-2), Some(&1));
    assert_eq!(queue.to_string(), "0 - 1 - 2");

    assert_eq!(queue.pop_front(), Some(0));
    assert_eq!(queue.pop_back(), Some(2));
    assert_eq!(queue.pop_front(), Some(1));
    assert_eq!(queue.pop_front(), None);
    assert!(queue.is_empty());
}

#[test]
fn test_queue_collects_and_drains() {
    let queue: Queue<char> = "fifo".chars().collect();
    let drained: String = queue.into_iter().collect();
    assert_eq!(drained, "fifo");
}

// =============================================================================
// MATRIX
// =============================================================================

#[test]
fn test_matrix_arithmetic_chain() {
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    let identity = Matrix::from_rows(vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]).unwrap();

    assert_eq!(a.multiply(&identity).unwrap(), a);

    let doubled = a.add(&a).unwrap();
    assert_eq!(doubled, a.multiply_scalar(2).unwrap());
    assert_eq!(doubled.subtract(&a).unwrap(), a);
    assert_eq!(a.add_scalar(1).unwrap().subtract_scalar(1).unwrap(), a);

    let t = a.transpose().unwrap();
    assert_eq!((t.rows(), t.cols()), (3, 2));
    assert_eq!(t.transpose().unwrap(), a);

    let gram = a.multiply(&t).unwrap();
    assert_eq!(gram.to_string(), "14 32 \n32 77 \n");
}

#[test]
fn test_matrix_operators() -> orderly::Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let t = a.transpose()?;

    let gram = (&a * &t)?;
    assert_eq!(gram.to_string(), "14 32 \n32 77 \n");

    let shifted = (&(&gram - &gram)? + 5)?;
    assert_eq!(shifted, (&Matrix::from_rows(vec![vec![1, 1], vec![1, 1]])? * 5)?);
    assert!((&a + &t).is_err());
    Ok(())
}

#[test]
fn test_matrix_dimension_errors() {
    let a: Matrix<i32> = Matrix::new(2, 3).unwrap();
    let b: Matrix<i32> = Matrix::new(2, 3).unwrap();

    let err = a.multiply(&b).unwrap_err();
    assert_eq!(err.category(), "dimension");
    assert!(!err.is_recoverable());

    let c: Matrix<i32> = Matrix::new(3, 2).unwrap();
    assert!(a.add(&c).is_err());
    assert!(a.get(2, 0).is_err());
}

#[test]
fn test_ragged_rows_are_padded() {
    let m = Matrix::from_rows(vec![vec![1.5], vec![2.0, 3.0]]).unwrap();
    assert_eq!(m.cols(), 2);
    assert_eq!(m.row(0).unwrap(), &[1.5, 0.0]);
}

proptest! {
    #[test]
    fn prop_transpose_is_involution(
        rows in 1usize..6,
        cols in 1usize..6,
        seed in any::<i16>()
    ) {
        let mut m: Matrix<i64> = Matrix::new(rows, cols).unwrap();
        for r in 0..rows {
            for c in 0..cols {
                m[(r, c)] = seed as i64 * (r * cols + c) as i64;
            }
        }
        let t = m.transpose().unwrap();
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(t[(c, r)], m[(r, c)]);
            }
        }
        prop_assert_eq!(t.transpose().unwrap(), m);
    }
}

// =============================================================================
// SPARSE MATRIX
// =============================================================================

#[test]
fn test_sparse_matrix_round_trip_to_dense() {
    let mut sparse = SparseMatrix::new(2, 2);
    sparse.insert(0, Entry::new(1, 1, 4)).unwrap();
    sparse.insert(-1, Entry::new(0, 1, 2)).unwrap();
    sparse.insert(0, Entry::new(1, 0, 3)).unwrap();

    let err = sparse.insert(0, Entry::new(0, 2, 9)).unwrap_err();
    assert!(matches!(err, OrderlyError::OutOfRange { row: 0, col: 2, .. }));
    assert_eq!(sparse.len(), 3);

    let dense = sparse.to_dense().unwrap();
    assert_eq!(dense.to_string(), sparse.to_string());
    assert_eq!(dense.to_string(), "0 2 \n3 4 \n");

    sparse.bubble_sort();
    assert!(sparse.is_sorted());
    assert_eq!(sparse.entry(0), Some(&Entry::new(0, 1, 2)));
    assert_eq!(sparse.get(0, 0).unwrap(), 0);
}
