//! Dense row-major matrix over a [`DynamicArray`]

use crate::containers::DynamicArray;
use crate::error::{OrderlyError, Result};
use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Dense `rows × cols` matrix stored row-major in one exactly-sized buffer
///
/// Arithmetic returns a new matrix and checks shapes first; a mismatch is
/// reported as [`OrderlyError::DimensionMismatch`].
///
/// # Examples
///
/// ```rust
/// use orderly::Matrix;
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5], vec![6]]).unwrap();
/// let product = a.multiply(&b).unwrap();
/// assert_eq!((product.rows(), product.cols()), (2, 1));
/// assert_eq!(product[(1, 0)], 39);
/// ```
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    cells: DynamicArray<T>,
}

impl<T: Default> Matrix<T> {
    /// Create a `rows × cols` matrix of default values.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfMemory`] if the cell count overflows or
    /// cannot be allocated.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .ok_or_else(|| OrderlyError::out_of_memory(usize::MAX))?;
        Ok(Self {
            rows,
            cols,
            cells: DynamicArray::with_len(len)?,
        })
    }

    /// Build a matrix from nested rows.
    ///
    /// The column count is the width of the widest row (at least one);
    /// shorter rows are padded with `T::default()`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let mut matrix = Self::new(rows.len(), cols)?;
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                matrix.cells.as_mut_slice()[r * cols + c] = value;
            }
        }
        Ok(matrix)
    }
}

impl<T> Matrix<T> {
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

    /// Cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderlyError::OutOfRange`] outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.offset(row, col)?;
        Ok(&self.cells.as_slice()[offset])
    }

    /// Mutable cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells.as_mut_slice()[offset])
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.cells.as_slice()[row * self.cols..(row + 1) * self.cols])
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(OrderlyError::out_of_range(row, col, self.rows, self.cols));
        }
        Ok(row * self.cols + col)
    }

    fn require_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(OrderlyError::dimension_mismatch(
                operation,
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

impl<T: Clone + Default> Matrix<T> {
    fn map_cells<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(&T) -> T,
    {
        let mut out = Self::new(self.rows, self.cols)?;
        for (dst, src) in out.cells.iter_mut().zip(self.cells.iter()) {
            *dst = f(src);
        }
        Ok(out)
    }

    fn zip_cells<F>(&self, other: &Self, operation: &'static str, mut f: F) -> Result<Self>
    where
        F: FnMut(&T, &T) -> T,
    {
        self.require_same_shape(other, operation)?;
        let mut out = Self::new(self.rows, self.cols)?;
        for ((dst, a), b) in out
            .cells
            .iter_mut()
            .zip(self.cells.iter())
            .zip(other.cells.iter())
        {
            *dst = f(a, b);
        }
        Ok(out)
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Result<Self> {
        let mut out = Self::new(self.cols, self.rows)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                out.cells.as_mut_slice()[c * self.rows + r] =
                    self.cells.as_slice()[r * self.cols + c].clone();
            }
        }
        Ok(out)
    }
}

impl<T: Clone + Default + Add<Output = T>> Matrix<T> {
    /// Element-wise sum of two matrices of the same shape.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_cells(other, "add", |a, b| a.clone() + b.clone())
    }

    /// Add `scalar` to every cell.
    pub fn add_scalar(&self, scalar: T) -> Result<Self> {
        self.map_cells(|a| a.clone() + scalar.clone())
    }
}

impl<T: Clone + Default + Sub<Output = T>> Matrix<T> {
    /// Element-wise difference of two matrices of the same shape.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_cells(other, "subtract", |a, b| a.clone() - b.clone())
    }

    /// Subtract `scalar` from every cell.
    pub fn subtract_scalar(&self, scalar: T) -> Result<Self> {
        self.map_cells(|a| a.clone() - scalar.clone())
    }
}

impl<T: Clone + Default + Mul<Output = T>> Matrix<T> {
    /// Multiply every cell by `scalar`.
    pub fn multiply_scalar(&self, scalar: T) -> Result<Self> {
        self.map_cells(|a| a.clone() * scalar.clone())
    }
}

impl<T: Clone + Default + Add<Output = T> + Mul<Output = T>> Matrix<T> {
    /// Matrix product; needs `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(OrderlyError::dimension_mismatch(
                "multiply",
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }

        let mut out = Self::new(self.rows, other.cols)?;
        let (lhs, rhs) = (self.cells.as_slice(), other.cells.as_slice());
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = T::default();
                for k in 0..self.cols {
                    acc = acc + lhs[i * self.cols + k].clone() * rhs[k * other.cols + j].clone();
                }
                out.cells.as_mut_slice()[i * other.cols + j] = acc;
            }
        }
        Ok(out)
    }
}

// Operators borrow both sides and return the same `Result` as the named
// methods, so `(&a + &b)?` reads like `a.add(&b)?`.

impl<'a, 'b, T: Clone + Default + Add<Output = T>> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        Matrix::add(self, rhs)
    }
}

impl<'a, T: Clone + Default + Add<Output = T>> Add<T> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn add(self, scalar: T) -> Self::Output {
        self.add_scalar(scalar)
    }
}

impl<'a, 'b, T: Clone + Default + Sub<Output = T>> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, T: Clone + Default + Sub<Output = T>> Sub<T> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn sub(self, scalar: T) -> Self::Output {
        self.subtract_scalar(scalar)
    }
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Clone + Default + Add<Output = T> + Mul<Output = T>,
{
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<'a, T: Clone + Default + Mul<Output = T>> Mul<T> for &'a Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, scalar: T) -> Self::Output {
        self.multiply_scalar(scalar)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.get(row, col) {
            Ok(cell) => cell,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let (rows, cols) = (self.rows, self.cols);
        match self.get_mut(row, col) {
            Ok(cell) => cell,
            Err(_) => panic!("{}", OrderlyError::out_of_range(row, col, rows, cols)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<&[T]> = (0..self.rows)
            .map(|r| &self.cells.as_slice()[r * self.cols..(r + 1) * self.cols])
            .collect();
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("cells", &rows)
            .finish()
    }
}

/// One line per row, every value followed by a space.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for value in &self.cells.as_slice()[r * self.cols..(r + 1) * self.cols] {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
