//! `DenseMatrix`: an owned 2D dense matrix stored contiguously in row-major order.
//!
//! Cell `(row, col)` lives at linear offset `row * cols + col`. Rows are contiguous
//! slices; columns are strided walks over the same storage.
//!
//! The matrix never changes shape after construction. Cloning deep-copies the
//! storage, so a clone is fully isolated from the original.

use core::iter::StepBy;
use core::ops::{Index, IndexMut};
use core::slice;

/// A dense, row-major 2D matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> DenseMatrix<T> {
    /// Creates a new matrix with dimensions `rows x cols`, initialized with default values.
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(rows, cols, T::default())
    }

    /// Creates a new matrix with every cell set to `value`.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; Self::cell_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Creates a new matrix from a row-major vector.
    ///
    /// # Panics
    /// Panics if `vec.len() != rows * cols`, or if `rows * cols` overflows `usize`.
    pub fn from_vec(vec: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(
            vec.len(),
            Self::cell_count(rows, cols),
            "Vector length must match dimensions"
        );
        Self {
            data: vec,
            rows,
            cols,
        }
    }

    #[inline]
    fn cell_count(rows: usize, cols: usize) -> usize {
        rows.checked_mul(cols).expect("matrix dimensions overflow usize")
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[inline(always)]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` if the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.data[i])
    }

    /// Writes `value` at (row, col) and returns the previous value.
    ///
    /// # Panics
    /// Panics if (row, col) is outside the matrix.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> T {
        core::mem::replace(&mut self[(row, col)], value)
    }

    /// Returns a row as a contiguous slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterates over a column from top to bottom.
    ///
    /// Yields nothing if `col` is out of range.
    pub fn column(&self, col: usize) -> StepBy<slice::Iter<'_, T>> {
        let start = if col < self.cols { col } else { self.data.len() };
        self.data[start..].iter().step_by(self.cols.max(1))
    }

    /// Returns the backing storage in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Fills every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
