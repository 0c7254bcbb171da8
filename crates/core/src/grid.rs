//! Dense two-dimensional grids in row-major layout.
//!
//! A [`Grid`] stores `rows * cols` values addressed by `(row, col)`. The two
//! aliases used throughout the workspace are [`ScalarField`] (the `f64`
//! texture being smeared) and [`Texture`] (the single-precision LIC output).

use crate::error::LicError;

/// A dense `rows x cols` grid stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Real-valued input texture, shape `(R, C)`.
pub type ScalarField = Grid<f64>;

/// Single-precision output texture, shape `(R, C)`.
pub type Texture = Grid<f32>;

/// Returns `rows * cols`, rejecting zero extents and overflow.
pub(crate) fn checked_len(rows: usize, cols: usize) -> Result<usize, LicError> {
    if rows == 0 || cols == 0 {
        return Err(LicError::InvalidDimensions);
    }
    rows.checked_mul(cols).ok_or(LicError::InvalidDimensions)
}

impl<T: Copy + Default> Grid<T> {
    /// Creates a grid filled with `T::default()`.
    ///
    /// Returns `LicError::InvalidDimensions` if either extent is zero or if
    /// `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, LicError> {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Copy> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, LicError> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![value; len],
        })
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> T,
    ) -> Result<Self, LicError> {
        let len = checked_len(rows, cols)?;
        let data = (0..len).map(|i| f(i / cols, i % cols)).collect();
        Ok(Self { rows, cols, data })
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Overwrites the value at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = row * self.cols + col;
        self.data[idx] = value;
    }

    /// Iterates over all cells yielding `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / cols, i % cols, v))
    }
}

impl<T> Grid<T> {
    /// Wraps a buffer whose extents the caller already validated.
    pub(crate) fn from_raw_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Wraps a pre-built row-major buffer, validating `data.len() == rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LicError> {
        let expected = checked_len(rows, cols)?;
        if data.len() != expected {
            return Err(LicError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (R).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (C).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Read-only access to the row-major buffer.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable access to the row-major buffer.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The cells of one row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Consumes the grid and returns its row-major buffer.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl Texture {
    /// Widens the texture to `f64` for further numeric processing.
    pub fn to_scalar_field(&self) -> ScalarField {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f64::from(v)).collect(),
        }
    }
}
