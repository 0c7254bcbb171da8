//! Two-component vector fields of logical shape `(2, R, C)`.
//!
//! Component 0 carries the column-direction velocity and component 1 the
//! row-direction velocity. Every accessor keeps that order; [`Velocity`]
//! names the two parts so callers cannot swap them by position.

use crate::error::LicError;
use crate::grid::{checked_len, Grid, ScalarField, Texture};

/// Number of velocity components in a 2D vector field.
pub const COMPONENTS: usize = 2;

/// Component index holding the column-direction velocity.
pub const COL_COMPONENT: usize = 0;

/// Component index holding the row-direction velocity.
pub const ROW_COMPONENT: usize = 1;

/// Velocity sampled at one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Displacement along columns per unit time (component 0).
    pub col: f64,
    /// Displacement along rows per unit time (component 1).
    pub row: f64,
}

/// Immutable dense vector field of shape `(2, rows, cols)`.
///
/// Data is stored component-major: all of component 0 in row-major order,
/// followed by all of component 1.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorField {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl VectorField {
    /// Builds a field from a flat buffer and its n-dimensional shape.
    ///
    /// The shape must be exactly `[2, rows, cols]`. Fields with more
    /// dimensions (e.g. 3D data) have to be sliced down before they get here.
    pub fn from_shape(shape: &[usize], data: Vec<f64>) -> Result<Self, LicError> {
        if shape.len() != 3 {
            return Err(LicError::RankMismatch {
                expected: 3,
                got: shape.len(),
            });
        }
        if shape[0] != COMPONENTS {
            return Err(LicError::ComponentMismatch {
                expected: COMPONENTS,
                got: shape[0],
            });
        }
        let (rows, cols) = (shape[1], shape[2]);
        let expected = checked_len(rows, cols)?
            .checked_mul(COMPONENTS)
            .ok_or(LicError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(LicError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Builds a field from its column-velocity and row-velocity grids.
    pub fn from_components(
        col_velocity: &ScalarField,
        row_velocity: &ScalarField,
    ) -> Result<Self, LicError> {
        if col_velocity.shape() != row_velocity.shape() {
            return Err(LicError::ShapeMismatch {
                expected_rows: col_velocity.rows(),
                expected_cols: col_velocity.cols(),
                rows: row_velocity.rows(),
                cols: row_velocity.cols(),
            });
        }
        let mut data = Vec::with_capacity(col_velocity.data().len() * COMPONENTS);
        data.extend_from_slice(col_velocity.data());
        data.extend_from_slice(row_velocity.data());
        Ok(Self {
            rows: col_velocity.rows(),
            cols: col_velocity.cols(),
            data,
        })
    }

    /// Builds a field by evaluating `f(row, col)` for every cell.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Velocity,
    ) -> Result<Self, LicError> {
        let len = checked_len(rows, cols)?;
        let total = len
            .checked_mul(COMPONENTS)
            .ok_or(LicError::InvalidDimensions)?;
        let mut data = vec![0.0; total];
        let (col_part, row_part) = data.split_at_mut(len);
        for (i, (vc, vr)) in col_part.iter_mut().zip(row_part.iter_mut()).enumerate() {
            let v = f(i / cols, i % cols);
            *vc = v.col;
            *vr = v.row;
        }
        Ok(Self { rows, cols, data })
    }

    /// A field with the same velocity in every cell.
    pub fn uniform(rows: usize, cols: usize, velocity: Velocity) -> Result<Self, LicError> {
        Self::from_fn(rows, cols, |_, _| velocity)
    }

    /// A field with zero velocity everywhere.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, LicError> {
        Self::uniform(rows, cols, Velocity { col: 0.0, row: 0.0 })
    }

    /// Number of rows (R).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (C).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Spatial extent `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Velocity at `(row, col)`.
    pub fn velocity(&self, row: usize, col: usize) -> Velocity {
        let plane = self.rows * self.cols;
        let idx = row * self.cols + col;
        Velocity {
            col: self.data[COL_COMPONENT * plane + idx],
            row: self.data[ROW_COMPONENT * plane + idx],
        }
    }

    /// Row-major slice of one component (0 = column velocity, 1 = row velocity).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2`.
    pub fn component(&self, index: usize) -> &[f64] {
        assert!(index < COMPONENTS, "component index {index} out of range");
        let plane = self.rows * self.cols;
        &self.data[index * plane..(index + 1) * plane]
    }

    /// A zeroed output texture with this field's spatial extent.
    pub fn blank_texture(&self) -> Texture {
        // Extents were validated when the field was built.
        Grid::from_raw_parts(self.rows, self.cols, vec![0.0; self.rows * self.cols])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_shape_accepts_two_component_field() {
        let field = VectorField::from_shape(&[2, 3, 4], vec![0.0; 24]).unwrap();
        assert_eq!(field.shape(), (3, 4));
    }

    #[test]
    fn from_shape_rejects_rank_two() {
        let err = VectorField::from_shape(&[3, 4], vec![0.0; 12]).unwrap_err();
        assert!(matches!(err, LicError::RankMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn from_shape_rejects_rank_four() {
        let err = VectorField::from_shape(&[2, 2, 2, 2], vec![0.0; 16]).unwrap_err();
        assert!(matches!(err, LicError::RankMismatch { expected: 3, got: 4 }));
    }

    #[test]
    fn from_shape_rejects_three_components() {
        let err = VectorField::from_shape(&[3, 2, 2], vec![0.0; 12]).unwrap_err();
        assert!(matches!(
            err,
            LicError::ComponentMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn from_shape_rejects_zero_extent() {
        let err = VectorField::from_shape(&[2, 0, 4], vec![]).unwrap_err();
        assert!(matches!(err, LicError::InvalidDimensions));
    }

    #[test]
    fn from_shape_rejects_short_buffer() {
        let err = VectorField::from_shape(&[2, 2, 2], vec![0.0; 7]).unwrap_err();
        assert!(matches!(err, LicError::BufferLength { expected: 8, got: 7 }));
    }

    #[test]
    fn component_zero_is_column_velocity() {
        // shape (2, 1, 2): component 0 = [1, 2], component 1 = [3, 4]
        let field = VectorField::from_shape(&[2, 1, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let v = field.velocity(0, 1);
        assert_eq!(v.col, 2.0);
        assert_eq!(v.row, 4.0);
        assert_eq!(field.component(COL_COMPONENT), &[1.0, 2.0]);
        assert_eq!(field.component(ROW_COMPONENT), &[3.0, 4.0]);
    }

    #[test]
    fn from_components_preserves_order() {
        let col = Grid::filled(2, 2, 1.5).unwrap();
        let row = Grid::filled(2, 2, -0.5).unwrap();
        let field = VectorField::from_components(&col, &row).unwrap();
        assert_eq!(field.velocity(1, 1), Velocity { col: 1.5, row: -0.5 });
    }

    #[test]
    fn from_components_rejects_mismatched_grids() {
        let col = Grid::filled(2, 3, 0.0).unwrap();
        let row = Grid::filled(3, 2, 0.0).unwrap();
        let err = VectorField::from_components(&col, &row).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    #[test]
    fn from_fn_matches_velocity_lookup() {
        let field = VectorField::from_fn(3, 2, |r, c| Velocity {
            col: c as f64,
            row: r as f64,
        })
        .unwrap();
        for r in 0..3 {
            for c in 0..2 {
                assert_eq!(
                    field.velocity(r, c),
                    Velocity {
                        col: c as f64,
                        row: r as f64
                    }
                );
            }
        }
    }

    #[test]
    fn blank_texture_matches_extent() {
        let field = VectorField::zeros(5, 7).unwrap();
        let tex = field.blank_texture();
        assert_eq!(tex.shape(), (5, 7));
        assert!(tex.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic]
    fn component_out_of_range_panics() {
        let field = VectorField::zeros(1, 1).unwrap();
        let _ = field.component(2);
    }
}
