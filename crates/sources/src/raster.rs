//! Sampling a continuous [`FieldSource`] onto a cell-centred grid.

use std::fmt;
use std::str::FromStr;

use lic_core::{LicError, VectorField, Velocity};
use serde::{Deserialize, Serialize};

use crate::source::FieldSource;

/// Rectangle of the plane covered by the grid.
///
/// `x` spans the columns left to right, `y` spans the rows top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

impl Bounds {
    /// Builds validated bounds.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, LicError> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Rejects non-finite edges and empty or inverted ranges.
    pub fn validate(&self) -> Result<(), LicError> {
        let edges = [self.x_min, self.x_max, self.y_min, self.y_max];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(LicError::InvalidBounds(format!("{self}: values must be finite")));
        }
        if self.x_min >= self.x_max {
            return Err(LicError::InvalidBounds(format!(
                "{self}: x_min must be less than x_max"
            )));
        }
        if self.y_min >= self.y_max {
            return Err(LicError::InvalidBounds(format!(
                "{self}: y_min must be less than y_max"
            )));
        }
        Ok(())
    }

    /// Plane coordinates of the centre of cell `(row, col)` on a `rows x cols` grid.
    pub fn cell_center(&self, row: usize, col: usize, rows: usize, cols: usize) -> (f64, f64) {
        let x = self.x_min + (col as f64 + 0.5) * (self.x_max - self.x_min) / cols as f64;
        let y = self.y_min + (row as f64 + 0.5) * (self.y_max - self.y_min) / rows as f64;
        (x, y)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

/// Parses `xmin,xmax,ymin,ymax`.
impl FromStr for Bounds {
    type Err = LicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LicError::InvalidBounds(format!("'{s}': {e}")))?;
        match parts.as_slice() {
            &[x_min, x_max, y_min, y_max] => Self::new(x_min, x_max, y_min, y_max),
            _ => Err(LicError::InvalidBounds(format!(
                "'{s}': expected 4 comma-separated values, got {}",
                parts.len()
            ))),
        }
    }
}

/// Samples `source` at every cell centre of a `rows x cols` grid.
///
/// `vx` lands in component 0 (column velocity), `vy` in component 1 (row
/// velocity).
pub fn rasterize(
    source: &dyn FieldSource,
    rows: usize,
    cols: usize,
    bounds: &Bounds,
) -> Result<VectorField, LicError> {
    bounds.validate()?;
    VectorField::from_fn(rows, cols, |r, c| {
        let (x, y) = bounds.cell_center(r, c, rows, cols);
        let (vx, vy) = source.sample(x, y);
        Velocity { col: vx, row: vy }
    })
}
