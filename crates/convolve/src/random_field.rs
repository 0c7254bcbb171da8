//! Seeded white-noise input texture used when the caller supplies none.

use lic_core::{Grid, LicError, ScalarField, Xorshift64};

/// Fills a `rows x cols` field with uniform values in `[0, 1)`.
///
/// Values are drawn at single precision and widened, so the texture carries
/// no more detail than a `f32` image would. The generator is advanced in
/// row-major order; the same seed always yields the same field.
pub fn random_scalar_field(
    rows: usize,
    cols: usize,
    rng: &mut Xorshift64,
) -> Result<ScalarField, LicError> {
    Grid::from_fn(rows, cols, |_, _| f64::from(rng.next_f32()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_in_unit_interval() {
        let mut rng = Xorshift64::new(42);
        let field = random_scalar_field(32, 16, &mut rng).unwrap();
        assert_eq!(field.shape(), (32, 16));
        assert!(field.data().iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn same_seed_same_field() {
        let a = random_scalar_field(8, 8, &mut Xorshift64::new(5)).unwrap();
        let b = random_scalar_field(8, 8, &mut Xorshift64::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_field() {
        let a = random_scalar_field(8, 8, &mut Xorshift64::new(1)).unwrap();
        let b = random_scalar_field(8, 8, &mut Xorshift64::new(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn values_are_exact_f32() {
        let field = random_scalar_field(4, 4, &mut Xorshift64::new(9)).unwrap();
        for &v in field.data() {
            assert_eq!(f64::from(v as f32), v);
        }
    }

    #[test]
    fn zero_extent_is_rejected() {
        let result = random_scalar_field(0, 4, &mut Xorshift64::new(1));
        assert!(matches!(result, Err(LicError::InvalidDimensions)));
    }
}
