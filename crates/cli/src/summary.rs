//! Summary statistics of a finished texture.

use lic_core::Texture;
use serde::Serialize;

/// Value range and mean of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub min: f32,
    pub max: f32,
    pub mean: f64,
}

impl Summary {
    pub fn of(texture: &Texture) -> Self {
        let data = texture.data();
        let (min, max) = data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let sum: f64 = data.iter().map(|&v| f64::from(v)).sum();
        Self {
            min,
            max,
            mean: sum / data.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lic_core::Grid;

    #[test]
    fn summary_of_ramp() {
        let tex: Texture = Grid::from_fn(2, 3, |r, c| (r * 3 + c) as f32).unwrap();
        let s = Summary::of(&tex);
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 5.0);
        assert!((s.mean - 2.5).abs() < 1e-12);
    }

    #[test]
    fn summary_of_constant_texture() {
        let tex: Texture = Grid::filled(4, 4, 0.25).unwrap();
        let s = Summary::of(&tex);
        assert_eq!((s.min, s.max), (0.25, 0.25));
        assert!((s.mean - 0.25).abs() < 1e-12);
    }
}
