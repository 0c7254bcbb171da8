//! Cosine taper that fades samples out along a streamline.

use std::f64::consts::PI;

/// Weight of the sample taken at `step` along a streamline of length `streamlength`.
///
/// `0.5 * (1 + cos(pi * step / streamlength))`: 1 at the seed, falling toward
/// 0 as `step` approaches `streamlength`. Only evaluated for
/// `step < streamlength`, so `streamlength` is never zero here.
pub fn taper(streamlength: usize, step: usize) -> f64 {
    0.5 * (1.0 + (PI * step as f64 / streamlength as f64).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_has_full_weight() {
        assert_eq!(taper(10, 0), 1.0);
        assert_eq!(taper(1, 0), 1.0);
    }

    #[test]
    fn midpoint_has_half_weight() {
        assert!((taper(2, 1) - 0.5).abs() < 1e-15);
        assert!((taper(64, 32) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn weights_decrease_toward_zero() {
        let n = 32;
        let weights: Vec<f64> = (0..n).map(|s| taper(n, s)).collect();
        assert!(weights.windows(2).all(|w| w[1] < w[0]));
        assert!(weights[n - 1] > 0.0 && weights[n - 1] < 0.01);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn weight_in_unit_interval(streamlength in 1_usize..10_000, frac in 0.0_f64..1.0) {
                let step = ((streamlength as f64) * frac) as usize;
                let w = taper(streamlength, step.min(streamlength - 1));
                prop_assert!(w > 0.0 && w <= 1.0, "taper = {w}");
            }
        }
    }
}
