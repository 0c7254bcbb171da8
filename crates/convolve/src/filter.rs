//! Gaussian high-pass filter for sharpening LIC textures.
//!
//! LIC output is dominated by low-frequency shading; subtracting a Gaussian
//! blur leaves the streak pattern. The blur is separable, truncated at four
//! standard deviations, and mirrors the texture at its edges
//! (`d c b a | a b c d | d c b a`).

use lic_core::Texture;
use rayon::prelude::*;

/// Default blur width for [`highpass`].
pub const DEFAULT_HIGHPASS_SIGMA: f64 = 3.0;

/// Kernel radius in standard deviations.
const TRUNCATE: f64 = 4.0;

/// `texture - gaussian_blur(texture, sigma)`.
///
/// A non-positive or non-finite `sigma` leaves the texture unchanged.
pub fn highpass(texture: &Texture, sigma: f64) -> Texture {
    if !(sigma.is_finite() && sigma > 0.0) {
        return texture.clone();
    }
    let blurred = blur(texture, sigma);
    let mut out = texture.clone();
    out.data_mut()
        .iter_mut()
        .zip(blurred.iter())
        .for_each(|(v, b)| *v = (f64::from(*v) - b) as f32);
    out
}

/// Gaussian blur of `texture` with standard deviation `sigma` (in cells).
///
/// A non-positive or non-finite `sigma` leaves the texture unchanged.
pub fn gaussian_blur(texture: &Texture, sigma: f64) -> Texture {
    if !(sigma.is_finite() && sigma > 0.0) {
        return texture.clone();
    }
    let blurred = blur(texture, sigma);
    let mut out = texture.clone();
    out.data_mut()
        .iter_mut()
        .zip(blurred.iter())
        .for_each(|(v, &b)| *v = b as f32);
    out
}

/// Separable blur in `f64`, returned as a row-major buffer.
fn blur(texture: &Texture, sigma: f64) -> Vec<f64> {
    let (rows, cols) = texture.shape();
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as isize;
    let src = texture.to_scalar_field();
    let src = src.data();

    // Along columns of each row.
    let mut horizontal = vec![0.0; rows * cols];
    horizontal
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            let in_row = &src[r * cols..(r + 1) * cols];
            for (c, out) in out_row.iter_mut().enumerate() {
                *out = kernel
                    .iter()
                    .enumerate()
                    .map(|(k, w)| w * in_row[reflect(c as isize + k as isize - radius, cols)])
                    .sum();
            }
        });

    // Along rows of each column.
    let mut vertical = vec![0.0; rows * cols];
    vertical
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, out_row)| {
            for (c, out) in out_row.iter_mut().enumerate() {
                *out = kernel
                    .iter()
                    .enumerate()
                    .map(|(k, w)| {
                        let rr = reflect(r as isize + k as isize - radius, rows);
                        w * horizontal[rr * cols + c]
                    })
                    .sum();
            }
        });
    vertical
}

/// Normalized 1D Gaussian weights of radius `floor(TRUNCATE * sigma + 0.5)`.
fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (TRUNCATE * sigma + 0.5) as isize;
    let two_var = 2.0 * sigma * sigma;
    let mut weights: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / two_var).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    weights.iter_mut().for_each(|w| *w /= total);
    weights
}

/// Half-sample symmetric index into `[0, len)`.
fn reflect(index: isize, len: usize) -> usize {
    let n = len as isize;
    let m = index.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}
