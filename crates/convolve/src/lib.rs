#![deny(unsafe_code)]
//! Line integral convolution kernel.
//!
//! Smears a scalar texture along the streamlines of a 2D vector field. Each
//! output pixel traces one streamline forward and one backward using exact
//! cell-crossing steps, weights the visited cells with a cosine taper, and
//! stores the weighted mean. Pixels are independent and computed in parallel.
//!
//! [`compute_lic`] is the checked entry point: it validates shapes, fills in
//! a default streamlength and a seeded random texture, and optionally
//! high-pass filters the result. [`driver::convolve`] is the bare kernel.

pub mod advect;
pub mod config;
pub mod driver;
pub mod filter;
pub mod random_field;
pub mod taper;

use std::borrow::Cow;
use std::time::{Duration, Instant};

use lic_core::{LicError, ScalarField, Texture, VectorField, Xorshift64};
use log::{debug, info, warn};
use rayon::ThreadPoolBuilder;

pub use advect::{advect, Contribution, Direction};
pub use config::LicConfig;
pub use driver::{convolve, convolve_partitioned};
pub use filter::{gaussian_blur, highpass};
pub use random_field::random_scalar_field;
pub use taper::taper;

/// Result of [`compute_lic_timed`].
#[derive(Debug, Clone)]
pub struct LicRun {
    /// The LIC texture, shape `(rows, cols)`.
    pub texture: Texture,
    /// Streamlength actually used (after defaulting).
    pub streamlength: usize,
    /// Wall-clock time spent in the run.
    pub elapsed: Duration,
}

/// Streamlength used when none is configured: a quarter of the shorter side.
pub fn default_streamlength(rows: usize, cols: usize) -> usize {
    rows.min(cols) / 4
}

/// Checks that `sfield` covers exactly the extent of `vfield`.
pub fn check_scalar_shape(vfield: &VectorField, sfield: &ScalarField) -> Result<(), LicError> {
    if sfield.shape() != vfield.shape() {
        return Err(LicError::ShapeMismatch {
            expected_rows: vfield.rows(),
            expected_cols: vfield.cols(),
            rows: sfield.rows(),
            cols: sfield.cols(),
        });
    }
    Ok(())
}

/// Computes the LIC texture of `sfield` (or a seeded random texture) along `vfield`.
///
/// Returns `LicError::ShapeMismatch` if `sfield` does not match the extent of
/// `vfield`, or `LicError::ThreadPool` if a dedicated pool was requested and
/// could not be built. Both are reported before any streamline is traced.
pub fn compute_lic(
    vfield: &VectorField,
    sfield: Option<&ScalarField>,
    config: &LicConfig,
) -> Result<Texture, LicError> {
    compute_lic_timed(vfield, sfield, config).map(|run| run.texture)
}

/// [`compute_lic`] that also reports the streamlength used and the elapsed time.
pub fn compute_lic_timed(
    vfield: &VectorField,
    sfield: Option<&ScalarField>,
    config: &LicConfig,
) -> Result<LicRun, LicError> {
    let start = Instant::now();
    let (rows, cols) = vfield.shape();

    let sfield = match sfield {
        Some(field) => {
            check_scalar_shape(vfield, field)?;
            Cow::Borrowed(field)
        }
        None => {
            debug!("no input texture supplied, generating one with seed {}", config.seed);
            let mut rng = Xorshift64::new(config.seed);
            Cow::Owned(random_scalar_field(rows, cols, &mut rng)?)
        }
    };

    let streamlength = match config.streamlength {
        Some(n) => n,
        None => {
            let n = default_streamlength(rows, cols);
            debug!("defaulting streamlength to {n} for {rows}x{cols} grid");
            n
        }
    };
    if streamlength == 0 {
        warn!("streamlength is 0 for {rows}x{cols} grid; output will be all zeros");
    }

    let texture = match config.threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| LicError::ThreadPool(e.to_string()))?;
            driver::convolve_in_pool(
                &pool,
                vfield,
                &sfield,
                streamlength,
                config.boundary,
                config.rows_per_task,
            )
        }
        None => convolve_partitioned(
            vfield,
            &sfield,
            streamlength,
            config.boundary,
            config.rows_per_task,
        ),
    };

    let texture = match config.highpass_sigma {
        Some(sigma) => highpass(&texture, sigma),
        None => texture,
    };

    let elapsed = start.elapsed();
    info!(
        "compute_lic took {:.3} seconds ({rows}x{cols}, streamlength {streamlength}, {})",
        elapsed.as_secs_f64(),
        config.boundary
    );

    Ok(LicRun {
        texture,
        streamlength,
        elapsed,
    })
}
