//! Parallel per-pixel reduction that produces the LIC texture.
//!
//! Every output pixel traces one streamline forward and one backward from
//! its own cell and stores the combined weighted mean. Pixels share nothing
//! but the read-only inputs, so the output buffer is split into disjoint row
//! bands and filled in parallel with rayon. The result does not depend on
//! the band height or the number of worker threads.

use lic_core::{Boundary, ScalarField, Texture, VectorField};
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;

use crate::advect::{advect, Direction};

/// Rows handed to each rayon task when the caller does not choose.
pub const DEFAULT_ROWS_PER_TASK: usize = 1;

/// LIC value of a single pixel.
///
/// Sum of the forward and backward contributions divided by their total
/// weight, or `0.0` if neither direction gathered any weight.
pub fn lic_pixel(
    vfield: &VectorField,
    sfield: &ScalarField,
    row: usize,
    col: usize,
    streamlength: usize,
    boundary: Boundary,
) -> f32 {
    let forward = advect(vfield, sfield, row, col, Direction::Forward, streamlength, boundary);
    let backward = advect(vfield, sfield, row, col, Direction::Backward, streamlength, boundary);
    (forward + backward).mean() as f32
}

/// Computes the LIC texture of `sfield` along `vfield`.
///
/// `sfield` must have the same extent as `vfield`; shape checks belong to
/// the caller (see [`crate::compute_lic`]).
pub fn convolve(
    vfield: &VectorField,
    sfield: &ScalarField,
    streamlength: usize,
    boundary: Boundary,
) -> Texture {
    convolve_partitioned(vfield, sfield, streamlength, boundary, DEFAULT_ROWS_PER_TASK)
}

/// [`convolve`] with an explicit band height per parallel task.
///
/// A `rows_per_task` of 0 is treated as 1.
pub fn convolve_partitioned(
    vfield: &VectorField,
    sfield: &ScalarField,
    streamlength: usize,
    boundary: Boundary,
    rows_per_task: usize,
) -> Texture {
    debug_assert_eq!(vfield.shape(), sfield.shape());
    let (rows, cols) = vfield.shape();
    let rows_per_task = rows_per_task.max(1);
    debug!(
        "convolving {rows}x{cols} grid: streamlength={streamlength}, boundary={boundary}, rows_per_task={rows_per_task}"
    );

    let mut out = vfield.blank_texture();
    out.data_mut()
        .par_chunks_mut(rows_per_task * cols)
        .enumerate()
        .for_each(|(band, pixels)| {
            let first_row = band * rows_per_task;
            for (offset, pixel) in pixels.iter_mut().enumerate() {
                let row = first_row + offset / cols;
                let col = offset % cols;
                *pixel = lic_pixel(vfield, sfield, row, col, streamlength, boundary);
            }
        });
    out
}

/// Runs [`convolve_partitioned`] on a caller-provided rayon pool.
pub fn convolve_in_pool(
    pool: &ThreadPool,
    vfield: &VectorField,
    sfield: &ScalarField,
    streamlength: usize,
    boundary: Boundary,
    rows_per_task: usize,
) -> Texture {
    pool.install(|| convolve_partitioned(vfield, sfield, streamlength, boundary, rows_per_task))
}
