#![deny(unsafe_code)]
//! Core types for line integral convolution.
//!
//! Provides the dense [`Grid`] type (with the [`ScalarField`] input and
//! [`Texture`] output aliases), the two-component [`VectorField`], the
//! [`Boundary`] policy, [`LicError`], the [`Xorshift64`] PRNG, and JSON
//! parameter helpers.

pub mod boundary;
pub mod error;
pub mod grid;
pub mod params;
pub mod prng;
pub mod vector;

pub use boundary::Boundary;
pub use error::LicError;
pub use grid::{Grid, ScalarField, Texture};
pub use prng::Xorshift64;
pub use vector::{VectorField, Velocity};
