//! Analytic 2D vector fields defined on continuous coordinates.
//!
//! A [`FieldSource`] returns a velocity `(vx, vy)` at any point `(x, y)`.
//! `x` runs along columns and `y` along rows, so `vx` becomes vector-field
//! component 0 and `vy` component 1 when a source is rasterised.

use noise::{NoiseFn, Perlin};

/// A deterministic velocity field over the plane.
pub trait FieldSource: Send + Sync {
    /// Velocity `(vx, vy)` at `(x, y)`.
    fn sample(&self, x: f64, y: f64) -> (f64, f64);
}

/// Distances below this are treated as the centre of a radial source.
const SINGULARITY_EPS: f64 = 1e-10;

/// The same velocity everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    pub vx: f64,
    pub vy: f64,
}

/// Solid-body rotation about `(cx, cy)`: speed grows linearly with radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vortex {
    pub cx: f64,
    pub cy: f64,
    pub strength: f64,
}

/// Rotation about `(cx, cy)` with Gaussian falloff of width `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianVortex {
    pub cx: f64,
    pub cy: f64,
    pub strength: f64,
    pub radius: f64,
}

/// Hyperbolic saddle `(x, -y)` about `(cx, cy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saddle {
    pub cx: f64,
    pub cy: f64,
    pub strength: f64,
}

/// Unit-speed flow toward `(cx, cy)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sink {
    pub cx: f64,
    pub cy: f64,
    pub strength: f64,
}

/// Curl of a Perlin potential: divergence-free, turbulent-looking flow.
pub struct CurlNoise {
    noise: Perlin,
    scale: f64,
    strength: f64,
    eps: f64,
}

impl CurlNoise {
    /// Creates a curl-noise source; `scale` is the noise frequency per unit length.
    pub fn new(scale: f64, strength: f64, seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            scale,
            strength,
            eps: 1e-3,
        }
    }
}

impl FieldSource for Uniform {
    fn sample(&self, _x: f64, _y: f64) -> (f64, f64) {
        (self.vx, self.vy)
    }
}

impl FieldSource for Vortex {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        let (rx, ry) = (x - self.cx, y - self.cy);
        (-ry * self.strength, rx * self.strength)
    }
}

impl FieldSource for GaussianVortex {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        let (rx, ry) = (x - self.cx, y - self.cy);
        let dist_sq = rx * rx + ry * ry;
        let dist = dist_sq.sqrt();
        if dist < SINGULARITY_EPS || self.radius.abs() < SINGULARITY_EPS {
            return (0.0, 0.0);
        }
        let falloff = (-dist_sq / (2.0 * self.radius * self.radius)).exp();
        let speed = self.strength * falloff;
        (-ry / dist * speed, rx / dist * speed)
    }
}

impl FieldSource for Saddle {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.cx) * self.strength, -(y - self.cy) * self.strength)
    }
}

impl FieldSource for Sink {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        let (dx, dy) = (self.cx - x, self.cy - y);
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < SINGULARITY_EPS {
            return (0.0, 0.0);
        }
        (dx / dist * self.strength, dy / dist * self.strength)
    }
}

impl FieldSource for CurlNoise {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        let (sx, sy) = (x * self.scale, y * self.scale);
        let eps = self.eps;
        // curl of potential F: (dF/dy, -dF/dx)
        let df_dy = (self.noise.get([sx, sy + eps]) - self.noise.get([sx, sy - eps])) / (2.0 * eps);
        let df_dx = (self.noise.get([sx + eps, sy]) - self.noise.get([sx - eps, sy])) / (2.0 * eps);
        (df_dy * self.strength, -df_dx * self.strength)
    }
}
