#![deny(unsafe_code)]
//! Source registry: maps source names to analytic vector fields and samples
//! them onto grids for the LIC kernel.
//!
//! Both the CLI and the benchmarks construct fields through
//! [`SourceKind::from_name`] so parameter parsing lives in one place.

pub mod raster;
pub mod source;

use lic_core::params::{param_f64, param_u64};
use lic_core::LicError;
use serde_json::{json, Value};

pub use raster::{rasterize, Bounds};
pub use source::{CurlNoise, FieldSource, GaussianVortex, Saddle, Sink, Uniform, Vortex};

/// All available source names.
const SOURCE_NAMES: &[&str] = &[
    "uniform",
    "vortex",
    "gaussian-vortex",
    "saddle",
    "sink",
    "curl-noise",
];

const DEFAULT_STRENGTH: f64 = 1.0;
const DEFAULT_RADIUS: f64 = 0.5;
const DEFAULT_NOISE_SCALE: f64 = 3.0;

/// Enumeration of all built-in vector-field sources.
///
/// Use [`SourceKind::from_name`] for string-based construction.
pub enum SourceKind {
    Uniform(Uniform),
    Vortex(Vortex),
    GaussianVortex(GaussianVortex),
    Saddle(Saddle),
    Sink(Sink),
    CurlNoise {
        source: CurlNoise,
        scale: f64,
        strength: f64,
        seed: u32,
    },
}

/// Folds a 64-bit seed into the 32 bits Perlin accepts.
fn noise_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

impl SourceKind {
    /// Constructs a source by name, reading its parameters from `params`.
    ///
    /// Missing or wrong-typed parameters fall back to defaults. `seed` only
    /// affects `curl-noise`; a `"seed"` key in `params` overrides it.
    /// Returns `LicError::UnknownSource` if the name is not recognized.
    pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Self, LicError> {
        let cx = param_f64(params, "cx", 0.0);
        let cy = param_f64(params, "cy", 0.0);
        let strength = param_f64(params, "strength", DEFAULT_STRENGTH);
        match name {
            "uniform" => Ok(SourceKind::Uniform(Uniform {
                vx: param_f64(params, "vx", 1.0),
                vy: param_f64(params, "vy", 0.0),
            })),
            "vortex" => Ok(SourceKind::Vortex(Vortex { cx, cy, strength })),
            "gaussian-vortex" => Ok(SourceKind::GaussianVortex(GaussianVortex {
                cx,
                cy,
                strength,
                radius: param_f64(params, "radius", DEFAULT_RADIUS),
            })),
            "saddle" => Ok(SourceKind::Saddle(Saddle { cx, cy, strength })),
            "sink" => Ok(SourceKind::Sink(Sink { cx, cy, strength })),
            "curl-noise" => {
                let scale = param_f64(params, "scale", DEFAULT_NOISE_SCALE);
                let seed = noise_seed(param_u64(params, "seed", seed));
                Ok(SourceKind::CurlNoise {
                    source: CurlNoise::new(scale, strength, seed),
                    scale,
                    strength,
                    seed,
                })
            }
            _ => Err(LicError::UnknownSource(name.to_string())),
        }
    }

    /// Returns a slice of all recognized source names.
    pub fn list_sources() -> &'static [&'static str] {
        SOURCE_NAMES
    }

    /// Registry name of this source.
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Uniform(_) => "uniform",
            SourceKind::Vortex(_) => "vortex",
            SourceKind::GaussianVortex(_) => "gaussian-vortex",
            SourceKind::Saddle(_) => "saddle",
            SourceKind::Sink(_) => "sink",
            SourceKind::CurlNoise { .. } => "curl-noise",
        }
    }

    /// Resolved parameters, defaults included.
    pub fn params(&self) -> Value {
        match self {
            SourceKind::Uniform(s) => json!({"vx": s.vx, "vy": s.vy}),
            SourceKind::Vortex(s) => json!({"cx": s.cx, "cy": s.cy, "strength": s.strength}),
            SourceKind::GaussianVortex(s) => json!({
                "cx": s.cx,
                "cy": s.cy,
                "strength": s.strength,
                "radius": s.radius
            }),
            SourceKind::Saddle(s) => json!({"cx": s.cx, "cy": s.cy, "strength": s.strength}),
            SourceKind::Sink(s) => json!({"cx": s.cx, "cy": s.cy, "strength": s.strength}),
            SourceKind::CurlNoise {
                scale,
                strength,
                seed,
                ..
            } => json!({"scale": scale, "strength": strength, "seed": seed}),
        }
    }

    /// JSON description of the parameters this source reads.
    pub fn param_schema(&self) -> Value {
        let centre = json!({
            "cx": {"type": "number", "default": 0.0, "description": "Centre x coordinate"},
            "cy": {"type": "number", "default": 0.0, "description": "Centre y coordinate"},
            "strength": {
                "type": "number",
                "default": DEFAULT_STRENGTH,
                "description": "Velocity scale factor"
            }
        });
        match self {
            SourceKind::Uniform(_) => json!({
                "vx": {"type": "number", "default": 1.0, "description": "Velocity along x (columns)"},
                "vy": {"type": "number", "default": 0.0, "description": "Velocity along y (rows)"}
            }),
            SourceKind::GaussianVortex(_) => {
                let mut schema = centre;
                schema["radius"] = json!({
                    "type": "number",
                    "default": DEFAULT_RADIUS,
                    "min": 0.0,
                    "description": "Width of the Gaussian falloff"
                });
                schema
            }
            SourceKind::Vortex(_) | SourceKind::Saddle(_) | SourceKind::Sink(_) => centre,
            SourceKind::CurlNoise { .. } => json!({
                "scale": {
                    "type": "number",
                    "default": DEFAULT_NOISE_SCALE,
                    "min": 0.0,
                    "description": "Noise frequency per unit length"
                },
                "strength": {
                    "type": "number",
                    "default": DEFAULT_STRENGTH,
                    "description": "Velocity scale factor"
                },
                "seed": {
                    "type": "integer",
                    "default": null,
                    "description": "Noise seed; defaults to the run seed"
                }
            }),
        }
    }
}

impl FieldSource for SourceKind {
    fn sample(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            SourceKind::Uniform(s) => s.sample(x, y),
            SourceKind::Vortex(s) => s.sample(x, y),
            SourceKind::GaussianVortex(s) => s.sample(x, y),
            SourceKind::Saddle(s) => s.sample(x, y),
            SourceKind::Sink(s) => s.sample(x, y),
            SourceKind::CurlNoise { source, .. } => source.sample(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_source_constructs() {
        for name in SourceKind::list_sources() {
            let source = SourceKind::from_name(name, 42, &json!({}));
            assert!(source.is_ok(), "source {name} failed to construct");
            assert_eq!(source.unwrap().name(), *name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = SourceKind::from_name("whirlpool", 42, &json!({}));
        assert!(matches!(result, Err(LicError::UnknownSource(ref n)) if n == "whirlpool"));
    }

    #[test]
    fn params_override_defaults() {
        let source =
            SourceKind::from_name("vortex", 42, &json!({"cx": 0.5, "strength": 2.0})).unwrap();
        assert_eq!(source.params(), json!({"cx": 0.5, "cy": 0.0, "strength": 2.0}));
        assert_eq!(source.sample(0.5, 1.0), (-2.0, 0.0));
    }

    #[test]
    fn wrong_typed_params_fall_back() {
        let source = SourceKind::from_name("uniform", 42, &json!({"vx": "fast"})).unwrap();
        assert_eq!(source.sample(0.0, 0.0), (1.0, 0.0));
    }

    #[test]
    fn schema_covers_resolved_params() {
        for name in SourceKind::list_sources() {
            let source = SourceKind::from_name(name, 7, &json!({})).unwrap();
            let schema = source.param_schema();
            let params = source.params();
            for key in params.as_object().unwrap().keys() {
                assert!(schema.get(key).is_some(), "{name}: schema missing {key}");
                assert!(schema[key].get("description").is_some());
            }
        }
    }

    #[test]
    fn curl_noise_seed_comes_from_run_unless_overridden() {
        let a = SourceKind::from_name("curl-noise", 5, &json!({})).unwrap();
        let b = SourceKind::from_name("curl-noise", 9, &json!({"seed": 5})).unwrap();
        assert_eq!(a.params()["seed"], b.params()["seed"]);
        assert_eq!(a.sample(0.3, 0.6), b.sample(0.3, 0.6));
    }

    #[test]
    fn noise_seed_folds_high_bits() {
        assert_eq!(noise_seed(42), 42);
        assert_ne!(noise_seed(1 << 32), noise_seed(0));
    }

    #[test]
    fn rasterize_through_registry() {
        let source = SourceKind::from_name("sink", 42, &json!({})).unwrap();
        let field = rasterize(&source, 6, 4, &Bounds::default()).unwrap();
        assert_eq!(field.shape(), (6, 4));
        // top-left cell flows toward the centre: right and down
        let v = field.velocity(0, 0);
        assert!(v.col > 0.0 && v.row > 0.0);
    }

    #[test]
    fn object_safety() {
        let source = SourceKind::from_name("saddle", 42, &json!({})).unwrap();
        let boxed: Box<dyn FieldSource> = Box::new(source);
        assert_eq!(boxed.sample(1.0, 1.0), (1.0, -1.0));
    }
}
