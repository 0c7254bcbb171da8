//! Run configuration for [`compute_lic`](crate::compute_lic).

use lic_core::params::{param_opt_f64, param_opt_usize, param_str, param_u64, param_usize};
use lic_core::Boundary;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::driver::DEFAULT_ROWS_PER_TASK;

/// Seed for the default random input texture.
pub const DEFAULT_SEED: u64 = 42;

/// Knobs for a single LIC run.
///
/// Use [`Default`] for periodic boundaries, an automatic streamlength, seed
/// 42, no high-pass filter, and rayon's global pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicConfig {
    /// Steps per tracing direction. `None` picks a quarter of the shorter grid side.
    pub streamlength: Option<usize>,
    /// Edge policy for streamlines.
    pub boundary: Boundary,
    /// Seed for the random input texture generated when none is supplied.
    pub seed: u64,
    /// When set, the output is high-pass filtered with this Gaussian width.
    pub highpass_sigma: Option<f64>,
    /// Worker threads for a dedicated pool. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    /// Output rows per parallel task.
    pub rows_per_task: usize,
}

impl Default for LicConfig {
    fn default() -> Self {
        Self {
            streamlength: None,
            boundary: Boundary::Periodic,
            seed: DEFAULT_SEED,
            highpass_sigma: None,
            threads: None,
            rows_per_task: DEFAULT_ROWS_PER_TASK,
        }
    }
}

impl LicConfig {
    /// Reads a configuration from a JSON object, falling back to defaults.
    ///
    /// Recognized keys: `streamlength`, `boundary` (`"periodic"`/`"open"`),
    /// `periodic` (bool, used when `boundary` is absent), `seed`,
    /// `highpass_sigma`, `threads`, `rows_per_task`. Unknown keys, values of
    /// the wrong type and unparsable boundary names are ignored.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        let boundary = param_str(params, "boundary")
            .and_then(|name| name.parse().ok())
            .or_else(|| {
                params
                    .get("periodic")
                    .and_then(Value::as_bool)
                    .map(Boundary::from_periodic)
            })
            .unwrap_or(defaults.boundary);
        Self {
            streamlength: param_opt_usize(params, "streamlength"),
            boundary,
            seed: param_u64(params, "seed", defaults.seed),
            highpass_sigma: param_opt_f64(params, "highpass_sigma"),
            threads: param_opt_usize(params, "threads").filter(|&n| n > 0),
            rows_per_task: param_usize(params, "rows_per_task", defaults.rows_per_task).max(1),
        }
    }

    /// Describes every key accepted by [`LicConfig::from_json`].
    pub fn param_schema() -> Value {
        json!({
            "streamlength": {
                "type": "integer",
                "default": null,
                "min": 0,
                "description": "Steps per tracing direction; defaults to min(rows, cols) / 4"
            },
            "boundary": {
                "type": "string",
                "default": "periodic",
                "values": ["periodic", "open"],
                "description": "Wrap streamlines around the grid or stop them at the edge"
            },
            "seed": {
                "type": "integer",
                "default": DEFAULT_SEED,
                "description": "Seed for the random input texture"
            },
            "highpass_sigma": {
                "type": "number",
                "default": null,
                "min": 0.0,
                "description": "Gaussian width of the optional high-pass filter"
            },
            "threads": {
                "type": "integer",
                "default": null,
                "min": 1,
                "description": "Worker threads; defaults to the global rayon pool"
            },
            "rows_per_task": {
                "type": "integer",
                "default": DEFAULT_ROWS_PER_TASK,
                "min": 1,
                "description": "Output rows computed by each parallel task"
            }
        })
    }
}
