//! Lenient typed lookups on a `serde_json::Value` parameter object.
//!
//! Each helper takes the object, a key, and a default. Missing keys and
//! values of the wrong JSON type fall back to the default, so callers always
//! get something usable.

use serde_json::Value;

/// `params[name]` as `f64` (integers are widened), else `default`.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    param_opt_f64(params, name).unwrap_or(default)
}

/// `params[name]` as `f64` if present and numeric.
pub fn param_opt_f64(params: &Value, name: &str) -> Option<f64> {
    params.get(name).and_then(Value::as_f64)
}

/// `params[name]` as `u64` if it is a non-negative integer, else `default`.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

/// `params[name]` as `usize` if it is a non-negative integer.
pub fn param_opt_usize(params: &Value, name: &str) -> Option<usize> {
    params
        .get(name)
        .and_then(Value::as_u64)
        .and_then(|v| usize::try_from(v).ok())
}

/// `params[name]` as `usize`, else `default`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    param_opt_usize(params, name).unwrap_or(default)
}

/// `params[name]` as a string slice if present and a string.
pub fn param_str<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(Value::as_str)
}
