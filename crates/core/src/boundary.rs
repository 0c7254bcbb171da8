//! Boundary policy for streamlines that reach the edge of the domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when a streamline leaves `[0, R) x [0, C)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Positions wrap around modulo the grid extent.
    #[default]
    Periodic,
    /// The streamline terminates as soon as it exits the grid.
    Open,
}

impl Boundary {
    /// Maps a "periodic boundaries" flag onto a policy.
    pub fn from_periodic(periodic: bool) -> Self {
        if periodic {
            Boundary::Periodic
        } else {
            Boundary::Open
        }
    }

    pub fn is_periodic(self) -> bool {
        self == Boundary::Periodic
    }

    pub fn name(self) -> &'static str {
        match self {
            Boundary::Periodic => "periodic",
            Boundary::Open => "open",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "periodic" => Ok(Boundary::Periodic),
            "open" => Ok(Boundary::Open),
            other => Err(format!("unknown boundary '{other}' (expected periodic or open)")),
        }
    }
}
