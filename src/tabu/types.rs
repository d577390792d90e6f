//! Neighborhood kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TabuError};

/// How neighbors of the current solution are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborhoodKind {
    /// Apply the chosen transformation once to every route.
    Basic,
    /// Mix cross-route meta-exchange with 2-opt (swap transformation only).
    Complex,
}

impl NeighborhoodKind {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            NeighborhoodKind::Basic => "basic",
            NeighborhoodKind::Complex => "complex",
        }
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NeighborhoodKind {
    type Err = TabuError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(NeighborhoodKind::Basic),
            "complex" => Ok(NeighborhoodKind::Complex),
            _ => Err(TabuError::UnhandledNeighborhoodKind(s.to_string())),
        }
    }
}
