//! Aluminium Profile Series
//!
//! The fixed set of extrusion series the fabricator stocks. Each series has
//! a nominal linear mass density (kg per meter of frame) covering the outer
//! frame, shutter sections, and interlocks averaged over a typical build.
//!
//! The set is closed: an unrecognized series name at the string boundary is
//! an error, never a silent fallback.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Aluminium extrusion series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Profile {
    /// Light-duty fixed/ventilator sections
    #[serde(rename = "Series 40")]
    Series40,
    /// Standard casement series
    #[serde(rename = "Series 45")]
    Series45,
    /// Heavy casement / light sliding series
    #[serde(rename = "Series 50")]
    Series50,
    /// Standard two-track sliding series
    #[serde(rename = "Series 60")]
    Series60,
    /// Heavy three-track sliding series
    #[serde(rename = "Series 75")]
    Series75,
}

impl Profile {
    /// All profile series for UI selection
    pub const ALL: [Profile; 5] = [
        Profile::Series40,
        Profile::Series45,
        Profile::Series50,
        Profile::Series60,
        Profile::Series75,
    ];

    /// Nominal linear density in kg per meter of frame perimeter
    pub fn linear_density_kg_m(&self) -> f64 {
        match self {
            Profile::Series40 => 2.4,
            Profile::Series45 => 2.9,
            Profile::Series50 => 3.3,
            Profile::Series60 => 3.8,
            Profile::Series75 => 4.6,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "SERIES40" | "S40" | "40" => Ok(Profile::Series40),
            "SERIES45" | "S45" | "45" => Ok(Profile::Series45),
            "SERIES50" | "S50" | "50" => Ok(Profile::Series50),
            "SERIES60" | "S60" | "60" => Ok(Profile::Series60),
            "SERIES75" | "S75" | "75" => Ok(Profile::Series75),
            _ => Err(QuoteError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Profile::Series40 => "Series 40",
            Profile::Series45 => "Series 45",
            Profile::Series50 => "Series 50",
            Profile::Series60 => "Series 60",
            Profile::Series75 => "Series 75",
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Series60
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
