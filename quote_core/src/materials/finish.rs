//! Surface Finishes
//!
//! Surface treatment applied to the extrusions. The finish contributes a
//! small surcharge factor to the per-kg cost; anodizing costs slightly more
//! than powder coating.
//!
//! Parsing is deliberately permissive: the cost rule is "Anodized → 1.08,
//! anything else → 1.05", so an unrecognized finish name resolves to
//! PowderCoated instead of erroring.

use serde::{Deserialize, Serialize};

/// Surface treatment for aluminium sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finish {
    /// Electrostatic powder coating (standard)
    PowderCoated,
    /// Anodized oxide layer
    Anodized,
}

impl Finish {
    /// All finishes for UI selection
    pub const ALL: [Finish; 2] = [Finish::PowderCoated, Finish::Anodized];

    /// Cost surcharge factor applied to the weight-based cost
    pub fn cost_factor(&self) -> f64 {
        match self {
            Finish::Anodized => 1.08,
            Finish::PowderCoated => 1.05,
        }
    }

    /// Parse from common string representations.
    ///
    /// Anything that is not recognizably "anodized" is powder coated.
    pub fn from_str_flexible(s: &str) -> Self {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "ANODIZED" | "ANODISED" | "ANODIZE" => Finish::Anodized,
            _ => Finish::PowderCoated,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Finish::PowderCoated => "Powder Coated",
            Finish::Anodized => "Anodized",
        }
    }
}

impl Default for Finish {
    fn default() -> Self {
        Finish::PowderCoated
    }
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
