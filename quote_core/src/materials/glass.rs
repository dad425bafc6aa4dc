//! Glass Types and Densities
//!
//! Glass configurations offered by the estimator, with the base density
//! table keyed by nominal pane thickness.
//!
//! Double-glazed units are a special case: the sealed 24 mm unit has a fixed
//! nominal density of 22 kg/m² no matter what the thickness field says, so
//! the thickness input is ignored for that type.

use serde::{Deserialize, Serialize};

use crate::errors::{QuoteError, QuoteResult};

/// Base glass density by nominal thickness (mm, kg/m²)
pub const GLASS_DENSITY_TABLE: [(u32, f64); 4] = [
    (4, 10.0),
    (5, 12.5),
    (6, 15.0),
    (DOUBLE_GLAZED_THICKNESS_MM, DOUBLE_GLAZED_DENSITY_KG_M2),
];

/// Nominal thickness of a sealed double-glazed unit (mm)
pub const DOUBLE_GLAZED_THICKNESS_MM: u32 = 24;

/// Fixed density of a sealed double-glazed unit (kg/m²)
pub const DOUBLE_GLAZED_DENSITY_KG_M2: f64 = 22.0;

/// Linear fallback for thicknesses without a table entry (kg/m² per mm)
pub const GLASS_DENSITY_PER_MM: f64 = 2.5;

/// Glass configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlassType {
    /// Plain annealed float glass
    Clear,
    /// Tempered safety glass (heavier per unit area)
    Toughened,
    /// Solar-reflective coated glass
    Reflective,
    /// Sealed insulating unit, fixed 24 mm nominal
    DoubleGlazed,
}

impl GlassType {
    /// All glass types for UI selection
    pub const ALL: [GlassType; 4] = [
        GlassType::Clear,
        GlassType::Toughened,
        GlassType::Reflective,
        GlassType::DoubleGlazed,
    ];

    /// Weight multiplier applied on top of the base density
    pub fn weight_factor(&self) -> f64 {
        match self {
            GlassType::Toughened => 1.1,
            GlassType::Reflective => 1.05,
            GlassType::Clear | GlassType::DoubleGlazed => 1.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> QuoteResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-', '_'], "").as_str() {
            "CLEAR" | "PLAIN" | "FLOAT" => Ok(GlassType::Clear),
            "TOUGHENED" | "TEMPERED" => Ok(GlassType::Toughened),
            "REFLECTIVE" | "SOLAR" => Ok(GlassType::Reflective),
            "DOUBLEGLAZED" | "DG" | "DGU" | "INSULATED" => Ok(GlassType::DoubleGlazed),
            _ => Err(QuoteError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GlassType::Clear => "Clear",
            GlassType::Toughened => "Toughened",
            GlassType::Reflective => "Reflective",
            GlassType::DoubleGlazed => "Double Glazed",
        }
    }
}

impl Default for GlassType {
    fn default() -> Self {
        GlassType::Clear
    }
}

impl std::fmt::Display for GlassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_factors() {
        assert_eq!(GlassType::Clear.weight_factor(), 1.0);
        assert_eq!(GlassType::Toughened.weight_factor(), 1.1);
        assert_eq!(GlassType::Reflective.weight_factor(), 1.05);
        assert_eq!(GlassType::DoubleGlazed.weight_factor(), 1.0);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            GlassType::from_str_flexible("clear").unwrap(),
            GlassType::Clear
        );
        assert_eq!(
            GlassType::from_str_flexible("Tempered").unwrap(),
            GlassType::Toughened
        );
        assert_eq!(
            GlassType::from_str_flexible("double glazed").unwrap(),
            GlassType::DoubleGlazed
        );
        assert_eq!(
            GlassType::from_str_flexible("DGU").unwrap(),
            GlassType::DoubleGlazed
        );
        assert!(GlassType::from_str_flexible("frosted").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GlassType::DoubleGlazed.display_name(), "Double Glazed");
        assert_eq!(GlassType::Clear.to_string(), "Clear");
    }

    #[test]
    fn test_serialization() {
        let glass = GlassType::Toughened;
        let json = serde_json::to_string(&glass).unwrap();
        assert_eq!(json, "\"Toughened\"");

        let roundtrip: GlassType = serde_json::from_str(&json).unwrap();
        assert_eq!(glass, roundtrip);
    }

    #[test]
    fn test_density_table_covers_standard_panes() {
        let thicknesses: Vec<u32> = GLASS_DENSITY_TABLE.iter().map(|(t, _)| *t).collect();
        assert_eq!(thicknesses, vec![4, 5, 6, 24]);
    }
}
