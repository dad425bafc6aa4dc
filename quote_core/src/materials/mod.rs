//! # Materials Database
//!
//! Material definitions and rate lookups for window/door estimation.
//!
//! Two lookup tables drive the weight calculation:
//!
//! - **Glass base density** per nominal pane thickness (kg/m²)
//! - **Profile linear density** per extrusion series (kg/m)
//!
//! Both are fixed constants, immutable for the process lifetime. The
//! [`MaterialRates`] struct bundles them so the calculation functions take
//! rates explicitly rather than reaching into globals; the standard instance
//! lives behind [`MaterialRates::standard`].
//!
//! ## Example
//!
//! ```rust
//! use quote_core::materials::{GlassType, MaterialRates, Profile};
//!
//! let rates = MaterialRates::standard();
//!
//! // 5 mm clear float glass
//! assert_eq!(rates.glass_base_density(GlassType::Clear, 5), 12.5);
//!
//! // Double glazing ignores the thickness field entirely
//! assert_eq!(rates.glass_base_density(GlassType::DoubleGlazed, 4), 22.0);
//!
//! // Two-track sliding frame
//! assert_eq!(rates.profile_linear_density(Profile::Series60), 3.8);
//! ```

pub mod finish;
pub mod glass;
pub mod profile;

// Re-export material types
pub use finish::Finish;
pub use glass::{
    GlassType, DOUBLE_GLAZED_DENSITY_KG_M2, DOUBLE_GLAZED_THICKNESS_MM, GLASS_DENSITY_PER_MM,
    GLASS_DENSITY_TABLE,
};
pub use profile::Profile;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static STANDARD_RATES: Lazy<MaterialRates> = Lazy::new(MaterialRates::default);

/// Material rate tables used by the weight calculation.
///
/// Serializable so a saved project file can carry the rates snapshot it was
/// quoted against, but the standard instance never changes at runtime.
///
/// ## JSON Example
///
/// ```json
/// {
///   "glass_density_kg_m2": { "4": 10.0, "5": 12.5, "6": 15.0, "24": 22.0 },
///   "profile_density_kg_m": { "Series 60": 3.8, "Series 75": 4.6 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRates {
    /// Glass base density by nominal thickness (mm → kg/m²)
    pub glass_density_kg_m2: BTreeMap<u32, f64>,

    /// Profile linear density by series (kg/m)
    pub profile_density_kg_m: BTreeMap<Profile, f64>,
}

impl MaterialRates {
    /// The standard rate tables, shared for the process lifetime.
    pub fn standard() -> &'static MaterialRates {
        &STANDARD_RATES
    }

    /// Base glass density in kg/m² for a glass type and nominal thickness.
    ///
    /// Double-glazed units have a fixed density regardless of the thickness
    /// field. Thicknesses without a table entry use the linear approximation
    /// of 2.5 kg/m² per mm.
    pub fn glass_base_density(&self, glass_type: GlassType, thickness_mm: u32) -> f64 {
        if glass_type == GlassType::DoubleGlazed {
            return DOUBLE_GLAZED_DENSITY_KG_M2;
        }
        self.glass_density_kg_m2
            .get(&thickness_mm)
            .copied()
            .unwrap_or(thickness_mm as f64 * GLASS_DENSITY_PER_MM)
    }

    /// Linear density in kg/m for a profile series.
    ///
    /// A rates snapshot missing an entry falls back to the series' built-in
    /// nominal density; the standard tables cover every series.
    pub fn profile_linear_density(&self, profile: Profile) -> f64 {
        self.profile_density_kg_m
            .get(&profile)
            .copied()
            .unwrap_or_else(|| profile.linear_density_kg_m())
    }
}

impl Default for MaterialRates {
    fn default() -> Self {
        MaterialRates {
            glass_density_kg_m2: GLASS_DENSITY_TABLE.iter().copied().collect(),
            profile_density_kg_m: Profile::ALL
                .iter()
                .map(|p| (*p, p.linear_density_kg_m()))
                .collect(),
        }
    }
}
