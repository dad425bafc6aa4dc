//! # Form Field Parsing
//!
//! The UI collects every numeric field as free text. This module is the
//! single place that text is turned into engine inputs, with the defensive
//! contract the estimator promises: malformed or empty numerics coerce to
//! zero and never error, while unrecognized glass or profile names fail
//! fast with `QuoteError::MaterialNotFound`.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::forms::{parse_amount, RawEstimateForm};
//!
//! assert_eq!(parse_amount("1,250.5"), 1250.5);
//! assert_eq!(parse_amount(""), 0.0);
//! assert_eq!(parse_amount("abc"), 0.0);
//!
//! let form = RawEstimateForm {
//!     width_mm: "900".to_string(),
//!     height_mm: "1200".to_string(),
//!     glass_type: "clear".to_string(),
//!     glass_thickness_mm: "5".to_string(),
//!     profile: "Series 60".to_string(),
//!     finish: "powder coated".to_string(),
//!     cost_per_kg: "300".to_string(),
//!     accessories_kg: "".to_string(),
//!     profit_margin_pct: "10".to_string(),
//!     discount_pct: "".to_string(),
//! };
//! let input = form.parse().unwrap();
//! assert_eq!(input.width_mm, 900.0);
//! assert_eq!(input.accessories_kg, 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::estimate::EstimateInput;
use crate::calculations::quotation::QuotationCharges;
use crate::errors::QuoteResult;
use crate::materials::{Finish, GlassType, Profile};

/// Parse a free-text amount, coercing anything unparseable to 0.
///
/// Accepts comma thousands separators ("1,250.5"). Never errors.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().replace(',', "").parse().unwrap_or(0.0)
}

/// Parse a free-text whole-millimeter value, coercing junk to 0.
pub fn parse_whole_mm(raw: &str) -> u32 {
    raw.trim().replace(',', "").parse().unwrap_or(0)
}

/// The estimate form exactly as the user typed it.
///
/// Field names mirror [`EstimateInput`]; every value is a string because
/// that is what a text field holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEstimateForm {
    pub width_mm: String,
    pub height_mm: String,
    pub glass_type: String,
    pub glass_thickness_mm: String,
    pub profile: String,
    pub finish: String,
    pub cost_per_kg: String,
    pub accessories_kg: String,
    pub profit_margin_pct: String,
    pub discount_pct: String,
}

impl RawEstimateForm {
    /// Convert the raw form into an [`EstimateInput`].
    ///
    /// Numeric fields coerce to zero; glass type and profile fail fast on
    /// unknown names; finish is permissive (unknown → powder coated).
    pub fn parse(&self) -> QuoteResult<EstimateInput> {
        Ok(EstimateInput {
            width_mm: parse_amount(&self.width_mm),
            height_mm: parse_amount(&self.height_mm),
            glass_type: GlassType::from_str_flexible(&self.glass_type)?,
            glass_thickness_mm: parse_whole_mm(&self.glass_thickness_mm),
            profile: Profile::from_str_flexible(&self.profile)?,
            finish: Finish::from_str_flexible(&self.finish),
            cost_per_kg: parse_amount(&self.cost_per_kg),
            accessories_kg: parse_amount(&self.accessories_kg),
            profit_margin_pct: parse_amount(&self.profit_margin_pct),
            discount_pct: parse_amount(&self.discount_pct),
        })
    }
}

/// The quotation charges form as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChargesForm {
    pub delivery_charge: String,
    pub labor_charge: String,
    pub gst_percent: String,
}

impl RawChargesForm {
    /// Convert the raw form into [`QuotationCharges`]. Never errors.
    pub fn parse(&self) -> QuotationCharges {
        QuotationCharges {
            delivery_charge: parse_amount(&self.delivery_charge),
            labor_charge: parse_amount(&self.labor_charge),
            gst_percent: parse_amount(&self.gst_percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RawEstimateForm {
        RawEstimateForm {
            width_mm: "900".to_string(),
            height_mm: "1200".to_string(),
            glass_type: "Clear".to_string(),
            glass_thickness_mm: "5".to_string(),
            profile: "Series 60".to_string(),
            finish: "Powder Coated".to_string(),
            cost_per_kg: "300".to_string(),
            accessories_kg: "0".to_string(),
            profit_margin_pct: "10".to_string(),
            discount_pct: "0".to_string(),
        }
    }

    #[test]
    fn test_parse_amount_coercion() {
        assert_eq!(parse_amount("42.5"), 42.5);
        assert_eq!(parse_amount("  300  "), 300.0);
        assert_eq!(parse_amount("1,08,500"), 108500.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12abc"), 0.0);
    }

    #[test]
    fn test_parse_whole_mm_coercion() {
        assert_eq!(parse_whole_mm("5"), 5);
        assert_eq!(parse_whole_mm(""), 0);
        assert_eq!(parse_whole_mm("5.5"), 0);
        assert_eq!(parse_whole_mm("-4"), 0);
    }

    #[test]
    fn test_parse_valid_form() {
        let input = filled_form().parse().unwrap();
        assert_eq!(input.width_mm, 900.0);
        assert_eq!(input.glass_type, GlassType::Clear);
        assert_eq!(input.profile, Profile::Series60);
        assert_eq!(input.finish, Finish::PowderCoated);
    }

    #[test]
    fn test_blank_numerics_coerce_to_zero() {
        let mut form = filled_form();
        form.width_mm = "".to_string();
        form.cost_per_kg = "three hundred".to_string();
        let input = form.parse().unwrap();
        assert_eq!(input.width_mm, 0.0);
        assert_eq!(input.cost_per_kg, 0.0);
    }

    #[test]
    fn test_unknown_profile_fails_fast() {
        let mut form = filled_form();
        form.profile = "Series 99".to_string();
        let err = form.parse().unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_unknown_glass_fails_fast() {
        let mut form = filled_form();
        form.glass_type = "frosted".to_string();
        assert!(form.parse().is_err());
    }

    #[test]
    fn test_unknown_finish_defaults_to_powder_coated() {
        let mut form = filled_form();
        form.finish = "matte black".to_string();
        let input = form.parse().unwrap();
        assert_eq!(input.finish, Finish::PowderCoated);
    }

    #[test]
    fn test_charges_form_never_errors() {
        let charges = RawChargesForm {
            delivery_charge: "500".to_string(),
            labor_charge: "".to_string(),
            gst_percent: "18%".to_string(),
        };
        let parsed = charges.parse();
        assert_eq!(parsed.delivery_charge, 500.0);
        assert_eq!(parsed.labor_charge, 0.0);
        // "18%" is not numeric; coerces to zero like any other junk
        assert_eq!(parsed.gst_percent, 0.0);
    }
}
