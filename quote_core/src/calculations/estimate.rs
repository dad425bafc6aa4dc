//! # Window/Door Estimate Calculation
//!
//! Computes the material weights and cost for a single opening:
//! dimensions → area/perimeter → glass and frame weight → weight-based cost
//! → margin and discount.
//!
//! ## Assumptions
//!
//! - Dimensions come from the form in millimeters; negatives clamp to zero
//! - Glass density comes from the thickness table, double glazing overrides
//! - Frame weight is perimeter × series linear density
//! - Margin is applied before discount (fixed business rule)
//! - Results keep full floating precision; 2-decimal rounding is display-side
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::estimate::{compute_estimate, EstimateInput};
//! use quote_core::materials::{Finish, GlassType, MaterialRates, Profile};
//!
//! let input = EstimateInput {
//!     width_mm: 900.0,
//!     height_mm: 1200.0,
//!     glass_type: GlassType::Clear,
//!     glass_thickness_mm: 5,
//!     profile: Profile::Series60,
//!     finish: Finish::PowderCoated,
//!     cost_per_kg: 300.0,
//!     accessories_kg: 0.0,
//!     profit_margin_pct: 10.0,
//!     discount_pct: 0.0,
//! };
//!
//! let result = compute_estimate(&input, MaterialRates::standard());
//!
//! assert!((result.area_m2 - 1.08).abs() < 1e-9);
//! assert!((result.total_weight_kg - 29.46).abs() < 1e-9);
//! assert!((result.final_cost - 10207.89).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::{Finish, GlassType, MaterialRates, Profile};
use crate::units::{Meters, Millimeters, SquareMeters};

/// Input snapshot for one opening.
///
/// This is the immutable value the UI layer hands to the engine; the form
/// owns the mutable copy and re-submits on every field change.
///
/// ## JSON Example
///
/// ```json
/// {
///   "width_mm": 900.0,
///   "height_mm": 1200.0,
///   "glass_type": "Clear",
///   "glass_thickness_mm": 5,
///   "profile": "Series 60",
///   "finish": "PowderCoated",
///   "cost_per_kg": 300.0,
///   "accessories_kg": 0.0,
///   "profit_margin_pct": 10.0,
///   "discount_pct": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Opening width in millimeters
    pub width_mm: f64,

    /// Opening height in millimeters
    pub height_mm: f64,

    /// Glass configuration
    pub glass_type: GlassType,

    /// Nominal pane thickness in millimeters (ignored for double glazing)
    pub glass_thickness_mm: u32,

    /// Aluminium extrusion series
    pub profile: Profile,

    /// Surface finish
    pub finish: Finish,

    /// Fabricated cost rate in currency per kilogram
    pub cost_per_kg: f64,

    /// Hardware/accessories weight, entered directly in kilograms
    pub accessories_kg: f64,

    /// Profit margin percentage, applied before discount
    pub profit_margin_pct: f64,

    /// Discount percentage, applied after margin.
    ///
    /// Not clamped to [0, 100]; a discount above 100 produces a negative
    /// final cost and is passed through untouched.
    pub discount_pct: f64,
}

impl EstimateInput {
    /// Opening width in meters, negatives clamped to zero
    pub fn width(&self) -> Meters {
        Millimeters(self.width_mm.max(0.0)).into()
    }

    /// Opening height in meters, negatives clamped to zero
    pub fn height(&self) -> Meters {
        Millimeters(self.height_mm.max(0.0)).into()
    }

    /// Glazed area in square meters
    pub fn area(&self) -> SquareMeters {
        self.width() * self.height()
    }

    /// Frame perimeter in meters
    pub fn perimeter(&self) -> Meters {
        (self.width() + self.height()) * 2.0
    }
}

impl Default for EstimateInput {
    fn default() -> Self {
        EstimateInput {
            width_mm: 0.0,
            height_mm: 0.0,
            glass_type: GlassType::default(),
            glass_thickness_mm: 5,
            profile: Profile::default(),
            finish: Finish::default(),
            cost_per_kg: 0.0,
            accessories_kg: 0.0,
            profit_margin_pct: 0.0,
            discount_pct: 0.0,
        }
    }
}

/// Derived estimate for one opening.
///
/// Recomputed from the input snapshot on every change; never stored
/// independently of the inputs it came from.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_m2": 1.08,
///   "perimeter_m": 4.2,
///   "glass_weight_kg": 13.5,
///   "aluminium_weight_kg": 15.96,
///   "accessories_kg": 0.0,
///   "total_weight_kg": 29.46,
///   "estimated_cost": 9279.9,
///   "final_cost": 10207.89
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Glazed area (m²)
    pub area_m2: f64,

    /// Frame perimeter (m)
    pub perimeter_m: f64,

    /// Glass weight: area × base density × type factor (kg)
    pub glass_weight_kg: f64,

    /// Frame weight: perimeter × series linear density (kg)
    pub aluminium_weight_kg: f64,

    /// Accessories weight, passed through from the input (kg)
    pub accessories_kg: f64,

    /// Total of glass, frame, and accessories (kg)
    pub total_weight_kg: f64,

    /// Weight-based cost before margin/discount
    pub estimated_cost: f64,

    /// Cost after margin then discount
    pub final_cost: f64,
}

/// Compute the estimate for one opening.
///
/// Pure and total: identical inputs give identical outputs, and every
/// numeric input is accepted (malformed form text is coerced to zero before
/// it gets here, out-of-range percentages pass through).
pub fn compute_estimate(input: &EstimateInput, rates: &MaterialRates) -> EstimateResult {
    let area = input.area();
    let perimeter = input.perimeter();

    let base_density = rates.glass_base_density(input.glass_type, input.glass_thickness_mm);
    let glass_weight_kg = area.value() * base_density * input.glass_type.weight_factor();
    let aluminium_weight_kg = perimeter.value() * rates.profile_linear_density(input.profile);
    let total_weight_kg = glass_weight_kg + aluminium_weight_kg + input.accessories_kg;

    let estimated_cost = total_weight_kg * input.cost_per_kg * input.finish.cost_factor();

    // Margin before discount. The order is a business rule, not arithmetic
    // preference; do not reorder.
    let final_cost = estimated_cost
        * (1.0 + input.profit_margin_pct / 100.0)
        * (1.0 - input.discount_pct / 100.0);

    EstimateResult {
        area_m2: area.value(),
        perimeter_m: perimeter.value(),
        glass_weight_kg,
        aluminium_weight_kg,
        accessories_kg: input.accessories_kg,
        total_weight_kg,
        estimated_cost,
        final_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_input() -> EstimateInput {
        EstimateInput {
            width_mm: 900.0,
            height_mm: 1200.0,
            glass_type: GlassType::Clear,
            glass_thickness_mm: 5,
            profile: Profile::Series60,
            finish: Finish::PowderCoated,
            cost_per_kg: 300.0,
            accessories_kg: 0.0,
            profit_margin_pct: 10.0,
            discount_pct: 0.0,
        }
    }

    #[test]
    fn test_area_identity() {
        for (w, h) in [(0.0, 0.0), (900.0, 1200.0), (1.0, 1.0), (2450.0, 600.0)] {
            let mut input = scenario_input();
            input.width_mm = w;
            input.height_mm = h;
            let result = compute_estimate(&input, MaterialRates::standard());
            assert_eq!(result.area_m2, (w / 1000.0) * (h / 1000.0));
        }
    }

    #[test]
    fn test_perimeter() {
        let result = compute_estimate(&scenario_input(), MaterialRates::standard());
        assert!((result.perimeter_m - 4.2).abs() < 1e-12);
    }

    #[test]
    fn test_negative_dimensions_clamp_to_zero() {
        let mut input = scenario_input();
        input.width_mm = -500.0;
        let result = compute_estimate(&input, MaterialRates::standard());
        assert_eq!(result.area_m2, 0.0);
        assert_eq!(result.glass_weight_kg, 0.0);
        // Height still contributes to perimeter
        assert!((result.perimeter_m - 2.4).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent() {
        let input = scenario_input();
        let first = compute_estimate(&input, MaterialRates::standard());
        let second = compute_estimate(&input, MaterialRates::standard());
        assert_eq!(first, second);
    }

    #[test]
    fn test_cost_monotonic_in_rate() {
        let mut input = scenario_input();
        let mut previous = f64::NEG_INFINITY;
        for rate in [0.0, 50.0, 300.0, 301.0, 1000.0] {
            input.cost_per_kg = rate;
            let cost = compute_estimate(&input, MaterialRates::standard()).estimated_cost;
            assert!(cost >= previous);
            previous = cost;
        }
    }

    #[test]
    fn test_margin_applied_before_discount() {
        // 1000 × 1.10 × 0.90 = 990
        let mut input = scenario_input();
        input.profit_margin_pct = 10.0;
        input.discount_pct = 10.0;
        let result = compute_estimate(&input, MaterialRates::standard());
        let expected = result.estimated_cost * 1.10 * 0.90;
        assert!((result.final_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_discount_passes_through() {
        let mut input = scenario_input();
        input.discount_pct = 150.0;
        let result = compute_estimate(&input, MaterialRates::standard());
        assert!(result.final_cost < 0.0);
    }

    #[test]
    fn test_double_glazed_ignores_thickness() {
        let mut input = scenario_input();
        input.width_mm = 1000.0;
        input.height_mm = 1000.0;
        input.glass_type = GlassType::DoubleGlazed;
        for thickness in [4, 5, 6, 24, 99] {
            input.glass_thickness_mm = thickness;
            let result = compute_estimate(&input, MaterialRates::standard());
            // area is 1 m², type factor 1.0, so glass weight equals density
            assert!((result.glass_weight_kg - 22.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_toughened_weight_factor() {
        let mut input = scenario_input();
        let clear = compute_estimate(&input, MaterialRates::standard());
        input.glass_type = GlassType::Toughened;
        let toughened = compute_estimate(&input, MaterialRates::standard());
        assert!((toughened.glass_weight_kg - clear.glass_weight_kg * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_accessories_are_additive() {
        let mut input = scenario_input();
        let without = compute_estimate(&input, MaterialRates::standard());
        input.accessories_kg = 2.0;
        let with = compute_estimate(&input, MaterialRates::standard());
        assert!((with.total_weight_kg - without.total_weight_kg - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let result = compute_estimate(&scenario_input(), MaterialRates::standard());

        assert!((result.area_m2 - 1.08).abs() < 1e-9);
        assert!((result.glass_weight_kg - 13.5).abs() < 1e-9);
        assert!((result.perimeter_m - 4.2).abs() < 1e-9);
        assert!((result.aluminium_weight_kg - 15.96).abs() < 1e-9);
        assert!((result.total_weight_kg - 29.46).abs() < 1e-9);
        // 29.46 × 300 × 1.05 = 9279.9
        assert!((result.estimated_cost - 9279.9).abs() < 1e-6);
        // 9279.9 × 1.10 = 10207.89
        assert!((result.final_cost - 10207.89).abs() < 1e-6);
    }

    #[test]
    fn test_anodized_surcharge() {
        let mut input = scenario_input();
        input.finish = Finish::Anodized;
        let result = compute_estimate(&input, MaterialRates::standard());
        // 29.46 × 300 × 1.08
        assert!((result.estimated_cost - 29.46 * 300.0 * 1.08).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = scenario_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: EstimateInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = compute_estimate(&input, MaterialRates::standard());
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: EstimateResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}

