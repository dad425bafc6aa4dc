//! # Quotation Totals
//!
//! Rolls an estimate up into a customer quotation: delivery and labor
//! charges on top of the final cost, then GST on the subtotal.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::estimate::{compute_estimate, EstimateInput};
//! use quote_core::calculations::quotation::{compute_quotation, QuotationCharges};
//! use quote_core::materials::MaterialRates;
//!
//! let input = EstimateInput {
//!     width_mm: 900.0,
//!     height_mm: 1200.0,
//!     cost_per_kg: 300.0,
//!     profit_margin_pct: 10.0,
//!     ..EstimateInput::default()
//! };
//! let estimate = compute_estimate(&input, MaterialRates::standard());
//!
//! let charges = QuotationCharges {
//!     delivery_charge: 0.0,
//!     labor_charge: 0.0,
//!     gst_percent: 18.0,
//! };
//! let quotation = compute_quotation(&estimate, &charges);
//!
//! assert!((quotation.grand_total - (quotation.subtotal + quotation.tax_amount)).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::estimate::EstimateResult;

/// Flat charges and tax rate added on top of the estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "delivery_charge": 500.0,
///   "labor_charge": 1200.0,
///   "gst_percent": 18.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationCharges {
    /// Flat delivery charge
    pub delivery_charge: f64,

    /// Flat installation/labor charge
    pub labor_charge: f64,

    /// GST percentage applied to the subtotal
    pub gst_percent: f64,
}

impl Default for QuotationCharges {
    fn default() -> Self {
        QuotationCharges {
            delivery_charge: 0.0,
            labor_charge: 0.0,
            gst_percent: 18.0,
        }
    }
}

/// Customer-facing quotation totals.
///
/// ## JSON Example
///
/// ```json
/// {
///   "subtotal": 10207.89,
///   "tax_amount": 1837.42,
///   "grand_total": 12045.31
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quotation {
    /// Final cost plus delivery and labor
    pub subtotal: f64,

    /// GST on the subtotal
    pub tax_amount: f64,

    /// Subtotal plus tax
    pub grand_total: f64,
}

/// Compute the quotation totals from an estimate and flat charges.
///
/// Pure arithmetic, no rounding; the display layer formats to two decimals.
pub fn compute_quotation(estimate: &EstimateResult, charges: &QuotationCharges) -> Quotation {
    let subtotal = estimate.final_cost + charges.delivery_charge + charges.labor_charge;
    let tax_amount = subtotal * (charges.gst_percent / 100.0);
    let grand_total = subtotal + tax_amount;

    Quotation {
        subtotal,
        tax_amount,
        grand_total,
    }
}
