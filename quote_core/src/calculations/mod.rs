//! # Estimation Calculations
//!
//! The two stages of the pricing pipeline. Each stage follows the pattern:
//!
//! - `*Input` / charge parameters - JSON-serializable inputs
//! - `*Result` - JSON-serializable derived values
//! - `compute_*(input, ...) -> Result` - pure calculation function
//!
//! Data flows strictly forward: an [`estimate::EstimateResult`] feeds
//! [`quotation::compute_quotation`]; nothing holds state between calls, so
//! recomputing on every form change is safe and idempotent.
//!
//! ## Available Calculations
//!
//! - [`estimate`] - dimensions → weights → cost → margin/discount
//! - [`quotation`] - charges → subtotal → GST → grand total

pub mod estimate;
pub mod quotation;

// Re-export commonly used types
pub use estimate::{compute_estimate, EstimateInput, EstimateResult};
pub use quotation::{compute_quotation, Quotation, QuotationCharges};
