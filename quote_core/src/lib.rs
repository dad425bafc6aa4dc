//! # quote_core - Aluminium Window & Door Estimation Engine
//!
//! `quote_core` is the computational heart of Fenestra. It turns an opening's
//! dimensions and material choices into weights, costs, and a customer
//! quotation through a single pure-function pipeline, re-evaluated on every
//! input change.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take an input snapshot and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Defensive at the edge**: free-text numerics coerce to zero, unknown
//!   material names fail fast
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use quote_core::calculations::{compute_estimate, compute_quotation, EstimateInput, QuotationCharges};
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
//! let estimate = compute_estimate(&input, MaterialRates::standard());
//! let quotation = compute_quotation(&estimate, &QuotationCharges::default());
//!
//! println!("Grand total: {:.2}", quotation.grand_total);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The estimate and quotation pipeline
//! - [`materials`] - Glass, profile, and finish definitions with rate tables
//! - [`forms`] - Defensive parsing of free-text form fields
//! - [`project`] - Named input snapshots, capped at the 20 most recent
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - Store files with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod forms;
pub mod materials;
pub mod project;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    compute_estimate, compute_quotation, EstimateInput, EstimateResult, Quotation,
    QuotationCharges,
};
pub use errors::{QuoteError, QuoteResult};
pub use file_io::{load_store, save_store, FileLock};
pub use materials::{Finish, GlassType, MaterialRates, Profile};
pub use project::{ProjectRecord, ProjectStore, QuoteSettings};
