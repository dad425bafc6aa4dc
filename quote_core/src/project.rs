//! # Project Store
//!
//! Named snapshots of estimate inputs. The store keeps a verbatim copy of
//! the [`EstimateInput`] the user was editing — results are never persisted
//! because they are recomputed from the inputs on load.
//!
//! Records are keyed by name + save timestamp and the store keeps only the
//! 20 most recent; saving the 21st evicts the oldest.
//!
//! ## Structure
//!
//! ```text
//! ProjectStore
//! ├── meta: StoreMetadata (version, company, prepared_by, timestamps)
//! ├── settings: QuoteSettings (currency, default GST, default rate)
//! └── records: Vec<ProjectRecord> (newest first, capped at 20)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quote_core::calculations::estimate::EstimateInput;
//! use quote_core::project::ProjectStore;
//!
//! let mut store = ProjectStore::new("Acme Fabricators", "sales@acme.example");
//! let id = store.save_record("Mehta residence W-1", EstimateInput::default()).unwrap();
//! assert!(store.find_by_id(&id).is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::estimate::EstimateInput;
use crate::errors::{QuoteError, QuoteResult};

/// Current schema version for .fen files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Maximum number of saved records; older entries are evicted
pub const MAX_RECORDS: usize = 20;

/// Root store container, serialized to `.fen` files as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStore {
    /// Store metadata (version, company, preparer)
    pub meta: StoreMetadata,

    /// Store-level defaults for new estimates
    pub settings: QuoteSettings,

    /// Saved input snapshots, newest first
    pub records: Vec<ProjectRecord>,
}

impl ProjectStore {
    /// Create a new empty store.
    ///
    /// # Arguments
    ///
    /// * `company` - Fabricator/company name shown on quotations
    /// * `prepared_by` - Who prepares quotes from this store
    pub fn new(company: impl Into<String>, prepared_by: impl Into<String>) -> Self {
        let now = Utc::now();
        ProjectStore {
            meta: StoreMetadata {
                version: SCHEMA_VERSION.to_string(),
                company: company.into(),
                prepared_by: prepared_by.into(),
                created: now,
                modified: now,
            },
            settings: QuoteSettings::default(),
            records: Vec::new(),
        }
    }

    /// Save an input snapshot under a name.
    ///
    /// The record is prepended (newest first); if the store is at capacity
    /// the oldest record is evicted. Blank names are rejected.
    ///
    /// Returns the UUID assigned to the record.
    pub fn save_record(
        &mut self,
        name: impl Into<String>,
        input: EstimateInput,
    ) -> QuoteResult<Uuid> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuoteError::invalid_input(
                "name",
                name,
                "Record name cannot be blank",
            ));
        }

        let record = ProjectRecord {
            id: Uuid::new_v4(),
            name,
            saved_at: Utc::now(),
            input,
        };
        let id = record.id;

        self.records.insert(0, record);
        self.records.truncate(MAX_RECORDS);
        self.touch();
        Ok(id)
    }

    /// Get a record by UUID.
    pub fn find_by_id(&self, id: &Uuid) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == *id)
    }

    /// Get the most recent record saved under a name.
    pub fn find_by_name(&self, name: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Remove a record by UUID. Returns the removed record if it existed.
    pub fn remove_record(&mut self, id: &Uuid) -> Option<ProjectRecord> {
        let index = self.records.iter().position(|r| r.id == *id)?;
        let record = self.records.remove(index);
        self.touch();
        Some(record)
    }

    /// Number of saved records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        ProjectStore::new("", "")
    }
}

/// Store metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Fabricator/company name
    pub company: String,

    /// Who prepares quotes from this store
    pub prepared_by: String,

    /// When the store was created
    pub created: DateTime<Utc>,

    /// When the store was last modified
    pub modified: DateTime<Utc>,
}

/// One saved input snapshot, keyed by name + timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable id for removal and reference
    pub id: Uuid,

    /// User-chosen record name (e.g., "Mehta residence W-1")
    pub name: String,

    /// When this snapshot was saved
    pub saved_at: DateTime<Utc>,

    /// Verbatim copy of the inputs being edited
    pub input: EstimateInput,
}

/// Store-level defaults for new estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSettings {
    /// ISO 4217 currency code used for display
    pub currency: String,

    /// Default GST percentage for new quotations
    pub default_gst_percent: f64,

    /// Default fabricated rate per kilogram
    pub default_cost_per_kg: f64,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        QuoteSettings {
            currency: "INR".to_string(),
            default_gst_percent: 18.0,
            default_cost_per_kg: 300.0,
        }
    }
}
