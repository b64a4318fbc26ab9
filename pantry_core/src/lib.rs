//! # pantry_core - Ingredient Entry Engine
//!
//! `pantry_core` holds the state rules behind an "add ingredient" form: a
//! two-level category selection that cascades, a free-text item name seeded
//! from the chosen subcategory, a storage state, and a purchase/expiration
//! date range that always stays ordered.
//!
//! ## Design Philosophy
//!
//! - **Total edits**: every edit either applies fully or is rejected with the
//!   state untouched; order-inconsistent dates are repaired, not rejected
//! - **Injected catalog**: categories are read-only configuration
//! - **JSON-First**: state, records, and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry_core::{CategoryCatalog, EntryForm, StorageState};
//!
//! let catalog = CategoryCatalog::default_catalog().unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
//! let mut form = EntryForm::with_today(catalog, today);
//!
//! form.select_category_by_value("meat").unwrap();
//! form.select_sub_category_by_value("chicken").unwrap();
//! form.set_storage(StorageState::Frozen);
//! form.set_expiration_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
//!
//! let record = form.submit().unwrap();
//! assert_eq!(record.item_name, "Chicken");
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Category options and the two-level lookup table
//! - [`selection`] - Mutable form state, storage states, form settings
//! - [`form`] - The entry form engine (cascade and date rules)
//! - [`dates`] - Date range repair and date parsing helpers
//! - [`record`] - Submission payload assembly
//! - [`file_io`] - Catalog configuration files
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod dates;
pub mod errors;
pub mod file_io;
pub mod form;
pub mod record;
pub mod selection;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CategoryCatalog, CategoryOption};
pub use errors::{PantryError, PantryResult};
pub use file_io::{load_catalog, save_catalog};
pub use form::EntryForm;
pub use record::IngredientRecord;
pub use selection::{FormSettings, SelectionState, StorageState};
