//! # Error Types
//!
//! Structured error types for pantry_core. The rules themselves are total;
//! errors only come from boundary checks (a future purchase date, a
//! subcategory that does not belong to the active category) and from loading
//! catalog configuration.
//!
//! ## Example
//!
//! ```rust
//! use pantry_core::errors::{PantryError, PantryResult};
//!
//! fn require_label(label: &str) -> PantryResult<()> {
//!     if label.trim().is_empty() {
//!         return Err(PantryError::invalid_input("label", label, "Label must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_label("Milk").is_ok());
//! assert_eq!(require_label(" ").unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pantry_core operations
pub type PantryResult<T> = Result<T, PantryError>;

/// Structured error type for entry-form operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PantryError {
    /// An input value is malformed (bad date string, empty label, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A purchase date later than today was offered
    #[error("Purchase date {date} is after today ({today})")]
    FutureDate { date: String, today: String },

    /// Category value not present in the catalog
    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },

    /// Subcategory offered for a category it does not belong to
    #[error("Subcategory '{sub_category}' does not belong to category '{category}'")]
    SubCategoryMismatch {
        category: String,
        sub_category: String,
    },

    /// A subcategory was offered while no category is selected
    #[error("No category selected")]
    NoCategorySelected,

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Catalog schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl PantryError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PantryError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FutureDate error
    pub fn future_date(date: impl ToString, today: impl ToString) -> Self {
        PantryError::FutureDate {
            date: date.to_string(),
            today: today.to_string(),
        }
    }

    /// Create an UnknownCategory error
    pub fn unknown_category(value: impl Into<String>) -> Self {
        PantryError::UnknownCategory { value: value.into() }
    }

    /// Create a SubCategoryMismatch error
    pub fn sub_category_mismatch(category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        PantryError::SubCategoryMismatch {
            category: category.into(),
            sub_category: sub_category.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PantryError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised by a boundary check on a single edit; the
    /// state is untouched and the user can simply retry with another value.
    pub fn is_rejected_edit(&self) -> bool {
        matches!(
            self,
            PantryError::FutureDate { .. }
                | PantryError::SubCategoryMismatch { .. }
                | PantryError::NoCategorySelected
                | PantryError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PantryError::InvalidInput { .. } => "INVALID_INPUT",
            PantryError::FutureDate { .. } => "FUTURE_DATE",
            PantryError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            PantryError::SubCategoryMismatch { .. } => "SUB_CATEGORY_MISMATCH",
            PantryError::NoCategorySelected => "NO_CATEGORY_SELECTED",
            PantryError::FileError { .. } => "FILE_ERROR",
            PantryError::SerializationError { .. } => "SERIALIZATION_ERROR",
            PantryError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for PantryError {
    fn from(e: serde_json::Error) -> Self {
        PantryError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PantryError::future_date("2024-02-01", "2024-01-15");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"FutureDate\""));
        let roundtrip: PantryError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PantryError::unknown_category("x").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(PantryError::NoCategorySelected.error_code(), "NO_CATEGORY_SELECTED");
        assert_eq!(
            PantryError::sub_category_mismatch("dairy", "beef").error_code(),
            "SUB_CATEGORY_MISMATCH"
        );
    }

    #[test]
    fn test_rejected_edit_classification() {
        assert!(PantryError::future_date("2024-02-01", "2024-01-15").is_rejected_edit());
        assert!(!PantryError::file_error("read", "a.json", "missing").is_rejected_edit());
    }

    #[test]
    fn test_display_message() {
        let error = PantryError::sub_category_mismatch("dairy", "beef");
        assert_eq!(
            error.to_string(),
            "Subcategory 'beef' does not belong to category 'dairy'"
        );
    }
}
