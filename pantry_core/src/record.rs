//! # Ingredient Record
//!
//! The finished payload handed to a submission collaborator. Assembly is a
//! pure projection of [`SelectionState`]: nothing is validated or mutated
//! here, and incomplete records (no category, empty name, no expiration)
//! pass through as they are.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::selection::{SelectionState, StorageState};

/// Immutable snapshot of a confirmed entry.
///
/// Dates serialize as `YYYY-MM-DD`; absent options serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Label of the chosen category
    pub category: Option<String>,
    /// Label of the chosen subcategory
    pub sub_category: Option<String>,
    pub item_name: String,
    pub storage: StorageState,
    pub purchase_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
}

/// Project the current state into a record.
pub fn assemble(state: &SelectionState) -> IngredientRecord {
    IngredientRecord {
        category: state.category().map(|c| c.label.clone()),
        sub_category: state.sub_category().map(|s| s.label.clone()),
        item_name: state.item_name().to_string(),
        storage: state.storage(),
        purchase_date: state.purchase_date(),
        expiration_date: state.expiration_date(),
    }
}

impl IngredientRecord {
    /// Pretty JSON for logging or dispatch
    pub fn to_json(&self) -> crate::errors::PantryResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryOption;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_assemble_empty_state() {
        let state = SelectionState::new(today(), StorageState::Refrigerated);
        let record = assemble(&state);
        assert_eq!(record.category, None);
        assert_eq!(record.sub_category, None);
        assert_eq!(record.item_name, "");
        assert_eq!(record.purchase_date, today());
        assert_eq!(record.expiration_date, None);
    }

    #[test]
    fn test_assemble_uses_labels() {
        let mut state = SelectionState::new(today(), StorageState::Frozen);
        state.category = Some(CategoryOption::new("dairy", "Dairy", "/d.png"));
        state.sub_category = Some(CategoryOption::new("milk", "Milk", "/m.png"));
        state.item_name = "Whole Milk".to_string();

        let record = assemble(&state);
        assert_eq!(record.category.as_deref(), Some("Dairy"));
        assert_eq!(record.sub_category.as_deref(), Some("Milk"));
        assert_eq!(record.item_name, "Whole Milk");
        assert_eq!(record.storage, StorageState::Frozen);
    }

    #[test]
    fn test_assemble_does_not_mutate() {
        let state = SelectionState::new(today(), StorageState::Refrigerated);
        let before = state.clone();
        let _ = assemble(&state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_record_json_shape() {
        let mut state = SelectionState::new(today(), StorageState::Refrigerated);
        state.expiration_date = NaiveDate::from_ymd_opt(2024, 1, 20);
        let json = assemble(&state).to_json().unwrap();
        assert!(json.contains("\"purchase_date\": \"2024-01-10\""));
        assert!(json.contains("\"expiration_date\": \"2024-01-20\""));
        assert!(json.contains("\"storage\": \"REFRIGERATED\""));
        assert!(json.contains("\"category\": null"));
    }
}
