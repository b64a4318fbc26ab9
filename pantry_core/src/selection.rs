//! # Selection State
//!
//! The mutable record behind the ingredient entry form, plus the form-wide
//! settings that seed it.
//!
//! ## Structure
//!
//! ```text
//! SelectionState
//! ├── category / sub_category: Option<CategoryOption>
//! ├── item_name: String (free text, seeded from the subcategory label)
//! ├── storage: StorageState (Refrigerated | Frozen)
//! └── purchase_date / expiration_date: NaiveDate / Option<NaiveDate>
//! ```
//!
//! Fields are read-only from outside the crate; every change goes through
//! [`EntryForm`](crate::form::EntryForm) so the cascade and date rules run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryOption;
use crate::errors::{PantryError, PantryResult};

/// Physical storage condition of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageState {
    #[default]
    Refrigerated,
    Frozen,
}

impl StorageState {
    /// All storage states in selector order
    pub const ALL: [StorageState; 2] = [StorageState::Refrigerated, StorageState::Frozen];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StorageState::Refrigerated => "Refrigerated",
            StorageState::Frozen => "Frozen",
        }
    }

    /// Parse from common string representations, including the Korean
    /// button labels (냉장 / 냉동).
    pub fn from_str_flexible(s: &str) -> PantryResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "REFRIGERATED" | "FRIDGE" | "CHILLED" | "R" | "냉장" => Ok(StorageState::Refrigerated),
            "FROZEN" | "FREEZER" | "F" | "냉동" => Ok(StorageState::Frozen),
            _ => Err(PantryError::invalid_input(
                "storage",
                s,
                "Expected REFRIGERATED or FROZEN",
            )),
        }
    }
}

impl std::fmt::Display for StorageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Form-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Storage state a fresh form starts with
    pub default_storage: StorageState,

    /// chrono format string used for date input and display
    pub date_format: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        FormSettings {
            default_storage: StorageState::Refrigerated,
            date_format: crate::dates::DATE_FORMAT.to_string(),
        }
    }
}

/// Current contents of the entry form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub(crate) category: Option<CategoryOption>,
    pub(crate) sub_category: Option<CategoryOption>,
    pub(crate) item_name: String,
    pub(crate) storage: StorageState,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) expiration_date: Option<NaiveDate>,
}

impl SelectionState {
    /// Fresh state for a form opened on `today`
    pub fn new(today: NaiveDate, storage: StorageState) -> Self {
        SelectionState {
            category: None,
            sub_category: None,
            item_name: String::new(),
            storage,
            purchase_date: today,
            expiration_date: None,
        }
    }

    pub fn category(&self) -> Option<&CategoryOption> {
        self.category.as_ref()
    }

    pub fn sub_category(&self) -> Option<&CategoryOption> {
        self.sub_category.as_ref()
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn storage(&self) -> StorageState {
        self.storage
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        self.expiration_date
    }
}
