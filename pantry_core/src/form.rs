//! # Entry Form
//!
//! The state engine behind the "add ingredient" form. An [`EntryForm`] owns
//! one [`SelectionState`] and borrows a read-only [`CategoryCatalog`]; every
//! edit goes through one of its methods, which applies the cascade and date
//! rules before returning.
//!
//! ## Rules
//!
//! - Choosing a category clears the subcategory and the item name.
//! - Choosing a subcategory copies its label into the item name once; later
//!   name edits are never overwritten by anything but another selection.
//! - The purchase date may not be after today.
//! - An expiration date before the purchase date is moved to the purchase date.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry_core::catalog::CategoryCatalog;
//! use pantry_core::form::EntryForm;
//!
//! let catalog = CategoryCatalog::default_catalog().unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
//! let mut form = EntryForm::with_today(catalog, today);
//!
//! form.select_category_by_value("dairy").unwrap();
//! form.select_sub_category_by_value("milk").unwrap();
//! assert_eq!(form.state().item_name(), "Milk");
//!
//! form.set_item_name("Whole Milk");
//! let record = form.assemble();
//! assert_eq!(record.item_name, "Whole Milk");
//! ```

use chrono::{Local, NaiveDate};
use log::{debug, info};

use crate::catalog::{CategoryCatalog, CategoryOption};
use crate::dates::{check_purchase_date, format_date, DateRange};
use crate::errors::{PantryError, PantryResult};
use crate::record::{assemble, IngredientRecord};
use crate::selection::{FormSettings, SelectionState, StorageState};

/// One open entry form session.
#[derive(Debug, Clone)]
pub struct EntryForm<'a> {
    catalog: &'a CategoryCatalog,
    settings: FormSettings,
    today: NaiveDate,
    state: SelectionState,
}

impl<'a> EntryForm<'a> {
    /// Open a form dated with the local calendar day.
    pub fn new(catalog: &'a CategoryCatalog) -> Self {
        Self::with_today(catalog, Local::now().date_naive())
    }

    /// Open a form with an explicit "today" (tests, replays, time-zone overrides).
    pub fn with_today(catalog: &'a CategoryCatalog, today: NaiveDate) -> Self {
        Self::with_settings(catalog, FormSettings::default(), today)
    }

    pub fn with_settings(catalog: &'a CategoryCatalog, settings: FormSettings, today: NaiveDate) -> Self {
        let state = SelectionState::new(today, settings.default_storage);
        EntryForm {
            catalog,
            settings,
            today,
            state,
        }
    }

    pub fn catalog(&self) -> &'a CategoryCatalog {
        self.catalog
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Current state, for rendering
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Cascade
    // ------------------------------------------------------------------

    /// Set the top-level category (or clear it).
    ///
    /// The subcategory and item name are always cleared, even when the same
    /// category is chosen again.
    pub fn select_category(&mut self, category: Option<CategoryOption>) {
        debug!(
            "select_category: {:?} -> {:?}",
            self.state.category.as_ref().map(|c| &c.value),
            category.as_ref().map(|c| &c.value)
        );
        self.state.category = category;
        self.state.sub_category = None;
        self.state.item_name.clear();
    }

    /// Select a top-level category by its catalog value
    pub fn select_category_by_value(&mut self, value: &str) -> PantryResult<()> {
        let category = self
            .catalog
            .category(value)
            .cloned()
            .ok_or_else(|| PantryError::unknown_category(value))?;
        self.select_category(Some(category));
        Ok(())
    }

    /// Set the subcategory (or clear it).
    ///
    /// A present option overwrites the item name with its label; clearing
    /// leaves the name as it is. Options that are not listed under the active
    /// category are rejected and the state is left unchanged.
    pub fn select_sub_category(&mut self, sub_category: Option<CategoryOption>) -> PantryResult<()> {
        let Some(option) = sub_category else {
            debug!("select_sub_category: cleared");
            self.state.sub_category = None;
            return Ok(());
        };

        let category = self
            .state
            .category
            .as_ref()
            .ok_or(PantryError::NoCategorySelected)?;
        if !self.catalog.contains_sub_category(&category.value, &option) {
            return Err(PantryError::sub_category_mismatch(&category.value, &option.value));
        }

        debug!("select_sub_category: {} -> name '{}'", option.value, option.label);
        self.state.item_name = option.label.clone();
        self.state.sub_category = Some(option);
        Ok(())
    }

    /// Select a subcategory of the active category by its catalog value
    pub fn select_sub_category_by_value(&mut self, value: &str) -> PantryResult<()> {
        let category = self
            .state
            .category
            .as_ref()
            .ok_or(PantryError::NoCategorySelected)?;
        let option = self
            .catalog
            .sub_category(&category.value, value)
            .cloned()
            .ok_or_else(|| PantryError::sub_category_mismatch(&category.value, value))?;
        self.select_sub_category(Some(option))
    }

    /// Whether `category` has a subcategory level at all
    pub fn has_sub_categories(&self, category: &CategoryOption) -> bool {
        self.catalog.has_sub_categories(category)
    }

    /// Subcategories to offer for the active category (empty when none is chosen)
    pub fn sub_category_options(&self) -> &'a [CategoryOption] {
        match &self.state.category {
            Some(category) => self.catalog.sub_categories(&category.value),
            None => &[],
        }
    }

    /// True while the item name is still the label copied from the subcategory.
    ///
    /// A text input can select its whole content on focus in this case, so
    /// typing replaces the derived name instead of appending to it.
    pub fn name_is_derived(&self) -> bool {
        self.state
            .sub_category
            .as_ref()
            .is_some_and(|s| s.label == self.state.item_name)
    }

    // ------------------------------------------------------------------
    // Free fields
    // ------------------------------------------------------------------

    pub fn set_item_name(&mut self, name: impl Into<String>) {
        self.state.item_name = name.into();
    }

    pub fn set_storage(&mut self, storage: StorageState) {
        self.state.storage = storage;
    }

    // ------------------------------------------------------------------
    // Dates
    // ------------------------------------------------------------------

    /// Latest selectable purchase date
    pub fn purchase_date_max(&self) -> NaiveDate {
        self.today
    }

    /// Earliest selectable expiration date
    pub fn expiration_date_min(&self) -> NaiveDate {
        self.state.purchase_date
    }

    /// Set the purchase date; an earlier expiration date is pulled forward.
    ///
    /// Dates after today are rejected and leave the state unchanged.
    pub fn set_purchase_date(&mut self, date: NaiveDate) -> PantryResult<()> {
        self.set_dates(date, self.state.expiration_date)
    }

    /// Set the expiration date; a date before the purchase date is moved to it.
    pub fn set_expiration_date(&mut self, date: NaiveDate) {
        self.apply_dates(self.state.purchase_date, Some(date));
    }

    pub fn clear_expiration_date(&mut self) {
        self.state.expiration_date = None;
    }

    /// Replace both dates in one step.
    pub fn set_dates(&mut self, purchase: NaiveDate, expiration: Option<NaiveDate>) -> PantryResult<()> {
        check_purchase_date(purchase, self.today)?;
        self.apply_dates(purchase, expiration);
        Ok(())
    }

    fn apply_dates(&mut self, purchase: NaiveDate, expiration: Option<NaiveDate>) {
        let range = DateRange::repaired(purchase, expiration);
        debug_assert!(range.is_ordered());
        if let (Some(wanted), Some(kept)) = (expiration, range.expiration) {
            if wanted != kept {
                info!(
                    "expiration date {} pulled forward to purchase date {}",
                    format_date(wanted),
                    format_date(kept)
                );
            }
        }
        debug!("dates: purchase {} expiration {:?}", format_date(range.purchase), range.expiration);
        self.state.purchase_date = range.purchase;
        self.state.expiration_date = range.expiration;
    }

    // ------------------------------------------------------------------
    // Assembly
    // ------------------------------------------------------------------

    /// Snapshot the current state as a record
    pub fn assemble(&self) -> IngredientRecord {
        assemble(&self.state)
    }

    /// Confirm the form: assemble the record, log it, and close the session.
    pub fn submit(self) -> PantryResult<IngredientRecord> {
        let record = self.assemble();
        info!("ingredient submitted: {}", serde_json::to_string(&record)?);
        Ok(record)
    }
}
