//! # Category Catalog
//!
//! Read-only lookup table of top-level categories and their ordered
//! subcategories. The catalog is injected into an [`EntryForm`](crate::form::EntryForm)
//! and never mutated by the rules.
//!
//! ## Example
//!
//! ```rust
//! use pantry_core::catalog::{CategoryCatalog, CategoryOption};
//!
//! let dairy = CategoryOption::new("dairy", "Dairy", "/images/category/dairy.png");
//! let milk = CategoryOption::new("milk", "Milk", "/images/sub/milk.png");
//! let produce = CategoryOption::new("produce", "Produce", "/images/category/produce.png");
//!
//! let catalog = CategoryCatalog::builder()
//!     .category(dairy.clone(), vec![milk.clone()])
//!     .category(produce.clone(), vec![])
//!     .build()
//!     .unwrap();
//!
//! assert!(catalog.has_sub_categories(&dairy));
//! assert!(!catalog.has_sub_categories(&produce));
//! assert_eq!(catalog.sub_categories("dairy"), &[milk]);
//! ```

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{PantryError, PantryResult};
use crate::file_io::parse_catalog_str;

/// Embedded default catalog, used when no catalog file is configured
const DEFAULT_CATALOG_JSON: &str = include_str!("../data/default_catalog.json");

static DEFAULT_CATALOG: Lazy<PantryResult<CategoryCatalog>> =
    Lazy::new(|| parse_catalog_str(DEFAULT_CATALOG_JSON));

/// One selectable option: a top-level category or a subcategory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Stable identifier (e.g., "dairy", "milk")
    pub value: String,
    /// Display text; a subcategory's label seeds the item name
    pub label: String,
    /// Image resource shown next to the option
    #[serde(alias = "imageUrl")]
    pub image_url: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, image_url: impl Into<String>) -> Self {
        CategoryOption {
            value: value.into(),
            label: label.into(),
            image_url: image_url.into(),
        }
    }
}

/// Two-level category table.
///
/// `categories` keeps display order; `sub_categories` maps a category value to
/// its ordered subcategory list (keyed in sorted order so saved files are
/// stable). A category missing from the map (or mapped to
/// an empty list) has no subcategory level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<CategoryOption>,
    #[serde(default)]
    sub_categories: BTreeMap<String, Vec<CategoryOption>>,
}

impl CategoryCatalog {
    /// Start building a catalog in display order
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The embedded default catalog.
    ///
    /// Parsed once on first use and shared afterward.
    pub fn default_catalog() -> PantryResult<&'static CategoryCatalog> {
        let parsed: &'static PantryResult<CategoryCatalog> = &DEFAULT_CATALOG;
        parsed.as_ref().map_err(Clone::clone)
    }

    /// Top-level categories in display order
    pub fn categories(&self) -> &[CategoryOption] {
        &self.categories
    }

    /// Look up a top-level category by value
    pub fn category(&self, value: &str) -> Option<&CategoryOption> {
        self.categories.iter().find(|c| c.value == value)
    }

    /// Ordered subcategories of a category; empty for leaf or unknown categories
    pub fn sub_categories(&self, category_value: &str) -> &[CategoryOption] {
        self.sub_categories
            .get(category_value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a subcategory of `category_value` by its own value
    pub fn sub_category(&self, category_value: &str, value: &str) -> Option<&CategoryOption> {
        self.sub_categories(category_value)
            .iter()
            .find(|s| s.value == value)
    }

    /// Whether a subcategory selector should be offered for `category`
    pub fn has_sub_categories(&self, category: &CategoryOption) -> bool {
        !self.sub_categories(&category.value).is_empty()
    }

    /// Whether `option` is one of the subcategories listed under `category_value`
    pub fn contains_sub_category(&self, category_value: &str, option: &CategoryOption) -> bool {
        self.sub_categories(category_value).contains(option)
    }

    /// Check structural consistency after deserialization.
    ///
    /// Category values must be unique, every subcategory list must hang off a
    /// known category, and subcategory values must be unique within a list.
    pub fn validate(&self) -> PantryResult<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.value.is_empty() {
                return Err(PantryError::invalid_input(
                    "categories",
                    &category.label,
                    "Category value must not be empty",
                ));
            }
            if !seen.insert(category.value.as_str()) {
                return Err(PantryError::invalid_input(
                    "categories",
                    &category.value,
                    "Duplicate category value",
                ));
            }
        }

        for (category_value, subs) in &self.sub_categories {
            if !seen.contains(category_value.as_str()) {
                return Err(PantryError::unknown_category(category_value));
            }
            let mut sub_seen = HashSet::new();
            for sub in subs {
                if !sub_seen.insert(sub.value.as_str()) {
                    return Err(PantryError::invalid_input(
                        format!("sub_categories.{}", category_value),
                        &sub.value,
                        "Duplicate subcategory value",
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Builder that keeps category order and validates on `build`.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: CategoryCatalog,
}

impl CatalogBuilder {
    /// Append a category with its subcategories (may be empty)
    pub fn category(mut self, category: CategoryOption, sub_categories: Vec<CategoryOption>) -> Self {
        if !sub_categories.is_empty() {
            self.catalog
                .sub_categories
                .insert(category.value.clone(), sub_categories);
        }
        self.catalog.categories.push(category);
        self
    }

    pub fn build(self) -> PantryResult<CategoryCatalog> {
        self.catalog.validate()?;
        Ok(self.catalog)
    }
}
