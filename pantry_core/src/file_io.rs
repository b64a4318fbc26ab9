//! # Catalog Files
//!
//! Loading and saving category catalogs as JSON configuration.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "categories": [{ "value": "dairy", "label": "Dairy", "image_url": "/images/dairy.png" }],
//!   "sub_categories": {
//!     "dairy": [{ "value": "milk", "label": "Milk", "image_url": "/images/milk.png" }]
//!   }
//! }
//! ```
//!
//! `imageUrl` is accepted as an alias for `image_url`. Saves are atomic:
//! write to a `.tmp` sibling, sync, then rename over the target.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::CategoryCatalog;
use crate::errors::{PantryError, PantryResult};

/// Current schema version for catalog files
pub const CATALOG_SCHEMA_VERSION: &str = "0.1.0";

/// On-disk wrapper adding the schema version
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    version: String,
    #[serde(flatten)]
    catalog: CategoryCatalog,
}

/// Parse and validate a catalog from a JSON string.
pub fn parse_catalog_str(json: &str) -> PantryResult<CategoryCatalog> {
    let file: CatalogFile = serde_json::from_str(json)?;
    check_version(&file.version)?;
    file.catalog.validate()?;
    Ok(file.catalog)
}

/// Load a catalog from a JSON file.
///
/// ```rust,no_run
/// use pantry_core::file_io::load_catalog;
/// use std::path::Path;
///
/// let catalog = load_catalog(Path::new("catalog.json"))?;
/// println!("{} categories", catalog.categories().len());
/// # Ok::<(), pantry_core::errors::PantryError>(())
/// ```
pub fn load_catalog(path: &Path) -> PantryResult<CategoryCatalog> {
    let contents = fs::read_to_string(path).map_err(|e| {
        PantryError::file_error("read", path.display().to_string(), e.to_string())
    })?;
    let catalog = parse_catalog_str(&contents)?;
    debug!(
        "loaded catalog from {} ({} categories)",
        path.display(),
        catalog.categories().len()
    );
    Ok(catalog)
}

/// Save a catalog to a file with atomic write semantics.
pub fn save_catalog(catalog: &CategoryCatalog, path: &Path) -> PantryResult<()> {
    let file = CatalogFile {
        version: CATALOG_SCHEMA_VERSION.to_string(),
        catalog: catalog.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        PantryError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        PantryError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        PantryError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    drop(tmp_file);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PantryError::file_error("rename temp file", path.display().to_string(), e.to_string())
    })?;

    debug!("saved catalog to {}", path.display());
    Ok(())
}

/// Only the major component has to match.
fn check_version(file_version: &str) -> PantryResult<()> {
    let major = |v: &str| v.split('.').next().map(str::to_string);
    if major(file_version) != major(CATALOG_SCHEMA_VERSION) {
        return Err(PantryError::VersionMismatch {
            file_version: file_version.to_string(),
            expected_version: CATALOG_SCHEMA_VERSION.to_string(),
        });
    }
    Ok(())
}
