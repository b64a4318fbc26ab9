//! # Date Range Rule
//!
//! Keeps the purchase/expiration pair ordered. The purchase date is always
//! kept as entered; an expiration date that falls before it is pulled forward
//! to the purchase date. Repair runs over the whole pair in one pure step so
//! callers never observe a half-applied edit.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pantry_core::dates::DateRange;
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
//!
//! let range = DateRange::repaired(d(1, 25), Some(d(1, 20)));
//! assert_eq!(range.expiration, Some(d(1, 25)));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PantryError, PantryResult};

/// Date format used by date inputs (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An ordered purchase/expiration pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub purchase: NaiveDate,
    pub expiration: Option<NaiveDate>,
}

impl DateRange {
    /// Build the repaired range for the intended pair of dates.
    pub fn repaired(purchase: NaiveDate, expiration: Option<NaiveDate>) -> Self {
        DateRange {
            purchase,
            expiration: expiration.map(|exp| exp.max(purchase)),
        }
    }

    /// True when the expiration date is absent or not before the purchase date
    pub fn is_ordered(&self) -> bool {
        self.expiration.map_or(true, |exp| exp >= self.purchase)
    }
}

/// Reject purchase dates after `today`.
pub fn check_purchase_date(date: NaiveDate, today: NaiveDate) -> PantryResult<()> {
    if date > today {
        return Err(PantryError::future_date(format_date(date), format_date(today)));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(input: &str) -> PantryResult<NaiveDate> {
    parse_date_with(input, DATE_FORMAT)
}

/// Parse a date string with an explicit chrono format
pub fn parse_date_with(input: &str, format: &str) -> PantryResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), format)
        .map_err(|e| PantryError::invalid_input("date", input, e.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    format_date_with(date, DATE_FORMAT)
}

/// Format a date with an explicit chrono format
pub fn format_date_with(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}
