//! Deadline formatting with localized month abbreviations

use crate::catalog::Catalog;
use crate::error::I18nResult;
use chrono::{Datelike, NaiveDate};

/// Format `date` as `MMM dd, yyyy` using the catalog's month names.
pub fn format_deadline(catalog: &Catalog, date: NaiveDate) -> I18nResult<String> {
    let month = catalog.message(&format!("month-{}", date.month()))?;
    Ok(format!("{month} {:02}, {:04}", date.day(), date.year()))
}
