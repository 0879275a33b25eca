//! Page metadata conventions.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"u508_finance_screening--usecase"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `usecases/u508_finance_screening/` directory.

/// Use-case action page (uploads, imports).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
