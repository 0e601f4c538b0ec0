//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a005_teacher--list"`) and a
//! `data-page-category` taken from the constants below.

/// Record explorer: table with toolbar and pagination
pub const PAGE_CAT_LIST: &str = "list";

/// Single record, read-only
pub const PAGE_CAT_DETAIL: &str = "detail";

/// New-record form
pub const PAGE_CAT_FORM: &str = "form";

/// Stat cards overview
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";
