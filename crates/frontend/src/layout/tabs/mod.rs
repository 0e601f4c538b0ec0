//! Tab management module
//!
//! - `page` - TabPage wrapper around tab content
//! - `registry` - tab.key → View mapping (single source of truth)
//! - `tab_labels` - tab titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    detail_tab_label, entity_element_name, split_detail_key, tab_label_for_key,
    tab_title_for_key,
};
