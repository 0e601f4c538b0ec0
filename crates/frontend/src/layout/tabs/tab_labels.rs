//! Tab labels - single source of truth for tab titles.
//!
//! Record collections take their names from `contracts`; form and
//! dashboard tabs are spelled out here.

use contracts::domain::a001_academic_year::aggregate as a001;
use contracts::domain::a002_admission_inquiry::aggregate as a002;
use contracts::domain::a003_room_type::aggregate as a003;
use contracts::domain::a004_leave_request::aggregate as a004;
use contracts::domain::a005_teacher::aggregate as a005;

/// Marker between collection key and record id in detail tab keys
pub const DETAILS_SEPARATOR: &str = "_details_";

/// Title of a static tab key; empty when the key is not known.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Records ───────────────────────────────────────────────────────
        "a001_academic_year" => a001::LIST_NAME,
        "a002_admission_inquiry" => a002::LIST_NAME,
        "a003_room_type" => a003::LIST_NAME,
        "a004_leave_request" => a004::LIST_NAME,
        "a005_teacher" => a005::LIST_NAME,

        // ── Forms ─────────────────────────────────────────────────────────
        "a002_admission_inquiry_new" => "New Inquiry",
        "a004_leave_request_new" => "New Leave Request",
        "a005_teacher_new" => "Add Teacher",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_school_overview" => "Overview",

        _ => "",
    }
}

/// Singular record name of a collection (for detail tabs).
pub fn entity_element_name(collection_key: &str) -> &'static str {
    match collection_key {
        "a001_academic_year" => a001::ELEMENT_NAME,
        "a002_admission_inquiry" => a002::ELEMENT_NAME,
        "a003_room_type" => a003::ELEMENT_NAME,
        "a004_leave_request" => a004::ELEMENT_NAME,
        "a005_teacher" => a005::ELEMENT_NAME,
        _ => "",
    }
}

/// Detail tab title: «<entity> · <identifier>».
///
/// `detail_tab_label("Teacher", "EMP-011")` → `"Teacher · EMP-011"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Split `a005_teacher_details_EMP-011` into `("a005_teacher", "EMP-011")`
pub fn split_detail_key(key: &str) -> Option<(&str, &str)> {
    key.split_once(DETAILS_SEPARATOR)
        .filter(|(collection, id)| !collection.is_empty() && !id.is_empty())
}

/// Title for any tab key, including detail tabs; falls back to the key.
pub fn tab_title_for_key(key: &str) -> String {
    let label = tab_label_for_key(key);
    if !label.is_empty() {
        return label.to_string();
    }
    match split_detail_key(key) {
        Some((collection, id)) if !entity_element_name(collection).is_empty() => {
            detail_tab_label(entity_element_name(collection), id)
        }
        _ => key.to_string(),
    }
}
