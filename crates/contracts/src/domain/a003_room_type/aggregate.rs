use crate::domain::common::{format_date, RecordStatus};
use crate::shared::forms::{FormErrors, FormModel, ValidationRules};
use crate::shared::table::{compare_f64, compare_text, ColumnDef, Searchable, Sortable, TableRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const COLLECTION_KEY: &str = "a003_room_type";
pub const LIST_NAME: &str = "Room Types";
pub const ELEMENT_NAME: &str = "Room Type";

pub const CONDITIONS: &[&str] = &["Excellent", "Good", "Fair", "Needs Repair"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomCategory {
    Regular,
    Economy,
    Premium,
    #[serde(rename = "VIP")]
    Vip,
}

impl RecordStatus for RoomCategory {
    const ALL: &'static [Self] = &[Self::Regular, Self::Economy, Self::Premium, Self::Vip];
    const LABELS: &'static [&'static str] = &["Regular", "Economy", "Premium", "VIP"];

    fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Economy => "Economy",
            Self::Premium => "Premium",
            Self::Vip => "VIP",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::Regular => "neutral",
            Self::Economy => "neutral",
            Self::Premium => "primary",
            Self::Vip => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomTypeStatus {
    Active,
    Inactive,
}

impl RecordStatus for RoomTypeStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];
    const LABELS: &'static [&'static str] = &["Active", "Inactive"];

    fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    fn badge_variant(&self) -> &'static str {
        match self {
            Self::Active => "success",
            Self::Inactive => "error",
        }
    }
}

/// Hostel room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub category: RoomCategory,
    /// Beds per room
    pub capacity: u32,
    /// Monthly price per bed
    pub price: f64,
    /// Square metres
    pub area: f64,
    pub condition: String,
    pub code: String,
    pub created_at: NaiveDate,
    pub status: RoomTypeStatus,
}

impl Searchable for RoomType {
    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "category" => Some(self.category.label().to_string()),
            "capacity" => Some(self.capacity.to_string()),
            "price" => Some(format!("{:.2}", self.price)),
            "area" => Some(format!("{:.1}", self.area)),
            "condition" => Some(self.condition.clone()),
            "code" => Some(self.code.clone()),
            "created_at" => Some(format_date(self.created_at)),
            "status" => Some(self.status.label().to_string()),
            _ => None,
        }
    }
}

impl Sortable for RoomType {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "name" => compare_text(&self.name, &other.name),
            "category" => self.category.label().cmp(other.category.label()),
            "capacity" => self.capacity.cmp(&other.capacity),
            "price" => compare_f64(self.price, other.price),
            "area" => compare_f64(self.area, other.area),
            "condition" => compare_text(&self.condition, &other.condition),
            "code" => self.code.cmp(&other.code),
            "created_at" => self.created_at.cmp(&other.created_at),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRecord for RoomType {
    const COLUMNS: &'static [ColumnDef] = &[
        ColumnDef::text("code", "Code").pinned(),
        ColumnDef::text("name", "Room Type").pinned(),
        ColumnDef::status("category", "Category"),
        ColumnDef::number("capacity", "Capacity"),
        ColumnDef::number("price", "Price"),
        ColumnDef::number("area", "Area (m²)"),
        ColumnDef::text("condition", "Condition"),
        ColumnDef::date("created_at", "Created"),
        ColumnDef::status("status", "Status"),
    ];

    fn row_id(&self) -> &str {
        &self.id
    }

    fn badge_variant(&self, field: &str) -> Option<&'static str> {
        match field {
            "category" => Some(self.category.badge_variant()),
            "status" => Some(self.status.badge_variant()),
            _ => None,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Form values of the "Add Room Type" dialog
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoomTypeDto {
    pub name: String,
    pub category: String,
    pub capacity: String,
    pub price: String,
    pub area: String,
    pub condition: String,
    pub code: String,
    pub status: String,
}

impl FormModel for RoomTypeDto {
    fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.check_string(
            "name",
            "Room type name",
            &self.name,
            &ValidationRules::required().min_length(2).max_length(50),
        );
        errors.check_string(
            "category",
            "Category",
            &self.category,
            &ValidationRules::required().one_of(RoomCategory::LABELS),
        );
        errors.check_number(
            "capacity",
            "Capacity",
            &self.capacity,
            &ValidationRules::required().min(1.0).max(20.0),
        );
        errors.check_number(
            "price",
            "Price",
            &self.price,
            &ValidationRules::required().min(0.0),
        );
        errors.check_number("area", "Area", &self.area, &ValidationRules::none().min(0.0));
        errors.check_string(
            "condition",
            "Condition",
            &self.condition,
            &ValidationRules::required().one_of(CONDITIONS),
        );
        errors.check_string(
            "code",
            "Code",
            &self.code,
            &ValidationRules::required().min_length(2).max_length(10),
        );
        errors.check_string(
            "status",
            "Status",
            &self.status,
            &ValidationRules::required().one_of(RoomTypeStatus::LABELS),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_must_be_positive_number() {
        let dto = RoomTypeDto {
            name: "Twin Sharing".into(),
            category: "Regular".into(),
            capacity: "0".into(),
            price: "4500".into(),
            area: String::new(),
            condition: "Good".into(),
            code: "TS-02".into(),
            status: "Active".into(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("capacity"), Some("Capacity must be at least 1"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_vip_label() {
        assert_eq!(RoomCategory::from_label("VIP"), Some(RoomCategory::Vip));
        assert_eq!(serde_json::to_string(&RoomCategory::Vip).unwrap(), "\"VIP\"");
    }
}
