use super::aggregate::{RoomCategory, RoomType, RoomTypeStatus};
use crate::domain::common::ymd;

#[allow(clippy::too_many_arguments)]
fn room(
    id: &str,
    name: &str,
    category: RoomCategory,
    capacity: u32,
    price: f64,
    area: f64,
    condition: &str,
    code: &str,
    created_at: (i32, u32, u32),
    status: RoomTypeStatus,
) -> RoomType {
    RoomType {
        id: id.to_string(),
        name: name.to_string(),
        category,
        capacity,
        price,
        area,
        condition: condition.to_string(),
        code: code.to_string(),
        created_at: ymd(created_at.0, created_at.1, created_at.2),
        status,
    }
}

pub fn room_types() -> Vec<RoomType> {
    use RoomCategory::*;
    use RoomTypeStatus::*;
    vec![
        room("RT-001", "Single Occupancy", Premium, 1, 9500.0, 12.0, "Excellent", "SGL-01", (2023, 1, 10), Active),
        room("RT-002", "Twin Sharing", Regular, 2, 6500.0, 16.5, "Good", "TWN-02", (2023, 1, 12), Active),
        room("RT-003", "Triple Sharing", Economy, 3, 4800.0, 20.0, "Good", "TRP-03", (2023, 2, 3), Active),
        room("RT-004", "Dormitory", Economy, 8, 2500.0, 42.0, "Fair", "DRM-08", (2023, 2, 20), Active),
        room("RT-005", "Deluxe Single", Vip, 1, 14000.0, 18.0, "Excellent", "DLX-01", (2023, 3, 15), Active),
        room("RT-006", "Quad Sharing", Regular, 4, 4200.0, 26.0, "Needs Repair", "QAD-04", (2023, 4, 1), Inactive),
        room("RT-007", "Twin Deluxe", Premium, 2, 8800.0, 19.5, "Good", "TWD-02", (2023, 6, 8), Active),
        room("RT-008", "Staff Suite", Vip, 2, 16500.0, 30.0, "Excellent", "STF-02", (2023, 7, 22), Inactive),
        room("RT-009", "Sick Bay Ward", Regular, 6, 0.0, 35.0, "Good", "SBW-06", (2023, 9, 1), Active),
    ]
}
