use serde::{Deserialize, Serialize};

/// Figures the overview needs that have no record list of their own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolSnapshot {
    pub students_enrolled: u32,
    pub students_enrolled_last_term: u32,
    pub present_today: u32,
    pub present_yesterday: u32,
    pub transport_routes: u32,
    pub transport_vehicles: u32,
    pub hostel_beds: u32,
    pub hostel_beds_occupied: u32,
}

pub fn school_snapshot() -> SchoolSnapshot {
    SchoolSnapshot {
        students_enrolled: 1248,
        students_enrolled_last_term: 1196,
        present_today: 1162,
        present_yesterday: 1131,
        transport_routes: 18,
        transport_vehicles: 24,
        hostel_beds: 320,
        hostel_beds_occupied: 287,
    }
}
