use super::aggregate::{AcademicYear, AcademicYearStatus};
use crate::domain::common::ymd;

fn year(
    id: &str,
    label: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    description: &str,
    department: &str,
    status: AcademicYearStatus,
) -> AcademicYear {
    AcademicYear {
        id: id.to_string(),
        label: label.to_string(),
        start_date: ymd(start.0, start.1, start.2),
        end_date: ymd(end.0, end.1, end.2),
        description: description.to_string(),
        department: department.to_string(),
        status,
    }
}

pub fn academic_years() -> Vec<AcademicYear> {
    use AcademicYearStatus::*;
    vec![
        year("AY-001", "2024-2025", (2024, 4, 1), (2025, 3, 31), "Current academic session", "Senior Secondary", Active),
        year("AY-002", "2023-2024", (2023, 4, 1), (2024, 3, 31), "Previous academic session", "Senior Secondary", Inactive),
        year("AY-003", "2025-2026", (2025, 4, 1), (2026, 3, 31), "Upcoming session, timetable pending", "Senior Secondary", Planned),
        year("AY-004", "2024-2025", (2024, 6, 1), (2025, 4, 30), "Primary wing session", "Primary", Active),
        year("AY-005", "2024-2025", (2024, 6, 15), (2025, 5, 15), "Middle school session", "Middle School", Pending),
        year("AY-006", "2022-2023", (2022, 4, 1), (2023, 3, 31), "Archived session", "Senior Secondary", Inactive),
        year("AY-007", "2025-2026", (2025, 6, 1), (2026, 4, 30), "Primary wing, awaiting approval", "Primary", Pending),
        year("AY-008", "2026-2027", (2026, 4, 1), (2027, 3, 31), "Long-range planning", "Administration", Planned),
    ]
}
