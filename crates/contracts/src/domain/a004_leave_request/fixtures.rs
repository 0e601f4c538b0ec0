use super::aggregate::{LeaveRequest, LeaveStatus};
use crate::domain::common::ymd;
use crate::shared::forms::inclusive_day_count;
use chrono::NaiveDate;

type Ymd = (i32, u32, u32);

fn date((y, m, d): Ymd) -> NaiveDate {
    ymd(y, m, d)
}

#[allow(clippy::too_many_arguments)]
fn leave(
    id: &str,
    employee_name: &str,
    employee_id: &str,
    department: &str,
    leave_type: &str,
    from: Ymd,
    to: Ymd,
    duration_type: &str,
    status: LeaveStatus,
    reason: &str,
    requested_on: Ymd,
    approval: Option<(&str, Ymd)>,
) -> LeaveRequest {
    let (from, to) = (date(from), date(to));
    let days = inclusive_day_count(from, to).unwrap_or(0) as u32;
    LeaveRequest {
        id: id.to_string(),
        employee_name: employee_name.to_string(),
        employee_id: employee_id.to_string(),
        department: department.to_string(),
        leave_type: leave_type.to_string(),
        from,
        to,
        number_of_days: days,
        duration_type: duration_type.to_string(),
        status,
        reason: reason.to_string(),
        requested_on: date(requested_on),
        approved_by: approval.map(|(by, _)| by.to_string()),
        approval_date: approval.map(|(_, on)| date(on)),
    }
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    use LeaveStatus::*;
    vec![
        leave("LR-001", "Sunita Rao", "EMP-014", "Science", "Sick Leave", (2024, 3, 4), (2024, 3, 6), "Full Day", Approved, "Viral fever, doctor advised rest", (2024, 3, 3), Some(("Principal", (2024, 3, 3)))),
        leave("LR-002", "Manoj Tiwari", "EMP-027", "Mathematics", "Casual Leave", (2024, 3, 11), (2024, 3, 11), "Half Day", Pending, "Bank work in the afternoon", (2024, 3, 8), None),
        leave("LR-003", "Kavita Menon", "EMP-031", "Languages", "Earned Leave", (2024, 3, 18), (2024, 3, 22), "Full Day", Approved, "Family wedding out of state", (2024, 3, 1), Some(("Vice Principal", (2024, 3, 4)))),
        leave("LR-004", "Deepak Yadav", "EMP-042", "Sports", "Casual Leave", (2024, 3, 25), (2024, 3, 26), "Full Day", Rejected, "Personal errands before sports meet", (2024, 3, 20), Some(("Principal", (2024, 3, 21)))),
        leave("LR-005", "Fatima Sheikh", "EMP-008", "Administration", "Maternity Leave", (2024, 4, 1), (2024, 9, 27), "Full Day", Approved, "Maternity leave as per policy", (2024, 2, 15), Some(("Principal", (2024, 2, 20)))),
        leave("LR-006", "Rahul Verma", "EMP-019", "Social Studies", "Sick Leave", (2024, 4, 2), (2024, 4, 3), "Full Day", Pending, "Dental surgery and recovery", (2024, 4, 1), None),
        leave("LR-007", "Anita Desai", "EMP-023", "Science", "Casual Leave", (2024, 4, 8), (2024, 4, 8), "Full Day", Pending, "Child's school annual day", (2024, 4, 2), None),
        leave("LR-008", "Vikram Joshi", "EMP-055", "Transport", "Unpaid Leave", (2024, 4, 10), (2024, 4, 19), "Full Day", Rejected, "Extended travel to hometown", (2024, 3, 28), Some(("Administrator", (2024, 3, 30)))),
        leave("LR-009", "Pooja Bhatt", "EMP-036", "Languages", "Sick Leave", (2024, 4, 15), (2024, 4, 15), "Half Day", Approved, "Medical check-up appointment", (2024, 4, 12), Some(("Vice Principal", (2024, 4, 12)))),
        leave("LR-010", "Arvind Pillai", "EMP-011", "Mathematics", "Paternity Leave", (2024, 4, 22), (2024, 5, 3), "Full Day", Pending, "Birth of second child", (2024, 4, 10), None),
        leave("LR-011", "Neha Kulkarni", "EMP-048", "Administration", "Earned Leave", (2024, 5, 6), (2024, 5, 10), "Full Day", Approved, "Pre-planned family vacation", (2024, 4, 15), Some(("Principal", (2024, 4, 18)))),
        leave("LR-012", "Imran Qureshi", "EMP-060", "Transport", "Casual Leave", (2024, 5, 13), (2024, 5, 14), "Full Day", Pending, "Vehicle registration renewal", (2024, 5, 7), None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_days_match_date_range() {
        for r in leave_requests() {
            assert!(r.from <= r.to, "{}", r.id);
            assert_eq!(Some(r.number_of_days as i64), inclusive_day_count(r.from, r.to));
        }
    }
}
