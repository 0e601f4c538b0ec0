use super::snapshot::SchoolSnapshot;
use crate::domain::a002_admission_inquiry::aggregate::{AdmissionInquiry, InquiryStatus};
use crate::domain::a004_leave_request::aggregate::{LeaveRequest, LeaveStatus};
use crate::domain::a005_teacher::aggregate::{Teacher, TeacherStatus};
use crate::shared::indicators::{
    change_percent, percent_of, IndicatorId, IndicatorMeta, IndicatorStatus, IndicatorValue,
    StatCardData, ValueFormat,
};

/// Attendance below this share of enrolled students is flagged
const ATTENDANCE_WARNING_PCT: f64 = 90.0;
const ATTENDANCE_BAD_PCT: f64 = 75.0;
/// Hostel almost full
const OCCUPANCY_WARNING_PCT: f64 = 95.0;
const PENDING_LEAVE_WARNING: usize = 5;

/// Everything the overview cards are computed from
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewInput {
    pub snapshot: SchoolSnapshot,
    pub teachers_total: usize,
    pub teachers_on_leave: usize,
    pub pending_admissions: usize,
    pub follow_ups: usize,
    pub pending_leave_requests: usize,
}

impl OverviewInput {
    pub fn from_records(
        snapshot: SchoolSnapshot,
        teachers: &[Teacher],
        inquiries: &[AdmissionInquiry],
        leave_requests: &[LeaveRequest],
    ) -> Self {
        let count_inquiries =
            |wanted: &[InquiryStatus]| inquiries.iter().filter(|i| wanted.contains(&i.status)).count();
        Self {
            snapshot,
            teachers_total: teachers.len(),
            teachers_on_leave: teachers
                .iter()
                .filter(|t| t.status == TeacherStatus::OnLeave)
                .count(),
            pending_admissions: count_inquiries(&[InquiryStatus::New, InquiryStatus::InProcess]),
            follow_ups: count_inquiries(&[InquiryStatus::FollowUp]),
            pending_leave_requests: leave_requests
                .iter()
                .filter(|l| l.status == LeaveStatus::Pending)
                .count(),
        }
    }
}

fn meta(id: &str, label: &str, icon: &str, format: ValueFormat) -> IndicatorMeta {
    IndicatorMeta {
        id: IndicatorId::new(id),
        label: label.to_string(),
        icon: icon.to_string(),
        format,
    }
}

fn card(
    meta: IndicatorMeta,
    value: Option<f64>,
    previous_value: Option<f64>,
    status: IndicatorStatus,
    subtitle: Option<String>,
) -> StatCardData {
    let change = match (value, previous_value) {
        (Some(v), Some(p)) => change_percent(v, p),
        _ => None,
    };
    StatCardData {
        value: IndicatorValue {
            id: meta.id.clone(),
            value,
            previous_value,
            change_percent: change,
            status,
            subtitle,
        },
        meta,
    }
}

fn attendance_status(pct: Option<f64>) -> IndicatorStatus {
    match pct {
        Some(p) if p >= ATTENDANCE_WARNING_PCT => IndicatorStatus::Good,
        Some(p) if p >= ATTENDANCE_BAD_PCT => IndicatorStatus::Warning,
        Some(_) => IndicatorStatus::Bad,
        None => IndicatorStatus::Neutral,
    }
}

/// Growth is good, a drop is a warning
fn trend_status(change: Option<f64>) -> IndicatorStatus {
    match change {
        Some(c) if c > 0.0 => IndicatorStatus::Good,
        Some(c) if c < 0.0 => IndicatorStatus::Warning,
        _ => IndicatorStatus::Neutral,
    }
}

/// Stat cards of the school overview page, in display order
pub fn overview_cards(input: &OverviewInput) -> Vec<StatCardData> {
    let s = &input.snapshot;
    let enrolled = s.students_enrolled as f64;
    let enrolled_last_term = s.students_enrolled_last_term as f64;

    let attendance_today = percent_of(s.present_today as f64, enrolled);
    let attendance_yesterday = percent_of(s.present_yesterday as f64, enrolled);

    let occupancy = percent_of(s.hostel_beds_occupied as f64, s.hostel_beds as f64);
    let occupancy_status = match occupancy {
        Some(p) if p >= OCCUPANCY_WARNING_PCT => IndicatorStatus::Warning,
        Some(_) => IndicatorStatus::Good,
        None => IndicatorStatus::Neutral,
    };

    let leave_status = if input.pending_leave_requests > PENDING_LEAVE_WARNING {
        IndicatorStatus::Warning
    } else {
        IndicatorStatus::Neutral
    };

    vec![
        card(
            meta("students", "Total Students", "users", ValueFormat::Integer),
            Some(enrolled),
            Some(enrolled_last_term),
            trend_status(change_percent(enrolled, enrolled_last_term)),
            Some("vs last term".to_string()),
        ),
        card(
            meta("teachers", "Total Teachers", "user", ValueFormat::Integer),
            Some(input.teachers_total as f64),
            None,
            IndicatorStatus::Neutral,
            Some(format!("{} on leave", input.teachers_on_leave)),
        ),
        card(
            meta("attendance", "Today's Attendance", "check-circle", ValueFormat::Percent { decimals: 1 }),
            attendance_today,
            attendance_yesterday,
            attendance_status(attendance_today),
            Some(format!("{} of {} present", s.present_today, s.students_enrolled)),
        ),
        card(
            meta("transport", "Transport Routes", "truck", ValueFormat::Integer),
            Some(s.transport_routes as f64),
            None,
            IndicatorStatus::Neutral,
            Some(format!("{} vehicles", s.transport_vehicles)),
        ),
        card(
            meta("hostel", "Hostel Occupancy", "home", ValueFormat::Percent { decimals: 0 }),
            occupancy,
            None,
            occupancy_status,
            Some(format!("{} / {} beds", s.hostel_beds_occupied, s.hostel_beds)),
        ),
        card(
            meta("admissions", "Pending Admissions", "file-text", ValueFormat::Integer),
            Some(input.pending_admissions as f64),
            None,
            IndicatorStatus::Neutral,
            Some(format!("{} follow-ups", input.follow_ups)),
        ),
        card(
            meta("leave", "Pending Leave Requests", "calendar", ValueFormat::Integer),
            Some(input.pending_leave_requests as f64),
            None,
            leave_status,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_school_overview::school_snapshot;
    use crate::domain::a002_admission_inquiry::fixtures::admission_inquiries;
    use crate::domain::a004_leave_request::fixtures::leave_requests;
    use crate::domain::a005_teacher::fixtures::teachers;

    fn input() -> OverviewInput {
        OverviewInput::from_records(
            school_snapshot(),
            &teachers(),
            &admission_inquiries(),
            &leave_requests(),
        )
    }

    fn find<'a>(cards: &'a [StatCardData], id: &str) -> &'a StatCardData {
        cards
            .iter()
            .find(|c| c.meta.id.0 == id)
            .expect("card present")
    }

    #[test]
    fn test_counts_come_from_records() {
        let input = input();
        assert_eq!(input.teachers_total, teachers().len());
        let expected_pending = admission_inquiries()
            .iter()
            .filter(|i| matches!(i.status, InquiryStatus::New | InquiryStatus::InProcess))
            .count();
        assert_eq!(input.pending_admissions, expected_pending);
    }

    #[test]
    fn test_seven_cards_in_order() {
        let cards = overview_cards(&input());
        let ids: Vec<&str> = cards.iter().map(|c| c.meta.id.0.as_str()).collect();
        assert_eq!(
            ids,
            vec!["students", "teachers", "attendance", "transport", "hostel", "admissions", "leave"]
        );
    }

    #[test]
    fn test_attendance_status_thresholds() {
        let mut input = input();
        input.snapshot.students_enrolled = 100;
        input.snapshot.present_today = 80;
        let cards = overview_cards(&input);
        let attendance = find(&cards, "attendance");
        assert_eq!(attendance.value.value, Some(80.0));
        assert_eq!(attendance.value.status, IndicatorStatus::Warning);

        input.snapshot.present_today = 50;
        let cards = overview_cards(&input);
        assert_eq!(find(&cards, "attendance").value.status, IndicatorStatus::Bad);
    }

    #[test]
    fn test_empty_hostel_has_no_value() {
        let mut input = input();
        input.snapshot.hostel_beds = 0;
        input.snapshot.hostel_beds_occupied = 0;
        let cards = overview_cards(&input);
        let hostel = find(&cards, "hostel");
        assert_eq!(hostel.value.value, None);
        assert_eq!(hostel.value.status, IndicatorStatus::Neutral);
    }

    #[test]
    fn test_student_change_against_last_term() {
        let mut input = input();
        input.snapshot.students_enrolled = 110;
        input.snapshot.students_enrolled_last_term = 100;
        let cards = overview_cards(&input);
        let change = find(&cards, "students").value.change_percent.unwrap();
        assert!((change - 10.0).abs() < 1e-9);
        assert_eq!(find(&cards, "students").value.status, IndicatorStatus::Good);
    }

    #[test]
    fn test_enrolment_drop_is_a_warning() {
        let mut input = input();
        input.snapshot.students_enrolled = 90;
        input.snapshot.students_enrolled_last_term = 100;
        let cards = overview_cards(&input);
        let students = find(&cards, "students");
        assert!(students.value.change_percent.unwrap() < 0.0);
        assert_eq!(students.value.status, IndicatorStatus::Warning);

        input.snapshot.students_enrolled = 100;
        let cards = overview_cards(&input);
        assert_eq!(find(&cards, "students").value.status, IndicatorStatus::Neutral);
    }
}
