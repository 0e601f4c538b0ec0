use super::aggregate::{AdmissionInquiry, InquiryStatus};
use crate::domain::common::ymd;

#[allow(clippy::too_many_arguments)]
fn inquiry(
    id: &str,
    student_name: &str,
    guardian_name: &str,
    contact: &str,
    email: &str,
    date_of_inquiry: (i32, u32, u32),
    source: &str,
    status: InquiryStatus,
    follow_up: Option<(i32, u32, u32)>,
    assigned_to: &str,
    campus: &str,
    previous_education: &str,
) -> AdmissionInquiry {
    AdmissionInquiry {
        id: id.to_string(),
        student_name: student_name.to_string(),
        guardian_name: guardian_name.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        date_of_inquiry: ymd(date_of_inquiry.0, date_of_inquiry.1, date_of_inquiry.2),
        source: source.to_string(),
        status,
        follow_up_date: follow_up.map(|(y, m, d)| ymd(y, m, d)),
        assigned_to: assigned_to.to_string(),
        campus: campus.to_string(),
        previous_education: previous_education.to_string(),
    }
}

pub fn admission_inquiries() -> Vec<AdmissionInquiry> {
    use InquiryStatus::*;
    vec![
        inquiry("INQ-001", "Aarav Sharma", "Rajesh Sharma", "+91 98765 43210", "rajesh.sharma@example.com", (2024, 4, 2), "Website", New, Some((2024, 4, 9)), "Priya Nair", "Main Campus", "Grade 4, Green Valley School"),
        inquiry("INQ-002", "Diya Patel", "Meena Patel", "+91 91234 56780", "meena.patel@example.com", (2024, 4, 3), "Walk-in", InProcess, Some((2024, 4, 10)), "Anil Kumar", "North Campus", "Kindergarten"),
        inquiry("INQ-003", "Kabir Singh", "Harpreet Singh", "+91 99887 66554", "h.singh@example.com", (2024, 4, 5), "Referral", FollowUp, Some((2024, 4, 15)), "Priya Nair", "Main Campus", "Grade 7, St. Mary's"),
        inquiry("INQ-004", "Ananya Iyer", "Lakshmi Iyer", "+91 90000 11122", "lakshmi.iyer@example.com", (2024, 4, 6), "Phone", Closed, None, "Rahul Verma", "City Campus", "Grade 2, Little Flowers"),
        inquiry("INQ-005", "Vihaan Gupta", "Sanjay Gupta", "+91 98111 22233", "sanjay.g@example.com", (2024, 4, 8), "Social Media", New, Some((2024, 4, 12)), "Anil Kumar", "Main Campus", "Grade 9, Delhi Public School"),
        inquiry("INQ-006", "Ishita Reddy", "Kiran Reddy", "+91 97777 88899", "kiran.reddy@example.com", (2024, 4, 9), "Advertisement", InProcess, Some((2024, 4, 16)), "Rahul Verma", "North Campus", "Grade 5, Oakridge"),
        inquiry("INQ-007", "Arjun Nair", "Suresh Nair", "+91 96666 55544", "suresh.nair@example.com", (2024, 4, 11), "Website", FollowUp, Some((2024, 4, 18)), "Priya Nair", "City Campus", "Grade 10, Kendriya Vidyalaya"),
        inquiry("INQ-008", "Saanvi Joshi", "Neha Joshi", "+91 95555 44433", "neha.joshi@example.com", (2024, 4, 12), "Referral", Closed, None, "Anil Kumar", "Main Campus", "Nursery"),
        inquiry("INQ-009", "Reyansh Das", "Amit Das", "+91 94444 33322", "amit.das@example.com", (2024, 4, 14), "Walk-in", New, Some((2024, 4, 21)), "Rahul Verma", "North Campus", "Grade 3, Carmel Convent"),
        inquiry("INQ-010", "Myra Khan", "Farah Khan", "+91 93333 22211", "farah.khan@example.com", (2024, 4, 15), "Phone", InProcess, Some((2024, 4, 22)), "Priya Nair", "City Campus", "Grade 6, Bishop Cotton"),
        inquiry("INQ-011", "Advik Menon", "Ravi Menon", "+91 92222 11100", "ravi.menon@example.com", (2024, 4, 17), "Website", New, None, "Anil Kumar", "Main Campus", "Grade 1, Podar International"),
    ]
}
