use super::aggregate::{Teacher, TeacherStatus};
use crate::domain::common::ymd;

#[allow(clippy::too_many_arguments)]
fn teacher(
    id: &str,
    full_name: &str,
    email: &str,
    phone: &str,
    subject: &str,
    department: &str,
    joined: (i32, u32, u32),
    status: TeacherStatus,
) -> Teacher {
    Teacher {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        subject: subject.to_string(),
        department: department.to_string(),
        joining_date: ymd(joined.0, joined.1, joined.2),
        status,
    }
}

pub fn teachers() -> Vec<Teacher> {
    use TeacherStatus::*;
    vec![
        teacher("EMP-008", "Fatima Sheikh", "fatima.sheikh@school.edu", "+91 98450 10008", "English", "Languages", (2015, 6, 1), OnLeave),
        teacher("EMP-011", "Arvind Pillai", "arvind.pillai@school.edu", "+91 98450 10011", "Mathematics", "Mathematics", (2016, 7, 15), Active),
        teacher("EMP-014", "Sunita Rao", "sunita.rao@school.edu", "+91 98450 10014", "Biology", "Science", (2017, 6, 1), Active),
        teacher("EMP-019", "Rahul Verma", "rahul.verma@school.edu", "+91 98450 10019", "History", "Social Studies", (2018, 4, 2), Active),
        teacher("EMP-023", "Anita Desai", "anita.desai@school.edu", "+91 98450 10023", "Chemistry", "Science", (2018, 6, 11), Active),
        teacher("EMP-027", "Manoj Tiwari", "manoj.tiwari@school.edu", "+91 98450 10027", "Mathematics", "Mathematics", (2019, 7, 1), Active),
        teacher("EMP-031", "Kavita Menon", "kavita.menon@school.edu", "+91 98450 10031", "Hindi", "Languages", (2019, 8, 19), Active),
        teacher("EMP-036", "Pooja Bhatt", "pooja.bhatt@school.edu", "+91 98450 10036", "English", "Languages", (2020, 6, 1), Active),
        teacher("EMP-042", "Deepak Yadav", "deepak.yadav@school.edu", "+91 98450 10042", "Physical Education", "Sports", (2020, 11, 9), Active),
        teacher("EMP-044", "Sanjana Ghosh", "sanjana.ghosh@school.edu", "+91 98450 10044", "Computer Science", "Science", (2021, 6, 14), Active),
        teacher("EMP-051", "Harish Chandra", "harish.chandra@school.edu", "+91 98450 10051", "Geography", "Social Studies", (2022, 4, 4), Inactive),
        teacher("EMP-058", "Lata Mangeshkar", "lata.m@school.edu", "+91 98450 10058", "Physics", "Science", (2023, 6, 5), Active),
    ]
}
