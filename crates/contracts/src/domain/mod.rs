pub mod a001_academic_year;
pub mod a002_admission_inquiry;
pub mod a003_room_type;
pub mod a004_leave_request;
pub mod a005_teacher;
pub mod common;
