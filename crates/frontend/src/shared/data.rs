//! Record stores of the running session, shared through Leptos context.

use contracts::domain::a001_academic_year::{aggregate::AcademicYear, fixtures::academic_years};
use contracts::domain::a002_admission_inquiry::{
    aggregate::AdmissionInquiry, fixtures::admission_inquiries,
};
use contracts::domain::a003_room_type::{aggregate::RoomType, fixtures::room_types};
use contracts::domain::a004_leave_request::{aggregate::LeaveRequest, fixtures::leave_requests};
use contracts::domain::a005_teacher::{aggregate::Teacher, fixtures::teachers};
use contracts::shared::repository::{InMemoryRepository, RecordRepository};
use contracts::shared::table::TableRecord;
use leptos::prelude::*;
use std::sync::Arc;

pub type Repo<T> = Arc<dyn RecordRepository<T>>;

#[derive(Clone)]
pub struct SchoolData {
    pub academic_years: Repo<AcademicYear>,
    pub admission_inquiries: Repo<AdmissionInquiry>,
    pub room_types: Repo<RoomType>,
    pub leave_requests: Repo<LeaveRequest>,
    pub teachers: Repo<Teacher>,
    /// Bumped after every mutation so views re-read the stores
    pub revision: RwSignal<u64>,
}

fn seed<T>(name: &str, records: Vec<T>) -> Repo<T>
where
    T: TableRecord + Send + Sync + 'static,
{
    match InMemoryRepository::new(records) {
        Ok(repo) => {
            log::debug!("seeded {} with {} record(s)", name, repo.len());
            Arc::new(repo)
        }
        Err(e) => {
            log::error!("failed to seed {}: {}", name, e);
            Arc::new(InMemoryRepository::empty())
        }
    }
}

impl SchoolData {
    pub fn seeded() -> Self {
        Self {
            academic_years: seed("academic years", academic_years()),
            admission_inquiries: seed("admission inquiries", admission_inquiries()),
            room_types: seed("room types", room_types()),
            leave_requests: seed("leave requests", leave_requests()),
            teachers: seed("teachers", teachers()),
            revision: RwSignal::new(0),
        }
    }

    pub fn touch(&self) {
        self.revision.update(|r| *r += 1);
    }
}
