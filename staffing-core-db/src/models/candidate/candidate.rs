use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use staffing_core_api::domain::{Candidate, CandidateSubmission};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::utils::{bounded, bounded_opt};

/// # Documentation
/// - Row of the `candidats` table.
/// - Every column except names and timestamps is nullable: rows created by
///   earlier tools may lack them.
/// - `id` is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateModel {
    pub id: Uuid,
    pub last_name: HeaplessString<400>,
    pub first_name: HeaplessString<400>,
    pub email: Option<HeaplessString<1020>>,
    pub phone: Option<HeaplessString<200>>,
    pub vehicle_owner: Option<bool>,
    pub active: Option<bool>,
    pub sectors: Option<Vec<String>>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for CandidateModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<CandidateModel> for Candidate {
    fn from(model: CandidateModel) -> Self {
        Candidate {
            id: model.id,
            last_name: model.last_name.to_string(),
            first_name: model.first_name.to_string(),
            email: model.email.map(|v| v.to_string()),
            phone: model.phone.map(|v| v.to_string()),
            vehicle_owner: model.vehicle_owner,
            active: model.active,
            sectors: model.sectors.map(|codes| codes.into_iter().collect()),
            date_of_birth: model.date_of_birth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// # Documentation
/// - Full set of editable columns written on every update.
/// - There is no partial patch: `update_by_id` overwrites all of these.
/// - `created_at` is absent on purpose, an update never touches it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub last_name: HeaplessString<400>,
    pub first_name: HeaplessString<400>,
    pub email: Option<HeaplessString<1020>>,
    pub phone: Option<HeaplessString<200>>,
    pub vehicle_owner: bool,
    pub active: bool,
    /// Sorted, no duplicates
    pub sectors: Vec<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

impl CandidateRecord {
    pub fn from_submission(
        submission: &CandidateSubmission,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            last_name: bounded(&submission.last_name, "nom")?,
            first_name: bounded(&submission.first_name, "prenom")?,
            email: bounded_opt(submission.email.as_deref(), "email")?,
            phone: bounded_opt(submission.phone.as_deref(), "telephone")?,
            vehicle_owner: submission.vehicle_owner,
            active: submission.active,
            sectors: submission.sectors.iter().cloned().collect(),
            date_of_birth: submission.date_of_birth,
            updated_at,
        })
    }
}

/// Insert payload: the editable columns plus the creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidateModel {
    pub record: CandidateRecord,
    pub created_at: DateTime<Utc>,
}

impl NewCandidateModel {
    /// Stamps both timestamps with the same instant.
    pub fn from_submission(
        submission: &CandidateSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            record: CandidateRecord::from_submission(submission, now)?,
            created_at: now,
        })
    }

    /// Row the store would hold once `id` is assigned.
    pub fn into_model(self, id: Uuid) -> CandidateModel {
        CandidateModel {
            id,
            last_name: self.record.last_name,
            first_name: self.record.first_name,
            email: self.record.email,
            phone: self.record.phone,
            vehicle_owner: Some(self.record.vehicle_owner),
            active: Some(self.record.active),
            sectors: Some(self.record.sectors),
            date_of_birth: self.record.date_of_birth,
            created_at: self.created_at,
            updated_at: self.record.updated_at,
        }
    }
}

impl CandidateModel {
    /// Overwrites every editable column with `record`. `created_at` is kept.
    pub fn apply(&mut self, record: CandidateRecord) {
        self.last_name = record.last_name;
        self.first_name = record.first_name;
        self.email = record.email;
        self.phone = record.phone;
        self.vehicle_owner = Some(record.vehicle_owner);
        self.active = Some(record.active);
        self.sectors = Some(record.sectors);
        self.date_of_birth = record.date_of_birth;
        self.updated_at = record.updated_at;
    }
}
