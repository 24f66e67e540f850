use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use staffing_core_api::domain::{ReferenceCategory, ReferenceEntry, ReferenceSubmission};
use uuid::Uuid;

use crate::models::Identifiable;
use crate::utils::{bounded, bounded_opt};

/// # Documentation
/// - Row of the `parametrages` table; services, groups and uniforms share it.
/// - `category` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntryModel {
    pub id: Uuid,
    pub category: ReferenceCategory,
    pub value: HeaplessString<400>,
    pub description: Option<HeaplessString<1020>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for ReferenceEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<ReferenceEntryModel> for ReferenceEntry {
    fn from(model: ReferenceEntryModel) -> Self {
        ReferenceEntry {
            id: model.id,
            category: model.category,
            value: model.value.to_string(),
            description: model.description.map(|d| d.to_string()),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Editable columns of a reference entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntryRecord {
    pub value: HeaplessString<400>,
    pub description: Option<HeaplessString<1020>>,
    pub updated_at: DateTime<Utc>,
}

impl ReferenceEntryRecord {
    pub fn from_submission(
        submission: &ReferenceSubmission,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            value: bounded(&submission.value, "valeur")?,
            description: bounded_opt(submission.description.as_deref(), "description")?,
            updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReferenceEntryModel {
    pub category: ReferenceCategory,
    pub record: ReferenceEntryRecord,
    pub created_at: DateTime<Utc>,
}

impl NewReferenceEntryModel {
    pub fn from_submission(
        category: ReferenceCategory,
        submission: &ReferenceSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            category,
            record: ReferenceEntryRecord::from_submission(submission, now)?,
            created_at: now,
        })
    }

    pub fn into_model(self, id: Uuid) -> ReferenceEntryModel {
        ReferenceEntryModel {
            id,
            category: self.category,
            value: self.record.value,
            description: self.record.description,
            created_at: self.created_at,
            updated_at: self.record.updated_at,
        }
    }
}
