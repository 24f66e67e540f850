use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use staffing_core_api::domain::{OperatorAccount, OperatorSubmission};
use uuid::Uuid;

use crate::models::Identifiable;
use crate::utils::bounded;

/// # Documentation
/// - Row of the `utilisateurs` table.
/// - Passwords are held by the authentication provider, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorAccountModel {
    pub id: Uuid,
    pub first_name: HeaplessString<400>,
    pub last_name: HeaplessString<400>,
    pub email: HeaplessString<1020>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identifiable for OperatorAccountModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<OperatorAccountModel> for OperatorAccount {
    fn from(model: OperatorAccountModel) -> Self {
        OperatorAccount {
            id: model.id,
            first_name: model.first_name.to_string(),
            last_name: model.last_name.to_string(),
            email: model.email.to_string(),
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorAccountRecord {
    pub first_name: HeaplessString<400>,
    pub last_name: HeaplessString<400>,
    pub email: HeaplessString<1020>,
    pub active: bool,
    pub updated_at: DateTime<Utc>,
}

impl OperatorAccountRecord {
    pub fn from_submission(
        submission: &OperatorSubmission,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            first_name: bounded(&submission.first_name, "prenom")?,
            last_name: bounded(&submission.last_name, "nom")?,
            email: bounded(&submission.email, "email")?,
            active: submission.active,
            updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOperatorAccountModel {
    pub record: OperatorAccountRecord,
    pub created_at: DateTime<Utc>,
}

impl NewOperatorAccountModel {
    pub fn from_submission(submission: &OperatorSubmission, now: DateTime<Utc>) -> Result<Self, String> {
        Ok(Self {
            record: OperatorAccountRecord::from_submission(submission, now)?,
            created_at: now,
        })
    }

    pub fn into_model(self, id: Uuid) -> OperatorAccountModel {
        OperatorAccountModel {
            id,
            first_name: self.record.first_name,
            last_name: self.record.last_name,
            email: self.record.email,
            active: self.record.active,
            created_at: self.created_at,
            updated_at: self.record.updated_at,
        }
    }
}
