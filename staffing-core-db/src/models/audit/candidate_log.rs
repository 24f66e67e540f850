use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use staffing_core_api::domain::{
    deserialize_action_kind, serialize_action_kind, ActionKind, AuditEvent,
};
use uuid::Uuid;

use crate::models::Identifiable;

/// # Documentation
/// - Row of the `candidats_logs` table, one per successful candidate write.
/// - Append-only: rows are never updated or deleted.
/// - `candidate_id` references the candidate, it does not own it.
/// - The acting operator is not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLogModel {
    pub id: Uuid,
    pub candidate_id: Uuid,
    #[serde(
        serialize_with = "serialize_action_kind",
        deserialize_with = "deserialize_action_kind"
    )]
    pub action: ActionKind,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for CandidateLogModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl From<CandidateLogModel> for AuditEvent {
    fn from(model: CandidateLogModel) -> Self {
        AuditEvent {
            id: model.id,
            candidate_id: model.candidate_id,
            action: model.action,
            detail: model.detail,
            created_at: model.created_at,
        }
    }
}

/// Insert payload for `candidats_logs`; the store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCandidateLogModel {
    pub candidate_id: Uuid,
    #[serde(
        serialize_with = "serialize_action_kind",
        deserialize_with = "deserialize_action_kind"
    )]
    pub action: ActionKind,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl NewCandidateLogModel {
    pub fn into_model(self, id: Uuid) -> CandidateLogModel {
        CandidateLogModel {
            id,
            candidate_id: self.candidate_id,
            action: self.action,
            detail: self.detail,
            created_at: self.created_at,
        }
    }
}
