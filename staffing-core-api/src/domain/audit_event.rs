use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Detail written with every `creation` event.
pub const RECORD_CREATED_DETAIL: &str = "record created";

/// Detail written with every `modification` event.
pub const RECORD_MODIFIED_DETAIL: &str = "record modified";

/// Kind of change an audit event records.
///
/// Rows written by other tools may carry kinds this build does not know;
/// those are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Creation,
    Modification,
    Other(String),
}

impl ActionKind {
    pub fn as_str(&self) -> &str {
        match self {
            ActionKind::Creation => "creation",
            ActionKind::Modification => "modification",
            ActionKind::Other(kind) => kind.as_str(),
        }
    }
}

impl From<&str> for ActionKind {
    fn from(value: &str) -> Self {
        match value {
            "creation" | "création" => ActionKind::Creation,
            "modification" => ActionKind::Modification,
            other => ActionKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn serialize_action_kind<S>(kind: &ActionKind, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(kind.as_str())
}

pub fn deserialize_action_kind<'de, D>(deserializer: D) -> Result<ActionKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(ActionKind::from(s.as_str()))
}

/// One immutable entry of a candidate's history.
///
/// The event references its candidate by id only; it does not own it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    pub id: Uuid,
    #[serde(rename = "candidat_id")]
    pub candidate_id: Uuid,
    #[serde(
        rename = "type_action",
        serialize_with = "serialize_action_kind",
        deserialize_with = "deserialize_action_kind"
    )]
    pub action: ActionKind,
    #[serde(rename = "details")]
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// One history line, e.g. `[01/05/2024 08:00] creation — record created`.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} — {}",
            self.created_at.format("%d/%m/%Y %H:%M"),
            self.action,
            self.detail
        )
    }
}
