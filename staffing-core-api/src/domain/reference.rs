use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Reference list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReferenceCategory {
    #[serde(rename = "service")]
    Service,
    #[serde(rename = "groupe")]
    Group,
    #[serde(rename = "tenue")]
    Uniform,
}

impl ReferenceCategory {
    pub const ALL: [ReferenceCategory; 3] = [
        ReferenceCategory::Service,
        ReferenceCategory::Group,
        ReferenceCategory::Uniform,
    ];

    /// Value of the `categorie` column.
    pub fn code(&self) -> &'static str {
        match self {
            ReferenceCategory::Service => "service",
            ReferenceCategory::Group => "groupe",
            ReferenceCategory::Uniform => "tenue",
        }
    }
}

impl fmt::Display for ReferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ReferenceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(ReferenceCategory::Service),
            "groupe" => Ok(ReferenceCategory::Group),
            "tenue" => Ok(ReferenceCategory::Uniform),
            _ => Err(format!("Unknown reference category: {s}")),
        }
    }
}

/// Anything the settings screen can delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingsEntity {
    Reference(ReferenceCategory),
    Operator,
}

impl fmt::Display for SettingsEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsEntity::Reference(category) => write!(f, "{category}"),
            SettingsEntity::Operator => f.write_str("utilisateur"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: Uuid,
    #[serde(rename = "categorie")]
    pub category: ReferenceCategory,
    #[serde(rename = "valeur")]
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Back-office user. Credentials live with the authentication provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorAccount {
    pub id: Uuid,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "actif")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated content of a reference entry form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ReferenceSubmission {
    #[validate(length(min = 1, max = 100, message = "value is required"))]
    pub value: String,
    #[validate(length(max = 255))]
    pub description: Option<String>,
}

impl ReferenceSubmission {
    /// Trims both fields; a blank description becomes `None`.
    pub fn new(value: &str, description: Option<&str>) -> ApiResult<Self> {
        let submission = Self {
            value: value.trim().to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };
        submission
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(submission)
    }
}

/// Validated content of an operator account form. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct OperatorSubmission {
    #[validate(length(min = 1, max = 100, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "email is not valid"), length(max = 255))]
    pub email: String,
    pub active: bool,
}

impl OperatorSubmission {
    pub fn new(first_name: &str, last_name: &str, email: &str, active: bool) -> ApiResult<Self> {
        let submission = Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.trim().to_string(),
            active,
        };
        submission
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(submission)
    }
}
