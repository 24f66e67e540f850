use chrono::NaiveDate;
use std::collections::BTreeSet;
use validator::Validate;

use super::candidate::Candidate;
use crate::error::{ApiError, ApiResult};

pub const LAST_NAME_MAX: u64 = 100;
pub const FIRST_NAME_MAX: u64 = 100;
pub const EMAIL_MAX: u64 = 255;
pub const PHONE_MAX: u64 = 50;

/// Working copy of a candidate's fields while a dialog is open.
///
/// Fields hold raw form values: empty strings stand for "not set". A draft is
/// never mutated in place; every change goes through [`apply_change`] and
/// yields a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_owner: bool,
    pub active: bool,
    pub sectors: BTreeSet<String>,
    /// `YYYY-MM-DD` or empty
    pub date_of_birth: String,
}

/// A single edit applied to a [`Draft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    LastName(String),
    FirstName(String),
    Email(String),
    Phone(String),
    DateOfBirth(String),
    VehicleOwner(bool),
    Active(bool),
    ToggleSector(String),
    Sectors(BTreeSet<String>),
}

impl Default for Draft {
    fn default() -> Self {
        Self::blank()
    }
}

impl Draft {
    /// Draft for a brand new candidate: active, no vehicle, no sectors.
    pub fn blank() -> Self {
        Self {
            last_name: String::new(),
            first_name: String::new(),
            email: String::new(),
            phone: String::new(),
            vehicle_owner: false,
            active: true,
            sectors: BTreeSet::new(),
            date_of_birth: String::new(),
        }
    }

    /// Copies a stored candidate, replacing every null attribute by its form default.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            last_name: candidate.last_name.clone(),
            first_name: candidate.first_name.clone(),
            email: candidate.email.clone().unwrap_or_default(),
            phone: candidate.phone.clone().unwrap_or_default(),
            vehicle_owner: candidate.vehicle_owner.unwrap_or(false),
            active: candidate.active.unwrap_or(true),
            sectors: candidate.sectors.clone().unwrap_or_default(),
            date_of_birth: candidate
                .date_of_birth
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    /// Adds `code` when absent, removes it when present. Codes are not checked here.
    pub fn toggle_sector(&self, code: &str) -> Self {
        let mut sectors = self.sectors.clone();
        if !sectors.remove(code) {
            sectors.insert(code.to_string());
        }
        Self {
            sectors,
            ..self.clone()
        }
    }

    pub fn with(&self, change: FieldChange) -> Self {
        apply_change(self, change)
    }

    /// Checks the draft and converts it into the values that get persisted.
    pub fn validate(&self) -> ApiResult<CandidateSubmission> {
        let date_of_birth = match self.date_of_birth.trim() {
            "" => None,
            raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ApiError::Validation(format!("date of birth '{raw}' is not a YYYY-MM-DD date"))
            })?),
        };

        let submission = CandidateSubmission {
            last_name: self.last_name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            email: non_empty(&self.email),
            phone: non_empty(&self.phone),
            vehicle_owner: self.vehicle_owner,
            active: self.active,
            sectors: self.sectors.clone(),
            date_of_birth,
        };

        submission
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(submission)
    }
}

/// Pure reducer for the editor form.
pub fn apply_change(draft: &Draft, change: FieldChange) -> Draft {
    match change {
        FieldChange::LastName(last_name) => Draft {
            last_name,
            ..draft.clone()
        },
        FieldChange::FirstName(first_name) => Draft {
            first_name,
            ..draft.clone()
        },
        FieldChange::Email(email) => Draft {
            email,
            ..draft.clone()
        },
        FieldChange::Phone(phone) => Draft {
            phone,
            ..draft.clone()
        },
        FieldChange::DateOfBirth(date_of_birth) => Draft {
            date_of_birth,
            ..draft.clone()
        },
        FieldChange::VehicleOwner(vehicle_owner) => Draft {
            vehicle_owner,
            ..draft.clone()
        },
        FieldChange::Active(active) => Draft {
            active,
            ..draft.clone()
        },
        FieldChange::ToggleSector(code) => draft.toggle_sector(&code),
        FieldChange::Sectors(sectors) => Draft {
            sectors,
            ..draft.clone()
        },
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Validated draft content, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CandidateSubmission {
    #[validate(length(min = 1, max = LAST_NAME_MAX, message = "last name is required"))]
    pub last_name: String,
    #[validate(length(min = 1, max = FIRST_NAME_MAX, message = "first name is required"))]
    pub first_name: String,
    #[validate(email(message = "email is not valid"), length(max = EMAIL_MAX))]
    pub email: Option<String>,
    #[validate(length(max = PHONE_MAX))]
    pub phone: Option<String>,
    pub vehicle_owner: bool,
    pub active: bool,
    pub sectors: BTreeSet<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn filled() -> Draft {
        Draft::blank()
            .with(FieldChange::LastName("Martin".to_string()))
            .with(FieldChange::FirstName("Lea".to_string()))
    }

    #[test]
    fn test_blank_draft_defaults() {
        let draft = Draft::blank();
        assert!(draft.last_name.is_empty());
        assert!(draft.email.is_empty());
        assert!(!draft.vehicle_owner);
        assert!(draft.active);
        assert!(draft.sectors.is_empty());
        assert!(draft.date_of_birth.is_empty());
    }

    #[test]
    fn test_from_candidate_substitutes_nulls() {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            last_name: "Durand".to_string(),
            first_name: "Paul".to_string(),
            email: None,
            phone: None,
            vehicle_owner: None,
            active: None,
            sectors: None,
            date_of_birth: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let draft = Draft::from_candidate(&candidate);
        assert_eq!(draft.last_name, "Durand");
        assert_eq!(draft.email, "");
        assert_eq!(draft.phone, "");
        assert!(draft.sectors.is_empty());
        assert_eq!(draft.date_of_birth, "");
        assert!(!draft.vehicle_owner);
        assert!(draft.active);
    }

    #[test]
    fn test_from_candidate_copies_values() {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            last_name: "Durand".to_string(),
            first_name: "Paul".to_string(),
            email: Some("paul@example.com".to_string()),
            phone: Some("0601020304".to_string()),
            vehicle_owner: Some(true),
            active: Some(false),
            sectors: Some(BTreeSet::from(["plonge".to_string()])),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 14),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let draft = Draft::from_candidate(&candidate);
        assert_eq!(draft.email, "paul@example.com");
        assert!(draft.vehicle_owner);
        assert!(!draft.active);
        assert!(draft.sectors.contains("plonge"));
        assert_eq!(draft.date_of_birth, "1990-03-14");
    }

    #[test]
    fn test_toggle_sector_twice_restores_original() {
        let original = filled().toggle_sector("cuisine");
        for code in ["cuisine", "salle", "unknown"] {
            let toggled = original.toggle_sector(code).toggle_sector(code);
            assert_eq!(toggled.sectors, original.sectors);
        }
    }

    #[test]
    fn test_toggle_sector_accepts_unknown_codes() {
        let draft = filled().with(FieldChange::ToggleSector("bar".to_string()));
        assert!(draft.sectors.contains("bar"));
    }

    #[test]
    fn test_apply_change_leaves_source_untouched() {
        let draft = filled();
        let changed = apply_change(&draft, FieldChange::Active(false));
        assert!(draft.active);
        assert!(!changed.active);
        assert_eq!(changed.last_name, draft.last_name);
    }

    #[test]
    fn test_validate_normalizes_optional_fields() {
        let submission = filled()
            .with(FieldChange::Email("  ".to_string()))
            .with(FieldChange::Phone(" 0601 ".to_string()))
            .with(FieldChange::DateOfBirth("1995-07-02".to_string()))
            .validate()
            .unwrap();
        assert_eq!(submission.email, None);
        assert_eq!(submission.phone.as_deref(), Some("0601"));
        assert_eq!(submission.date_of_birth, NaiveDate::from_ymd_opt(1995, 7, 2));
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let result = Draft::blank()
            .with(FieldChange::FirstName("Lea".to_string()))
            .with(FieldChange::LastName("   ".to_string()))
            .validate();
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_email_and_date() {
        let bad_email = filled().with(FieldChange::Email("not-an-email".to_string()));
        assert!(matches!(bad_email.validate(), Err(ApiError::Validation(_))));

        let bad_date = filled().with(FieldChange::DateOfBirth("14/03/1990".to_string()));
        assert!(matches!(bad_date.validate(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_overlong_last_name() {
        let draft = filled().with(FieldChange::LastName("x".repeat(101)));
        assert!(matches!(draft.validate(), Err(ApiError::Validation(_))));
    }
}
