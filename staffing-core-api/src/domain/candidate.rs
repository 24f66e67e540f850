use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use super::draft::CandidateSubmission;
use super::sector::SectorCode;

/// A candidate as read back from the store.
///
/// Contact details, flags, sectors and birth date are nullable on read; the
/// editor substitutes defaults when it builds a draft from this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: Option<String>,
    #[serde(rename = "telephone")]
    pub phone: Option<String>,
    #[serde(rename = "vehicule")]
    pub vehicle_owner: Option<bool>,
    #[serde(rename = "actif")]
    pub active: Option<bool>,
    #[serde(rename = "secteurs")]
    pub sectors: Option<BTreeSet<String>>,
    #[serde(rename = "date_naissance")]
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Candidate {
    /// Sector tags this build can render, in display order. Unknown codes are skipped.
    pub fn recognized_sectors(&self) -> Vec<SectorCode> {
        let Some(sectors) = &self.sectors else {
            return Vec::new();
        };
        SectorCode::ALL
            .into_iter()
            .filter(|sector| sectors.contains(sector.code()))
            .collect()
    }

    /// Case-insensitive substring match on last name. An empty term matches everything.
    pub fn matches_last_name(&self, term: &str) -> bool {
        term.is_empty() || self.last_name.to_lowercase().contains(&term.to_lowercase())
    }

    /// The record as it reads after `submission` overwrote it at `updated_at`.
    pub fn with_submission(&self, submission: &CandidateSubmission, updated_at: DateTime<Utc>) -> Self {
        Self {
            id: self.id,
            last_name: submission.last_name.clone(),
            first_name: submission.first_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            vehicle_owner: Some(submission.vehicle_owner),
            active: Some(submission.active),
            sectors: Some(submission.sectors.clone()),
            date_of_birth: submission.date_of_birth,
            created_at: self.created_at,
            updated_at,
        }
    }
}
