use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use staffing_core_db::models::candidate::CandidateModel;
use std::error::Error;

pub struct CandidateRepositoryImpl {
    pub executor: Executor,
}

impl CandidateRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CandidateModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(CandidateModel {
            id: row.try_get("id")?,
            last_name: get_heapless_string(row, "nom")?,
            first_name: get_heapless_string(row, "prenom")?,
            email: get_optional_heapless_string(row, "email")?,
            phone: get_optional_heapless_string(row, "telephone")?,
            vehicle_owner: row.try_get("vehicule")?,
            active: row.try_get("actif")?,
            sectors: row.try_get("secteurs")?,
            date_of_birth: row.try_get("date_naissance")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
