use crate::executor::Executor;
use crate::utils::TryFromRow;
use sqlx::{postgres::PgRow, Row};
use staffing_core_api::domain::ActionKind;
use staffing_core_db::models::audit::CandidateLogModel;
use std::error::Error;

pub struct CandidateLogRepositoryImpl {
    pub executor: Executor,
}

impl CandidateLogRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CandidateLogModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let action: String = row.try_get("type_action")?;
        Ok(CandidateLogModel {
            id: row.try_get("id")?,
            candidate_id: row.try_get("candidat_id")?,
            action: ActionKind::from(action.as_str()),
            detail: row.try_get("details")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
