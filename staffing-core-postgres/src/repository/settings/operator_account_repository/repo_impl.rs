use crate::executor::Executor;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use staffing_core_db::models::settings::OperatorAccountModel;
use std::error::Error;

pub struct OperatorAccountRepositoryImpl {
    pub executor: Executor,
}

impl OperatorAccountRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for OperatorAccountModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(OperatorAccountModel {
            id: row.try_get("id")?,
            first_name: get_heapless_string(row, "prenom")?,
            last_name: get_heapless_string(row, "nom")?,
            email: get_heapless_string(row, "email")?,
            active: row.try_get("actif")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
