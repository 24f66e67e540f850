use crate::executor::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, TryFromRow};
use sqlx::{postgres::PgRow, Row};
use staffing_core_api::domain::ReferenceCategory;
use staffing_core_db::models::settings::ReferenceEntryModel;
use std::error::Error;

pub struct ReferenceEntryRepositoryImpl {
    pub executor: Executor,
}

impl ReferenceEntryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ReferenceEntryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let category: String = row.try_get("categorie")?;
        Ok(ReferenceEntryModel {
            id: row.try_get("id")?,
            category: category.parse::<ReferenceCategory>()?,
            value: get_heapless_string(row, "valeur")?,
            description: get_optional_heapless_string(row, "description")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}
