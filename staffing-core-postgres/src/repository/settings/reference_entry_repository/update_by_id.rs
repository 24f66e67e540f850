use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::settings::ReferenceEntryRecord;
use staffing_core_db::repository::update_by_id::UpdateById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::ReferenceEntryRepositoryImpl;

impl ReferenceEntryRepositoryImpl {
    pub(super) async fn update_by_id_impl(
        repo: &ReferenceEntryRepositoryImpl,
        id: Uuid,
        record: ReferenceEntryRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"UPDATE parametrages SET valeur = $2, description = $3, updated_at = $4 WHERE id = $1"#,
        )
        .bind(id)
        .bind(record.value.as_str())
        .bind(record.description.as_deref())
        .bind(record.updated_at);

        let result = repo.executor.execute(query).await?;
        if result.rows_affected() == 0 {
            tracing::warn!(entry_id = %id, "update matched no reference entry");
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateById<Postgres, ReferenceEntryRecord> for ReferenceEntryRepositoryImpl {
    async fn update_by_id(
        &self,
        id: Uuid,
        record: ReferenceEntryRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::update_by_id_impl(self, id, record).await
    }
}
