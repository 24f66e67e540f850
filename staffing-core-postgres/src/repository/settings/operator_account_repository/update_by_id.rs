use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::settings::OperatorAccountRecord;
use staffing_core_db::repository::update_by_id::UpdateById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OperatorAccountRepositoryImpl;

impl OperatorAccountRepositoryImpl {
    pub(super) async fn update_by_id_impl(
        repo: &OperatorAccountRepositoryImpl,
        id: Uuid,
        record: OperatorAccountRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE utilisateurs SET prenom = $2, nom = $3, email = $4, actif = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(record.first_name.as_str())
        .bind(record.last_name.as_str())
        .bind(record.email.as_str())
        .bind(record.active)
        .bind(record.updated_at);

        let result = repo.executor.execute(query).await?;
        if result.rows_affected() == 0 {
            tracing::warn!(operator_id = %id, "update matched no operator account");
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateById<Postgres, OperatorAccountRecord> for OperatorAccountRepositoryImpl {
    async fn update_by_id(
        &self,
        id: Uuid,
        record: OperatorAccountRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::update_by_id_impl(self, id, record).await
    }
}
