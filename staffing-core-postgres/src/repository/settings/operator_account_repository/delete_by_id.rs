use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::repository::delete_by_id::DeleteById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::OperatorAccountRepositoryImpl;

impl OperatorAccountRepositoryImpl {
    pub(super) async fn delete_by_id_impl(
        repo: &OperatorAccountRepositoryImpl,
        id: Uuid,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"DELETE FROM utilisateurs WHERE id = $1"#).bind(id);
        let result = repo.executor.execute(query).await?;
        Ok(result.rows_affected() as usize)
    }
}

#[async_trait]
impl DeleteById<Postgres> for OperatorAccountRepositoryImpl {
    async fn delete_by_id(&self, id: Uuid) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::delete_by_id_impl(self, id).await
    }
}
