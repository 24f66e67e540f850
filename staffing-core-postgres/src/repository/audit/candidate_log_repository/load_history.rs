use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::audit::CandidateLogModel;
use staffing_core_db::repository::load_history::LoadHistory;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::CandidateLogRepositoryImpl;

impl CandidateLogRepositoryImpl {
    pub(super) async fn load_history_impl(
        repo: &CandidateLogRepositoryImpl,
        candidate_id: Uuid,
    ) -> Result<Vec<CandidateLogModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            SELECT * FROM candidats_logs
            WHERE candidat_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(candidate_id);
        let rows = repo.executor.fetch_all(query).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(CandidateLogModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl LoadHistory<Postgres, CandidateLogModel> for CandidateLogRepositoryImpl {
    async fn load_history(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<CandidateLogModel>, Box<dyn Error + Send + Sync>> {
        Self::load_history_impl(self, owner_id).await
    }
}
