use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::candidate::CandidateModel;
use staffing_core_db::repository::load::Load;
use std::error::Error;
use uuid::Uuid;

use crate::utils::TryFromRow;

use super::repo_impl::CandidateRepositoryImpl;

impl CandidateRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &CandidateRepositoryImpl,
        id: Uuid,
    ) -> Result<CandidateModel, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM candidats WHERE id = $1"#).bind(id);
        let row = repo.executor.fetch_optional(query).await?;
        match row {
            Some(row) => CandidateModel::try_from_row(&row),
            None => Err(format!("Candidate {id} not found").into()),
        }
    }
}

#[async_trait]
impl Load<Postgres, CandidateModel> for CandidateRepositoryImpl {
    async fn load(&self, id: Uuid) -> Result<CandidateModel, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, id).await
    }
}
