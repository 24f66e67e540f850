use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::candidate::CandidateModel;
use staffing_core_db::repository::search_by_name::SearchByName;
use std::error::Error;

use crate::utils::{contains_pattern, TryFromRow};

use super::repo_impl::CandidateRepositoryImpl;

impl CandidateRepositoryImpl {
    pub(super) async fn search_by_name_impl(
        repo: &CandidateRepositoryImpl,
        term: &str,
    ) -> Result<Vec<CandidateModel>, Box<dyn Error + Send + Sync>> {
        let pattern = contains_pattern(term);
        let query = sqlx::query(
            r#"SELECT * FROM candidats WHERE nom ILIKE $1 ORDER BY nom ASC"#,
        )
        .bind(pattern.as_str());
        let rows = repo.executor.fetch_all(query).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(CandidateModel::try_from_row(&row)?);
        }
        tracing::debug!(term, matches = items.len(), "candidate search");
        Ok(items)
    }
}

#[async_trait]
impl SearchByName<Postgres, CandidateModel> for CandidateRepositoryImpl {
    async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<Vec<CandidateModel>, Box<dyn Error + Send + Sync>> {
        Self::search_by_name_impl(self, term).await
    }
}
