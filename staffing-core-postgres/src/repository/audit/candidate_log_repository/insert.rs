use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::audit::{CandidateLogModel, NewCandidateLogModel};
use staffing_core_db::repository::insert::Insert;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CandidateLogRepositoryImpl;

impl CandidateLogRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &CandidateLogRepositoryImpl,
        item: NewCandidateLogModel,
    ) -> Result<Option<CandidateLogModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO candidats_logs (candidat_id, type_action, details, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(item.candidate_id)
        .bind(item.action.as_str())
        .bind(item.detail.as_str())
        .bind(item.created_at);

        let row = repo.executor.fetch_optional(query).await?;
        row.map(|row| CandidateLogModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Insert<Postgres, NewCandidateLogModel, CandidateLogModel> for CandidateLogRepositoryImpl {
    async fn insert(
        &self,
        item: NewCandidateLogModel,
    ) -> Result<Option<CandidateLogModel>, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, item).await
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::candidate::candidate_repository::test_utils::new_candidate;
    use crate::test_helper::setup_test_context;
    use chrono::Utc;
    use serial_test::serial;
    use staffing_core_api::domain::{ActionKind, RECORD_CREATED_DETAIL};
    use staffing_core_db::models::audit::NewCandidateLogModel;
    use staffing_core_db::repository::insert::Insert;
    use uuid::Uuid;

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_insert_log_for_candidate() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let candidate = ctx
            .candidate_repos()
            .candidate_repository
            .insert(new_candidate("Roux", "Emma"))
            .await?
            .ok_or("insert returned no row")?;

        let saved = ctx
            .audit_repos()
            .candidate_log_repository
            .insert(NewCandidateLogModel {
                candidate_id: candidate.id,
                action: ActionKind::Creation,
                detail: RECORD_CREATED_DETAIL.to_string(),
                created_at: Utc::now(),
            })
            .await?
            .ok_or("insert returned no row")?;

        assert_eq!(saved.candidate_id, candidate.id);
        assert_eq!(saved.action, ActionKind::Creation);
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_insert_log_for_unknown_candidate_fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;

        let result = ctx
            .audit_repos()
            .candidate_log_repository
            .insert(NewCandidateLogModel {
                candidate_id: Uuid::new_v4(),
                action: ActionKind::Modification,
                detail: "orphan".to_string(),
                created_at: Utc::now(),
            })
            .await;

        assert!(result.is_err());
        Ok(())
    }
}
