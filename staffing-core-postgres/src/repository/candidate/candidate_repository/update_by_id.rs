use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::candidate::CandidateRecord;
use staffing_core_db::repository::update_by_id::UpdateById;
use std::error::Error;
use uuid::Uuid;

use super::repo_impl::CandidateRepositoryImpl;

impl CandidateRepositoryImpl {
    /// Overwrites every editable column. A missing row is not an error.
    pub(super) async fn update_by_id_impl(
        repo: &CandidateRepositoryImpl,
        id: Uuid,
        record: CandidateRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            UPDATE candidats SET
                nom = $2,
                prenom = $3,
                email = $4,
                telephone = $5,
                vehicule = $6,
                actif = $7,
                secteurs = $8,
                date_naissance = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(record.last_name.as_str())
        .bind(record.first_name.as_str())
        .bind(record.email.as_deref())
        .bind(record.phone.as_deref())
        .bind(record.vehicle_owner)
        .bind(record.active)
        .bind(&record.sectors)
        .bind(record.date_of_birth)
        .bind(record.updated_at);

        let result = repo.executor.execute(query).await?;
        if result.rows_affected() == 0 {
            tracing::warn!(candidate_id = %id, "update matched no candidate row");
        }
        Ok(())
    }
}

#[async_trait]
impl UpdateById<Postgres, CandidateRecord> for CandidateRepositoryImpl {
    async fn update_by_id(
        &self,
        id: Uuid,
        record: CandidateRecord,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::update_by_id_impl(self, id, record).await
    }
}
