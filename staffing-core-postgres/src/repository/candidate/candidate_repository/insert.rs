use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::candidate::{CandidateModel, NewCandidateModel};
use staffing_core_db::repository::insert::Insert;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::CandidateRepositoryImpl;

impl CandidateRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &CandidateRepositoryImpl,
        item: NewCandidateModel,
    ) -> Result<Option<CandidateModel>, Box<dyn Error + Send + Sync>> {
        let record = &item.record;
        let query = sqlx::query(
            r#"
            INSERT INTO candidats
            (nom, prenom, email, telephone, vehicule, actif, secteurs, date_naissance, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(record.last_name.as_str())
        .bind(record.first_name.as_str())
        .bind(record.email.as_deref())
        .bind(record.phone.as_deref())
        .bind(record.vehicle_owner)
        .bind(record.active)
        .bind(&record.sectors)
        .bind(record.date_of_birth)
        .bind(item.created_at)
        .bind(record.updated_at);

        let row = repo.executor.fetch_optional(query).await?;
        row.map(|row| CandidateModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Insert<Postgres, NewCandidateModel, CandidateModel> for CandidateRepositoryImpl {
    async fn insert(
        &self,
        item: NewCandidateModel,
    ) -> Result<Option<CandidateModel>, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, item).await
    }
}
