use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::settings::{NewOperatorAccountModel, OperatorAccountModel};
use staffing_core_db::repository::insert::Insert;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::OperatorAccountRepositoryImpl;

impl OperatorAccountRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &OperatorAccountRepositoryImpl,
        item: NewOperatorAccountModel,
    ) -> Result<Option<OperatorAccountModel>, Box<dyn Error + Send + Sync>> {
        let record = &item.record;
        let query = sqlx::query(
            r#"
            INSERT INTO utilisateurs (prenom, nom, email, actif, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(record.first_name.as_str())
        .bind(record.last_name.as_str())
        .bind(record.email.as_str())
        .bind(record.active)
        .bind(item.created_at)
        .bind(record.updated_at);

        let row = repo.executor.fetch_optional(query).await?;
        row.map(|row| OperatorAccountModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Insert<Postgres, NewOperatorAccountModel, OperatorAccountModel> for OperatorAccountRepositoryImpl {
    async fn insert(
        &self,
        item: NewOperatorAccountModel,
    ) -> Result<Option<OperatorAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, item).await
    }
}
