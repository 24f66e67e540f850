use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::settings::{NewReferenceEntryModel, ReferenceEntryModel};
use staffing_core_db::repository::insert::Insert;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::ReferenceEntryRepositoryImpl;

impl ReferenceEntryRepositoryImpl {
    pub(super) async fn insert_impl(
        repo: &ReferenceEntryRepositoryImpl,
        item: NewReferenceEntryModel,
    ) -> Result<Option<ReferenceEntryModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"
            INSERT INTO parametrages (categorie, valeur, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(item.category.code())
        .bind(item.record.value.as_str())
        .bind(item.record.description.as_deref())
        .bind(item.created_at)
        .bind(item.record.updated_at);

        let row = repo.executor.fetch_optional(query).await?;
        row.map(|row| ReferenceEntryModel::try_from_row(&row)).transpose()
    }
}

#[async_trait]
impl Insert<Postgres, NewReferenceEntryModel, ReferenceEntryModel> for ReferenceEntryRepositoryImpl {
    async fn insert(
        &self,
        item: NewReferenceEntryModel,
    ) -> Result<Option<ReferenceEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::insert_impl(self, item).await
    }
}
