use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_api::domain::ReferenceCategory;
use staffing_core_db::models::settings::ReferenceEntryModel;
use staffing_core_db::repository::list_by_category::ListByCategory;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::ReferenceEntryRepositoryImpl;

impl ReferenceEntryRepositoryImpl {
    pub(super) async fn list_by_category_impl(
        repo: &ReferenceEntryRepositoryImpl,
        category: ReferenceCategory,
    ) -> Result<Vec<ReferenceEntryModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(
            r#"SELECT * FROM parametrages WHERE categorie = $1 ORDER BY valeur ASC"#,
        )
        .bind(category.code());
        let rows = repo.executor.fetch_all(query).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(ReferenceEntryModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl ListByCategory<Postgres, ReferenceCategory, ReferenceEntryModel> for ReferenceEntryRepositoryImpl {
    async fn list_by_category(
        &self,
        category: ReferenceCategory,
    ) -> Result<Vec<ReferenceEntryModel>, Box<dyn Error + Send + Sync>> {
        Self::list_by_category_impl(self, category).await
    }
}
