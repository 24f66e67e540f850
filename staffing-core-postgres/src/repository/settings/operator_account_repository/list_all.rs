use async_trait::async_trait;
use sqlx::Postgres;
use staffing_core_db::models::settings::OperatorAccountModel;
use staffing_core_db::repository::list_all::ListAll;
use std::error::Error;

use crate::utils::TryFromRow;

use super::repo_impl::OperatorAccountRepositoryImpl;

impl OperatorAccountRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &OperatorAccountRepositoryImpl,
    ) -> Result<Vec<OperatorAccountModel>, Box<dyn Error + Send + Sync>> {
        let query = sqlx::query(r#"SELECT * FROM utilisateurs ORDER BY nom ASC, prenom ASC"#);
        let rows = repo.executor.fetch_all(query).await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(OperatorAccountModel::try_from_row(&row)?);
        }
        Ok(items)
    }
}

#[async_trait]
impl ListAll<Postgres, OperatorAccountModel> for OperatorAccountRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<OperatorAccountModel>, Box<dyn Error + Send + Sync>> {
        Self::list_all_impl(self).await
    }
}
