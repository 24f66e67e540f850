use sqlx::Database;
use staffing_core_api::domain::{
    Notification, OperatorAccount, OperatorSubmission, ReferenceCategory, ReferenceEntry,
    ReferenceSubmission, SettingsEntity,
};
use staffing_core_api::error::{ApiError, ApiResult};
use staffing_core_api::service::{Clock, Notifier};
use staffing_core_db::models::{
    NewOperatorAccountModel, NewReferenceEntryModel, OperatorAccountRecord, ReferenceEntryRecord,
};
use staffing_core_db::repository::{OperatorAccountRepository, ReferenceEntryRepository};
use std::sync::Arc;
use uuid::Uuid;

/// Reference lists (services, groups, uniforms) and operator accounts.
///
/// Settings changes are not audited.
pub struct SettingsCatalog<DB: Database> {
    references: Arc<dyn ReferenceEntryRepository<DB>>,
    operators: Arc<dyn OperatorAccountRepository<DB>>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> SettingsCatalog<DB> {
    pub fn new(
        references: Arc<dyn ReferenceEntryRepository<DB>>,
        operators: Arc<dyn OperatorAccountRepository<DB>>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            references,
            operators,
            notifier,
            clock,
        }
    }

    /// Entries of `category`, ascending by value. Empty on failure.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, category: ReferenceCategory) -> Vec<ReferenceEntry> {
        match self.references.list_by_category(category).await {
            Ok(models) => models.into_iter().map(ReferenceEntry::from).collect(),
            Err(err) => {
                self.report(&ApiError::QueryFailure(err.to_string()));
                Vec::new()
            }
        }
    }

    pub async fn create(
        &self,
        category: ReferenceCategory,
        value: &str,
        description: Option<&str>,
    ) -> ApiResult<ReferenceEntry> {
        let result = self.create_entry(category, value, description).await;
        self.settle(result, "Entry created")
    }

    pub async fn update(&self, id: Uuid, value: &str, description: Option<&str>) -> ApiResult<()> {
        let result = self.update_entry(id, value, description).await;
        self.settle(result, "Entry updated")
    }

    pub async fn list_operators(&self) -> Vec<OperatorAccount> {
        match self.operators.list_all().await {
            Ok(models) => models.into_iter().map(OperatorAccount::from).collect(),
            Err(err) => {
                self.report(&ApiError::QueryFailure(err.to_string()));
                Vec::new()
            }
        }
    }

    /// New accounts start active.
    pub async fn create_operator(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> ApiResult<OperatorAccount> {
        let result = self.create_operator_account(first_name, last_name, email).await;
        self.settle(result, "Operator created")
    }

    pub async fn update_operator(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: &str,
        active: bool,
    ) -> ApiResult<()> {
        let result = self
            .update_operator_account(id, first_name, last_name, email, active)
            .await;
        self.settle(result, "Operator updated")
    }

    /// Deletes `id` from the table `entity` lives in.
    ///
    /// # Returns
    /// The number of rows removed; 0 when `id` was already gone.
    #[tracing::instrument(skip(self), fields(%entity))]
    pub async fn delete(&self, entity: SettingsEntity, id: Uuid) -> ApiResult<usize> {
        let deleted = match entity {
            SettingsEntity::Reference(_) => self.references.delete_by_id(id).await,
            SettingsEntity::Operator => self.operators.delete_by_id(id).await,
        }
        .map_err(|e| ApiError::WriteFailure(e.to_string()));
        self.settle(deleted, "Entry deleted")
    }

    async fn create_entry(
        &self,
        category: ReferenceCategory,
        value: &str,
        description: Option<&str>,
    ) -> ApiResult<ReferenceEntry> {
        let submission = ReferenceSubmission::new(value, description)?;
        let new_entry = NewReferenceEntryModel::from_submission(category, &submission, self.clock.now())
            .map_err(ApiError::Validation)?;
        let stored = self
            .references
            .insert(new_entry)
            .await
            .map_err(|e| ApiError::WriteFailure(e.to_string()))?
            .ok_or(ApiError::MissingIdentity)?;
        Ok(stored.into())
    }

    async fn update_entry(&self, id: Uuid, value: &str, description: Option<&str>) -> ApiResult<()> {
        let submission = ReferenceSubmission::new(value, description)?;
        let record = ReferenceEntryRecord::from_submission(&submission, self.clock.now())
            .map_err(ApiError::Validation)?;
        self.references
            .update_by_id(id, record)
            .await
            .map_err(|e| ApiError::WriteFailure(e.to_string()))
    }

    async fn create_operator_account(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> ApiResult<OperatorAccount> {
        let submission = OperatorSubmission::new(first_name, last_name, email, true)?;
        let new_operator = NewOperatorAccountModel::from_submission(&submission, self.clock.now())
            .map_err(ApiError::Validation)?;
        let stored = self
            .operators
            .insert(new_operator)
            .await
            .map_err(|e| ApiError::WriteFailure(e.to_string()))?
            .ok_or(ApiError::MissingIdentity)?;
        Ok(stored.into())
    }

    async fn update_operator_account(
        &self,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: &str,
        active: bool,
    ) -> ApiResult<()> {
        let submission = OperatorSubmission::new(first_name, last_name, email, active)?;
        let record = OperatorAccountRecord::from_submission(&submission, self.clock.now())
            .map_err(ApiError::Validation)?;
        self.operators
            .update_by_id(id, record)
            .await
            .map_err(|e| ApiError::WriteFailure(e.to_string()))
    }

    fn settle<T>(&self, result: ApiResult<T>, success: &str) -> ApiResult<T> {
        match result {
            Ok(value) => {
                self.notifier.notify(Notification::success(success));
                Ok(value)
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    fn report(&self, err: &ApiError) {
        tracing::error!(error = %err, "settings operation failed");
        self.notifier.notify(Notification::error(err.to_string()));
    }
}
