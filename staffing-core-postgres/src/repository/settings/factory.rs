use std::sync::Arc;

use crate::executor::Executor;

use super::{OperatorAccountRepositoryImpl, ReferenceEntryRepositoryImpl};

/// Factory for the settings module repositories.
pub struct SettingsRepoFactory;

impl SettingsRepoFactory {
    /// Build a ReferenceEntryRepository with the given executor
    pub fn build_reference_entry_repo(&self, executor: &Executor) -> Arc<ReferenceEntryRepositoryImpl> {
        Arc::new(ReferenceEntryRepositoryImpl::new(executor.clone()))
    }

    /// Build an OperatorAccountRepository with the given executor
    pub fn build_operator_account_repo(&self, executor: &Executor) -> Arc<OperatorAccountRepositoryImpl> {
        Arc::new(OperatorAccountRepositoryImpl::new(executor.clone()))
    }

    /// Build all settings repositories with the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> SettingsRepositories {
        SettingsRepositories {
            reference_entry_repository: self.build_reference_entry_repo(executor),
            operator_account_repository: self.build_operator_account_repo(executor),
        }
    }
}

/// Container for all settings module repositories
pub struct SettingsRepositories {
    pub reference_entry_repository: Arc<ReferenceEntryRepositoryImpl>,
    pub operator_account_repository: Arc<OperatorAccountRepositoryImpl>,
}
