use std::sync::Arc;

use crate::executor::Executor;

use super::CandidateLogRepositoryImpl;

/// Factory for the audit module repositories.
pub struct AuditRepoFactory;

impl AuditRepoFactory {
    /// Build a CandidateLogRepository with the given executor
    pub fn build_candidate_log_repo(&self, executor: &Executor) -> Arc<CandidateLogRepositoryImpl> {
        Arc::new(CandidateLogRepositoryImpl::new(executor.clone()))
    }

    /// Build all audit repositories with the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> AuditRepositories {
        AuditRepositories {
            candidate_log_repository: self.build_candidate_log_repo(executor),
        }
    }
}

/// Container for all audit module repositories
pub struct AuditRepositories {
    pub candidate_log_repository: Arc<CandidateLogRepositoryImpl>,
}
