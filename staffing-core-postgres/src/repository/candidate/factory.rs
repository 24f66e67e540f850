use std::sync::Arc;

use crate::executor::Executor;

use super::CandidateRepositoryImpl;

/// Factory for the candidate module repositories.
pub struct CandidateRepoFactory;

impl CandidateRepoFactory {
    /// Build a CandidateRepository with the given executor
    pub fn build_candidate_repo(&self, executor: &Executor) -> Arc<CandidateRepositoryImpl> {
        Arc::new(CandidateRepositoryImpl::new(executor.clone()))
    }

    /// Build all candidate repositories with the given executor
    pub fn build_all_repos(&self, executor: &Executor) -> CandidateRepositories {
        CandidateRepositories {
            candidate_repository: self.build_candidate_repo(executor),
        }
    }
}

/// Container for all candidate module repositories
pub struct CandidateRepositories {
    pub candidate_repository: Arc<CandidateRepositoryImpl>,
}
