//! Transaction-scoped test context.
//!
//! Every context runs inside its own transaction, which is never committed:
//! dropping the context rolls back everything the test wrote.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::executor::Executor;
use crate::postgres_repositories::{PostgresRepositories, RepositorySet};
use crate::repository::audit::AuditRepositories;
use crate::repository::candidate::CandidateRepositories;
use crate::repository::db_init::init_database;
use crate::repository::settings::SettingsRepositories;

pub struct TestContext {
    pub executor: Executor,
    pub repos: RepositorySet,
}

impl TestContext {
    pub fn candidate_repos(&self) -> &CandidateRepositories {
        &self.repos.candidate_repos
    }

    pub fn audit_repos(&self) -> &AuditRepositories {
        &self.repos.audit_repos
    }

    pub fn settings_repos(&self) -> &SettingsRepositories {
        &self.repos.settings_repos
    }
}

/// Connects using `STAFFING_DATABASE_URL` or `DATABASE_URL`, bootstraps the
/// schema, and opens a transaction for the test.
///
/// # Example
///
/// ```ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let candidate_repo = &ctx.candidate_repos().candidate_repository;
///     // All changes are rolled back when ctx is dropped
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let config = StoreConfig {
        max_connections: 1,
        ..StoreConfig::load()?
    };
    let repos = PostgresRepositories::new(std::sync::Arc::new(config.connect().await?));
    init_database(&Executor::pooled(repos.pool().clone())).await?;

    let (executor, repos) = repos.create_transactional_repositories().await?;
    Ok(TestContext { executor, repos })
}

/// Short token for building names no other row shares.
pub fn random_marker() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}{n}", &Uuid::new_v4().simple().to_string()[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::candidate::candidate_repository::test_utils::new_candidate;
    use serial_test::serial;
    use staffing_core_db::repository::{insert::Insert, load::Load};

    #[test]
    fn test_random_marker_is_unique() {
        assert_ne!(random_marker(), random_marker());
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_transaction_rollback() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let id = {
            let ctx = setup_test_context().await?;
            assert!(ctx.executor.is_transactional());
            let candidate_repo = &ctx.candidate_repos().candidate_repository;
            let saved = candidate_repo
                .insert(new_candidate("Rollback", "Test"))
                .await?
                .ok_or("insert returned no row")?;
            assert!(candidate_repo.load(saved.id).await.is_ok());
            saved.id
        };

        let ctx = setup_test_context().await?;
        assert!(ctx.candidate_repos().candidate_repository.load(id).await.is_err());
        Ok(())
    }
}
