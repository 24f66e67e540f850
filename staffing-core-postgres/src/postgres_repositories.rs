use sqlx::PgPool;
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::executor::Executor;
use crate::repository::audit::{AuditRepoFactory, AuditRepositories};
use crate::repository::candidate::{CandidateRepoFactory, CandidateRepositories};
use crate::repository::db_init::init_database;
use crate::repository::settings::{SettingsRepoFactory, SettingsRepositories};

/// Entry point to the Postgres record store.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects with `config` and makes sure the schema exists.
    pub async fn connect(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let repos = Self::new(Arc::new(config.connect().await?));
        init_database(&Executor::pooled(repos.pool.clone())).await?;
        tracing::info!("record store ready");
        Ok(repos)
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    /// Repositories whose statements each commit on their own.
    ///
    /// This is what the back-office runs on: a candidate write is durable
    /// before its audit event is appended.
    pub fn create_pooled_repositories(&self) -> RepositorySet {
        RepositorySet::build(&Executor::pooled(self.pool.clone()))
    }

    /// Repositories sharing one transaction, returned with the executor that
    /// commits or rolls it back.
    pub async fn create_transactional_repositories(
        &self,
    ) -> Result<(Executor, RepositorySet), sqlx::Error> {
        let executor = Executor::begin(&self.pool).await?;
        let repos = RepositorySet::build(&executor);
        Ok((executor, repos))
    }
}

pub struct RepositorySet {
    pub candidate_repos: CandidateRepositories,
    pub audit_repos: AuditRepositories,
    pub settings_repos: SettingsRepositories,
}

impl RepositorySet {
    fn build(executor: &Executor) -> Self {
        Self {
            candidate_repos: CandidateRepoFactory.build_all_repos(executor),
            audit_repos: AuditRepoFactory.build_all_repos(executor),
            settings_repos: SettingsRepoFactory.build_all_repos(executor),
        }
    }
}
