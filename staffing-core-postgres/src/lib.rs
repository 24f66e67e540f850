pub mod config;
pub mod executor;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, StoreConfig};
pub use executor::Executor;
pub use postgres_repositories::{PostgresRepositories, RepositorySet};
pub use repository::audit::CandidateLogRepositoryImpl;
pub use repository::candidate::CandidateRepositoryImpl;
pub use repository::settings::{OperatorAccountRepositoryImpl, ReferenceEntryRepositoryImpl};

#[cfg(test)]
pub mod test_helper;
