pub mod candidate_log_repository;
pub mod factory;

pub use candidate_log_repository::CandidateLogRepositoryImpl;
pub use factory::{AuditRepoFactory, AuditRepositories};
