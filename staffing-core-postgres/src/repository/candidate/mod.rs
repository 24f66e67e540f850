pub mod candidate_repository;
pub mod factory;

pub use candidate_repository::CandidateRepositoryImpl;
pub use factory::{CandidateRepoFactory, CandidateRepositories};
