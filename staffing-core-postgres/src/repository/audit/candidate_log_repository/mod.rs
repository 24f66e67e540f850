pub mod repo_impl;
pub mod insert;
pub mod load_history;

pub use repo_impl::CandidateLogRepositoryImpl;
