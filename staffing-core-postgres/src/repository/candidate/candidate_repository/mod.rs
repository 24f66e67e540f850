pub mod repo_impl;
pub mod load;
pub mod search_by_name;
pub mod insert;
pub mod update_by_id;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CandidateRepositoryImpl;
