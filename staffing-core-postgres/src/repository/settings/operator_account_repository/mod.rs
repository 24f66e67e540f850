pub mod repo_impl;
pub mod list_all;
pub mod insert;
pub mod update_by_id;
pub mod delete_by_id;

pub use repo_impl::OperatorAccountRepositoryImpl;
