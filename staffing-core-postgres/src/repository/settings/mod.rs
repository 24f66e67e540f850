pub mod factory;
pub mod operator_account_repository;
pub mod reference_entry_repository;
#[cfg(test)]
pub mod test_utils;

pub use factory::{SettingsRepoFactory, SettingsRepositories};
pub use operator_account_repository::OperatorAccountRepositoryImpl;
pub use reference_entry_repository::ReferenceEntryRepositoryImpl;
