use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for inserting one row and reading back its identity
/// 
/// The store assigns the identifier. The stored row, with that identifier and
/// any other generated column populated, is returned together with the
/// success response. No retry is attempted on failure.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `N` - The insert payload (the row without its identity)
/// * `T` - The stored row type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Insert<Postgres, NewCandidateModel, CandidateModel> for CandidateRepositoryImpl {
///     async fn insert(&self, item: NewCandidateModel) -> Result<Option<CandidateModel>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Insert<DB: Database, N: Send + 'static, T: Identifiable>: Send + Sync {
    /// Insert a single row
    /// 
    /// # Arguments
    /// * `item` - The payload to insert
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The stored row with its generated identity
    /// * `Ok(None)` - The store accepted the write but returned no row
    /// * `Err` - An error if the insert could not be executed
    async fn insert(
        &self,
        item: N,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}
