use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading a stored row by its ID
/// 
/// This trait provides a standard interface for loading rows from a data store.
/// Any row type that implements the Identifiable trait can be loaded using this trait.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The row type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<Postgres, CandidateModel> for CandidateRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Result<CandidateModel, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<DB: Database, T: Identifiable>: Send + Sync {
    /// Load a row by its unique identifier
    /// 
    /// # Arguments
    /// * `id` - The UUID of the row to load
    /// 
    /// # Returns
    /// * `Ok(T)` - The loaded row
    /// * `Err` - An error if the row does not exist or could not be loaded
    async fn load(&self, id: Uuid) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
