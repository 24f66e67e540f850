use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for hard-deleting one row by its ID
/// 
/// Only settings rows are deletable; candidates and their history are not.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
#[async_trait]
pub trait DeleteById<DB: Database>: Send + Sync {
    /// Delete the row identified by `id`
    /// 
    /// # Returns
    /// * `Ok(usize)` - The number of rows deleted (0 or 1)
    /// * `Err` - An error if the statement could not be executed
    async fn delete_by_id(
        &self,
        id: Uuid,
    ) -> Result<usize, Box<dyn std::error::Error + Send + Sync>>;
}
