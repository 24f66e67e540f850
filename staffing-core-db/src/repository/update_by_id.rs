use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

/// Generic repository trait for overwriting one row by its ID
/// 
/// This is a full-record update: every editable column is replaced by the
/// values in `record`. There is no existence check and no concurrency token,
/// the last writer wins. Retrying with the same payload has no further effect.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `R` - The record holding the editable columns
///
/// # Example
/// ```ignore
/// impl UpdateById<Postgres, CandidateRecord> for CandidateRepositoryImpl {
///     async fn update_by_id(&self, id: Uuid, record: CandidateRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait UpdateById<DB: Database, R: Send + 'static>: Send + Sync {
    /// Update the row identified by `id`
    /// 
    /// # Arguments
    /// * `id` - The UUID of the row to update
    /// * `record` - The new column values
    /// 
    /// # Returns
    /// * `Ok(())` - The statement completed
    /// * `Err` - An error if the statement could not be executed
    async fn update_by_id(
        &self,
        id: Uuid,
        record: R,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
