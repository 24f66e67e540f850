use async_trait::async_trait;
use sqlx::Database;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading the append-only history of an entity
///
/// Returns every history row referencing `owner_id`, most recent first
/// (descending creation timestamp). An entity without history yields an empty
/// vector, not an error.
///
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The history row type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let events = candidate_log_repo.load_history(candidate_id).await?;
/// for event in &events {
///     println!("{} {}", event.created_at, event.action);
/// }
/// ```
#[async_trait]
pub trait LoadHistory<DB: Database, T: Identifiable>: Send + Sync {
    /// Load the history rows of one entity
    ///
    /// # Arguments
    /// * `owner_id` - The UUID of the entity whose history should be loaded
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - History rows, newest first
    /// * `Err` - An error if the history could not be loaded
    async fn load_history(&self, owner_id: Uuid) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
