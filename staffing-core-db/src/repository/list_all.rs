use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing a whole table
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The row type that must implement Identifiable trait
#[async_trait]
pub trait ListAll<DB: Database, T: Identifiable>: Send + Sync {
    /// List every row, in the table's natural display order
    async fn list_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
