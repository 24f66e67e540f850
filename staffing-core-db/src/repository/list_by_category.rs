use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for listing the rows of one category
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `C` - The category key
/// * `T` - The row type that must implement Identifiable trait
#[async_trait]
pub trait ListByCategory<DB: Database, C: Send + Sync + 'static, T: Identifiable>: Send + Sync {
    /// List every row of `category`, ordered by value
    async fn list_by_category(&self, category: C) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
