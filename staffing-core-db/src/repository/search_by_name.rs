use async_trait::async_trait;
use sqlx::Database;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for filtering rows on their name column
/// 
/// Matching is a case-insensitive substring test on the row's name column
/// (last name for candidates). An empty term matches every row. Results are
/// ordered ascending by that same column. The whole result set is returned.
/// 
/// # Type Parameters
/// * `DB` - The database type (must implement sqlx::Database)
/// * `T` - The row type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// let matches = candidate_repo.search_by_name("mar").await?;
/// assert!(matches.iter().all(|c| c.last_name.to_lowercase().contains("mar")));
/// ```
#[async_trait]
pub trait SearchByName<DB: Database, T: Identifiable>: Send + Sync {
    /// Search rows whose name contains `term`
    /// 
    /// # Arguments
    /// * `term` - Raw search input; `%` and `_` are matched literally
    /// 
    /// # Returns
    /// * `Ok(Vec<T>)` - Matching rows ordered by name
    /// * `Err` - An error if the query could not be executed
    async fn search_by_name(&self, term: &str) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
