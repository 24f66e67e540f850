//! Schema bootstrap and teardown.
//!
//! The scripts are compiled into the crate and run in file order on
//! bootstrap, reverse order on teardown. Bootstrap is idempotent.

use crate::executor::Executor;

const SCHEMA_SCRIPTS: &[(&str, &str)] = &[
    ("001_candidates.sql", include_str!("../../migrations/001_candidates.sql")),
    ("002_settings.sql", include_str!("../../migrations/002_settings.sql")),
];

const CLEANUP_SCRIPTS: &[(&str, &str)] = &[
    ("001_candidates.sql", include_str!("../../cleanup/001_candidates.sql")),
    ("002_settings.sql", include_str!("../../cleanup/002_settings.sql")),
];

/// Creates every table and index that does not exist yet.
///
/// # Example
///
/// ```ignore
/// let pool = StoreConfig::load()?.connect().await?;
/// init_database(&Executor::pooled(Arc::new(pool))).await?;
/// ```
pub async fn init_database(executor: &Executor) -> Result<(), sqlx::Error> {
    for (name, sql) in SCHEMA_SCRIPTS {
        tracing::debug!(script = name, "applying schema script");
        executor.execute_script(sql).await?;
    }
    Ok(())
}

/// Drops every table, dependents first.
pub async fn cleanup_database(executor: &Executor) -> Result<(), sqlx::Error> {
    for (name, sql) in CLEANUP_SCRIPTS.iter().rev() {
        tracing::debug!(script = name, "applying cleanup script");
        executor.execute_script(sql).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use serial_test::serial;

    #[test]
    fn test_cleanup_mirrors_schema() {
        let schema: Vec<_> = SCHEMA_SCRIPTS.iter().map(|(name, _)| *name).collect();
        let cleanup: Vec<_> = CLEANUP_SCRIPTS.iter().map(|(name, _)| *name).collect();
        assert_eq!(schema, cleanup);
    }

    #[tokio::test]
    #[ignore]
    #[serial]
    async fn test_init_is_idempotent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pool = StoreConfig::load()?.connect().await?;
        let executor = Executor::begin(&pool).await?;

        init_database(&executor).await?;
        init_database(&executor).await?;
        cleanup_database(&executor).await?;

        executor.rollback().await?;
        Ok(())
    }
}
