//! Query executor shared by the repositories of one session.
//!
//! A session either runs every statement straight on the pool, or inside a
//! single transaction that is committed or rolled back as a whole. Tests use
//! the transactional form and never commit, so each test leaves the
//! database untouched.

use sqlx::postgres::{PgArguments, PgQueryResult, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

#[derive(Clone)]
pub enum Executor {
    Pool(Arc<PgPool>),
    Transaction(Arc<Mutex<Option<Transaction<'static, Postgres>>>>),
}

impl Executor {
    pub fn pooled(pool: Arc<PgPool>) -> Self {
        Executor::Pool(pool)
    }

    /// Starts a transaction; every repository built on the returned executor
    /// shares it.
    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(Executor::Transaction(Arc::new(Mutex::new(Some(tx)))))
    }

    pub fn is_transactional(&self) -> bool {
        matches!(self, Executor::Transaction(_))
    }

    /// Commits the transaction. A no-op for a pooled executor.
    pub async fn commit(&self) -> Result<(), sqlx::Error> {
        match self {
            Executor::Pool(_) => Ok(()),
            Executor::Transaction(tx) => match tx.lock().await.take() {
                Some(transaction) => transaction.commit().await,
                None => Err(consumed()),
            },
        }
    }

    /// Rolls the transaction back. A no-op for a pooled executor.
    pub async fn rollback(&self) -> Result<(), sqlx::Error> {
        match self {
            Executor::Pool(_) => Ok(()),
            Executor::Transaction(tx) => match tx.lock().await.take() {
                Some(transaction) => transaction.rollback().await,
                None => Err(consumed()),
            },
        }
    }

    pub async fn execute(&self, query: PgQuery<'_>) -> Result<PgQueryResult, sqlx::Error> {
        match self {
            Executor::Pool(pool) => query.execute(&**pool).await,
            Executor::Transaction(tx) => {
                let mut tx = tx.lock().await;
                match tx.as_mut() {
                    Some(transaction) => query.execute(&mut **transaction).await,
                    None => Err(consumed()),
                }
            }
        }
    }

    pub async fn fetch_all(&self, query: PgQuery<'_>) -> Result<Vec<PgRow>, sqlx::Error> {
        match self {
            Executor::Pool(pool) => query.fetch_all(&**pool).await,
            Executor::Transaction(tx) => {
                let mut tx = tx.lock().await;
                match tx.as_mut() {
                    Some(transaction) => query.fetch_all(&mut **transaction).await,
                    None => Err(consumed()),
                }
            }
        }
    }

    pub async fn fetch_optional(&self, query: PgQuery<'_>) -> Result<Option<PgRow>, sqlx::Error> {
        match self {
            Executor::Pool(pool) => query.fetch_optional(&**pool).await,
            Executor::Transaction(tx) => {
                let mut tx = tx.lock().await;
                match tx.as_mut() {
                    Some(transaction) => query.fetch_optional(&mut **transaction).await,
                    None => Err(consumed()),
                }
            }
        }
    }

    /// Runs a multi-statement script without bind parameters.
    pub async fn execute_script(&self, sql: &str) -> Result<(), sqlx::Error> {
        match self {
            Executor::Pool(pool) => {
                sqlx::raw_sql(sql).execute(&**pool).await?;
            }
            Executor::Transaction(tx) => {
                let mut tx = tx.lock().await;
                match tx.as_mut() {
                    Some(transaction) => {
                        sqlx::raw_sql(sql).execute(&mut **transaction).await?;
                    }
                    None => return Err(consumed()),
                }
            }
        }
        Ok(())
    }
}

fn consumed() -> sqlx::Error {
    sqlx::Error::Configuration("Transaction has been consumed".into())
}
