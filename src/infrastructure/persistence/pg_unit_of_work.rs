//! PostgreSQL transaction scope over a dedicated pooled connection.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgConnection, PgPool, Postgres};

use crate::domain::transaction::{TransactionError, TransactionManager};

/// One unit of work bound to one connection checked out of the pool.
///
/// Repositories run their multi-statement writes against [`Self::executor`]
/// between `start_transaction` and `commit_transaction`. The scope is owned
/// exclusively by the caller that opened it and must be terminated exactly
/// once on every exit path; on error the caller rolls back before
/// propagating.
pub struct PgUnitOfWork {
    conn: PoolConnection<Postgres>,
    open: bool,
}

impl PgUnitOfWork {
    /// Checks a connection out of the pool. No scope is open yet.
    pub async fn acquire(pool: &PgPool) -> Result<Self, TransactionError> {
        let conn = pool
            .acquire()
            .await
            .map_err(|e| TransactionError::Backend(e.to_string()))?;

        Ok(Self { conn, open: false })
    }

    /// The connection all statements of this unit of work execute on.
    pub fn executor(&mut self) -> &mut PgConnection {
        &mut self.conn
    }
}

#[async_trait]
impl TransactionManager for PgUnitOfWork {
    async fn start_transaction(&mut self) -> Result<(), TransactionError> {
        if self.open {
            return Err(TransactionError::AlreadyInTransaction);
        }

        sqlx::query("BEGIN")
            .execute(&mut *self.conn)
            .await
            .map_err(|e| TransactionError::Backend(e.to_string()))?;

        self.open = true;
        Ok(())
    }

    async fn commit_transaction(&mut self) -> Result<(), TransactionError> {
        if !self.open {
            return Err(TransactionError::NoActiveTransaction);
        }

        // The server ends the transaction either way; the scope is closed
        // even when the commit is rejected.
        self.open = false;

        sqlx::query("COMMIT")
            .execute(&mut *self.conn)
            .await
            .map_err(|e| TransactionError::CommitFailed(e.to_string()))?;

        Ok(())
    }

    async fn rollback_transaction(&mut self) -> Result<(), TransactionError> {
        if !self.open {
            return Ok(());
        }

        self.open = false;

        sqlx::query("ROLLBACK")
            .execute(&mut *self.conn)
            .await
            .map_err(|e| TransactionError::Backend(e.to_string()))?;

        Ok(())
    }
}

impl Drop for PgUnitOfWork {
    fn drop(&mut self) {
        if self.open {
            // Scope leaked without commit or rollback; the pool rolls the
            // connection back before reuse, but this is a caller bug.
            tracing::warn!("unit of work dropped with an open transaction scope");
        }
    }
}
