//! Transaction scope contract over a persistence backend.
//!
//! A scope is the lifetime between `start_transaction` and its matching
//! `commit_transaction` or `rollback_transaction`. Scopes are bound to one
//! logical connection, are never nested, and are never shared across
//! concurrent units of work. Every scope must be terminated exactly once on
//! every exit path before control returns to the caller; a handler that
//! errors inside an open scope rolls back before propagating.
//!
//! # Implementations
//!
//! - [`crate::infrastructure::memory::MemoryTransactionManager`] - in-memory
//!   reference implementation backed by a staged key-value overlay
//! - [`crate::infrastructure::persistence::PgUnitOfWork`] - PostgreSQL
//!   implementation over a dedicated pooled connection

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by transaction scope management.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// `start_transaction` was called while a scope is already open on this
    /// connection. Nested scopes are a caller bug.
    #[error("a transaction is already open on this connection")]
    AlreadyInTransaction,

    /// `commit_transaction` was called with no open scope.
    #[error("no transaction is open on this connection")]
    NoActiveTransaction,

    /// The backend rejected the write set at commit (e.g. a constraint
    /// violation). Underlying state is left unchanged to the extent the
    /// backend guarantees atomicity. The caller may retry with a fresh
    /// scope; this layer never retries.
    #[error("backend rejected the commit: {0}")]
    CommitFailed(String),

    /// The backend failed while opening or discarding a scope (e.g. the
    /// connection could not be acquired).
    #[error("transaction backend error: {0}")]
    Backend(String),
}

/// Start/commit/rollback semantics over one logical backend connection.
///
/// Feature handlers use this to express all-or-nothing multi-statement
/// writes (create-minisite + write-version-history) without coupling to a
/// specific storage engine.
#[async_trait]
pub trait TransactionManager: Send {
    /// Opens a new scope.
    ///
    /// # Errors
    ///
    /// [`TransactionError::AlreadyInTransaction`] if a scope is already
    /// open; [`TransactionError::Backend`] if the backend fails to start.
    async fn start_transaction(&mut self) -> Result<(), TransactionError>;

    /// Durably applies all writes made since `start_transaction`.
    ///
    /// # Errors
    ///
    /// [`TransactionError::NoActiveTransaction`] if no scope is open;
    /// [`TransactionError::CommitFailed`] if the backend rejects the
    /// write set.
    async fn commit_transaction(&mut self) -> Result<(), TransactionError>;

    /// Discards all writes made since `start_transaction`.
    ///
    /// Idempotent: calling it with no open scope is a no-op, not an error,
    /// because rollback is typically invoked from cleanup paths where the
    /// scope may already be closed.
    async fn rollback_transaction(&mut self) -> Result<(), TransactionError>;
}
