//! Scoped store sessions

use sqlx::{Any, AnyConnection, Transaction};

use crate::{Error, Result};

/// One transaction on a pooled connection, bounded to a single operation.
///
/// Call [`Session::commit`] to make the work durable. Dropping the session
/// in any other way rolls the transaction back and hands the connection
/// back to the pool.
pub struct Session {
    tx: Option<Transaction<'static, Any>>,
}

impl Session {
    pub(crate) fn new(tx: Transaction<'static, Any>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Connection to run statements on, inside the open transaction.
    pub fn conn(&mut self) -> Result<&mut AnyConnection> {
        match self.tx.as_mut() {
            Some(tx) => Ok(&mut **tx),
            None => Err(Error::internal("session already closed")),
        }
    }

    pub async fn commit(mut self) -> Result<()> {
        match self.tx.take() {
            Some(tx) => {
                tx.commit().await?;
                Ok(())
            }
            None => Err(Error::internal("session already closed")),
        }
    }

    /// Discard the work done so far.
    pub async fn rollback(mut self) -> Result<()> {
        if let Some(tx) = self.tx.take() {
            tx.rollback().await?;
        }
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.tx.is_some() {
            // Transaction's own Drop queues the ROLLBACK on the connection
            tracing::debug!("Session dropped without commit, rolling back");
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("open", &self.tx.is_some())
            .finish()
    }
}
