use crate::error::Result;
use sqlx::{Sqlite, SqliteConnection, Transaction};

/// A unit-of-work handle scoping pending changes to one transaction.
///
/// Every repository statement executes on the session's open transaction and
/// is immediately visible to later reads on the same session (the flush
/// contract). Nothing reaches other sessions until [`Session::commit`];
/// dropping the session rolls the transaction back.
#[derive(Debug)]
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    pub(crate) fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    /// Makes all pending changes durable and ends the transaction.
    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discards all pending changes, including already-flushed ones.
    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }

    pub(crate) fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }
}
