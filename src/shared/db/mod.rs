use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement, TransactionTrait};
use std::sync::Arc;

// ============================================================================
// Minimal transaction facade
//
// Multi-statement writes go through these traits instead of SeaORM's
// transaction types directly, so adapters can be tested against a scripted
// fake without a database.
// ============================================================================

#[async_trait]
pub trait TxDb: Send + Sync {
    type Txn: TxConn;
    async fn begin(&self) -> Result<Self::Txn, DbErr>;
}

#[async_trait]
pub trait TxConn: Send {
    /// Returns the number of affected rows.
    async fn execute(&mut self, stmt: Statement) -> Result<u64, DbErr>;
    async fn commit(self) -> Result<(), DbErr>;
    async fn rollback(self) -> Result<(), DbErr>;
}

pub struct SeaOrmTxDb {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTxDb {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub struct SeaOrmTxConn {
    txn: sea_orm::DatabaseTransaction,
}

#[async_trait]
impl TxDb for SeaOrmTxDb {
    type Txn = SeaOrmTxConn;

    async fn begin(&self) -> Result<Self::Txn, DbErr> {
        let txn = self.db.begin().await?;
        Ok(SeaOrmTxConn { txn })
    }
}

#[async_trait]
impl TxConn for SeaOrmTxConn {
    async fn execute(&mut self, stmt: Statement) -> Result<u64, DbErr> {
        let res = self.txn.execute(stmt).await?;
        Ok(res.rows_affected())
    }

    async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}

/// Runs `stmts` in order inside one transaction.
/// Any failing statement rolls the whole batch back.
pub async fn execute_all_in_tx<D: TxDb>(
    db: &D,
    stmts: Vec<Statement>,
) -> Result<Vec<u64>, DbErr> {
    let mut txn = db.begin().await?;
    let mut affected = Vec::with_capacity(stmts.len());

    for stmt in stmts {
        match txn.execute(stmt).await {
            Ok(rows) => affected.push(rows),
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Rollback failed after statement error: {}", rollback_err);
                }
                return Err(e);
            }
        }
    }

    txn.commit().await?;
    Ok(affected)
}
