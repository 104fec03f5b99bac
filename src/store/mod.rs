//! Transaction lookup backends.

pub mod memory;

use async_trait::async_trait;
use crate::types::{TransactionRecord, TxId};

/// Trait for transaction lookup backends.
///
/// Implementations must guarantee deterministic ordering of results.
/// All methods are async so backends may be databases or RPC clients;
/// the traversal itself performs no I/O beyond these calls.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Error type for store operations.
    type Error: std::error::Error + Send + Sync;

    /// Fetch a transaction by id.
    async fn get_transaction(&self, id: &TxId) -> Result<Option<TransactionRecord>, Self::Error>;

    /// Txids whose outputs fund this transaction's inputs
    /// (deduplicated, ordered by TxId for determinism).
    async fn get_funding(&self, id: &TxId) -> Result<Vec<TxId>, Self::Error>;

    /// Txids that consume this transaction's outputs
    /// (deduplicated, ordered by TxId for determinism).
    async fn get_spenders(&self, id: &TxId) -> Result<Vec<TxId>, Self::Error>;
}

pub use memory::InMemoryTxStore;
