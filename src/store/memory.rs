//! In-memory transaction store.

use std::collections::{BTreeMap, BTreeSet};
use async_trait::async_trait;

use crate::types::{TransactionRecord, TxId};
use super::TransactionStore;

/// Error type for the in-memory store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InMemoryError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(TxId),
}

/// In-memory transaction store for tests and small reference datasets.
///
/// Uses BTreeMap/BTreeSet so every lookup has deterministic ordering.
/// Spend links are indexed when a transaction is added: the new
/// transaction becomes a spender of each txid its inputs reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTxStore {
    /// Transactions by id.
    transactions: BTreeMap<TxId, TransactionRecord>,
    /// Txid -> txids that consume its outputs.
    spenders: BTreeMap<TxId, BTreeSet<TxId>>,
}

impl InMemoryTxStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction and index its spend links.
    pub fn add_transaction(&mut self, tx: TransactionRecord) {
        for funding in tx.funding_txids() {
            self.spenders.entry(funding).or_default().insert(tx.txid);
        }
        self.transactions.insert(tx.txid, tx);
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All txids in ascending order.
    pub fn txids(&self) -> Vec<TxId> {
        self.transactions.keys().copied().collect()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTxStore {
    type Error = InMemoryError;

    async fn get_transaction(&self, id: &TxId) -> Result<Option<TransactionRecord>, Self::Error> {
        Ok(self.transactions.get(id).cloned())
    }

    async fn get_funding(&self, id: &TxId) -> Result<Vec<TxId>, Self::Error> {
        Ok(self
            .transactions
            .get(id)
            .map(|tx| {
                let set: BTreeSet<TxId> = tx.funding_txids().into_iter().collect();
                set.into_iter().collect()
            })
            .unwrap_or_default())
    }

    async fn get_spenders(&self, id: &TxId) -> Result<Vec<TxId>, Self::Error> {
        Ok(self
            .spenders
            .get(id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }
}
