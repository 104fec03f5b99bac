//! Transaction record types consumed by the analyzer and the graph builder.

use serde::{Deserialize, Serialize};
use super::txid::TxId;

/// One input of a transaction: the value it contributes and the
/// transaction whose output it spends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Value in satoshis.
    pub value: u64,
    /// Transaction that created the output being spent.
    pub previous_txid: TxId,
}

/// One output of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Value in satoshis.
    pub value: u64,
}

/// Snapshot of a transaction as the core consumes it.
///
/// The caller is responsible for fee normalization: the analyzer requires
/// `sum(inputs) == sum(outputs)` for non-coinbase transactions, so any fee
/// must already be accounted for (e.g. as an extra output) before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction id.
    pub txid: TxId,
    /// Block height this transaction was confirmed at, if known.
    pub block_height: Option<u32>,
    /// Ordered inputs.
    pub inputs: Vec<TxInput>,
    /// Ordered outputs.
    pub outputs: Vec<TxOutput>,
}

impl TransactionRecord {
    /// Create a new transaction record.
    pub fn new(
        txid: TxId,
        block_height: Option<u32>,
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
    ) -> Self {
        Self {
            txid,
            block_height,
            inputs,
            outputs,
        }
    }

    /// Input values in input order.
    pub fn input_values(&self) -> Vec<u64> {
        self.inputs.iter().map(|i| i.value).collect()
    }

    /// Output values in output order.
    pub fn output_values(&self) -> Vec<u64> {
        self.outputs.iter().map(|o| o.value).collect()
    }

    /// Txids referenced by the inputs, deduplicated, in first-seen order.
    pub fn funding_txids(&self) -> Vec<TxId> {
        let mut seen = Vec::new();
        for input in &self.inputs {
            if !seen.contains(&input.previous_txid) {
                seen.push(input.previous_txid);
            }
        }
        seen
    }

    /// A coinbase transaction has no inputs.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(inputs: &[(u64, u128)], outputs: &[u64]) -> TransactionRecord {
        TransactionRecord::new(
            TxId::from_u128(99),
            Some(800_000),
            inputs
                .iter()
                .map(|&(value, prev)| TxInput {
                    value,
                    previous_txid: TxId::from_u128(prev),
                })
                .collect(),
            outputs.iter().map(|&value| TxOutput { value }).collect(),
        )
    }

    #[test]
    fn test_value_views_preserve_order() {
        let tx = record(&[(30, 1), (20, 2)], &[25, 25]);
        assert_eq!(tx.input_values(), vec![30, 20]);
        assert_eq!(tx.output_values(), vec![25, 25]);
    }

    #[test]
    fn test_funding_txids_dedup() {
        // Two inputs spending different outputs of the same transaction.
        let tx = record(&[(10, 7), (10, 7), (5, 8)], &[25]);
        assert_eq!(
            tx.funding_txids(),
            vec![TxId::from_u128(7), TxId::from_u128(8)]
        );
    }

    #[test]
    fn test_coinbase_detection() {
        let tx = record(&[], &[50]);
        assert!(tx.is_coinbase());
    }
}
