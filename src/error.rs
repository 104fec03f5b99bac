//! Error types for analysis and traversal.

use crate::types::TxId;

/// Error produced by the analyzer or the graph builder.
///
/// Every failure is surfaced as a typed result; the analyzer never
/// substitutes defaults on inconsistent input.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AnalysisError {
    /// Non-coinbase transaction with an empty output list.
    #[error("Transaction has inputs but no outputs")]
    EmptyOutputs,
    /// Input and output sums disagree. The caller must normalize fees
    /// (e.g. append a fee output) before analysis.
    #[error("Input sum {input_sum} != output sum {output_sum}; fees must be accounted for by the caller")]
    ValueMismatch {
        /// Sum of input values.
        input_sum: u64,
        /// Sum of output values.
        output_sum: u64,
    },
    /// The transaction exceeds the configured enumeration ceiling.
    #[error("Combinatorial ceiling exceeded: {values} values against a limit of {limit}")]
    CombinatorialExplosion {
        /// Combined input + output count, or mappings found so far when
        /// the enumeration short-circuit fired.
        values: u128,
        /// The configured limit that was breached.
        limit: u128,
    },
    /// The traversal root could not be resolved.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TxId),
    /// The transaction store failed.
    #[error("Store error: {0}")]
    Store(String),
}

impl AnalysisError {
    /// Wrap any store error.
    pub fn from_store<E: std::error::Error>(e: E) -> Self {
        Self::Store(e.to_string())
    }
}
