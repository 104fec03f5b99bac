//! # txentropy
//!
//! Boltzmann entropy analysis and graph structure metrics for Bitcoin
//! transactions.
//!
//! The crate answers two independent questions:
//!
//! > How ambiguous is the mapping between a transaction's inputs and its
//! > outputs?
//!
//! > What does the reference graph around a transaction look like?
//!
//! ## Entropy analysis
//!
//! [`BoltzmannAnalyzer`] enumerates every value-preserving pairing of an
//! input partition with an output partition. The pairing count is the
//! transaction's `combinations`, its log2 is the Shannon entropy, and the
//! input/output links that hold in *every* pairing are deterministic:
//! privacy-relevant no matter which interpretation is the true one.
//!
//! ```text
//! values → partitions_of → valid Mappings → entropy / links / class
//!                ↑
//!         AnalysisLimits (combinatorial ceiling)
//! ```
//!
//! ## Graph analysis
//!
//! [`GraphBuilder`] walks input→previous-output references through a
//! caller-supplied [`TransactionStore`] up to a bounded depth, producing a
//! [`GraphModel`]; the [`algo`] passes (cycles, Tarjan SCC, shortest
//! paths, Brandes betweenness) compute structural metrics over it.
//!
//! The two subsystems share no mutable state; analysis is pure and may be
//! run for independent transactions in parallel.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod error;
pub mod limits;
pub mod partition;
pub mod boltzmann;
pub mod canonical;
pub mod store;
pub mod traversal;
pub mod algo;

// Re-exports
pub use types::{TxId, TxIdError, TransactionRecord, TxInput, TxOutput};
pub use types::{Mapping, Partition};
pub use types::{EntropyResult, EntropySummary, TxClass};
pub use types::{EdgeKind, GraphModel, NodeMeta, TxEdge, TxNode};
pub use error::AnalysisError;
pub use limits::AnalysisLimits;
pub use partition::{bell_number, partitions_of, Partitions};
pub use boltzmann::{summarize_entropy, BoltzmannAnalyzer};
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};
pub use store::{InMemoryTxStore, TransactionStore};
pub use traversal::GraphBuilder;
pub use algo::{
    all_pairs_distances, betweenness, detect_cycles, shortest_path, tarjan_scc, DistanceMatrix,
};

/// Schema version for all serialized analysis types.
/// Increment on breaking changes to any schema type.
pub const ANALYSIS_SCHEMA_VERSION: &str = "1.0.0";

/// Default limits version identifier.
pub const DEFAULT_LIMITS_VERSION: &str = "analysis_limits_v1";
