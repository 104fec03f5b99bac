//! Core types for transaction entropy and graph analysis.

pub mod txid;
pub mod transaction;
pub mod partition;
pub mod entropy;
pub mod graph;

pub use txid::{TxId, TxIdError};
pub use transaction::{TransactionRecord, TxInput, TxOutput};
pub use partition::{Mapping, Partition};
pub use entropy::{EntropyResult, EntropySummary, TxClass};
pub use graph::{EdgeKind, GraphModel, NodeMeta, TxEdge, TxNode};
