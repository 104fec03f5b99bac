//! Bounded-depth traversal that builds a [`GraphModel`].
//!
//! Starting at a root transaction, the builder follows input references
//! backwards ("which transactions funded this?") and output consumers
//! forwards ("which transactions spend this?") up to a hop limit. The
//! visited set strictly grows and depth strictly decreases, so the
//! traversal always terminates with the exact subgraph reachable within
//! `depth` hops of the root in either direction.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use crate::error::AnalysisError;
use crate::store::TransactionStore;
use crate::types::{EdgeKind, GraphModel, NodeMeta, TransactionRecord, TxEdge, TxId, TxNode};

/// Builds transaction-reference graphs from a lookup backend.
pub struct GraphBuilder<S: TransactionStore> {
    store: Arc<S>,
}

impl<S: TransactionStore + 'static> GraphBuilder<S> {
    /// Create a builder over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build the reference graph around `root`, expanding up to `depth`
    /// hops in either direction.
    ///
    /// Depth 0 means "include the root but do not expand": the result is
    /// one node and zero edges. The root must resolve; a transaction
    /// discovered mid-traversal that the store cannot resolve is kept as
    /// a metadata-less node and not expanded, rather than failing the
    /// whole build.
    pub async fn build(&self, root: TxId, depth: u32) -> Result<GraphModel, AnalysisError> {
        let root_tx = self
            .store
            .get_transaction(&root)
            .await
            .map_err(AnalysisError::from_store)?
            .ok_or(AnalysisError::TransactionNotFound(root))?;

        let mut graph = GraphModel::new();
        let mut visited: HashSet<TxId> = HashSet::new();
        let mut frontier: VecDeque<(TxId, u32)> = VecDeque::new();

        graph.add_node(TxNode::new(root, node_meta(&root_tx)));
        visited.insert(root);
        frontier.push_back((root, depth));

        while let Some((txid, remaining)) = frontier.pop_front() {
            if remaining == 0 {
                continue;
            }

            let funding = self
                .store
                .get_funding(&txid)
                .await
                .map_err(AnalysisError::from_store)?;
            let spenders = self
                .store
                .get_spenders(&txid)
                .await
                .map_err(AnalysisError::from_store)?;

            tracing::trace!(
                %txid,
                remaining,
                funding = funding.len(),
                spenders = spenders.len(),
                "expanding transaction"
            );

            for funder in funding {
                graph.add_edge(TxEdge::new(funder, txid, EdgeKind::Spends));
                self.visit(funder, remaining - 1, &mut graph, &mut visited, &mut frontier)
                    .await?;
            }
            for spender in spenders {
                graph.add_edge(TxEdge::new(txid, spender, EdgeKind::SpentBy));
                self.visit(spender, remaining - 1, &mut graph, &mut visited, &mut frontier)
                    .await?;
            }
        }

        tracing::debug!(
            root = %root,
            depth,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph build complete"
        );

        Ok(graph)
    }

    /// Resolve a newly discovered neighbor and queue it for expansion.
    async fn visit(
        &self,
        txid: TxId,
        remaining: u32,
        graph: &mut GraphModel,
        visited: &mut HashSet<TxId>,
        frontier: &mut VecDeque<(TxId, u32)>,
    ) -> Result<(), AnalysisError> {
        if !visited.insert(txid) {
            return Ok(());
        }
        match self
            .store
            .get_transaction(&txid)
            .await
            .map_err(AnalysisError::from_store)?
        {
            Some(tx) => {
                graph.add_node(TxNode::new(txid, node_meta(&tx)));
                frontier.push_back((txid, remaining));
            }
            None => {
                // Known only from a reference. Keep the node, skip expansion.
                graph.add_node(TxNode::unresolved(txid));
            }
        }
        Ok(())
    }
}

/// Node metadata from a transaction record. The fee is the input excess
/// when the record is not fee-normalized; zero-excess records report 0.
fn node_meta(tx: &TransactionRecord) -> NodeMeta {
    let fee = if tx.inputs.is_empty() {
        None
    } else {
        let input_sum: u64 = tx.inputs.iter().map(|i| i.value).sum();
        let output_sum: u64 = tx.outputs.iter().map(|o| o.value).sum();
        Some(input_sum.saturating_sub(output_sum))
    };
    NodeMeta {
        block_height: tx.block_height,
        fee,
        timestamp: None,
    }
}
