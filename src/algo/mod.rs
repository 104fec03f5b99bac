//! Structural graph algorithms over [`GraphModel`](crate::types::GraphModel).
//!
//! Each submodule is an independent analysis pass: cycle detection,
//! strongly connected components, shortest paths, and betweenness
//! centrality. All operate on the deduplicated adjacency view and
//! tolerate dangling edges (a target outside the node set is treated as
//! no neighbor at all).

pub mod cycles;
pub mod scc;
pub mod paths;
pub mod centrality;

use std::collections::BTreeMap;
use crate::types::{GraphModel, TxId};

pub use cycles::detect_cycles;
pub use scc::tarjan_scc;
pub use paths::{all_pairs_distances, shortest_path, DistanceMatrix};
pub use centrality::betweenness;

/// Adjacency restricted to the node set: dangling edge targets dropped.
pub(crate) fn closed_adjacency(graph: &GraphModel) -> BTreeMap<TxId, Vec<TxId>> {
    graph
        .adjacency()
        .into_iter()
        .filter(|(from, _)| graph.contains(from))
        .map(|(from, succs)| {
            (
                from,
                succs.into_iter().filter(|s| graph.contains(s)).collect(),
            )
        })
        .collect()
}
