//! Graph model types for transaction-reference analysis.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::canonical::canonical_hash_hex;
use super::txid::TxId;

/// Direction of a transaction reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// `from` created an output that `to` spends.
    Spends,
    /// `to` consumes an output of `from`.
    SpentBy,
}

impl EdgeKind {
    /// Parse an edge kind from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spends" => Some(Self::Spends),
            "spent_by" => Some(Self::SpentBy),
            _ => None,
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spends => write!(f, "spends"),
            Self::SpentBy => write!(f, "spent_by"),
        }
    }
}

/// Directed edge between two transactions.
///
/// Implements `Ord` for deterministic ordering: (from, to, kind).
/// Duplicate edges between the same ordered pair are permitted; the
/// adjacency view on [`GraphModel`] deduplicates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxEdge {
    /// Source transaction.
    pub from: TxId,
    /// Target transaction.
    pub to: TxId,
    /// Kind of reference.
    pub kind: EdgeKind,
}

impl TxEdge {
    /// Create a new edge.
    pub fn new(from: TxId, to: TxId, kind: EdgeKind) -> Self {
        Self { from, to, kind }
    }
}

impl PartialOrd for TxEdge {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TxEdge {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.from.cmp(&other.from) {
            std::cmp::Ordering::Equal => match self.to.cmp(&other.to) {
                std::cmp::Ordering::Equal => self.kind.cmp(&other.kind),
                ord => ord,
            },
            ord => ord,
        }
    }
}

/// Transaction metadata attached to a graph node.
///
/// Opaque to the graph algorithms; carried through for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    /// Confirmation height, if known.
    pub block_height: Option<u32>,
    /// Fee in satoshis, if known.
    pub fee: Option<u64>,
    /// Block timestamp (unix seconds), if known.
    pub timestamp: Option<i64>,
}

/// Node in the transaction-reference graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxNode {
    /// Transaction id.
    pub txid: TxId,
    /// Attached metadata; `None` when the transaction could not be
    /// resolved and only its id is known from a reference.
    pub meta: Option<NodeMeta>,
}

impl TxNode {
    /// Create a node with metadata.
    pub fn new(txid: TxId, meta: NodeMeta) -> Self {
        Self {
            txid,
            meta: Some(meta),
        }
    }

    /// Create a node for a transaction known only by reference.
    pub fn unresolved(txid: TxId) -> Self {
        Self { txid, meta: None }
    }
}

/// Directed graph of transaction references.
///
/// Nodes are unique by txid (BTreeMap for deterministic iteration); the
/// edge list preserves insertion order and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphModel {
    /// Nodes by transaction id.
    pub nodes: BTreeMap<TxId, TxNode>,
    /// All edges in discovery order.
    pub edges: Vec<TxEdge>,
}

impl GraphModel {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing an unresolved placeholder if one exists.
    pub fn add_node(&mut self, node: TxNode) {
        match self.nodes.get(&node.txid) {
            Some(existing) if existing.meta.is_some() && node.meta.is_none() => {}
            _ => {
                self.nodes.insert(node.txid, node);
            }
        }
    }

    /// Append an edge.
    pub fn add_edge(&mut self, edge: TxEdge) {
        self.edges.push(edge);
    }

    /// Whether a transaction is in the node set.
    pub fn contains(&self, txid: &TxId) -> bool {
        self.nodes.contains_key(txid)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges (duplicates included).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node ids in canonical (ascending) order.
    pub fn node_ids(&self) -> Vec<TxId> {
        self.nodes.keys().copied().collect()
    }

    /// Deduplicated successor view: txid -> ordered successors.
    ///
    /// Built from the edge list with `from` as key. Edges pointing at
    /// transactions outside the node set are kept; algorithms treat such
    /// targets as having no adjacency of their own.
    pub fn adjacency(&self) -> BTreeMap<TxId, Vec<TxId>> {
        let mut adj: BTreeMap<TxId, BTreeSet<TxId>> = BTreeMap::new();
        for id in self.nodes.keys() {
            adj.entry(*id).or_default();
        }
        for edge in &self.edges {
            adj.entry(edge.from).or_default().insert(edge.to);
        }
        adj.into_iter()
            .map(|(id, succs)| (id, succs.into_iter().collect()))
            .collect()
    }

    /// Canonical fingerprint of the graph: nodes in id order plus the
    /// sorted edge list. Same graph content, same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut edges = self.edges.clone();
        edges.sort();
        edges.dedup();
        let node_ids = self.node_ids();
        canonical_hash_hex(&(&node_ids, &edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: u128, to: u128, kind: EdgeKind) -> TxEdge {
        TxEdge::new(TxId::from_u128(from), TxId::from_u128(to), kind)
    }

    #[test]
    fn test_edge_ordering() {
        let e1 = edge(1, 2, EdgeKind::Spends);
        let e2 = edge(1, 3, EdgeKind::Spends);
        let e3 = edge(2, 3, EdgeKind::Spends);
        assert!(e1 < e2);
        assert!(e2 < e3);
    }

    #[test]
    fn test_adjacency_dedups() {
        let mut graph = GraphModel::new();
        graph.add_node(TxNode::new(TxId::from_u128(1), NodeMeta::default()));
        graph.add_node(TxNode::new(TxId::from_u128(2), NodeMeta::default()));
        graph.add_edge(edge(1, 2, EdgeKind::Spends));
        graph.add_edge(edge(1, 2, EdgeKind::Spends));

        let adj = graph.adjacency();
        assert_eq!(adj[&TxId::from_u128(1)], vec![TxId::from_u128(2)]);
        assert!(adj[&TxId::from_u128(2)].is_empty());
    }

    #[test]
    fn test_resolved_node_not_downgraded() {
        let mut graph = GraphModel::new();
        let id = TxId::from_u128(1);
        graph.add_node(TxNode::new(id, NodeMeta::default()));
        graph.add_node(TxNode::unresolved(id));
        assert!(graph.nodes[&id].meta.is_some());
    }

    #[test]
    fn test_fingerprint_ignores_edge_order() {
        let mut a = GraphModel::new();
        let mut b = GraphModel::new();
        for g in [&mut a, &mut b] {
            g.add_node(TxNode::new(TxId::from_u128(1), NodeMeta::default()));
            g.add_node(TxNode::new(TxId::from_u128(2), NodeMeta::default()));
        }
        a.add_edge(edge(1, 2, EdgeKind::Spends));
        a.add_edge(edge(2, 1, EdgeKind::SpentBy));
        b.add_edge(edge(2, 1, EdgeKind::SpentBy));
        b.add_edge(edge(1, 2, EdgeKind::Spends));

        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
