//! Shortest paths: single-pair BFS and all-pairs Floyd–Warshall.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::types::{GraphModel, TxId};
use super::closed_adjacency;

/// Shortest path (by edge count) from `from` to `to`.
///
/// Breadth-first search; the first path to reach the target is returned,
/// including both endpoints. `None` when the target is unreachable or
/// either endpoint is not in the graph. `from == to` yields the
/// single-node path.
pub fn shortest_path(graph: &GraphModel, from: TxId, to: TxId) -> Option<Vec<TxId>> {
    if !graph.contains(&from) || !graph.contains(&to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let adjacency = closed_adjacency(graph);
    let mut predecessor: HashMap<TxId, TxId> = HashMap::new();
    let mut queue = VecDeque::new();
    queue.push_back(from);
    predecessor.insert(from, from);

    while let Some(node) = queue.pop_front() {
        if let Some(successors) = adjacency.get(&node) {
            for &next in successors {
                if predecessor.contains_key(&next) {
                    continue;
                }
                predecessor.insert(next, node);
                if next == to {
                    return Some(reconstruct(&predecessor, from, to));
                }
                queue.push_back(next);
            }
        }
    }
    None
}

fn reconstruct(predecessor: &HashMap<TxId, TxId>, from: TxId, to: TxId) -> Vec<TxId> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = predecessor[&current];
        path.push(current);
    }
    path.reverse();
    path
}

/// All-pairs shortest-path distances in edge counts.
///
/// `None` entries mean "unreachable" and serialize as JSON null, so
/// infinity never masquerades as a numeric value downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    /// Node ids in canonical order; row/column `i` belongs to `nodes[i]`.
    pub nodes: Vec<TxId>,
    /// Distance rows, indexed like `nodes`.
    pub dist: Vec<Vec<Option<u32>>>,
}

impl DistanceMatrix {
    /// Distance between two nodes. `None` when unreachable or when
    /// either node is not in the matrix.
    pub fn distance(&self, from: &TxId, to: &TxId) -> Option<u32> {
        let i = self.nodes.binary_search(from).ok()?;
        let j = self.nodes.binary_search(to).ok()?;
        self.dist[i][j]
    }

    /// Distances keyed by (from, to), unreachable pairs omitted.
    pub fn reachable_pairs(&self) -> BTreeMap<(TxId, TxId), u32> {
        let mut out = BTreeMap::new();
        for (i, &from) in self.nodes.iter().enumerate() {
            for (j, &to) in self.nodes.iter().enumerate() {
                if let Some(d) = self.dist[i][j] {
                    out.insert((from, to), d);
                }
            }
        }
        out
    }
}

/// Floyd–Warshall over the node index space.
///
/// `dist(i, i) = 0`, `dist(i, j) = 1` for a direct edge, unreachable
/// otherwise; then the standard triple loop relaxes through every
/// intermediate node, with `None` absorbing addition. O(n³) in node
/// count: unsuitable beyond a few hundred nodes.
pub fn all_pairs_distances(graph: &GraphModel) -> DistanceMatrix {
    let nodes = graph.node_ids();
    let n = nodes.len();
    let index: BTreeMap<TxId, usize> = nodes.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    let mut dist: Vec<Vec<Option<u32>>> = vec![vec![None; n]; n];
    for i in 0..n {
        dist[i][i] = Some(0);
    }
    for (from, successors) in closed_adjacency(graph) {
        let i = index[&from];
        for next in successors {
            let j = index[&next];
            if i != j {
                dist[i][j] = Some(1);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(kj) = dist[k][j] else { continue };
                let through = ik + kj;
                if dist[i][j].map_or(true, |d| through < d) {
                    dist[i][j] = Some(through);
                }
            }
        }
    }

    DistanceMatrix { nodes, dist }
}
