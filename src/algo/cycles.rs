//! Cycle detection via colored depth-first search.

use std::collections::BTreeMap;

use crate::types::{GraphModel, TxId};
use super::closed_adjacency;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Find directed cycles in the graph.
///
/// Standard DFS with white/gray/black coloring, restarted from every
/// unvisited node so disconnected components are covered. When a gray
/// (in-progress) node is re-encountered, the emitted cycle is the path
/// slice from its first occurrence to the current node.
///
/// Returns *a* set of cycles, not a minimal cycle basis: depending on
/// traversal order the result may contain overlapping or non-simple
/// cycles, and cycles reachable only through already-black nodes are not
/// re-reported.
pub fn detect_cycles(graph: &GraphModel) -> Vec<Vec<TxId>> {
    let adjacency = closed_adjacency(graph);
    let mut color: BTreeMap<TxId, Color> =
        adjacency.keys().map(|&id| (id, Color::White)).collect();
    let mut cycles = Vec::new();
    let mut path = Vec::new();

    for &start in adjacency.keys() {
        if color[&start] == Color::White {
            dfs(start, &adjacency, &mut color, &mut path, &mut cycles);
        }
    }
    cycles
}

fn dfs(
    node: TxId,
    adjacency: &BTreeMap<TxId, Vec<TxId>>,
    color: &mut BTreeMap<TxId, Color>,
    path: &mut Vec<TxId>,
    cycles: &mut Vec<Vec<TxId>>,
) {
    color.insert(node, Color::Gray);
    path.push(node);

    if let Some(successors) = adjacency.get(&node) {
        for &next in successors {
            match color.get(&next).copied().unwrap_or(Color::Black) {
                Color::White => dfs(next, adjacency, color, path, cycles),
                Color::Gray => {
                    // Back edge: the cycle is the path from `next` onwards.
                    if let Some(pos) = path.iter().position(|&p| p == next) {
                        cycles.push(path[pos..].to_vec());
                    }
                }
                Color::Black => {}
            }
        }
    }

    path.pop();
    color.insert(node, Color::Black);
}
