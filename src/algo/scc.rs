//! Strongly connected components via Tarjan's algorithm.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{GraphModel, TxId};
use super::closed_adjacency;

struct TarjanState<'a> {
    adjacency: &'a BTreeMap<TxId, Vec<TxId>>,
    index: BTreeMap<TxId, usize>,
    lowlink: BTreeMap<TxId, usize>,
    next_index: usize,
    stack: Vec<TxId>,
    on_stack: BTreeSet<TxId>,
    components: Vec<Vec<TxId>>,
}

/// Compute the strongly connected components of the graph.
///
/// Tarjan's algorithm: each node gets a monotonically increasing
/// discovery index and a low-link initialized to it; low-links propagate
/// up the DFS, and a node whose low-link equals its own index roots a
/// component, which is popped off the explicit stack.
///
/// The output partitions the node set: every node appears in exactly one
/// component, and a node with no cycle through it forms a singleton.
/// Components are in reverse-topological discovery order; members are
/// sorted ascending.
pub fn tarjan_scc(graph: &GraphModel) -> Vec<Vec<TxId>> {
    let adjacency = closed_adjacency(graph);
    let mut state = TarjanState {
        adjacency: &adjacency,
        index: BTreeMap::new(),
        lowlink: BTreeMap::new(),
        next_index: 0,
        stack: Vec::new(),
        on_stack: BTreeSet::new(),
        components: Vec::new(),
    };

    for &node in adjacency.keys() {
        if !state.index.contains_key(&node) {
            strongconnect(node, &mut state);
        }
    }
    state.components
}

fn strongconnect(node: TxId, state: &mut TarjanState<'_>) {
    state.index.insert(node, state.next_index);
    state.lowlink.insert(node, state.next_index);
    state.next_index += 1;
    state.stack.push(node);
    state.on_stack.insert(node);

    let successors = state
        .adjacency
        .get(&node)
        .cloned()
        .unwrap_or_default();
    for next in successors {
        if !state.index.contains_key(&next) {
            strongconnect(next, state);
            let next_low = state.lowlink[&next];
            let low = state.lowlink.get_mut(&node).expect("visited");
            *low = (*low).min(next_low);
        } else if state.on_stack.contains(&next) {
            let next_index = state.index[&next];
            let low = state.lowlink.get_mut(&node).expect("visited");
            *low = (*low).min(next_index);
        }
    }

    if state.lowlink[&node] == state.index[&node] {
        let mut component = Vec::new();
        loop {
            let member = state.stack.pop().expect("root is on the stack");
            state.on_stack.remove(&member);
            component.push(member);
            if member == node {
                break;
            }
        }
        component.sort();
        state.components.push(component);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::testkit::{graph_of, id};

    fn sorted(mut components: Vec<Vec<TxId>>) -> Vec<Vec<TxId>> {
        components.sort();
        components
    }

    #[test]
    fn test_acyclic_graph_all_singletons() {
        let graph = graph_of(&[1, 2, 3], &[(1, 2), (2, 3)]);
        let components = tarjan_scc(&graph);
        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_triangle_is_one_component() {
        let graph = graph_of(&[1, 2, 3], &[(1, 2), (2, 3), (3, 1)]);
        let components = tarjan_scc(&graph);
        assert_eq!(components, vec![vec![id(1), id(2), id(3)]]);
    }

    #[test]
    fn test_mixed_components() {
        // 1 <-> 2 cycle, 3 -> 4 chain hanging off it.
        let graph = graph_of(&[1, 2, 3, 4], &[(1, 2), (2, 1), (2, 3), (3, 4)]);
        let components = sorted(tarjan_scc(&graph));
        assert_eq!(
            components,
            vec![vec![id(1), id(2)], vec![id(3)], vec![id(4)]]
        );
    }

    #[test]
    fn test_partition_property() {
        let graph = graph_of(
            &[1, 2, 3, 4, 5],
            &[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 4)],
        );
        let components = tarjan_scc(&graph);

        let mut all: Vec<TxId> = components.iter().flatten().copied().collect();
        all.sort();
        all.dedup();
        assert_eq!(all, graph.node_ids());
    }

    #[test]
    fn test_empty_graph() {
        let graph = graph_of(&[], &[]);
        assert!(tarjan_scc(&graph).is_empty());
    }
}
