use crate::lineage::tree::{NodeId, Tree};
use std::collections::{HashMap, VecDeque};

/// Cumulative mutation distance from `from` to every node in its subtree.
/// The designated root is at distance 0; a node adds the event count of its
/// own incoming branch to its parent's distance. One top-down pass, no
/// recursion.
pub fn distances_from(tree: &Tree, from: NodeId) -> HashMap<NodeId, u64> {
    let mut distances = HashMap::new();
    distances.insert(from, 0);
    let mut remaining = VecDeque::new();
    remaining.push_back(from);
    while let Some(current) = remaining.pop_front() {
        let base = distances[&current];
        for &child in &tree.node(current).children {
            distances.insert(child, base + tree.node(child).mutations.len() as u64);
            remaining.push_back(child);
        }
    }
    distances
}
