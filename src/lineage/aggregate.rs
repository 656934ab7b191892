use crate::lineage::tree::{NodeId, Tree};
use std::collections::{HashMap, HashSet};

/// Per-node weighted descendant path sum and surviving leaf count, computed
/// bottom-up over `reverse_bfs` (children must precede their parent, as
/// produced by `Tree::breadth_first(root, true)`).
///
/// Leaves in `ignore` contribute no entry; an internal node whose entire
/// subtree is ignored gets no entry either. A shared ancestral branch lies
/// on the path of every surviving leaf below it, so its event count is
/// multiplied by that leaf count rather than counted once. The result is
/// the total root-to-leaf path length below each node, which is not the
/// same thing as subtree parsimony.
pub fn sum_and_count(
    tree: &Tree,
    reverse_bfs: &[NodeId],
    ignore: &HashSet<NodeId>,
) -> HashMap<NodeId, (u64, u64)> {
    let mut entries: HashMap<NodeId, (u64, u64)> = HashMap::new();
    for &node_id in reverse_bfs {
        let node = tree.node(node_id);
        if node.is_leaf() {
            if !ignore.contains(&node_id) {
                entries.insert(node_id, (node.mutations.len() as u64, 1));
            }
        } else {
            let mut total_sum = 0;
            let mut total_count = 0;
            for child in &node.children {
                if let Some((child_sum, child_count)) = entries.get(child) {
                    total_sum += child_sum;
                    total_count += child_count;
                }
            }
            if total_count > 0 {
                entries.insert(
                    node_id,
                    (total_sum + node.mutations.len() as u64 * total_count, total_count),
                );
            }
        }
    }
    entries
}
