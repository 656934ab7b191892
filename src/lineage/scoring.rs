use crate::lineage::tree::{NodeId, Tree};
use std::collections::{HashMap, HashSet};

/// Genotype representation score of one candidate branch as a putative
/// sublineage of the segment root.
///
/// The score rewards large clades that are genetically distinct from the
/// segment root, while a large mean path length within the clade dilutes
/// the value of that distinction:
///
///   score = count * distance_to_parent / (mean_path_length + distance_to_parent)
///
/// Degenerate denominators and candidates failing the size or distinction
/// thresholds score 0.
pub fn evaluate_candidate(
    entry: Option<(u64, u64)>,
    candidate_distance: u64,
    root_distance: u64,
    min_size: u64,
    min_distinction: u64,
) -> f64 {
    let (node_sum, node_count) = entry.unwrap_or((0, 0));
    if node_count <= min_size {
        return 0.0;
    }
    if node_sum == 0 || node_count == 0 {
        return 0.0;
    }
    let candidate_to_parent = candidate_distance - root_distance;
    if candidate_to_parent < min_distinction {
        return 0.0;
    }
    let mean_distances = node_sum as f64 / node_count as f64;
    let candidate_to_parent = candidate_to_parent as f64;
    if mean_distances + candidate_to_parent == 0.0 {
        return 0.0;
    }
    node_count as f64 * candidate_to_parent / (mean_distances + candidate_to_parent)
}

/// Picks the best-scoring candidate among `candidates`, skipping banned
/// nodes. Ties on the score are broken toward the lexicographically
/// smallest node id so repeated runs are reproducible. Returns `None` when
/// no candidate scores above zero.
pub fn best_candidate(
    tree: &Tree,
    candidates: &[NodeId],
    banned: &HashSet<NodeId>,
    entries: &HashMap<NodeId, (u64, u64)>,
    distances: &HashMap<NodeId, u64>,
    segment_root: NodeId,
    min_size: u64,
    min_distinction: u64,
) -> Option<(f64, NodeId)> {
    let root_distance = distances[&segment_root];
    let mut best: Option<(f64, NodeId)> = None;
    for &candidate in candidates {
        if banned.contains(&candidate) {
            continue;
        }
        let score = evaluate_candidate(
            entries.get(&candidate).copied(),
            distances[&candidate],
            root_distance,
            min_size,
            min_distinction,
        );
        if score <= 0.0 {
            continue;
        }
        best = match best {
            Some((best_score, best_node))
                if score < best_score
                    || (score == best_score
                        && tree.node(candidate).id >= tree.node(best_node).id) =>
            {
                Some((best_score, best_node))
            }
            _ => Some((score, candidate)),
        };
    }
    best
}
