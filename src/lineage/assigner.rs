use crate::lineage::aggregate::sum_and_count;
use crate::lineage::distance::distances_from;
use crate::lineage::scoring::best_candidate;
use crate::lineage::tree::{NodeId, Tree};
use crate::lineage::types::{AnnotateOptions, LineageAssignment};
use std::collections::HashSet;

/// Placeholder label for the whole tree. Never committed to a leaf; used
/// as the categorical default for samples no lineage ends up covering.
pub const ROOT_LABEL: &str = "Root";

struct Segment {
    label: String,
    root: NodeId,
}

/// Runs the level-by-level greedy labeling over the whole tree.
///
/// Level 1 consists of a single segment, the tree itself. Each segment is
/// refined independently: aggregates are recomputed with already-labeled
/// leaves removed, the best-scoring candidate is committed as a new
/// lineage, and the candidate plus its ancestors up to the segment root
/// are banned from further selection, so no two lineages chosen within a
/// segment ever stand in an ancestor-descendant relationship. Refinement
/// stops when the best score drops to the floor or the coverage cutoff is
/// reached. Each committed lineage root becomes a segment of the next
/// level; the process ends when a level commits nothing, or at
/// `max_levels`.
pub fn assign_lineages(tree: &Tree, options: &AnnotateOptions) -> LineageAssignment {
    let mut assignment = LineageAssignment::default();
    let mut segments = vec![Segment {
        label: ROOT_LABEL.to_string(),
        root: tree.root(),
    }];
    let mut level: u32 = 1;
    // generation-order serial for top-level letter codes
    let mut top_serial: u64 = 0;

    loop {
        let mut next_segments = Vec::new();
        for segment in &segments {
            let order = tree.breadth_first(segment.root, false);
            let segment_leaves = order.iter().filter(|&&n| tree.node(n).is_leaf()).count();
            if segment_leaves == 0 {
                continue;
            }
            let reverse_order: Vec<NodeId> = order.iter().rev().copied().collect();
            let distances = distances_from(tree, segment.root);

            let mut labeled: HashSet<NodeId> = HashSet::new();
            let mut used: HashSet<NodeId> = HashSet::new();
            let mut serial: u64 = 0;
            loop {
                let entries = sum_and_count(tree, &reverse_order, &labeled);
                let best = best_candidate(
                    tree,
                    &reverse_order,
                    &used,
                    &entries,
                    &distances,
                    segment.root,
                    options.min_size,
                    options.min_distinction,
                );
                let Some((score, chosen)) = best else {
                    break;
                };
                if score <= options.floor {
                    break;
                }

                let name = if level == 1 {
                    let name = letter_code(top_serial);
                    top_serial += 1;
                    name
                } else {
                    let name = format!("{}.{}", segment.label, serial);
                    serial += 1;
                    name
                };

                // ban the chosen node and every ancestor up to and
                // including the segment root
                let mut current = Some(chosen);
                while let Some(node_id) = current {
                    used.insert(node_id);
                    if node_id == segment.root {
                        break;
                    }
                    current = tree.node(node_id).parent;
                }

                for leaf in tree.leaves_under(chosen) {
                    labeled.insert(leaf);
                    // finer labels overwrite coarser ones; safe because a
                    // coarser label is always a prefix of the finer one
                    assignment
                        .leaf_labels
                        .insert(tree.node(leaf).id.clone(), name.clone());
                }
                assignment
                    .root_labels
                    .entry(tree.node(chosen).id.clone())
                    .or_default()
                    .push(name.clone());
                assignment
                    .created_labels
                    .push((name.clone(), tree.node(chosen).id.clone()));
                next_segments.push(Segment {
                    label: name,
                    root: chosen,
                });

                if labeled.len() as f64 >= segment_leaves as f64 * options.cutoff {
                    break;
                }
            }
        }

        if next_segments.is_empty() {
            break;
        }
        assignment.levels = level;
        if options.max_levels != 0 && level >= options.max_levels {
            break;
        }
        segments = next_segments;
        level += 1;
    }

    assignment
}

/// Spreadsheet-style letter code for top-level lineages: A..Z, AA, AB, ...
fn letter_code(mut serial: u64) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push((b'A' + (serial % 26) as u8) as char);
        serial /= 26;
        if serial == 0 {
            break;
        }
        serial -= 1;
    }
    letters.iter().rev().collect()
}
