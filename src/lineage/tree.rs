use crate::auspice::AuspiceNode;
use crate::lineage::types::MutationFilter;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};

pub type NodeId = usize;

#[derive(Debug)]
pub struct TreeNode {
    pub id: String,
    pub mutations: Vec<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed rooted tree. Children are owned index lists; the parent
/// index is used for upward lookup only, so there are no reference cycles.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    index: HashMap<String, NodeId>,
    root: NodeId,
}

impl Tree {
    /// Builds a tree from an Auspice node, keeping only mutation events
    /// matching `filter`. Uses an explicit work stack so arbitrarily deep
    /// trees do not overflow the call stack.
    ///
    /// Id assignment matches the projection pass in [`crate::auspice`]:
    /// the root is `node_0`, every other node consumes one tick of a
    /// pre-order counter starting at 1, and a named leaf keeps its name.
    pub fn from_auspice(source: &AuspiceNode, filter: &MutationFilter) -> Tree {
        let mut nodes: Vec<TreeNode> = Vec::new();
        let mut index = HashMap::new();
        let mut counter: u64 = 1;

        // (source node, parent arena index); children pushed in reverse so
        // the pre-order counter visits them in input order
        let mut stack: Vec<(&AuspiceNode, Option<NodeId>)> = vec![(source, None)];
        while let Some((snode, parent)) = stack.pop() {
            let id = match parent {
                None => "node_0".to_string(),
                Some(_) => {
                    let tick = counter;
                    counter += 1;
                    match &snode.name {
                        Some(name) if snode.children.is_empty() => name.clone(),
                        _ => format!("node_{}", tick),
                    }
                }
            };
            let arena_idx = nodes.len();
            nodes.push(TreeNode {
                id: id.clone(),
                mutations: filtered_events(snode, &id, filter),
                children: Vec::new(),
                parent,
            });
            index.insert(id, arena_idx);
            if let Some(parent_idx) = parent {
                nodes[parent_idx].children.push(arena_idx);
            }
            for child in snode.children.iter().rev() {
                stack.push((child, Some(arena_idx)));
            }
        }

        Tree {
            nodes,
            index,
            root: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Total mutation event count across all branches.
    pub fn parsimony_score(&self) -> u64 {
        self.nodes.iter().map(|n| n.mutations.len() as u64).sum()
    }

    /// Breadth-first expansion of the subtree rooted at `from`. With
    /// `reverse` set, children are guaranteed to precede their parent.
    pub fn breadth_first(&self, from: NodeId, reverse: bool) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut remaining = VecDeque::new();
        remaining.push_back(from);
        while let Some(current) = remaining.pop_front() {
            order.push(current);
            for &child in &self.nodes[current].children {
                remaining.push_back(child);
            }
        }
        if reverse {
            order.reverse();
        }
        order
    }

    /// Ids of all leaves in the subtree rooted at `from`.
    pub fn leaves_under(&self, from: NodeId) -> Vec<NodeId> {
        self.breadth_first(from, false)
            .into_iter()
            .filter(|&n| self.nodes[n].is_leaf())
            .collect()
    }
}

/// Extracts the branch mutation events of one source node under the active
/// filter mode. A missing or malformed mutation block is reported and
/// treated as empty; the build continues.
fn filtered_events(node: &AuspiceNode, id: &str, filter: &MutationFilter) -> Vec<String> {
    let mutations = match node
        .branch_attrs
        .as_ref()
        .and_then(|attrs| attrs.get("mutations"))
    {
        Some(Value::Object(map)) => map,
        _ => {
            eprintln!(
                "Warning: node '{}' has no usable mutation annotations; treating as empty",
                id
            );
            return Vec::new();
        }
    };

    let mut events = Vec::new();
    match filter {
        MutationFilter::Nucleotide => {
            if let Some(nuc) = mutations.get("nuc") {
                collect_events(nuc, id, &mut events);
            }
        }
        MutationFilter::AminoAcid { genes } => {
            for (gene, entries) in mutations {
                if gene == "nuc" {
                    continue;
                }
                if let Some(genes) = genes {
                    if !genes.contains(gene) {
                        continue;
                    }
                }
                collect_events(entries, id, &mut events);
            }
        }
    }
    events
}

fn collect_events(entries: &Value, id: &str, events: &mut Vec<String>) {
    match entries {
        Value::Array(list) => {
            for entry in list {
                if let Some(event) = entry.as_str() {
                    events.push(event.to_string());
                }
            }
        }
        _ => eprintln!(
            "Warning: node '{}' has a malformed mutation list; skipping it",
            id
        ),
    }
}
