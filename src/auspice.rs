use crate::lineage::assigner::ROOT_LABEL;
use crate::lineage::types::LineageAssignment;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// One node of an Auspice tree. Only the members the pipeline touches are
/// typed; everything else rides along in `extra` so the document
/// round-trips untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuspiceNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_attrs: Option<Value>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub node_attrs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AuspiceNode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuspiceDocument {
    #[serde(default)]
    pub meta: Map<String, Value>,
    pub tree: AuspiceNode,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Writes the lineage assignment back onto the document: categorical
/// coloring declarations in `meta`, per-leaf lineage attributes (full and
/// truncated per level), and a marker on each lineage root node.
pub fn project_labels(document: &mut AuspiceDocument, assignment: &LineageAssignment) {
    let colorings = document
        .meta
        .entry("colorings".to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(entries) = colorings {
        entries.push(coloring("lineage"));
        for level in 1..=assignment.levels {
            entries.push(coloring(&format!("lineage_level_{}", level)));
        }
    }

    // replay of the builder's id assignment: root is node_0, every other
    // node ticks the pre-order counter, named leaves keep their name
    let mut counter: u64 = 1;
    let mut stack: Vec<(&mut AuspiceNode, bool)> = vec![(&mut document.tree, true)];
    while let Some((node, is_root)) = stack.pop() {
        let id = if is_root {
            "node_0".to_string()
        } else {
            let tick = counter;
            counter += 1;
            match &node.name {
                Some(name) if node.children.is_empty() => name.clone(),
                _ => format!("node_{}", tick),
            }
        };

        if node.children.is_empty() {
            let label = assignment
                .leaf_labels
                .get(&id)
                .map(String::as_str)
                .unwrap_or(ROOT_LABEL);
            node.node_attrs
                .insert("lineage".to_string(), json!({ "value": label }));
            for level in 1..=assignment.levels {
                node.node_attrs.insert(
                    format!("lineage_level_{}", level),
                    json!({ "value": truncate_label(label, level as usize) }),
                );
            }
        }
        if let Some(labels) = assignment.root_labels.get(&id) {
            node.node_attrs.insert(
                "lineage_root".to_string(),
                json!({ "value": labels.join(",") }),
            );
        }

        for child in node.children.iter_mut().rev() {
            stack.push((child, false));
        }
    }
}

fn coloring(key: &str) -> Value {
    json!({ "key": key, "title": key, "type": "categorical" })
}

/// First `components` dotted components of a label; a shallower label is
/// used whole.
fn truncate_label(label: &str, components: usize) -> String {
    label
        .split('.')
        .take(components)
        .collect::<Vec<_>>()
        .join(".")
}
