use autolin::lineage::{self, AnnotateOptions, MutationFilter};
use serde_json::{json, Value};
use std::fs;

fn fixture_json() -> Value {
    json!({
        "version": "v2",
        "meta": {
            "title": "test build",
            "colorings": [{"key": "gt", "title": "Genotype", "type": "categorical"}]
        },
        "tree": {
            "name": "R",
            "branch_attrs": {"mutations": {"nuc": []}},
            "children": [
                {
                    "name": "A",
                    "branch_attrs": {"mutations": {"nuc": ["G1A", "G2A", "G3A", "G4A", "G5A"]}},
                    "node_attrs": {"div": 5.0}
                },
                {
                    "name": "B",
                    "branch_attrs": {"mutations": {"nuc": ["C1T", "C2T"], "S": ["S:D614G"]}},
                    "children": [
                        {"name": "L1", "branch_attrs": {"mutations": {"nuc": ["A1C", "A2C", "A3C"]}}},
                        {"name": "L2", "branch_attrs": {"mutations": {"nuc": ["T1G", "T2G", "T3G"]}}}
                    ]
                }
            ]
        }
    })
}

#[test]
fn annotate_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("annotated.json");
    let table = dir.path().join("labels.tsv");
    fs::write(&input, serde_json::to_string(&fixture_json()).unwrap()).unwrap();

    lineage::annotate(
        &input,
        &output,
        &AnnotateOptions::default(),
        Some(table.as_path()),
    )
    .unwrap();

    let annotated: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    // leaves carry the finest label plus per-level truncations
    let b = &annotated["tree"]["children"][1];
    let l1 = &b["children"][0];
    assert_eq!(l1["node_attrs"]["lineage"]["value"], json!("A.0"));
    assert_eq!(l1["node_attrs"]["lineage_level_1"]["value"], json!("A"));
    assert_eq!(l1["node_attrs"]["lineage_level_2"]["value"], json!("A.0"));
    let l2 = &b["children"][1];
    assert_eq!(l2["node_attrs"]["lineage"]["value"], json!("A.1"));
    let a = &annotated["tree"]["children"][0];
    assert_eq!(a["node_attrs"]["lineage"]["value"], json!("B"));

    // lineage roots are marked
    assert_eq!(b["node_attrs"]["lineage_root"]["value"], json!("A"));

    // colorings appended after the pre-existing entry
    let keys: Vec<&str> = annotated["meta"]["colorings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["gt", "lineage", "lineage_level_1", "lineage_level_2"]);

    // unrelated document content survives the round trip
    assert_eq!(annotated["version"], json!("v2"));
    assert_eq!(annotated["meta"]["title"], json!("test build"));
    assert_eq!(a["node_attrs"]["div"], json!(5.0));

    // the sample table is sorted and complete
    let contents = fs::read_to_string(&table).unwrap();
    assert_eq!(contents, "sample\tlineage\nA\tB\nL1\tA.0\nL2\tA.1\n");
}

#[test]
fn annotate_with_gene_filter() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("annotated.json");
    fs::write(&input, serde_json::to_string(&fixture_json()).unwrap()).unwrap();

    // only the single S event on B survives the filter; B becomes the one
    // viable clade and its leaves the only labeled samples
    let options = AnnotateOptions {
        filter: MutationFilter::from_flags(false, &["S".to_string()]),
        ..AnnotateOptions::default()
    };
    lineage::annotate(&input, &output, &options, None).unwrap();

    let annotated: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let b = &annotated["tree"]["children"][1];
    assert_eq!(b["children"][0]["node_attrs"]["lineage"]["value"], json!("A"));
    assert_eq!(b["children"][1]["node_attrs"]["lineage"]["value"], json!("A"));
    // leaf A carries no S mutations and stays on the placeholder
    let a = &annotated["tree"]["children"][0];
    assert_eq!(a["node_attrs"]["lineage"]["value"], json!("Root"));
}

#[test]
fn annotate_fails_on_empty_parsimony() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("annotated.json");
    fs::write(&input, serde_json::to_string(&fixture_json()).unwrap()).unwrap();

    // no branch carries any ORF3a event, so filtering empties the tree
    let options = AnnotateOptions {
        filter: MutationFilter::from_flags(false, &["ORF3a".to_string()]),
        ..AnnotateOptions::default()
    };
    let err = lineage::annotate(&input, &output, &options, None).unwrap_err();
    assert!(err.to_string().contains("parsimony score 0"));
    assert!(!output.exists());
}

#[test]
fn annotate_fails_on_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("annotated.json");
    fs::write(&input, "{\"meta\": {}}").unwrap();

    let err = lineage::annotate(&input, &output, &AnnotateOptions::default(), None).unwrap_err();
    assert!(err.to_string().contains("parse"));
}
