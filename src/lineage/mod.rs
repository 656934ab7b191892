pub mod aggregate;
pub mod assigner;
pub mod distance;
pub mod scoring;
pub mod tree;
pub mod types;

use crate::auspice::{project_labels, AuspiceDocument};
use crate::export::write_label_table;
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

pub use assigner::assign_lineages;
pub use tree::Tree;
pub use types::{AnnotateOptions, LineageAssignment, MutationFilter};

/// Full annotation run: load an Auspice JSON, build the filtered mutation
/// tree, assign lineage labels, project them back into the document and
/// write it out, with an optional sample/lineage table on the side.
pub fn annotate(
    input: &Path,
    output: &Path,
    options: &AnnotateOptions,
    table: Option<&Path>,
) -> Result<()> {
    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    progress.set_message("Reading input JSON...");

    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input JSON {}", input.display()))?;
    let mut document: AuspiceDocument = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse Auspice JSON {}", input.display()))?;

    progress.set_message("Building mutation tree...");
    let tree = Tree::from_auspice(&document.tree, &options.filter);
    let parsimony = tree.parsimony_score();
    if parsimony == 0 {
        bail!(
            "Tree has no mutations after filtering (parsimony score 0). \
             Check that the input carries branch mutation annotations and \
             that the --missense/--gene filters match its gene names."
        );
    }
    println!(
        "Loaded tree with {} nodes; parsimony score {}.",
        tree.len(),
        parsimony
    );

    progress.set_message("Assigning lineages...");
    let assignment = assign_lineages(&tree, options);
    for (label, node_id) in &assignment.created_labels {
        println!("Annotation {} generated for node {}.", label, node_id);
    }
    println!(
        "Total samples labeled: {}\nTotal labels generated: {}",
        assignment.leaf_labels.len(),
        assignment.label_count()
    );

    progress.set_message("Annotating JSON...");
    project_labels(&mut document, &assignment);
    let annotated =
        serde_json::to_string(&document).context("Failed to serialize annotated JSON")?;
    fs::write(output, annotated)
        .with_context(|| format!("Failed to write output JSON {}", output.display()))?;

    if let Some(table_path) = table {
        write_label_table(table_path, &assignment)?;
    }

    progress.finish_with_message("Annotation complete!");
    Ok(())
}
