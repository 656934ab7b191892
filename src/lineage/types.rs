use std::collections::{HashMap, HashSet};

/// Selects which branch mutation events are kept when loading a tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationFilter {
    /// Nucleotide events only (the `nuc` key of the mutation block).
    Nucleotide,
    /// Amino-acid altering events, optionally restricted to a gene set.
    AminoAcid { genes: Option<HashSet<String>> },
}

impl MutationFilter {
    /// Builds a filter from the CLI flags. A non-empty gene list implies
    /// missense-only mode.
    pub fn from_flags(missense: bool, genes: &[String]) -> Self {
        if !genes.is_empty() {
            MutationFilter::AminoAcid {
                genes: Some(genes.iter().cloned().collect()),
            }
        } else if missense {
            MutationFilter::AminoAcid { genes: None }
        } else {
            MutationFilter::Nucleotide
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnnotateOptions {
    /// Minimum genotype representation score required to commit a label.
    pub floor: f64,
    /// Minimum number of samples in a candidate clade.
    pub min_size: u64,
    /// Minimum number of mutations separating a candidate from its segment root.
    pub min_distinction: u64,
    /// Proportion of a segment's samples that must be labeled per level.
    pub cutoff: f64,
    /// Maximum number of levels to generate; 0 means unlimited.
    pub max_levels: u32,
    pub filter: MutationFilter,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            floor: 0.0,
            min_size: 0,
            min_distinction: 0,
            cutoff: 1.0,
            max_levels: 0,
            filter: MutationFilter::Nucleotide,
        }
    }
}

/// Final output of the lineage assignment.
#[derive(Debug, Default)]
pub struct LineageAssignment {
    /// Finest lineage label covering each sample, keyed by leaf id.
    pub leaf_labels: HashMap<String, String>,
    /// Labels rooted at each chosen node, in creation order. Normally one
    /// entry per node.
    pub root_labels: HashMap<String, Vec<String>>,
    /// Every committed (label, lineage root node id) pair in creation
    /// order, for reporting.
    pub created_labels: Vec<(String, String)>,
    /// Deepest level at which any label was generated.
    pub levels: u32,
}

impl LineageAssignment {
    pub fn label_count(&self) -> usize {
        self.root_labels.values().map(|labels| labels.len()).sum()
    }
}
