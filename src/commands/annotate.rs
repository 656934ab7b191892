use crate::lineage;
use crate::lineage::types::{AnnotateOptions, MutationFilter};
use anyhow::Result;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub fn run(
    input: String,
    output: String,
    floor: f64,
    size: u64,
    distinction: u64,
    cutoff: f64,
    missense: bool,
    genes: Vec<String>,
    max_levels: u32,
    table: Option<String>,
) -> Result<()> {
    let options = AnnotateOptions {
        floor,
        min_size: size,
        min_distinction: distinction,
        cutoff,
        max_levels,
        filter: MutationFilter::from_flags(missense, &genes),
    };
    lineage::annotate(
        Path::new(&input),
        Path::new(&output),
        &options,
        table.as_deref().map(Path::new),
    )
}
