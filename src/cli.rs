use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add lineage nomenclature labels to an Auspice JSON using the
    /// genotype representation heuristic
    Annotate {
        /// Input Auspice JSON file
        input: String,

        /// Output annotated JSON file
        output: String,

        /// Minimum genotype representation score to annotate a lineage
        #[arg(short = 'f', long, default_value = "0")]
        floor: f64,

        /// Minimum number of samples to annotate a lineage
        #[arg(short = 's', long, default_value = "0")]
        size: u64,

        /// Minimum number of mutations separating a new lineage from its parent
        #[arg(short = 'd', long, default_value = "0")]
        distinction: u64,

        /// Proportion of samples that must be labeled on each level
        #[arg(short = 'c', long, default_value = "1.0")]
        cutoff: f64,

        /// Only consider amino-acid altering mutations
        #[arg(short = 'm', long)]
        missense: bool,

        /// Only consider missense mutations within a specific gene
        /// (repeatable; implies --missense)
        #[arg(short = 'g', long = "gene")]
        genes: Vec<String>,

        /// Maximum number of levels to generate (0 = unlimited)
        #[arg(short = 'l', long = "levels", default_value = "0")]
        max_levels: u32,

        /// Optional TSV file mapping each sample to its lineage
        #[arg(short = 't', long)]
        table: Option<String>,
    },
}
