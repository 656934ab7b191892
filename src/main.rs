use autolin::{cli, commands};
use clap::Parser;

fn main() {
    let args = cli::Args::parse();

    let result = match args.command {
        cli::Commands::Annotate {
            input,
            output,
            floor,
            size,
            distinction,
            cutoff,
            missense,
            genes,
            max_levels,
            table,
        } => commands::annotate::run(
            input,
            output,
            floor,
            size,
            distinction,
            cutoff,
            missense,
            genes,
            max_levels,
            table,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
