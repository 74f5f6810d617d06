use std::fs::File;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lollipop_engine::diagram::state::DiagramController;
use lollipop_engine::input::load_mutations;
use lollipop_engine::model::config::DiagramConfig;
use lollipop_engine::model::mutation::MutationRecord;
use lollipop_engine::report::write_reports;

#[derive(Debug, Parser)]
#[command(name = "lollipop-engine", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate mutation records and write the derived diagram state.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Mutation records: .json or .maf/.tsv/.txt, optionally gzipped.
    #[arg(long)]
    input: PathBuf,
    /// Output directory for diagram.json and summary.txt.
    #[arg(long)]
    out: PathBuf,
    /// Optional diagram configuration (JSON, camelCase keys).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Protein sequence length; defaults to the maximal resolved
    /// mutation position in the input.
    #[arg(long)]
    sequence_length: Option<u32>,
    /// Keep only records of one gene (case-insensitive) as a filter
    /// pass on top of the full diagram.
    #[arg(long)]
    filter_gene: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Run(args) = cli.command;

    let config = match &args.config {
        Some(path) => {
            let file = File::open(path).map_err(|e| e.to_string())?;
            serde_json::from_reader::<_, DiagramConfig>(file).map_err(|e| e.to_string())?
        }
        None => DiagramConfig::default(),
    };

    let mutations = load_mutations(&args.input).map_err(|e| e.to_string())?;
    let sequence_length = match args.sequence_length {
        Some(len) => f64::from(len),
        None => derived_sequence_length(&mutations),
    };

    let mut controller = DiagramController::new(mutations.clone(), sequence_length, config)
        .map_err(|e| e.to_string())?;

    if let Some(gene) = &args.filter_gene {
        let subset: Vec<MutationRecord> = mutations
            .iter()
            .filter(|m| m.gene.eq_ignore_ascii_case(gene))
            .cloned()
            .collect();
        tracing::info!(gene = %gene, subset = subset.len(), "applying gene filter");
        controller.filter(&subset).map_err(|e| e.to_string())?;
    }

    write_reports(&controller, &args.out).map_err(|e| e.to_string())?;
    Ok(())
}

fn derived_sequence_length(mutations: &[MutationRecord]) -> f64 {
    mutations
        .iter()
        .filter_map(|m| m.resolved_position())
        .max()
        .map(f64::from)
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
