// Command-line entry point for callbench.

use anyhow::{bail, Context};
use callbench::application::{EmitUsecase, GenerateUsecase};
use callbench::domain::shape::{ShapeParams, DEFAULT_SEED};
use callbench::infrastructure::{strategy_by_name, strategy_names};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a call graph artifact from shape parameters.
    Generate {
        /// Generation strategy (branching-tree, dfs-chase, pointer-chase)
        #[arg(short, long, default_value = "branching-tree")]
        strategy: String,

        /// Number of levels in the call tree, root included
        #[arg(short, long)]
        depth: u32,

        /// Target average callees per interior node
        #[arg(short = 'w', long, default_value_t = 2.0)]
        avg_width: f64,

        /// Fraction of nodes given intra-function control flow
        #[arg(short = 'p', long, default_value_t = 0.0)]
        branch_probability: f64,

        /// RNG seed; identical runs reproduce identical artifacts
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Add forward same-depth edges (branching-tree only)
        #[arg(long)]
        cross_edges: bool,

        /// Output artifact path (.bin or .json)
        output: PathBuf,
    },

    /// Lower a call graph artifact into C sources plus a Makefile.
    Emit {
        /// Path to a serialized call graph artifact
        artifact: PathBuf,

        /// Directory to write sources and the Makefile into
        output_dir: PathBuf,

        /// Number of C files to partition functions across
        #[arg(short, long, default_value_t = 1)]
        num_files: usize,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            strategy,
            depth,
            avg_width,
            branch_probability,
            seed,
            cross_edges,
            output,
        } => {
            let Some(strategy) = strategy_by_name(&strategy) else {
                bail!(
                    "unknown strategy `{}`, expected one of: {}",
                    strategy,
                    strategy_names().join(", ")
                );
            };
            let params = ShapeParams::new(depth, avg_width)
                .with_branch_probability(branch_probability)
                .with_seed(seed)
                .with_cross_edges(cross_edges);

            let usecase = GenerateUsecase {
                strategy: strategy.as_ref(),
            };
            let report = usecase
                .run(&params, &output)
                .with_context(|| format!("generating {}", output.display()))?;
            println!(
                "[Generate] {} wrote {} nodes, {} edges, depth {} to {}",
                strategy.name(),
                report.nodes,
                report.edges,
                report.max_depth,
                output.display()
            );
        }
        Commands::Emit {
            artifact,
            output_dir,
            num_files,
        } => {
            let report = EmitUsecase
                .run(&artifact, &output_dir, num_files)
                .with_context(|| format!("emitting sources from {}", artifact.display()))?;
            println!(
                "[Emit] {} functions across {} translation units in {}",
                report.functions,
                report.translation_units,
                output_dir.display()
            );
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
