mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::ProjectionArgs;
use commands::{export, inspect, run};

/// Genofreq: A Genotype Frequency Projector
///
/// This tool projects how the genotype frequencies (AA, Aa, aa) of a
/// population change across generations once a mating pair has been fixed
/// for each genotype column of the transition matrix.
#[derive(Parser, Debug)]
#[command(name = "genofreq")]
#[command(author, version, about = "Projects genotype frequencies across generations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a projection and print the full report.
    ///
    /// Builds the transition matrix from the selected mating pairs, computes
    /// its eigendecomposition, and prints the trajectory generation by
    /// generation.
    Run(ProjectionArgs),

    /// Show the transition matrix for a selection of mating pairs.
    ///
    /// Prints the matrix, its column sums, and its eigenstructure without
    /// projecting a trajectory.
    Matrix {
        /// Mating pair per genotype column (numbers 1-6 or labels like AAxAa)
        #[arg(short, long, default_value = defaults::PAIRS)]
        pairs: String,
    },

    /// Export a projected trajectory to other formats (CSV, JSON).
    ///
    /// Use this to get trajectories out for analysis in Python, R, or other tools.
    Export {
        #[command(flatten)]
        projection: ProjectionArgs,

        /// Output format (csv, json)
        #[arg(short, long, default_value = defaults::EXPORT_FORMAT)]
        format: String,

        /// Output file (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(projection) => {
            run::run_projection(&projection)?;
        }
        Commands::Matrix { pairs } => {
            inspect::show_matrix(&pairs)?;
        }
        Commands::Export {
            projection,
            format,
            output,
        } => {
            export::export_trajectory(&projection, &format, output.as_deref())?;
        }
    }

    Ok(())
}
