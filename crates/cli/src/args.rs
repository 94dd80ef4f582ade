use clap::Args;

use crate::defaults;

/// Arguments shared by every command that projects a trajectory.
#[derive(Args, Debug)]
pub struct ProjectionArgs {
    /// Mating pair per genotype column, comma-separated
    ///
    /// One entry for each column (AA, Aa, aa), given either as a menu number
    /// (1-6) or as a pair label such as AAxAa.
    #[arg(short, long, default_value = defaults::PAIRS)]
    pub pairs: String,

    /// Initial genotype frequencies as AA,Aa,aa
    #[arg(short, long, default_value = defaults::INITIAL)]
    pub initial: String,

    /// Number of generations to project
    #[arg(
        short,
        long,
        default_value_t = defaults::GENERATIONS,
        allow_negative_numbers = true
    )]
    pub generations: i32,

    /// Projection strategy (diagonalization, repeated)
    #[arg(short, long, default_value = defaults::STRATEGY)]
    pub strategy: String,
}
