use anyhow::Result;
use genofreq_sim::prelude::*;

use crate::printing;
use crate::utils::parse_pairs;

/// Print the transition matrix and eigenstructure for a pair selection.
///
/// A defective matrix is reported rather than treated as an error, so the
/// matrix itself can still be inspected.
pub fn show_matrix(pairs: &str) -> Result<()> {
    let selections = parse_pairs(pairs)?;
    let matrix = TransitionMatrix::from_selections(selections);

    printing::print_matrix(&matrix);

    match Eigendecomposition::of(&matrix) {
        Ok(eigen) => printing::print_eigen(&eigen),
        Err(err) => println!("\n⚠️  No eigenbasis: {err}"),
    }
    println!();

    Ok(())
}
