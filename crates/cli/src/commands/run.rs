use anyhow::{Context, Result};

use crate::args::ProjectionArgs;
use crate::printing;
use crate::utils::build_request;

pub fn run_projection(args: &ProjectionArgs) -> Result<()> {
    println!("🧬 Genofreq - Running Projection");
    println!("============================================");

    let request = build_request(args)?;
    printing::print_request(&request);

    let outcome = request.run().context("Projection failed")?;

    printing::print_matrix(&outcome.matrix);
    printing::print_eigen(&outcome.eigen);
    printing::print_trajectory(&outcome.trajectory);
    printing::print_summary(&outcome.trajectory);

    Ok(())
}
