use anyhow::{bail, Context, Result};
use genofreq_sim::prelude::*;
use nalgebra::Complex;

use crate::args::ProjectionArgs;

/// Parse a comma-separated list like `0.5,0.3,0.2` into a frequency vector.
pub fn parse_initial(text: &str) -> Result<FrequencyVector> {
    let values: Vec<f64> = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid frequency '{}'", part.trim()))
        })
        .collect::<Result<_>>()?;

    if values.len() != 3 {
        bail!(
            "Expected 3 comma-separated frequencies (AA,Aa,aa), got {}",
            values.len()
        );
    }

    Ok(FrequencyVector::new(values[0], values[1], values[2]))
}

/// Parse a comma-separated list like `AAxAA,2,Aa×aa` into one mating
/// selection per genotype column.
///
/// Inside a list the parents of a pair must be joined with `x` or `×`;
/// the comma is reserved for separating the three entries.
pub fn parse_pairs(text: &str) -> Result<[MatingSelection; 3]> {
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != 3 {
        bail!(
            "Expected 3 comma-separated mating pairs (one per genotype column), got {}",
            tokens.len()
        );
    }

    let mut selections = [MatingSelection::DomDom; 3];
    for (slot, token) in selections.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .with_context(|| format!("Invalid mating pair '{}'", token.trim()))?;
    }

    Ok(selections)
}

/// Parse a strategy name as accepted on the command line.
pub fn parse_strategy(text: &str) -> Result<ProjectionStrategy> {
    match text {
        "diagonalization" | "diag" => Ok(ProjectionStrategy::Diagonalization),
        "repeated" | "repeated-multiplication" => Ok(ProjectionStrategy::RepeatedMultiplication),
        _ => bail!("Unknown strategy '{text}'. Use: diagonalization or repeated"),
    }
}

/// Assemble a projection request from raw command-line arguments.
pub fn build_request(args: &ProjectionArgs) -> Result<ProjectionRequest> {
    Ok(ProjectionRequest {
        selections: parse_pairs(&args.pairs)?,
        initial: parse_initial(&args.initial)?,
        generations: args.generations,
        strategy: parse_strategy(&args.strategy)?,
    })
}

/// Format a complex number as `a+bi` at fixed precision.
pub fn format_complex(value: Complex<f64>) -> String {
    format!("{:.4}{:+.4}i", value.re, value.im)
}
