use anyhow::{Context, Result};
use genofreq_sim::prelude::*;
use serde_json::json;
use std::path::Path;

use crate::args::ProjectionArgs;
use crate::utils::build_request;

pub fn export_trajectory(args: &ProjectionArgs, format: &str, output: Option<&Path>) -> Result<()> {
    let request = build_request(args)?;
    let outcome = request.run().context("Projection failed")?;
    let trajectory = &outcome.trajectory;

    let content = match format {
        "csv" => {
            let mut content = String::from("generation,AA,Aa,aa\n");
            for (generation, state) in trajectory.iter().enumerate() {
                content.push_str(&format!(
                    "{generation},{},{},{}\n",
                    state.get(Genotype::Dom),
                    state.get(Genotype::Het),
                    state.get(Genotype::Rec)
                ));
            }
            content
        }
        "json" => {
            let rows: Vec<_> = trajectory
                .iter()
                .enumerate()
                .map(|(generation, state)| {
                    json!({
                        "generation": generation,
                        "AA": state.get(Genotype::Dom),
                        "Aa": state.get(Genotype::Het),
                        "aa": state.get(Genotype::Rec),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&rows)?
        }
        _ => anyhow::bail!("Unknown format '{format}'. Use: csv or json"),
    };

    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Trajectory exported to: {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
