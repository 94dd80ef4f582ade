use genofreq_sim::prelude::*;

use crate::defaults;
use crate::utils::format_complex;

pub fn print_request(request: &ProjectionRequest) {
    println!("\n📋 Projection Configuration");
    for (genotype, selection) in Genotype::ALL.iter().zip(request.selections) {
        println!(
            "  • {} column: {} (option {}) [-p, --pairs]",
            genotype.label(),
            selection,
            selection.menu_number()
        );
    }
    println!("  • Initial Frequencies: {} [-i, --initial]", request.initial);

    let total = request.initial.sum();
    if (total - 1.0).abs() > defaults::SUM_WARNING_TOLERANCE {
        println!("  ⚠️  Initial frequencies sum to {total:.4}, not 1");
    }

    println!("  • Generations: {} [-g, --generations]", request.generations);
    println!("  • Strategy: {} [-s, --strategy]", strategy_name(request.strategy));
}

fn strategy_name(strategy: ProjectionStrategy) -> &'static str {
    match strategy {
        ProjectionStrategy::Diagonalization => "diagonalization",
        ProjectionStrategy::RepeatedMultiplication => "repeated multiplication",
    }
}

pub fn print_matrix(matrix: &TransitionMatrix) {
    println!("\n🧬 Transition Matrix");
    println!("{}", "=".repeat(50));
    print!("{matrix}");

    let sums = matrix.column_sums();
    println!("Column sums: {:.4} {:.4} {:.4}", sums[0], sums[1], sums[2]);
}

pub fn print_eigen(eigen: &Eigendecomposition) {
    println!("\n📐 Eigenstructure");
    println!("{}", "=".repeat(50));
    for (i, value) in eigen.values().iter().enumerate() {
        println!("  λ{}: {}", i + 1, format_complex(*value));
    }

    println!("Eigenvector columns (one per eigenvalue above):");
    for row in 0..3 {
        let entries: Vec<String> = (0..3)
            .map(|col| format_complex(eigen.vectors()[(row, col)]))
            .collect();
        println!("  [ {} ]", entries.join("  "));
    }
}

pub fn print_trajectory(trajectory: &Trajectory) {
    println!("\n📈 Trajectory");
    println!("{}", "=".repeat(50));
    println!(
        "{:>10} {:>10} {:>10} {:>10}",
        "generation", "AA", "Aa", "aa"
    );
    for (generation, state) in trajectory.iter().enumerate() {
        println!(
            "{generation:>10} {:>10.6} {:>10.6} {:>10.6}",
            state.get(Genotype::Dom),
            state.get(Genotype::Het),
            state.get(Genotype::Rec)
        );
    }
}

pub fn print_summary(trajectory: &Trajectory) {
    println!(
        "\n📊 Distribution After Generation {}",
        trajectory.generations()
    );
    let final_state = trajectory.final_state();
    for genotype in Genotype::ALL {
        println!(
            "  • {}: {:.prec$}",
            genotype.label(),
            final_state.get(genotype),
            prec = defaults::SUMMARY_PRECISION
        );
    }
    println!();
}
