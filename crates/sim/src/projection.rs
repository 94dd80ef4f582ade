use serde::{Deserialize, Serialize};

use crate::eigen::Eigendecomposition;
use crate::errors::{InvalidGenerations, ProjectionError};
use crate::frequency::FrequencyVector;
use crate::genotype::MatingSelection;
use crate::matrix::TransitionMatrix;
use crate::trajectory::Trajectory;

/// How the per-generation states of a trajectory are computed.
///
/// Both strategies agree to well below reporting precision on
/// well-conditioned matrices. `Diagonalization` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStrategy {
    /// One jump per generation through `P · diag(λ)^g · P⁻¹`.
    #[default]
    Diagonalization,
    /// Repeated left-multiplication by the transition matrix.
    RepeatedMultiplication,
}

/// Project an initial frequency vector with the default strategy.
pub fn project_trajectory(
    matrix: &TransitionMatrix,
    initial: &FrequencyVector,
    generations: i32,
) -> Result<Trajectory, ProjectionError> {
    project_trajectory_with(matrix, initial, generations, ProjectionStrategy::default())
}

/// Project an initial frequency vector with an explicit strategy.
///
/// The eigendecomposition is part of the operation, so a matrix without an
/// invertible eigenbasis fails with `SingularMatrix` under either strategy.
/// Negative `generations` fail with `InvalidGenerations`. The initial vector
/// itself is never validated; its values flow through the arithmetic exactly
/// as given.
pub fn project_trajectory_with(
    matrix: &TransitionMatrix,
    initial: &FrequencyVector,
    generations: i32,
    strategy: ProjectionStrategy,
) -> Result<Trajectory, ProjectionError> {
    let generations = checked_generations(generations)?;
    let eigen = Eigendecomposition::of(matrix)?;
    Ok(fill_trajectory(matrix, &eigen, initial, generations, strategy))
}

/// A complete, self-describing projection request.
///
/// Mirrors how front-ends drive the engine: three mating selections (one per
/// genotype column), an initial vector, a generation count and a strategy.
/// Serializes cleanly so runs can be stored and replayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub selections: [MatingSelection; 3],
    pub initial: FrequencyVector,
    pub generations: i32,
    #[serde(default)]
    pub strategy: ProjectionStrategy,
}

impl ProjectionRequest {
    /// Assemble the matrix, decompose it and project the trajectory.
    pub fn run(&self) -> Result<ProjectionOutcome, ProjectionError> {
        let generations = checked_generations(self.generations)?;
        let matrix = TransitionMatrix::from_selections(self.selections);
        let eigen = Eigendecomposition::of(&matrix)?;
        let trajectory =
            fill_trajectory(&matrix, &eigen, &self.initial, generations, self.strategy);
        Ok(ProjectionOutcome {
            matrix,
            eigen,
            trajectory,
        })
    }
}

/// Everything a front-end renders from one request: the assembled matrix,
/// its eigenstructure and the projected trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionOutcome {
    pub matrix: TransitionMatrix,
    pub eigen: Eigendecomposition,
    pub trajectory: Trajectory,
}

fn checked_generations(generations: i32) -> Result<u32, InvalidGenerations> {
    u32::try_from(generations).map_err(|_| InvalidGenerations(generations))
}

fn fill_trajectory(
    matrix: &TransitionMatrix,
    eigen: &Eigendecomposition,
    initial: &FrequencyVector,
    generations: u32,
    strategy: ProjectionStrategy,
) -> Trajectory {
    let mut states = Vec::with_capacity(generations as usize + 1);
    // Generation 0 is the caller's vector verbatim, no arithmetic applied.
    states.push(*initial);
    match strategy {
        ProjectionStrategy::Diagonalization => {
            for g in 1..=generations {
                states.push(eigen.project(initial, g));
            }
        }
        ProjectionStrategy::RepeatedMultiplication => {
            let mut current = *initial;
            for _ in 0..generations {
                current = matrix.propagate(&current);
                states.push(current);
            }
        }
    }
    Trajectory::new(states)
}
