//! # Projection Crate
//!
//! The `sim` crate provides the core logic for genotype frequency
//! projection. It includes modules for the genotype and mating-pair types,
//! assembling column-stochastic transition matrices, decomposing them into
//! complex eigenstructure, and projecting frequency trajectories across
//! generations.

pub mod eigen;
pub mod errors;
pub mod frequency;
pub mod genotype;
pub mod matrix;
pub mod projection;
pub mod trajectory;
pub mod prelude;

pub use genotype::{Genotype, MatingSelection};
