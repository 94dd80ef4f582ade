//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and functions in the genofreq library.
//!
//! # Example
//!
//! ```
//! use genofreq_sim::prelude::*;
//!
//! let matrix = TransitionMatrix::from_selections([
//!     MatingSelection::DomDom,
//!     MatingSelection::HetHet,
//!     MatingSelection::RecRec,
//! ]);
//! let initial = FrequencyVector::new(0.5, 0.3, 0.2);
//! let trajectory = project_trajectory(&matrix, &initial, 10).unwrap();
//! assert_eq!(trajectory.len(), 11);
//! ```

pub use crate::errors;
pub use crate::eigen::Eigendecomposition;
pub use crate::frequency::FrequencyVector;
pub use crate::genotype::{Genotype, MatingSelection};
pub use crate::matrix::TransitionMatrix;
pub use crate::projection::{
    project_trajectory, project_trajectory_with, ProjectionOutcome, ProjectionRequest,
    ProjectionStrategy,
};
pub use crate::trajectory::Trajectory;
