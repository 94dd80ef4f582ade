use core::fmt;
use std::ops::Index;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::genotype::Genotype;

/// Genotype frequencies (AA, Aa, aa) for one generation.
///
/// A thin wrapper around three real numbers indexed by `Genotype`. The
/// engine takes the values exactly as given: nothing here normalizes, clamps
/// or validates, so callers that want a probability distribution are
/// responsible for supplying one. `is_distribution` is an advisory check
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrequencyVector([f64; 3]);

impl FrequencyVector {
    /// Create from the three genotype frequencies in axis order (AA, Aa, aa).
    #[inline]
    pub const fn new(dom: f64, het: f64, rec: f64) -> Self {
        Self([dom, het, rec])
    }

    /// Frequency of one genotype.
    #[inline(always)]
    pub const fn get(&self, genotype: Genotype) -> f64 {
        self.0[genotype.to_index() as usize]
    }

    /// Sum of the three entries.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// True when all entries are non-negative and sum to 1 within `tol`.
    pub fn is_distribution(&self, tol: f64) -> bool {
        self.0.iter().all(|&v| v >= 0.0) && (self.sum() - 1.0).abs() <= tol
    }

    /// The raw entries in axis order.
    #[inline(always)]
    pub const fn as_array(&self) -> [f64; 3] {
        self.0
    }

    /// Copy into a nalgebra column vector.
    #[inline]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::from(self.0)
    }

    /// Wrap the entries of a nalgebra column vector.
    #[inline]
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self([v.x, v.y, v.z])
    }
}

impl Default for FrequencyVector {
    /// A population fixed for AA.
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl From<[f64; 3]> for FrequencyVector {
    #[inline]
    fn from(entries: [f64; 3]) -> Self {
        Self(entries)
    }
}

impl From<FrequencyVector> for [f64; 3] {
    #[inline]
    fn from(freq: FrequencyVector) -> [f64; 3] {
        freq.0
    }
}

impl From<Vector3<f64>> for FrequencyVector {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::from_vector(&v)
    }
}

impl From<FrequencyVector> for Vector3<f64> {
    #[inline]
    fn from(freq: FrequencyVector) -> Vector3<f64> {
        freq.to_vector()
    }
}

impl Index<Genotype> for FrequencyVector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, genotype: Genotype) -> &f64 {
        &self.0[genotype.to_index() as usize]
    }
}

impl fmt::Display for FrequencyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.4}, {:.4}, {:.4})",
            self.0[0], self.0[1], self.0[2]
        )
    }
}
