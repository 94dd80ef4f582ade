use core::fmt;

use nalgebra::{Matrix3, Vector3};

use crate::frequency::FrequencyVector;
use crate::genotype::{Genotype, MatingSelection};

/// Column-stochastic transition matrix over the three genotypes.
///
/// Column `i` holds the fixed offspring distribution of the mating pair
/// selected for genotype `i`, so every column sums to exactly 1 by
/// construction and left-multiplication preserves total frequency mass.
/// `from_selections` is the only constructor; arbitrary matrices cannot be
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionMatrix(Matrix3<f64>);

impl TransitionMatrix {
    /// Assemble the matrix for one mating selection per genotype column.
    ///
    /// Total function: every selection triple yields a matrix, selections
    /// may repeat across columns, and identical triples produce
    /// bitwise-identical matrices.
    pub fn from_selections(selections: [MatingSelection; 3]) -> Self {
        let mut matrix = Matrix3::zeros();
        for (i, selection) in selections.iter().enumerate() {
            matrix.set_column(i, &Vector3::from(selection.offspring_distribution()));
        }
        Self(matrix)
    }

    /// Borrow the underlying matrix.
    #[inline(always)]
    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Entry at (row, column) by genotype pair.
    #[inline]
    pub fn get(&self, row: Genotype, col: Genotype) -> f64 {
        self.0[(row.to_index() as usize, col.to_index() as usize)]
    }

    /// One column as an owned vector.
    pub fn column(&self, col: Genotype) -> Vector3<f64> {
        self.0.column(col.to_index() as usize).into_owned()
    }

    /// The three column sums in axis order.
    pub fn column_sums(&self) -> [f64; 3] {
        let mut sums = [0.0; 3];
        for (i, sum) in sums.iter_mut().enumerate() {
            *sum = self.0.column(i).sum();
        }
        sums
    }

    /// True when every column sums to 1 within `tol`.
    pub fn is_column_stochastic(&self, tol: f64) -> bool {
        self.column_sums().iter().all(|s| (s - 1.0).abs() <= tol)
    }

    /// Advance a frequency vector by one generation.
    pub fn propagate(&self, freq: &FrequencyVector) -> FrequencyVector {
        FrequencyVector::from_vector(&(self.0 * freq.to_vector()))
    }
}

impl fmt::Display for TransitionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     {:>7} {:>7} {:>7}", "AA", "Aa", "aa")?;
        for row in Genotype::ALL {
            write!(f, "{:<4}", row.label())?;
            for col in Genotype::ALL {
                write!(f, "  {:.4}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
