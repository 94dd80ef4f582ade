use nalgebra::{Complex, Matrix3, Normed, Schur, Vector3};

use crate::errors::SingularMatrix;
use crate::frequency::FrequencyVector;
use crate::matrix::TransitionMatrix;

/// Relative tolerance for rank decisions when extracting eigenvectors.
const RANK_TOL: f64 = 1e-9;

/// Tolerance below which two eigenvalues count as the same repeated root.
/// A true double root can split by roughly the square root of machine
/// epsilon under rounding, while genuinely distinct eigenvalues of these
/// matrices are separated by more than 0.1.
const EIGENVALUE_GROUP_TOL: f64 = 1e-6;

/// Iteration cap for the Schur eigenvalue solver.
const SCHUR_MAX_ITER: usize = 100;

/// Complex eigenstructure of a transition matrix.
///
/// Holds the eigenvalues, the eigenvector matrix `P` (column `j` is a
/// unit-norm eigenvector paired with eigenvalue `j`) and the precomputed
/// inverse of `P`. Eigenvalues appear in whatever order the solver returns
/// them; the order is not sorted and must not be relied upon. Everything is
/// kept in complex arithmetic; real parts are only taken when a caller asks
/// for a projected frequency vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Eigendecomposition {
    values: Vector3<Complex<f64>>,
    vectors: Matrix3<Complex<f64>>,
    inverse: Matrix3<Complex<f64>>,
}

impl Eigendecomposition {
    /// Decompose a transition matrix.
    ///
    /// Fails with `SingularMatrix` when the eigenvector matrix cannot be
    /// inverted. That covers defective matrices (a repeated eigenvalue whose
    /// eigenspace is smaller than its multiplicity), which have no
    /// eigenbasis at all, and the rare matrix whose eigenvalue iteration
    /// does not converge within the solver's sweep cap.
    pub fn of(matrix: &TransitionMatrix) -> Result<Self, SingularMatrix> {
        let complex = matrix.as_matrix().map(|x| Complex::new(x, 0.0));
        let values = Schur::try_new(*matrix.as_matrix(), f64::EPSILON, SCHUR_MAX_ITER)
            .ok_or(SingularMatrix)?
            .complex_eigenvalues();

        let mut columns = [Vector3::zeros(); 3];
        for (i, column) in columns.iter_mut().enumerate() {
            // A repeated eigenvalue shares the null space of its shifted
            // matrix; occurrence k of the eigenvalue takes basis vector k.
            let occurrence = (0..i)
                .filter(|&j| (values[j] - values[i]).norm() <= EIGENVALUE_GROUP_TOL)
                .count();
            let shifted = complex - Matrix3::from_diagonal_element(values[i]);
            let basis = null_space_basis(&shifted);
            *column = *basis.get(occurrence).ok_or(SingularMatrix)?;
        }

        let vectors = Matrix3::from_columns(&columns);
        let inverse = vectors.try_inverse().ok_or(SingularMatrix)?;

        Ok(Self {
            values,
            vectors,
            inverse,
        })
    }

    /// Eigenvalues in solver order.
    #[inline(always)]
    pub fn values(&self) -> &Vector3<Complex<f64>> {
        &self.values
    }

    /// Eigenvector matrix `P`; column `j` pairs with eigenvalue `j`.
    #[inline(always)]
    pub fn vectors(&self) -> &Matrix3<Complex<f64>> {
        &self.vectors
    }

    /// Precomputed inverse of the eigenvector matrix.
    #[inline(always)]
    pub fn inverse(&self) -> &Matrix3<Complex<f64>> {
        &self.inverse
    }

    /// The matrix power `P · diag(λ)^g · P⁻¹` as a complex matrix.
    ///
    /// For `generations = 0` the result is numerically close to (not
    /// bitwise) the identity.
    pub fn matrix_power(&self, generations: u32) -> Matrix3<Complex<f64>> {
        let powered = self.values.map(|value| value.powu(generations));
        self.vectors * Matrix3::from_diagonal(&powered) * self.inverse
    }

    /// Project an initial vector `generations` steps ahead in one jump and
    /// report the real parts.
    pub fn project(&self, initial: &FrequencyVector, generations: u32) -> FrequencyVector {
        let x = initial.to_vector().map(|v| Complex::new(v, 0.0));
        let projected = self.matrix_power(generations) * x;
        FrequencyVector::new(projected.x.re, projected.y.re, projected.z.re)
    }
}

/// Unit-norm basis of the numerical null space of `b`.
///
/// Returns one vector when `b` has rank 2 (the best-conditioned cross
/// product of two rows), two vectors when it has rank 1 and the standard
/// basis when it is numerically zero. Vectors failing the conditioning
/// thresholds are omitted, so a defective shifted matrix yields a basis
/// shorter than the eigenvalue multiplicity needs.
fn null_space_basis(b: &Matrix3<Complex<f64>>) -> Vec<Vector3<Complex<f64>>> {
    let rows = [
        b.row(0).transpose(),
        b.row(1).transpose(),
        b.row(2).transpose(),
    ];
    let scale = rows.iter().map(|r| r.norm()).fold(0.0_f64, f64::max);
    if scale <= RANK_TOL {
        return vec![Vector3::x(), Vector3::y(), Vector3::z()];
    }

    let mut best = Vector3::zeros();
    let mut best_norm = 0.0_f64;
    for (i, j) in [(0, 1), (0, 2), (1, 2)] {
        let cross = rows[i].cross(&rows[j]);
        let norm = cross.norm();
        if norm > best_norm {
            best = cross;
            best_norm = norm;
        }
    }
    if best_norm > RANK_TOL * scale * scale {
        return vec![best.unscale(best_norm)];
    }

    // Rank 1: every row is a multiple of the strongest one, and the null
    // space is the plane that row annihilates.
    let mut strongest = rows[0];
    for row in &rows[1..] {
        if row.norm() > strongest.norm() {
            strongest = *row;
        }
    }

    let mut basis = Vec::with_capacity(2);
    let v1 = strongest.cross(&least_aligned_axis(&strongest));
    if v1.norm() <= RANK_TOL * scale {
        return basis;
    }
    let v1 = v1.unscale(v1.norm());
    basis.push(v1);
    let v2 = strongest.cross(&v1);
    if v2.norm() > RANK_TOL * scale {
        basis.push(v2.unscale(v2.norm()));
    }
    basis
}

/// The standard basis vector least aligned with `v`.
fn least_aligned_axis(v: &Vector3<Complex<f64>>) -> Vector3<Complex<f64>> {
    let mut k = 0;
    let mut smallest = v[0].norm();
    for i in 1..3 {
        let norm = v[i].norm();
        if norm < smallest {
            smallest = norm;
            k = i;
        }
    }
    let mut axis = Vector3::zeros();
    axis[k] = Complex::new(1.0, 0.0);
    axis
}
