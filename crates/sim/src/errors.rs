use std::error;
use std::fmt;

/// Error returned when a projection is requested for a negative number of
/// generations. Carries the offending count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGenerations(pub i32);

impl fmt::Display for InvalidGenerations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid generation count: {} (must be non-negative)",
            self.0
        )
    }
}

impl error::Error for InvalidGenerations {}

/// Error returned when a transition matrix has no usable eigenbasis.
///
/// Covers a numerically singular eigenvector matrix, the defective case
/// where a repeated eigenvalue does not contribute enough independent
/// eigenvectors to span the space, and an eigenvalue iteration that does
/// not converge within the solver's cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularMatrix;

impl fmt::Display for SingularMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eigenvector matrix is singular and cannot be inverted")
    }
}

impl error::Error for SingularMatrix {}

/// Error returned when attempting to convert an out-of-range index into a
/// `Genotype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGenotype(pub u8);

impl fmt::Display for InvalidGenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid genotype index: {} (expected 0-2)", self.0)
    }
}

impl error::Error for InvalidGenotype {}

/// Error returned when a string cannot be parsed as a `MatingSelection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMatingSelection(pub String);

impl fmt::Display for InvalidMatingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid mating selection: '{}' (expected a number 1-6 or a pair label like 'AAxAa')",
            self.0
        )
    }
}

impl error::Error for InvalidMatingSelection {}

/// Errors that can occur during trajectory projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// Negative generation count requested
    InvalidGenerations(InvalidGenerations),
    /// The eigenvector matrix could not be inverted
    SingularMatrix(SingularMatrix),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGenerations(e) => write!(f, "{e}"),
            Self::SingularMatrix(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidGenerations(e) => Some(e),
            Self::SingularMatrix(e) => Some(e),
        }
    }
}

impl From<InvalidGenerations> for ProjectionError {
    fn from(e: InvalidGenerations) -> Self {
        Self::InvalidGenerations(e)
    }
}

impl From<SingularMatrix> for ProjectionError {
    fn from(e: SingularMatrix) -> Self {
        Self::SingularMatrix(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_generations_display() {
        let err = InvalidGenerations(-3);
        let msg = format!("{err}");
        assert!(msg.contains("-3"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = SingularMatrix;
        let msg = format!("{err}");
        assert!(msg.contains("singular"));
    }

    #[test]
    fn test_invalid_mating_selection_display() {
        let err = InvalidMatingSelection("7".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("'7'"));
        assert!(msg.contains("1-6"));
    }

    #[test]
    fn test_projection_error_from_conversions() {
        let err: ProjectionError = InvalidGenerations(-1).into();
        assert_eq!(
            err,
            ProjectionError::InvalidGenerations(InvalidGenerations(-1))
        );

        let err: ProjectionError = SingularMatrix.into();
        assert_eq!(err, ProjectionError::SingularMatrix(SingularMatrix));
    }

    #[test]
    fn test_projection_error_source() {
        use std::error::Error;

        let err: ProjectionError = SingularMatrix.into();
        assert!(err.source().is_some());
    }
}
