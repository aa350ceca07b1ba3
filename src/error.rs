use crate::shape::Shape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeErrorKind {
    #[error("cannot add {lhs} and {rhs}: shapes differ")]
    AddMismatch { lhs: Shape, rhs: Shape },
    #[error("cannot multiply {lhs} by {rhs}: inner dimensions {} != {}", .lhs.cols, .rhs.rows)]
    InnerDimMismatch { lhs: Shape, rhs: Shape },
    #[error("gemm accumulator is {got}, expected {expected}")]
    GemmOutputMismatch { expected: Shape, got: Shape },
}

pub type GResult<T> = Result<T, GError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GError {
    #[error("shape error:{0}")]
    ShapeError(ShapeErrorKind),
    #[error("import expects {expected} elements, got {got}")]
    ImportLength { expected: usize, got: usize },
    #[error("missing operand: {0}")]
    MissingOperand(&'static str),
}

impl From<ShapeErrorKind> for GError {
    fn from(e: ShapeErrorKind) -> Self {
        GError::ShapeError(e)
    }
}

impl From<GError> for String {
    fn from(e: GError) -> Self {
        format!("{}", e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e: GError = ShapeErrorKind::InnerDimMismatch {
            lhs: Shape::new(2, 3),
            rhs: Shape::new(2, 2),
        }
        .into();
        let s: String = e.into();
        assert_eq!(
            s,
            "shape error:cannot multiply [2x3] by [2x2]: inner dimensions 3 != 2"
        );
    }

    #[test]
    fn test_import_length_display() {
        let e = GError::ImportLength {
            expected: 6,
            got: 4,
        };
        assert_eq!(e.to_string(), "import expects 6 elements, got 4");
    }
}
