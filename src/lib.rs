//! Dense row-major matrices with elementwise addition, multiplication and
//! a simplified GEMM (`A * B + C`).
//!
//! ```
//! use rowmat::{mat, ops, Matrix};
//!
//! let a = mat![[1, 2], [3, 4]];
//! let b = mat![[5, 6], [7, 8]];
//! let m = ops::multiply(a, b).unwrap();
//! assert_eq!(m.elem(1, 0), 43);
//! ```

pub mod error;
mod matrix;
pub mod ops;
mod row;
mod shape;

use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Add, Mul};

pub use error::{GError, GResult, ShapeErrorKind};
pub use matrix::Matrix;
pub use ops::{GemmMode, OpsConfig, RowMatrixOperations};
pub use row::RowMatrix;
pub use shape::Shape;

/// Builds a [`RowMatrix`] from nested row literals.
#[macro_export]
macro_rules! mat {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::RowMatrix::from_rows(vec![$([$($x,)*],)*])
    }};
}

/// Scalar types a matrix can hold.
pub trait Element: Copy + Debug + Zero + Add<Output = Self> + Mul<Output = Self> {}

impl<T> Element for T where T: Copy + Debug + Zero + Add<Output = T> + Mul<Output = T> {}
