use crate::error::{GError, GResult, ShapeErrorKind};
use crate::matrix::Matrix;
use crate::row::RowMatrix;
use crate::Element;
use std::marker::PhantomData;

/// Which result `gemm_matrices` hands back.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GemmMode {
    /// Return `A * B + C`.
    #[default]
    Corrected,
    /// Accumulate `A * B` into `C` in place and return a separate,
    /// zero-filled matrix of `C`'s shape.
    Faithful,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpsConfig {
    pub gemm_mode: GemmMode,
}

impl OpsConfig {
    pub fn with_gemm_mode(mut self, mode: GemmMode) -> Self {
        self.gemm_mode = mode;
        self
    }
}

// dst[m x n] += a[m x k] * b[k x n], all row-major and contiguous
fn gemm_acc<T: Element>(a: &[T], b: &[T], dst: &mut [T], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        let d_row = &mut dst[i * n..(i + 1) * n];
        for (p, &a_ip) in a_row.iter().enumerate() {
            let b_row = &b[p * n..(p + 1) * n];
            for (d, &b_pj) in d_row.iter_mut().zip(b_row) {
                *d = *d + a_ip * b_pj;
            }
        }
    }
}

/// Elementwise `mat1 + mat2`. Both operands must have the same shape.
pub fn add<T: Element>(mat1: RowMatrix<T>, mat2: RowMatrix<T>) -> GResult<RowMatrix<T>> {
    let (lhs, rhs) = (mat1.shape(), mat2.shape());
    if !lhs.same_as(&rhs) {
        log::debug!("add rejected: {} vs {}", lhs, rhs);
        return Err(ShapeErrorKind::AddMismatch { lhs, rhs }.into());
    }
    let mut result = RowMatrix::zeros(lhs);
    result
        .as_slice_mut()
        .iter_mut()
        .zip(mat1.as_slice().iter().zip(mat2.as_slice()))
        .for_each(|(d, (&x, &y))| *d = x + y);
    log::trace!("add {}", lhs);
    Ok(result)
}

/// Matrix product `mat1 * mat2`, shaped `mat1.rows x mat2.cols`.
pub fn multiply<T: Element>(mat1: RowMatrix<T>, mat2: RowMatrix<T>) -> GResult<RowMatrix<T>> {
    let (lhs, rhs) = (mat1.shape(), mat2.shape());
    let out = match lhs.product_shape(&rhs) {
        Some(s) => s,
        None => {
            log::debug!("multiply rejected: {} * {}", lhs, rhs);
            return Err(ShapeErrorKind::InnerDimMismatch { lhs, rhs }.into());
        }
    };
    let mut result = RowMatrix::zeros(out);
    gemm_acc(
        mat1.as_slice(),
        mat2.as_slice(),
        result.as_slice_mut(),
        lhs.rows,
        lhs.cols,
        rhs.cols,
    );
    log::trace!("multiply {} * {} -> {}", lhs, rhs, out);
    Ok(result)
}

fn check_gemm<T: Element>(
    mat_a: &RowMatrix<T>,
    mat_b: &RowMatrix<T>,
    mat_c: &RowMatrix<T>,
) -> GResult<()> {
    let (a, b, c) = (mat_a.shape(), mat_b.shape(), mat_c.shape());
    match a.product_shape(&b) {
        None => {
            log::debug!("gemm rejected: {} * {}", a, b);
            Err(ShapeErrorKind::InnerDimMismatch { lhs: a, rhs: b }.into())
        }
        Some(expected) if expected != c => {
            log::debug!("gemm rejected: accumulator {} for product {}", c, expected);
            Err(ShapeErrorKind::GemmOutputMismatch { expected, got: c }.into())
        }
        Some(_) => Ok(()),
    }
}

/// General matrix multiply: returns `mat_a * mat_b + mat_c`.
///
/// `mat_c` must already have the shape of `mat_a * mat_b`. Its buffer is
/// reused for the result.
pub fn gemm<T: Element>(
    mat_a: RowMatrix<T>,
    mat_b: RowMatrix<T>,
    mut mat_c: RowMatrix<T>,
) -> GResult<RowMatrix<T>> {
    check_gemm(&mat_a, &mat_b, &mat_c)?;
    let (m, k) = mat_a.shape().dims2();
    let n = mat_b.cols();
    gemm_acc(
        mat_a.as_slice(),
        mat_b.as_slice(),
        mat_c.as_slice_mut(),
        m,
        k,
        n,
    );
    log::trace!("gemm [{}x{}x{}]", m, k, n);
    Ok(mat_c)
}

/// Accumulates `mat_a * mat_b` into `mat_c` and returns a fresh zero
/// matrix of `mat_c`'s shape.
///
/// The returned matrix never holds the product; read `mat_c` instead.
/// On a shape error `mat_c` is left untouched.
pub fn gemm_in_place<T: Element>(
    mat_a: RowMatrix<T>,
    mat_b: RowMatrix<T>,
    mat_c: &mut RowMatrix<T>,
) -> GResult<RowMatrix<T>> {
    check_gemm(&mat_a, &mat_b, mat_c)?;
    let result = RowMatrix::zeros(mat_c.shape());
    let (m, k) = mat_a.shape().dims2();
    let n = mat_b.cols();
    gemm_acc(
        mat_a.as_slice(),
        mat_b.as_slice(),
        mat_c.as_slice_mut(),
        m,
        k,
        n,
    );
    log::trace!("gemm in place [{}x{}x{}]", m, k, n);
    Ok(result)
}

fn present<T>(m: Option<T>, name: &'static str) -> GResult<T> {
    m.ok_or_else(|| {
        log::debug!("missing operand {}", name);
        GError::MissingOperand(name)
    })
}

/// Nullable front end over the operations: absent operands and shape
/// mismatches both yield `None`.
#[derive(Debug)]
pub struct RowMatrixOperations<T> {
    config: OpsConfig,
    _elem: PhantomData<T>,
}

impl<T: Element> Default for RowMatrixOperations<T> {
    fn default() -> Self {
        Self::new(OpsConfig::default())
    }
}

impl<T: Element> RowMatrixOperations<T> {
    pub fn new(config: OpsConfig) -> Self {
        Self {
            config,
            _elem: PhantomData,
        }
    }

    pub fn config(&self) -> OpsConfig {
        self.config
    }

    pub fn add_matrices(
        &self,
        mat1: Option<RowMatrix<T>>,
        mat2: Option<RowMatrix<T>>,
    ) -> Option<RowMatrix<T>> {
        self.try_add(mat1, mat2).ok()
    }

    pub fn multiply_matrices(
        &self,
        mat1: Option<RowMatrix<T>>,
        mat2: Option<RowMatrix<T>>,
    ) -> Option<RowMatrix<T>> {
        self.try_multiply(mat1, mat2).ok()
    }

    pub fn gemm_matrices(
        &self,
        mat_a: Option<RowMatrix<T>>,
        mat_b: Option<RowMatrix<T>>,
        mat_c: Option<RowMatrix<T>>,
    ) -> Option<RowMatrix<T>> {
        self.try_gemm(mat_a, mat_b, mat_c).ok()
    }

    pub fn try_add(
        &self,
        mat1: Option<RowMatrix<T>>,
        mat2: Option<RowMatrix<T>>,
    ) -> GResult<RowMatrix<T>> {
        add(present(mat1, "mat1")?, present(mat2, "mat2")?)
    }

    pub fn try_multiply(
        &self,
        mat1: Option<RowMatrix<T>>,
        mat2: Option<RowMatrix<T>>,
    ) -> GResult<RowMatrix<T>> {
        multiply(present(mat1, "mat1")?, present(mat2, "mat2")?)
    }

    pub fn try_gemm(
        &self,
        mat_a: Option<RowMatrix<T>>,
        mat_b: Option<RowMatrix<T>>,
        mat_c: Option<RowMatrix<T>>,
    ) -> GResult<RowMatrix<T>> {
        let a = present(mat_a, "mat_a")?;
        let b = present(mat_b, "mat_b")?;
        let mut c = present(mat_c, "mat_c")?;
        match self.config.gemm_mode {
            GemmMode::Corrected => gemm(a, b, c),
            // the accumulated C is dropped with the call
            GemmMode::Faithful => gemm_in_place(a, b, &mut c),
        }
    }
}
