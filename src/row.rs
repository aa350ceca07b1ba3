use crate::error::{GError, GResult};
use crate::matrix::Matrix;
use crate::shape::Shape;
use crate::Element;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Row-major dense matrix.
///
/// Elements live in one contiguous buffer of `rows * cols` values; element
/// `(i, j)` sits at offset `i * cols + j`.
#[derive(Clone, PartialEq)]
pub struct RowMatrix<T> {
    data: Vec<T>,
    dim: Shape,
}

impl<T: Element> RowMatrix<T> {
    /// Allocates a `rows x cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::zeros(Shape::new(rows, cols))
    }

    pub fn from_elem(s: T, d: Shape) -> Self {
        //申请内存
        let data = vec![s; d.elem_count()];
        Self { data, dim: d }
    }

    pub fn zeros(d: Shape) -> Self {
        Self::from_elem(T::zero(), d)
    }

    pub fn identity(n: usize) -> Self
    where
        T: num_traits::One,
    {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    pub fn from_vec(v: Vec<T>, d: Shape) -> GResult<Self> {
        if v.len() != d.elem_count() {
            return Err(GError::ImportLength {
                expected: d.elem_count(),
                got: v.len(),
            });
        }
        Ok(Self { data: v, dim: d })
    }

    pub fn from_rows<const N: usize>(xs: Vec<[T; N]>) -> Self {
        let dim = Shape::new(xs.len(), N);
        let data = xs.into_iter().flatten().collect();
        Self { data, dim }
    }

    pub fn from_fn<F>(d: Shape, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cols = d.cols;
        let data = (0..d.elem_count())
            .map(|idx| f(idx / cols, idx % cols))
            .collect();
        Self { data, dim: d }
    }

    pub fn dim(&self) -> Shape {
        self.dim
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row(&self, i: usize) -> &[T] {
        let start = self.dim.offset(i, 0);
        &self.data[start..start + self.dim.cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = self.dim.offset(i, 0);
        let cols = self.dim.cols;
        &mut self.data[start..start + cols]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        (0..self.dim.rows).map(move |i| self.row(i))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> Matrix<T> for RowMatrix<T> {
    fn rows(&self) -> usize {
        self.dim.rows
    }

    fn cols(&self) -> usize {
        self.dim.cols
    }

    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }

    #[inline]
    fn set_elem(&mut self, i: usize, j: usize, val: T) {
        self[(i, j)] = val;
    }

    fn import(&mut self, arr: &[T]) -> GResult<()> {
        if arr.len() != self.data.len() {
            return Err(GError::ImportLength {
                expected: self.data.len(),
                got: arr.len(),
            });
        }
        self.data.copy_from_slice(arr);
        Ok(())
    }

    fn shape(&self) -> Shape {
        self.dim
    }
}

impl<T> Index<(usize, usize)> for RowMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.dim.rows && j < self.dim.cols,
            "index ({}, {}) out of bounds for {}",
            i,
            j,
            self.dim
        );
        &self.data[self.dim.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for RowMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.dim.rows && j < self.dim.cols,
            "index ({}, {}) out of bounds for {}",
            i,
            j,
            self.dim
        );
        let off = self.dim.offset(i, j);
        &mut self.data[off]
    }
}

impl<T: Element> fmt::Debug for RowMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_matrix(self, f)
    }
}

fn format_row<T: fmt::Debug>(v: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for (i, x) in v.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{:?}", x)?;
    }
    f.write_str("]")
}

fn format_matrix<T: Element>(m: &RowMatrix<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    for i in 0..m.rows() {
        if i > 0 {
            f.write_str(",\n ")?;
        }
        format_row(m.row(i), f)?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat;

    #[test]
    fn test_import_round_trip() {
        let src: Vec<i32> = (0..6).collect();
        let mut m = RowMatrix::<i32>::new(2, 3);
        m.import(&src).unwrap();
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                assert_eq!(m.elem(i, j), src[i * m.cols() + j]);
            }
        }
        assert_eq!(m.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_import_wrong_length() {
        let mut m = RowMatrix::<f64>::new(2, 2);
        let err = m.import(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            GError::ImportLength {
                expected: 4,
                got: 3
            }
        );
        assert_eq!(m.as_slice(), &[0.0; 4]);
    }

    #[test]
    fn test_set_get() {
        let mut m = RowMatrix::<f32>::new(3, 2);
        m.set_elem(2, 1, 7.5);
        m.set_elem(0, 0, -1.0);
        assert_eq!(m.elem(2, 1), 7.5);
        assert_eq!(m.elem(0, 0), -1.0);
        assert_eq!(m.elem(1, 0), 0.0);
        assert_eq!(m.as_slice()[5], 7.5);
    }

    #[test]
    fn test_zero_sized() {
        for (r, c) in [(0usize, 0usize), (0, 4), (4, 0)] {
            let mut m = RowMatrix::<i64>::new(r, c);
            assert_eq!(m.rows(), r);
            assert_eq!(m.cols(), c);
            assert!(m.is_empty());
            m.import(&[]).unwrap();
            assert_eq!(m.rows_iter().count(), r);
            println!("{:?}", m);
        }
    }

    #[test]
    fn test_from_vec() {
        let m = RowMatrix::from_vec(vec![1u8, 2, 3, 4, 5, 6], Shape::new(3, 2)).unwrap();
        assert_eq!(m.elem(2, 0), 5);
        assert!(RowMatrix::from_vec(vec![1u8, 2], Shape::new(3, 2)).is_err());
    }

    #[test]
    fn test_mat_macro() {
        let m = mat![[1, 2, 3], [4, 5, 6]];
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m[(1, 2)], 6);
        assert_eq!(m.into_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_identity_and_from_fn() {
        let id = RowMatrix::<i32>::identity(3);
        let f = RowMatrix::from_fn(Shape::new(3, 3), |i, j| if i == j { 1 } else { 0 });
        assert_eq!(id, f);
    }

    #[test]
    fn test_fmt() {
        let m = mat![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(format!("{:?}", m), "[[1.0, 2.0],\n [3.0, 4.0]]");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let m = RowMatrix::<i32>::new(2, 2);
        let _ = m.elem(0, 2);
    }

    #[test]
    fn test_f16_elements() {
        use half::f16;
        let mut m = RowMatrix::<f16>::new(1, 2);
        m.import(&[f16::from_f32(0.5), f16::from_f32(1.5)]).unwrap();
        assert_eq!(m.elem(0, 1).to_f32(), 1.5);
    }
}
