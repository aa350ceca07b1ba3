use crate::error::GResult;
use crate::shape::Shape;
use crate::Element;

/// Element access shared by every matrix storage layout.
///
/// Dimensions are fixed at construction. Indices must lie in
/// `[0, rows) x [0, cols)`; implementations panic otherwise.
pub trait Matrix<T: Element> {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    /// Returns the `(i, j)`th element.
    fn elem(&self, i: usize, j: usize) -> T;

    /// Sets the `(i, j)`th element to `val`.
    fn set_elem(&mut self, i: usize, j: usize, val: T);

    /// Overwrites every element from a flat row-major slice of
    /// `rows * cols` values.
    fn import(&mut self, arr: &[T]) -> GResult<()>;

    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    fn is_empty(&self) -> bool {
        self.shape().is_empty()
    }
}
