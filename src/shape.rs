use std::fmt;

/// Dimensions of a two-dimensional matrix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Shape {
        Shape { rows, cols }
    }

    pub fn from_array(v: [usize; 2]) -> Shape {
        Shape::new(v[0], v[1])
    }

    pub fn dims2(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.elem_count() == 0
    }

    // [r, c] => strides [c, 1]
    pub fn strides(&self) -> (usize, usize) {
        (self.cols, 1)
    }

    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Elementwise operations need identical shapes.
    pub fn same_as(&self, other: &Shape) -> bool {
        self == other
    }

    pub fn can_multiply(&self, rhs: &Shape) -> bool {
        self.cols == rhs.rows
    }

    /// Shape of `self * rhs`, or `None` when the inner dimensions differ.
    pub fn product_shape(&self, rhs: &Shape) -> Option<Shape> {
        if self.can_multiply(rhs) {
            Some(Shape::new(self.rows, rhs.cols))
        } else {
            None
        }
    }

    /// `c` must already hold the exact shape of `self * b`.
    pub fn can_gemm(&self, b: &Shape, c: &Shape) -> bool {
        self.product_shape(b).map_or(false, |p| p == *c)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}x{}]", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}
