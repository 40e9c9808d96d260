use serde::{Deserialize, Serialize};

/// Borrowed view over a row-major real-valued grid.
///
/// `data` holds `height` rows of `width` samples each; the row index is the
/// vertical axis and the column index the horizontal one.
#[derive(Clone, Copy, Debug)]
pub struct FloatImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [f32], // row-major, len = w*h
}

/// Owned row-major real-valued grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f32>,
}

impl FloatImage {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn view(&self) -> FloatImageView<'_> {
        FloatImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.width + col] = value;
    }
}

impl<'a> FloatImageView<'a> {
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Row slice accessor used by the kernel loops.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.width..(row + 1) * self.width]
    }
}
