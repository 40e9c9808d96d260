//! Intensity gradient of a hologram image.
//!
//! Convolves the 3×3 Sobel kernel pair with border clamping (edge
//! replication, which for a radius-1 kernel matches reflect padding).
//! `gx` is the row-direction derivative; `gy` is the *negated*
//! column-direction derivative, so the (gx, gy) pair at an edge pixel spans
//! the line swept by the voting stage.

use crate::error::CenterFindError;
use crate::image::{FloatImage, FloatImageView};

/// Minimum rows/columns required by the 3×3 kernel support.
pub const MIN_IMAGE_DIM: usize = 3;

type Kernel3 = [[f32; 3]; 3];

// Correlation taps: derivative [-1, 0, 1] along one axis, smoothing
// [1, 2, 1] along the other. Row indices first.
const KERNEL_DROW: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];
const KERNEL_DCOL: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Per-pixel derivative grids, same shape as the source image.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// d(intensity)/d(row)
    pub gx: FloatImage,
    /// -d(intensity)/d(col)
    pub gy: FloatImage,
}

impl GradientField {
    #[inline]
    pub fn width(&self) -> usize {
        self.gx.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.gx.height
    }
}

/// Compute the Sobel gradient pair of an image.
///
/// Pure function of the input grid; fails with
/// [`CenterFindError::InvalidImageShape`] when either dimension is below
/// the kernel support.
pub fn compute_gradient(image: &FloatImageView<'_>) -> Result<GradientField, CenterFindError> {
    let w = image.width;
    let h = image.height;
    if w < MIN_IMAGE_DIM || h < MIN_IMAGE_DIM {
        return Err(CenterFindError::InvalidImageShape {
            width: w,
            height: h,
        });
    }
    debug_assert_eq!(image.data.len(), w * h);

    let mut gx = FloatImage::zeros(w, h);
    let mut gy = FloatImage::zeros(w, h);

    for r in 0..h {
        let r_idx = [r.saturating_sub(1), r, (r + 1).min(h - 1)];
        let rows = [image.row(r_idx[0]), image.row(r_idx[1]), image.row(r_idx[2])];
        for c in 0..w {
            let c_idx = [c.saturating_sub(1), c, (c + 1).min(w - 1)];

            let mut d_row = 0.0;
            let mut d_col = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kr = &KERNEL_DROW[ky];
                let kc = &KERNEL_DCOL[ky];
                d_row += row[c_idx[0]] * kr[0] + row[c_idx[1]] * kr[1] + row[c_idx[2]] * kr[2];
                d_col += row[c_idx[0]] * kc[0] + row[c_idx[1]] * kc[1] + row[c_idx[2]] * kc[2];
            }

            let idx = r * w + c;
            gx.data[idx] = d_row;
            gy.data[idx] = -d_col;
        }
    }

    Ok(GradientField { gx, gy })
}
