//! Sub-pixel refinement of the accumulator peak.
//!
//! A vote-weighted centroid over a small window around the coarse maximum
//! turns the integer peak into a sub-pixel estimate.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::error::CenterFindError;
use crate::hough::Accumulator;

/// Default half-size of the centroid window, in pixels.
pub const DEFAULT_REFINE_WINDOW: usize = 10;

/// Sub-pixel center estimate in image pixel units (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterEstimate {
    pub row: f32,
    pub col: f32,
}

impl CenterEstimate {
    /// Conventional image-space point with x = col, y = row.
    pub fn as_point(&self) -> Point2<f32> {
        Point2::new(self.col, self.row)
    }
}

/// Vote-weighted centroid of the `(2*window + 1)`-sided square around the
/// coarse peak, clipped to the grid near borders.
///
/// Pure function of the accumulator. Fails with
/// [`CenterFindError::DegenerateRefinementWindow`] when the window weight
/// sum is zero, which cannot happen for a peak produced by the voting pass
/// (the peak cell itself carries at least one vote).
pub fn refine_peak(
    acc: &Accumulator,
    coarse: (usize, usize),
    window: usize,
) -> Result<CenterEstimate, CenterFindError> {
    let (m, n) = coarse;
    let r0 = m.saturating_sub(window);
    let r1 = (m + window).min(acc.height.saturating_sub(1));
    let c0 = n.saturating_sub(window);
    let c1 = (n + window).min(acc.width.saturating_sub(1));

    let mut weight = 0.0f64;
    let mut row_moment = 0.0f64;
    let mut col_moment = 0.0f64;
    for r in r0..=r1 {
        for c in c0..=c1 {
            let w = f64::from(acc.at(r, c));
            weight += w;
            row_moment += r as f64 * w;
            col_moment += c as f64 * w;
        }
    }

    if weight == 0.0 {
        return Err(CenterFindError::DegenerateRefinementWindow { row: m, col: n });
    }

    Ok(CenterEstimate {
        row: (row_moment / weight) as f32,
        col: (col_moment / weight) as f32,
    })
}
