//! Gradient-voting transform locating the common center of concentric rings.
//!
//! Every pixel whose gradient magnitude exceeds `scale * max_magnitude`
//! casts one vote into each accumulator cell crossed by the line through the
//! pixel along its gradient. Ring edges vote along radii, so the votes of a
//! concentric pattern pile up at its center.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::CenterFindError;
use crate::gradient::GradientField;

/// Relative tolerance below which one gradient component is treated as zero
/// and the voted line degenerates to a full image row or column.
const DEGENERATE_SLOPE_TOL: f32 = 1e-6;

/// Hough vote grid, same shape as the source image.
///
/// Zero-initialized, filled once by [`vote`], read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulator {
    pub width: usize,
    pub height: usize,
    pub votes: Vec<u32>,
}

impl Accumulator {
    fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            votes: vec![0; width * height],
        }
    }

    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u32 {
        self.votes[row * self.width + col]
    }

    #[inline]
    fn bump(&mut self, row: usize, col: usize) {
        self.votes[row * self.width + col] += 1;
    }

    /// Grid coordinate of the maximum vote count.
    ///
    /// Ties resolve to the first maximum in row-major scan order. This is a
    /// documented convention kept for reproducibility, not a semantic
    /// guarantee; an all-zero grid yields `(0, 0)`.
    pub fn peak(&self) -> (usize, usize) {
        let mut best = 0u32;
        let mut best_idx = 0usize;
        for (idx, &v) in self.votes.iter().enumerate() {
            if v > best {
                best = v;
                best_idx = idx;
            }
        }
        (best_idx / self.width, best_idx % self.width)
    }
}

/// Coarse peak plus the full vote grid for diagnostic inspection.
#[derive(Clone, Debug)]
pub struct VoteOutcome {
    /// Integer grid location of the accumulator maximum (row, col).
    pub coarse: (usize, usize),
    /// Number of pixels that passed the magnitude threshold.
    pub qualifying: usize,
    pub accumulator: Accumulator,
}

/// Run the voting transform over a gradient field.
///
/// `scale` in [0, 1] sets the magnitude threshold as a fraction of the
/// maximum observed gradient magnitude; pixels at exactly the threshold are
/// excluded. Fails with [`CenterFindError::NoQualifyingGradient`] when no
/// pixel qualifies (flat image, or `scale >= 1`).
pub fn vote(grad: &GradientField, scale: f32) -> Result<VoteOutcome, CenterFindError> {
    debug_assert!(
        (0.0..=1.0).contains(&scale),
        "scale outside [0, 1]: {scale}"
    );

    let w = grad.width();
    let h = grad.height();

    // Squared magnitudes: strict `>` against scale^2 * max_sq selects the
    // same pixel set as comparing unsquared magnitudes for scale >= 0.
    let mag_sq: Vec<f32> = grad
        .gx
        .data
        .iter()
        .zip(grad.gy.data.iter())
        .map(|(&gx, &gy)| gx * gx + gy * gy)
        .collect();
    let max_sq = mag_sq.iter().fold(0.0f32, |m, &v| m.max(v));
    let thr_sq = scale * scale * max_sq;

    let mut acc = Accumulator::zeros(w, h);
    let mut qualifying = 0usize;

    for r in 0..h {
        for c in 0..w {
            let idx = r * w + c;
            if mag_sq[idx] <= thr_sq {
                continue;
            }
            qualifying += 1;
            cast_line(&mut acc, r, c, grad.gx.data[idx], grad.gy.data[idx]);
        }
    }

    if qualifying == 0 {
        warn!("no gradient above threshold (scale {scale}, max magnitude^2 {max_sq:.3})");
        return Err(CenterFindError::NoQualifyingGradient { scale });
    }

    let coarse = acc.peak();
    debug!(
        "{qualifying} of {} pixels voted, coarse peak {coarse:?} with {} votes",
        w * h,
        acc.at(coarse.0, coarse.1)
    );

    Ok(VoteOutcome {
        coarse,
        qualifying,
        accumulator: acc,
    })
}

/// Trace the line through (r, c) along gradient (gx, gy), one vote per
/// in-bounds cell. Repeated hits on a cell within one trace each count.
fn cast_line(acc: &mut Accumulator, r: usize, c: usize, gx: f32, gy: f32) {
    let w = acc.width;
    let h = acc.height;
    let ax = gx.abs();
    let ay = gy.abs();

    // Near-vertical: the slope gy/gx diverges; vote the full column c.
    if ax <= DEGENERATE_SLOPE_TOL * ay {
        for i in 0..h {
            acc.bump(i, c);
        }
        return;
    }
    // Near-horizontal: 1/slope diverges; vote the full row r.
    if ay <= DEGENERATE_SLOPE_TOL * ax {
        for j in 0..w {
            acc.bump(r, j);
        }
        return;
    }

    let slope = gy / gx;
    if slope.abs() > 1.0 {
        // column as a function of row
        for i in 0..h {
            let col = (c as f32 - slope * (i as f32 - r as f32)).round();
            if col >= 0.0 && col < w as f32 {
                acc.bump(i, col as usize);
            }
        }
    } else {
        // row as a function of column
        let inv = 1.0 / slope;
        for j in 0..w {
            let row = (r as f32 - inv * (j as f32 - c as f32)).round();
            if row >= 0.0 && row < h as f32 {
                acc.bump(row as usize, j);
            }
        }
    }
}
