//! End-to-end pipeline: gradient field, voting transform, peak refinement.

use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::CenterFindError;
use crate::gradient::compute_gradient;
use crate::hough::{vote, Accumulator};
use crate::image::FloatImageView;
use crate::refine::{refine_peak, CenterEstimate, DEFAULT_REFINE_WINDOW};

/// Tuning knobs for the center finder.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CenterFindParams {
    /// Fraction of the maximum gradient magnitude a pixel must exceed to
    /// vote, in [0, 1]. Close to 1 is fast but may lose accuracy; 0 lets
    /// every non-flat pixel vote.
    pub scale: f32,
    /// Half-size of the centroid window around the coarse peak, in pixels.
    pub refine_window: usize,
}

impl Default for CenterFindParams {
    fn default() -> Self {
        Self {
            scale: 0.5,
            refine_window: DEFAULT_REFINE_WINDOW,
        }
    }
}

/// Refined estimate plus the intermediates a caller may want to inspect.
#[derive(Clone, Debug)]
pub struct CenterFindResult {
    pub center: CenterEstimate,
    /// Integer grid location of the accumulator maximum (row, col).
    pub coarse: (usize, usize),
    /// Full vote grid, for diagnostics.
    pub accumulator: Accumulator,
}

/// Locate the center of a concentric-ring pattern in an image.
///
/// Runs the gradient, voting, and refinement stages in order. Each call is
/// independent and reentrant; the accumulator is freshly allocated per call
/// and returned with the result. On error no partial state escapes.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(image, params), fields(width = image.width, height = image.height))
)]
pub fn find_center(
    image: &FloatImageView<'_>,
    params: &CenterFindParams,
) -> Result<CenterFindResult, CenterFindError> {
    let grad = compute_gradient(image)?;
    let outcome = vote(&grad, params.scale)?;
    let center = refine_peak(
        &outcome.accumulator,
        outcome.coarse,
        params.refine_window,
    )?;

    debug!(
        "center ({:.3}, {:.3}) refined from coarse {:?}",
        center.row, center.col, outcome.coarse
    );

    Ok(CenterFindResult {
        center,
        coarse: outcome.coarse,
        accumulator: outcome.accumulator,
    })
}
