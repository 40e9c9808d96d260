/// Errors returned by the center-finding pipeline.
///
/// All variants are deterministic, input-derived conditions; none is
/// transient, so there is nothing to retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CenterFindError {
    #[error("image too small for gradient computation (width={width}, height={height}, minimum 3x3)")]
    InvalidImageShape { width: usize, height: usize },

    #[error("no pixel gradient exceeds the voting threshold (scale={scale})")]
    NoQualifyingGradient { scale: f32 },

    #[error("refinement window around peak ({row}, {col}) has zero total weight")]
    DegenerateRefinementWindow { row: usize, col: usize },
}
