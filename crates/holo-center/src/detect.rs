//! End-to-end helpers from `image` buffers and raw grayscale slices.

use holo_center_core::{
    find_center, CenterFindError, CenterFindParams, CenterFindResult, FloatImage,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error("invalid grayscale image buffer length (expected {expected} bytes, got {got})")]
    InvalidGrayBuffer { expected: usize, got: usize },

    #[error("invalid grayscale image dimensions (width={width}, height={height})")]
    InvalidGrayDimensions { width: u32, height: u32 },

    #[error(transparent)]
    CenterFind(#[from] CenterFindError),
}

/// Widen an `image::GrayImage` into the core float grid.
pub fn gray_to_float(img: &image::GrayImage) -> FloatImage {
    FloatImage {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().iter().map(|&p| f32::from(p)).collect(),
    }
}

/// Run the center finder on an `image::GrayImage`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, params), fields(width = img.width(), height = img.height()))
)]
pub fn find_center_image(
    img: &image::GrayImage,
    params: &CenterFindParams,
) -> Result<CenterFindResult, DetectError> {
    let float = gray_to_float(img);
    Ok(find_center(&float.view(), params)?)
}

/// Build the core float grid from a raw grayscale buffer.
pub fn float_image_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<FloatImage, DetectError> {
    let w = usize::try_from(width).ok();
    let h = usize::try_from(height).ok();
    let Some((w, h)) = w.zip(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    let Some(expected) = w.checked_mul(h) else {
        return Err(DetectError::InvalidGrayDimensions { width, height });
    };
    if pixels.len() != expected {
        return Err(DetectError::InvalidGrayBuffer {
            expected,
            got: pixels.len(),
        });
    }
    Ok(FloatImage {
        width: w,
        height: h,
        data: pixels.iter().map(|&p| f32::from(p)).collect(),
    })
}

/// Run the center finder on a raw grayscale buffer.
pub fn find_center_from_gray_u8(
    width: u32,
    height: u32,
    pixels: &[u8],
    params: &CenterFindParams,
) -> Result<CenterFindResult, DetectError> {
    let img = float_image_from_gray_u8(width, height, pixels)?;
    Ok(find_center(&img.view(), params)?)
}
