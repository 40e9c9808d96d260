//! High-level facade for the `holo-center` center finder.
//!
//! This crate provides:
//! - stable re-exports of the core algorithm crate
//! - (feature `image`, on by default) end-to-end helpers that run the
//!   center finder on an `image::GrayImage` or a raw grayscale buffer.
//!
//! ## Quickstart
//!
//! ```no_run
//! use holo_center::detect;
//! use holo_center::CenterFindParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("hologram.png")?.decode()?.to_luma8();
//! let res = detect::find_center_image(&img, &CenterFindParams::default())?;
//! println!("center at row {:.2}, col {:.2}", res.center.row, res.center.col);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `holo_center::{find_center, FloatImage, ...}`: the core surface,
//!   re-exported from `holo-center-core`.
//! - `holo_center::detect` (feature `image`): helpers from `image` buffers
//!   and raw `u8` grayscale slices.

pub use holo_center_core::{
    compute_gradient, find_center, refine_peak, vote, Accumulator, CenterEstimate,
    CenterFindError, CenterFindParams, CenterFindResult, FloatImage, FloatImageView,
    GradientField, VoteOutcome, DEFAULT_REFINE_WINDOW, MIN_IMAGE_DIM,
};

#[cfg(feature = "tracing")]
pub use holo_center_core::init_tracing;
pub use holo_center_core::init_with_level;

#[cfg(feature = "image")]
pub mod detect;
