//! Center finder for concentric-ring hologram patterns.
//!
//! Single-particle and dimer holograms show roughly concentric circles.
//! This crate locates the pattern center with sub-pixel precision, useful
//! as an initial guess for hologram fitting: intensity gradients vote along
//! lines through each strong-gradient pixel, the vote maximum gives a
//! coarse center, and a local vote-weighted centroid refines it.
//!
//! The crate is purely computational: real-valued grids in, a coordinate
//! pair out. Image decoding and container interop live in the `holo-center`
//! facade.
//!
//! ## Quickstart
//!
//! ```
//! use holo_center_core::{find_center, CenterFindParams, FloatImage};
//!
//! // radial intensity pattern centered on (10, 10)
//! let mut img = FloatImage::zeros(21, 21);
//! for r in 0..21 {
//!     for c in 0..21 {
//!         let (dr, dc) = (r as f32 - 10.0, c as f32 - 10.0);
//!         img.set(r, c, (dr * dr + dc * dc).sqrt());
//!     }
//! }
//!
//! let res = find_center(&img.view(), &CenterFindParams::default()).unwrap();
//! assert_eq!(res.coarse, (10, 10));
//! ```

mod centerfind;
mod error;
mod gradient;
mod hough;
mod image;
mod logger;
mod refine;

pub use centerfind::{find_center, CenterFindParams, CenterFindResult};
pub use error::CenterFindError;
pub use gradient::{compute_gradient, GradientField, MIN_IMAGE_DIM};
pub use hough::{vote, Accumulator, VoteOutcome};
pub use image::{FloatImage, FloatImageView};
pub use refine::{refine_peak, CenterEstimate, DEFAULT_REFINE_WINDOW};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
