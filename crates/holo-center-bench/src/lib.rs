//! Synthetic inputs for the benchmark harness.

use holo_center_core::FloatImage;

/// Concentric Gaussian ring pattern of the given side length; radii scale
/// with the image so the vote load tracks the resolution.
pub fn synthetic_rings(n: usize, center: (f32, f32), sigma: f32) -> FloatImage {
    let radii = [0.1, 0.2, 0.3].map(|f| f * n as f32);
    let mut img = FloatImage::zeros(n, n);
    for r in 0..n {
        for c in 0..n {
            let dr = r as f32 - center.0;
            let dc = c as f32 - center.1;
            let d = (dr * dr + dc * dc).sqrt();
            let mut v = 0.0f32;
            for &radius in &radii {
                let t = (d - radius) / sigma;
                v += (-0.5 * t * t).exp();
            }
            img.set(r, c, v);
        }
    }
    img
}
