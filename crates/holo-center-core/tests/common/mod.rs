use holo_center_core::FloatImage;

/// Concentric Gaussian ring profiles around a common center, the intensity
/// shape of a defocused particle hologram.
pub fn gaussian_rings(
    width: usize,
    height: usize,
    center: (f32, f32),
    radii: &[f32],
    sigma: f32,
) -> FloatImage {
    let mut img = FloatImage::zeros(width, height);
    for r in 0..height {
        for c in 0..width {
            let dr = r as f32 - center.0;
            let dc = c as f32 - center.1;
            let d = (dr * dr + dc * dc).sqrt();
            let mut v = 0.0f32;
            for &radius in radii {
                let t = (d - radius) / sigma;
                v += (-0.5 * t * t).exp();
            }
            img.set(r, c, v);
        }
    }
    img
}

/// Radial cone apexed on `center`; every gradient is radial.
pub fn radial_cone(width: usize, height: usize, center: (f32, f32)) -> FloatImage {
    let mut img = FloatImage::zeros(width, height);
    for r in 0..height {
        for c in 0..width {
            let dr = r as f32 - center.0;
            let dc = c as f32 - center.1;
            img.set(r, c, (dr * dr + dc * dc).sqrt());
        }
    }
    img
}
