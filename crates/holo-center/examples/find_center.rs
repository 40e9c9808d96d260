//! Locate the center of a synthetic ring pattern and print the estimate.
//!
//! Run with `cargo run --example find_center -p holo-center`.

use holo_center::{find_center, CenterFindParams, FloatImage};
use log::LevelFilter;

/// Concentric Gaussian rings around (cr, cc).
fn ring_pattern(n: usize, cr: f32, cc: f32) -> FloatImage {
    let mut img = FloatImage::zeros(n, n);
    for r in 0..n {
        for c in 0..n {
            let dr = r as f32 - cr;
            let dc = c as f32 - cc;
            let d = (dr * dr + dc * dc).sqrt();
            let mut v = 0.0f32;
            for radius in [8.0f32, 16.0, 24.0] {
                let t = (d - radius) / 1.5;
                v += (-0.5 * t * t).exp();
            }
            img.set(r, c, v);
        }
    }
    img
}

fn main() {
    holo_center::init_with_level(LevelFilter::Debug).expect("logger");

    let img = ring_pattern(64, 30.3, 33.7);
    let params = CenterFindParams::default();

    match find_center(&img.view(), &params) {
        Ok(res) => {
            println!(
                "coarse peak ({}, {}), refined center ({:.3}, {:.3})",
                res.coarse.0, res.coarse.1, res.center.row, res.center.col
            );
        }
        Err(err) => eprintln!("center finding failed: {err}"),
    }
}
