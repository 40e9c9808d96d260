mod common;

use common::{gaussian_rings, radial_cone};
use holo_center_core::{
    compute_gradient, find_center, vote, CenterEstimate, CenterFindError, CenterFindParams,
};

#[test]
fn recovers_ring_center_exactly_at_coarse_level() {
    let img = gaussian_rings(48, 48, (20.0, 20.0), &[5.0, 10.0, 15.0], 1.5);
    let res = find_center(&img.view(), &CenterFindParams::default()).expect("find_center");

    assert_eq!(res.coarse, (20, 20));
    assert!(
        (res.center.row - 20.0).abs() < 0.5,
        "refined row {} off center",
        res.center.row
    );
    assert!(
        (res.center.col - 20.0).abs() < 0.5,
        "refined col {} off center",
        res.center.col
    );
}

#[test]
fn repeated_runs_are_bit_identical() {
    let img = gaussian_rings(48, 48, (21.0, 19.0), &[6.0, 12.0], 1.5);
    let params = CenterFindParams::default();

    let a = find_center(&img.view(), &params).expect("first run");
    let b = find_center(&img.view(), &params).expect("second run");

    assert_eq!(a.center.row.to_bits(), b.center.row.to_bits());
    assert_eq!(a.center.col.to_bits(), b.center.col.to_bits());
    assert_eq!(a.coarse, b.coarse);
    assert_eq!(a.accumulator, b.accumulator);
}

#[test]
fn qualifying_set_shrinks_as_scale_grows() {
    let img = gaussian_rings(48, 48, (24.0, 24.0), &[8.0, 16.0], 1.5);
    let grad = compute_gradient(&img.view()).expect("gradient");

    let mut previous: Option<(usize, Vec<u32>)> = None;
    for scale in [0.0f32, 0.2, 0.4, 0.6, 0.8] {
        let out = vote(&grad, scale).expect("vote");
        if let Some((prev_count, prev_votes)) = &previous {
            assert!(
                out.qualifying <= *prev_count,
                "qualifying grew from {prev_count} to {} at scale {scale}",
                out.qualifying
            );
            // higher threshold selects a subset, so votes drop pointwise
            for (hi, lo) in out.accumulator.votes.iter().zip(prev_votes.iter()) {
                assert!(hi <= lo);
            }
        }
        previous = Some((out.qualifying, out.accumulator.votes.clone()));
    }
}

#[test]
fn flat_image_has_no_qualifying_gradient() {
    let mut img = radial_cone(32, 32, (16.0, 16.0));
    img.data.fill(7.25);
    for scale in [0.01f32, 0.5, 1.0] {
        let err = find_center(
            &img.view(),
            &CenterFindParams {
                scale,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, CenterFindError::NoQualifyingGradient { .. }));
    }
}

#[test]
fn peak_near_corner_refines_without_fault() {
    let img = radial_cone(32, 32, (2.0, 2.0));
    let res = find_center(&img.view(), &CenterFindParams::default()).expect("find_center");

    assert_eq!(res.coarse, (2, 2));
    assert!(res.center.row.is_finite() && res.center.col.is_finite());
    assert!(res.center.row >= 0.0 && res.center.row <= 31.0);
    assert!(res.center.col >= 0.0 && res.center.col <= 31.0);
}

#[test]
fn too_small_images_are_rejected() {
    for (w, h) in [(1usize, 16usize), (16, 1), (2, 16), (16, 2)] {
        let img = radial_cone(w, h, (0.0, 0.0));
        let err = find_center(&img.view(), &CenterFindParams::default()).unwrap_err();
        assert!(matches!(err, CenterFindError::InvalidImageShape { .. }));
    }
}

#[test]
fn estimate_serde_round_trip() {
    let est = CenterEstimate {
        row: 20.25,
        col: 19.75,
    };
    let json = serde_json::to_string(&est).expect("serialize");
    let back: CenterEstimate = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, est);
}
