use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
}

#[test]
fn smoothstep_clamps_and_is_symmetric() {
    assert_eq!(smoothstep(-1.0), 0.0);
    assert_eq!(smoothstep(2.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
    assert!((smoothstep(0.25) + smoothstep(0.75) - 1.0).abs() < 1e-12);
}

#[test]
fn vignette_boundaries_and_monotonicity() {
    assert_eq!(vignette(0.0), 0.0);
    assert_eq!(vignette(1.0), 1.0);
    let mut prev = vignette(0.0);
    for i in 1..=100 {
        let v = vignette(f64::from(i) / 100.0);
        assert!(v >= prev, "vignette must not decrease toward the rim");
        prev = v;
    }
}

#[test]
fn channel_conversion_matches_clamped_bytes() {
    assert_eq!(to_channel(f64::NAN), 0);
    assert_eq!(to_channel(-12.0), 0);
    assert_eq!(to_channel(300.0), 255);
    assert_eq!(to_channel(254.6), 255);
    assert_eq!(to_channel(0.5), 0);
    assert_eq!(to_channel(1.5), 2);
    assert_eq!(to_channel(2.5), 2);
}
