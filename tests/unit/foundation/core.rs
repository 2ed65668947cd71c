use super::*;
use serde_json::json;

#[test]
fn rgb_keeps_out_of_range_channels_and_zeroes_non_finite() {
    let c = Rgb::new(-5.0, 510.0, f64::NAN);
    assert_eq!((c.r, c.g, c.b), (-5.0, 510.0, 0.0));
    assert_eq!(Rgb::new(f64::INFINITY, 1.0, 2.0), Rgb::new(0.0, 1.0, 2.0));
    assert_eq!(Rgb::from([1.0, 2.0, 3.0]), Rgb::new(1.0, 2.0, 3.0));
}

#[test]
fn lenient_entries_default_to_black() {
    assert_eq!(Rgb::from_json_lenient(&json!("red")), Rgb::BLACK);
    assert_eq!(Rgb::from_json_lenient(&json!(null)), Rgb::BLACK);
    assert_eq!(
        Rgb::from_json_lenient(&json!([200, 100])),
        Rgb::new(200.0, 100.0, 0.0)
    );
    assert_eq!(
        Rgb::from_json_lenient(&json!([1, 2, 3, 4])),
        Rgb::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        Rgb::from_json_lenient(&json!([1, "x", 3])),
        Rgb::new(1.0, 0.0, 3.0)
    );
}

#[test]
fn lenient_palette_rejects_empty_and_non_arrays() {
    assert!(Palette::from_json_lenient(&json!([])).is_none());
    assert!(Palette::from_json_lenient(&json!({ "r": 1 })).is_none());
    assert!(Palette::from_json_lenient(&json!("nope")).is_none());

    let p = Palette::from_json_lenient(&json!([[255, 0, 0], 7])).unwrap();
    assert_eq!(p.colors(), &[Rgb::new(255.0, 0.0, 0.0), Rgb::BLACK]);
}

#[test]
fn palette_new_requires_entries() {
    assert!(Palette::new(vec![]).is_err());
    assert_eq!(Palette::new(vec![Rgb::BLACK]).unwrap().len(), 1);
}

#[test]
fn sample_stays_in_bounds_for_any_phase() {
    for n in 1..6 {
        let p = Palette::new(
            (0..n)
                .map(|i| Rgb::new(f64::from(i) * 10.0, 0.0, 0.0))
                .collect(),
        )
        .unwrap();
        for step in 0..=1000 {
            let c = p.sample(f64::from(step) / 1000.0);
            assert!(c.r >= 0.0 && c.r <= f64::from(n - 1) * 10.0);
        }
        // Out-of-range phases clamp instead of indexing past the end.
        assert_eq!(p.sample(1.5), p.colors()[p.len() - 1]);
        assert_eq!(p.sample(-0.5), p.colors()[0]);
    }
}

#[test]
fn sample_interpolates_between_stops() {
    let p = Palette::new(vec![Rgb::new(0.0, 0.0, 0.0), Rgb::new(100.0, 200.0, 50.0)]).unwrap();
    let mid = p.sample(0.5);
    assert!((mid.r - 50.0).abs() < 1e-9);
    assert!((mid.g - 100.0).abs() < 1e-9);
    assert!((mid.b - 25.0).abs() < 1e-9);
}

#[test]
fn cyclic_wraps_indices() {
    let p = Palette::new(vec![Rgb::new(1.0, 1.0, 1.0), Rgb::new(2.0, 2.0, 2.0)]).unwrap();
    assert_eq!(p.cyclic(4), Rgb::new(1.0, 1.0, 1.0));
    assert_eq!(p.cyclic(5), Rgb::new(2.0, 2.0, 2.0));
}

#[test]
fn palette_serde_round_trips_as_triples() {
    let p = Palette::default();
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v, json!([[10.0, 124.0, 255.0], [170.0, 153.0, 255.0], [255.0, 255.0, 255.0]]));
    let back: Palette = serde_json::from_value(v).unwrap();
    assert_eq!(back, p);
    assert!(serde_json::from_value::<Palette>(json!([])).is_err());
}
