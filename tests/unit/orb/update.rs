use super::*;

#[test]
fn parses_host_attribute_names() {
    let u = OrbUpdate::from_json_str(
        r#"{
            "colors": [[255, 0, 0], [0, 0, 255]],
            "transitionTime": 250,
            "morphSpeed": 2.5,
            "randomness": 0.75,
            "rotationSpeed": -1
        }"#,
    )
    .unwrap();
    assert_eq!(
        u.colors,
        Some(vec![Rgb::new(255.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 255.0)])
    );
    assert_eq!(u.transition_time, Some(250.0));
    assert_eq!(u.morph_speed, Some(2.5));
    assert_eq!(u.randomness, Some(0.75));
    assert_eq!(u.rotation_speed, Some(-1.0));
}

#[test]
fn non_sequence_colors_decode_as_absent() {
    let u = OrbUpdate::from_json_str(r#"{ "colors": "blue", "morphSpeed": 3 }"#).unwrap();
    assert!(u.colors.is_none());
    assert!(u.palette().is_none());
}

#[test]
fn empty_colors_are_not_applicable() {
    let u = OrbUpdate::from_json_str(r#"{ "colors": [] }"#).unwrap();
    assert_eq!(u.colors, Some(vec![]));
    assert!(u.palette().is_none());
    assert!(OrbUpdate::default().palette().is_none());
}

#[test]
fn malformed_entries_become_black() {
    let u = OrbUpdate::from_json_str(r#"{ "colors": [[9, 9, 9], {"r": 1}, null] }"#).unwrap();
    let p = u.palette().unwrap();
    assert_eq!(
        p.colors(),
        &[Rgb::new(9.0, 9.0, 9.0), Rgb::BLACK, Rgb::BLACK]
    );
}

#[test]
fn builder_matches_json() {
    let built = OrbUpdate::with_colors([Rgb::new(1.0, 2.0, 3.0)])
        .transition_time(0.0)
        .randomness(0.5);
    let parsed =
        OrbUpdate::from_json_str(r#"{ "colors": [[1, 2, 3]], "transitionTime": 0, "randomness": 0.5 }"#)
            .unwrap();
    assert_eq!(built, parsed);
}
