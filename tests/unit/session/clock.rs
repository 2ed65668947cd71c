use super::*;

#[test]
fn fixed_step_clock_is_bounded() {
    let mut clock = FixedStepClock::standard(2);
    assert_eq!(clock.next_tick(), Some(16.0));
    assert_eq!(clock.remaining(), 1);
    assert_eq!(clock.next_tick(), Some(16.0));
    assert_eq!(clock.next_tick(), None);
}

#[test]
fn wall_clock_measures_non_negative_deltas() {
    let mut clock = WallClock::new(3);
    assert_eq!(clock.next_tick(), Some(FRAME_STEP_MS));
    let dt = clock.next_tick().unwrap();
    assert!(dt >= 0.0);
    assert!(clock.next_tick().is_some());
    assert!(clock.next_tick().is_none());
}
