use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Rgb;
use crate::session::clock::FixedStepClock;
use crate::session::script::ScheduledUpdate;

fn small_orb() -> Orb {
    Orb::new(OrbConfig {
        size: 24,
        ..OrbConfig::default()
    })
    .unwrap()
}

#[test]
fn stopped_orb_does_not_tick() {
    let mut orb = small_orb();
    assert!(!orb.is_running());
    let before = orb.state().clone();
    assert!(orb.tick().is_none());
    assert_eq!(orb.state(), &before);
    assert_eq!(orb.next_index(), FrameIndex(0));
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut orb = small_orb();
    orb.start();
    orb.start();
    assert!(orb.is_running());
    assert!(orb.tick().is_some());
    orb.stop();
    orb.stop();
    assert!(!orb.is_running());
    assert!(orb.tick().is_none());
    orb.start();
    assert!(orb.tick().is_some());
    assert_eq!(orb.next_index(), FrameIndex(2));
}

#[test]
fn tick_produces_sized_frames() {
    let mut orb = small_orb();
    orb.start();
    let frame = orb.tick().unwrap();
    assert_eq!((frame.width, frame.height), (24, 24));
    assert_eq!(frame.data.len(), 24 * 24 * 4);
    assert!((orb.state().noise_time() - 0.02).abs() < 1e-12);
}

#[test]
fn update_between_ticks_is_seen_by_next_tick() {
    let mut orb = small_orb();
    orb.start();
    orb.tick();
    assert!(orb.update(&OrbUpdate::with_colors([Rgb::BLACK]).transition_time(0.0)));
    let frame = orb.tick().unwrap();
    // Black palette: every opaque pixel is black.
    assert!(
        frame
            .data
            .chunks_exact(4)
            .all(|px| px == [0, 0, 0, 255] || px == [0, 0, 0, 0])
    );
}

#[test]
fn ignored_update_leaves_state_untouched() {
    let mut orb = small_orb();
    let before = orb.state().clone();
    assert!(!orb.update(&OrbUpdate::default()));
    assert_eq!(orb.state(), &before);
}

#[test]
fn run_pushes_every_tick_in_order() {
    let mut orb = small_orb();
    orb.start();
    let mut sink = InMemorySink::new();
    let stats = orb.run(&mut FixedStepClock::standard(5), &mut sink).unwrap();

    assert_eq!(stats.frames, 5);
    assert_eq!(
        sink.config(),
        Some(&SinkConfig {
            width: 24,
            height: 24
        })
    );
    assert!(sink.is_ended());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4]);
}

#[test]
fn run_on_stopped_orb_renders_nothing() {
    let mut orb = small_orb();
    let mut sink = InMemorySink::new();
    let stats = orb.run(&mut FixedStepClock::standard(5), &mut sink).unwrap();
    assert_eq!(stats.frames, 0);
    assert!(sink.frames().is_empty());
}

#[test]
fn script_updates_land_before_their_tick() {
    let mut orb = small_orb();
    orb.start();
    let script = OrbScript {
        updates: vec![
            ScheduledUpdate {
                frame: 2,
                update: OrbUpdate::with_colors([Rgb::new(255.0, 0.0, 0.0)])
                    .transition_time(0.0)
                    .randomness(0.0),
            },
            ScheduledUpdate {
                frame: 2,
                update: OrbUpdate::default(),
            },
        ],
    };
    let mut sink = InMemorySink::new();
    let stats = orb
        .run_script(&mut FixedStepClock::standard(4), &mut sink, &script)
        .unwrap();

    assert_eq!(stats.frames, 4);
    assert_eq!(stats.updates_applied, 1);
    assert_eq!(stats.updates_ignored, 1);
    assert_eq!(orb.state().randomness(), 0.0);

    let (_, frame) = &sink.frames()[2];
    assert!(
        frame
            .data
            .chunks_exact(4)
            .filter(|px| px[3] == 255)
            .all(|px| px[1] == 0 && px[2] == 0)
    );
}

#[test]
fn invalid_config_is_rejected() {
    let err = Orb::new(OrbConfig {
        frame_step_ms: -1.0,
        ..OrbConfig::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("frameStepMs"));
}
