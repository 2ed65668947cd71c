use super::*;
use crate::orb::state::OrbState;
use crate::render::synth::render_frame;

#[test]
fn sequence_names_are_zero_padded() {
    let sink = PngSequenceSink::new("out", "orb");
    assert_eq!(
        sink.path_for(FrameIndex(7)),
        PathBuf::from("out").join("orb_00007.png")
    );
}

#[test]
fn sequence_writes_decodable_pngs() {
    let dir = PathBuf::from("target").join("png_sequence_unit");
    let _ = std::fs::remove_dir_all(&dir);

    let mut state = OrbState::default();
    let mut sink = PngSequenceSink::new(&dir, "frame");
    sink.begin(SinkConfig {
        width: 24,
        height: 24,
    })
    .unwrap();
    for i in 0..2 {
        let frame = render_frame(&mut state, 24);
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    let decoded = image::open(&sink.written()[1]).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (24, 24));
    assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(decoded.get_pixel(12, 12).0[3], 255);
}
