//! Procedural, organically morphing orb animation rendered into flat RGBA frames.
//!
//! The engine has two moving parts:
//!
//! 1. **Transition**: [`TransitionController`] applies [`OrbUpdate`] requests to an
//!    [`OrbState`] and eases palette and rotation speed toward their targets each tick.
//! 2. **Synthesis**: [`FrameSynthesizer`] turns the state into a `size x size` [`FrameRGBA`]
//!    (noise-perturbed swirl pattern, palette lookup, vignette, circular alpha mask).
//!
//! [`Orb`] bundles both with an output buffer and a start/stop lifecycle. It never schedules
//! itself: a host drives it tick by tick, or through [`Orb::run`] with a [`FrameClock`] and a
//! [`FrameSink`].
//!
//! ```no_run
//! use voice_orb::{Orb, OrbConfig, OrbUpdate, Rgb};
//!
//! let mut orb = Orb::new(OrbConfig::default())?;
//! orb.start();
//! orb.update(&OrbUpdate::with_colors([Rgb::new(255.0, 80.0, 0.0)]).transition_time(500.0));
//! if let Some(frame) = orb.tick() {
//!     assert_eq!(frame.data.len(), 200 * 200 * 4);
//! }
//! # Ok::<(), voice_orb::OrbError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod encode;
mod foundation;
mod orb;
mod render;
mod session;

pub use animation::ease::Ease;
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{DEFAULT_COLORS, FrameIndex, Palette, Rgb};
pub use foundation::error::{OrbError, OrbResult};
pub use foundation::math::{lerp, smoothstep, to_channel, vignette};
pub use orb::state::{
    DEFAULT_MORPH_SPEED, DEFAULT_RANDOMNESS, DEFAULT_ROTATION_SPEED, OrbState, TransitionState,
};
pub use orb::transition::{
    DEFAULT_TRANSITION_MS, FRAME_STEP_MS, TransitionController, duration_scale,
};
pub use orb::update::OrbUpdate;
pub use render::frame::FrameRGBA;
pub use render::synth::{FrameSynthesizer, NOISE_STEP, RenderThreading, render_frame};
pub use session::clock::{FixedStepClock, FrameClock, WallClock};
pub use session::config::{DEFAULT_SIZE, OrbConfig, parse_size};
pub use session::orb::{Orb, RunStats};
pub use session::script::{OrbScript, ScheduledUpdate};
