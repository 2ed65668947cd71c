use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::OrbResult;
use crate::orb::state::OrbState;
use crate::orb::transition::TransitionController;
use crate::orb::update::OrbUpdate;
use crate::render::frame::FrameRGBA;
use crate::render::synth::FrameSynthesizer;
use crate::session::clock::FrameClock;
use crate::session::config::OrbConfig;
use crate::session::script::OrbScript;

/// Counters reported by [`Orb::run`] and [`Orb::run_script`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames rendered and handed to the sink.
    pub frames: u64,
    /// Scripted updates that started a transition.
    pub updates_applied: u64,
    /// Scripted updates discarded for lacking a usable palette.
    pub updates_ignored: u64,
}

/// One animated orb: its state, transition controller, synthesizer and output buffer.
///
/// The orb never schedules itself. A host calls [`Orb::start`], then drives it with
/// [`Orb::tick`] (or [`Orb::run`] with a [`FrameClock`]) and hands each buffer to a raster
/// sink. [`Orb::update`] may be called between ticks at any time.
#[derive(Debug)]
pub struct Orb {
    config: OrbConfig,
    state: OrbState,
    controller: TransitionController,
    synth: FrameSynthesizer,
    frame: FrameRGBA,
    next_index: FrameIndex,
}

impl Orb {
    /// Build an orb from a validated configuration. The orb starts stopped.
    pub fn new(config: OrbConfig) -> OrbResult<Self> {
        config.validate()?;
        let synth = FrameSynthesizer::new(config.threading.clone())?;
        Ok(Self::assemble(config, synth))
    }

    fn assemble(config: OrbConfig, synth: FrameSynthesizer) -> Self {
        let state = OrbState::new(
            config.colors.clone(),
            config.morph_speed,
            config.randomness,
            config.rotation_speed,
        );
        Self {
            controller: TransitionController::new(config.ease),
            frame: FrameRGBA::transparent(config.size),
            state,
            synth,
            config,
            next_index: FrameIndex(0),
        }
    }

    /// The configuration the orb was built with.
    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    /// Current animation state.
    pub fn state(&self) -> &OrbState {
        &self.state
    }

    /// The transition controller in use.
    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    /// Edge length of produced frames.
    pub fn size(&self) -> u32 {
        self.config.size
    }

    /// The most recently rendered frame (transparent before the first tick).
    pub fn frame(&self) -> &FrameRGBA {
        &self.frame
    }

    /// Index the next rendered frame will carry.
    pub fn next_index(&self) -> FrameIndex {
        self.next_index
    }

    /// Begin accepting ticks. Idempotent.
    pub fn start(&mut self) {
        if !self.state.running {
            self.state.running = true;
            tracing::info!(size = self.config.size, "orb started");
        }
    }

    /// Stop accepting ticks. Idempotent; state is kept so a later `start` resumes.
    pub fn stop(&mut self) {
        if self.state.running {
            self.state.running = false;
            tracing::info!(frames = self.next_index.0, "orb stopped");
        }
    }

    /// Whether ticks currently produce frames.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Request a parameter change; returns whether a transition started.
    ///
    /// Requests without a non-empty colour list are discarded entirely.
    pub fn update(&mut self, update: &OrbUpdate) -> bool {
        self.controller.request_update(&mut self.state, update)
    }

    /// Advance one tick of the configured logical step and render.
    ///
    /// Returns `None` without touching any state while the orb is stopped.
    pub fn tick(&mut self) -> Option<&FrameRGBA> {
        self.tick_with_delta(self.config.frame_step_ms)
    }

    /// Advance by `dt_ms` of logical time and render.
    pub fn tick_with_delta(&mut self, dt_ms: f64) -> Option<&FrameRGBA> {
        if !self.state.running {
            return None;
        }
        self.controller.advance(&mut self.state, dt_ms);
        self.frame.reshape(self.config.size);
        self.synth.render_into(&mut self.state, &mut self.frame);
        self.next_index = FrameIndex(self.next_index.0 + 1);
        Some(&self.frame)
    }

    /// Drive the orb from `clock` into `sink` until the clock ends or the orb is stopped.
    pub fn run(
        &mut self,
        clock: &mut dyn FrameClock,
        sink: &mut dyn FrameSink,
    ) -> OrbResult<RunStats> {
        self.run_script(clock, sink, &OrbScript::default())
    }

    /// Like [`Orb::run`], applying the script's updates right before their ticks.
    pub fn run_script(
        &mut self,
        clock: &mut dyn FrameClock,
        sink: &mut dyn FrameSink,
        script: &OrbScript,
    ) -> OrbResult<RunStats> {
        sink.begin(SinkConfig {
            width: self.config.size,
            height: self.config.size,
        })?;

        let mut stats = RunStats::default();
        while self.is_running() {
            let Some(dt_ms) = clock.next_tick() else {
                break;
            };
            let idx = self.next_index;
            for update in script.updates_at(idx.0) {
                if self.update(update) {
                    stats.updates_applied += 1;
                } else {
                    stats.updates_ignored += 1;
                }
            }
            if self.tick_with_delta(dt_ms).is_none() {
                break;
            }
            sink.push_frame(idx, &self.frame)?;
            stats.frames += 1;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames,
            updates_applied = stats.updates_applied,
            updates_ignored = stats.updates_ignored,
            "orb run finished"
        );
        Ok(stats)
    }
}

impl Default for Orb {
    fn default() -> Self {
        Self::assemble(OrbConfig::default(), FrameSynthesizer::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/orb.rs"]
mod tests;
