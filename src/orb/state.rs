use crate::foundation::core::Palette;

/// Initial morph speed.
pub const DEFAULT_MORPH_SPEED: f64 = 1.0;
/// Initial asymmetry amplitude.
pub const DEFAULT_RANDOMNESS: f64 = 0.25;
/// Initial angular velocity.
pub const DEFAULT_ROTATION_SPEED: f64 = 0.25;

/// Bookkeeping for the colour / rotation-speed transition in flight.
///
/// The default is idle with both rotation bounds at 0, so a fresh orb holds still until its
/// first update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionState {
    /// Requested duration in milliseconds; `<= 0` resolves on the next tick.
    pub time_ms: f64,
    /// Milliseconds accumulated since the transition started.
    pub elapsed_ms: f64,
    /// Rotation speed captured when the transition started.
    pub start_rotation_speed: f64,
    /// Rotation speed reached when the transition completes.
    pub target_rotation_speed: f64,
    /// `true` until the colour interpolation has written its final value.
    pub active: bool,
}

impl TransitionState {
    /// Linear progress in `[0, 1]`. Zero or negative durations count as complete.
    pub fn linear_progress(&self) -> f64 {
        if self.time_ms > 0.0 {
            (self.elapsed_ms / self.time_ms).min(1.0)
        } else {
            1.0
        }
    }
}

/// Mutable animation state of one orb.
///
/// Owned by a single orb and mutated only by the transition controller (palette, rotation,
/// transition bookkeeping) and the frame synthesizer (`noise_time`).
#[derive(Clone, Debug, PartialEq)]
pub struct OrbState {
    pub(crate) current_colors: Palette,
    pub(crate) start_colors: Palette,
    pub(crate) target_colors: Palette,
    pub(crate) transition: TransitionState,
    pub(crate) morph_speed: f64,
    pub(crate) randomness: f64,
    pub(crate) rotation_speed: f64,
    pub(crate) rotation_angle: f64,
    pub(crate) noise_time: f64,
    pub(crate) running: bool,
}

impl OrbState {
    /// Fresh state rendering `colors` with the given scalar parameters.
    ///
    /// `randomness` is clamped to `[0, 1]` and `morph_speed` to `>= 0`.
    pub fn new(colors: Palette, morph_speed: f64, randomness: f64, rotation_speed: f64) -> Self {
        let rotation_speed = finite_or(rotation_speed, DEFAULT_ROTATION_SPEED);
        Self {
            start_colors: colors.clone(),
            target_colors: colors.clone(),
            current_colors: colors,
            transition: TransitionState::default(),
            morph_speed: sanitize_morph_speed(morph_speed, DEFAULT_MORPH_SPEED),
            randomness: sanitize_randomness(randomness, DEFAULT_RANDOMNESS),
            rotation_speed,
            rotation_angle: 0.0,
            noise_time: 0.0,
            running: false,
        }
    }

    /// The palette that is actually rendered.
    pub fn current_colors(&self) -> &Palette {
        &self.current_colors
    }

    /// Snapshot taken when the active transition started.
    pub fn start_colors(&self) -> &Palette {
        &self.start_colors
    }

    /// Palette the active transition is heading to.
    pub fn target_colors(&self) -> &Palette {
        &self.target_colors
    }

    /// Transition bookkeeping.
    pub fn transition(&self) -> &TransitionState {
        &self.transition
    }

    /// Rate of noise-time advancement.
    pub fn morph_speed(&self) -> f64 {
        self.morph_speed
    }

    /// Asymmetry amplitude in `[0, 1]`.
    pub fn randomness(&self) -> f64 {
        self.randomness
    }

    /// Most recently requested angular velocity.
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Accumulated rotation in radians.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Internal noise clock driving the time-varying pattern terms.
    pub fn noise_time(&self) -> f64 {
        self.noise_time
    }

    /// Whether the orb is between `start` and `stop`.
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for OrbState {
    fn default() -> Self {
        Self::new(
            Palette::default(),
            DEFAULT_MORPH_SPEED,
            DEFAULT_RANDOMNESS,
            DEFAULT_ROTATION_SPEED,
        )
    }
}

pub(crate) fn sanitize_randomness(v: f64, fallback: f64) -> f64 {
    finite_or(v, fallback).clamp(0.0, 1.0)
}

pub(crate) fn sanitize_morph_speed(v: f64, fallback: f64) -> f64 {
    finite_or(v, fallback).max(0.0)
}

pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}
