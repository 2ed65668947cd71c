use crate::animation::ease::Ease;
use crate::foundation::math::lerp;
use crate::orb::state::{OrbState, finite_or, sanitize_morph_speed, sanitize_randomness};
use crate::orb::update::OrbUpdate;

/// Transition duration used when a request does not name one.
pub const DEFAULT_TRANSITION_MS: f64 = 1000.0;
/// Logical length of one tick in milliseconds.
pub const FRAME_STEP_MS: f64 = 16.0;

const ROTATION_STEP: f64 = 0.02;
const MIN_DURATION_SCALE: f64 = 0.25;
const MAX_DURATION_SCALE: f64 = 2.0;

/// Applies update requests to an [`OrbState`] and advances the transition they start.
///
/// Palette and rotation speed are eased over the requested duration; morph speed and
/// randomness take effect immediately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionController {
    ease: Ease,
}

impl TransitionController {
    /// Controller easing both transitions with `ease`.
    pub fn new(ease: Ease) -> Self {
        Self { ease }
    }

    /// The easing curve in use.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Start a transition toward `update`.
    ///
    /// Returns `false` and leaves `state` untouched when the request carries no usable palette.
    /// A request may land mid-transition; the new one starts from the values currently shown.
    /// The start rotation speed is the eased speed on screen, not the previously requested
    /// `rotation_speed`, so a request mid-transition keeps angular velocity continuous.
    ///
    /// The rendered palette keeps its length; `advance` pairs its entries with the start and
    /// target palettes cyclically.
    pub fn request_update(&self, state: &mut OrbState, update: &OrbUpdate) -> bool {
        let Some(target) = update.palette() else {
            tracing::debug!("ignoring orb update without a non-empty colour list");
            return false;
        };

        let start_rotation_speed = self.effective_rotation_speed(state);

        state.start_colors = state.current_colors.clone();
        state.target_colors = target;

        let tr = &mut state.transition;
        tr.time_ms = update
            .transition_time
            .map_or(DEFAULT_TRANSITION_MS, |t| finite_or(t, DEFAULT_TRANSITION_MS));
        tr.elapsed_ms = 0.0;
        tr.active = true;

        if let Some(v) = update.morph_speed {
            state.morph_speed = sanitize_morph_speed(v, state.morph_speed);
        }
        if let Some(v) = update.randomness {
            state.randomness = sanitize_randomness(v, state.randomness);
        }

        if let Some(v) = update.rotation_speed {
            state.rotation_speed = finite_or(v, state.rotation_speed);
        }
        state.transition.start_rotation_speed = start_rotation_speed;
        state.transition.target_rotation_speed = state.rotation_speed;

        tracing::debug!(
            colors = state.target_colors.len(),
            time_ms = state.transition.time_ms,
            morph_speed = state.morph_speed,
            randomness = state.randomness,
            rotation_speed = state.rotation_speed,
            "orb transition started"
        );
        true
    }

    /// Advance the transition by `dt_ms` of logical time and accumulate rotation.
    ///
    /// Rotation advances once per call regardless of `dt_ms`.
    pub fn advance(&self, state: &mut OrbState, dt_ms: f64) {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };

        let OrbState {
            current_colors,
            start_colors,
            target_colors,
            transition,
            ..
        } = state;

        if transition.active {
            transition.elapsed_ms += dt_ms;
            let linear = transition.linear_progress();
            let p = self.ease.apply(linear);
            for (i, c) in current_colors.colors_mut().iter_mut().enumerate() {
                *c = start_colors.cyclic(i).lerp(target_colors.cyclic(i), p);
            }
            if linear >= 1.0 {
                transition.active = false;
                tracing::debug!(elapsed_ms = transition.elapsed_ms, "orb transition complete");
            }
        }

        let speed = self.effective_rotation_speed(state);
        state.rotation_angle += speed * ROTATION_STEP * duration_scale(state.transition.time_ms);
    }

    /// Rotation speed after easing between the transition's start and target speeds.
    pub fn effective_rotation_speed(&self, state: &OrbState) -> f64 {
        let tr = &state.transition;
        lerp(
            tr.start_rotation_speed,
            tr.target_rotation_speed,
            self.ease.apply(tr.linear_progress()),
        )
    }
}

/// Angular increment scale for a transition of `time_ms`.
///
/// Short transitions spin faster and long ones slower, within `[0.25, 2.0]`. Non-positive
/// durations use the default duration.
pub fn duration_scale(time_ms: f64) -> f64 {
    let time_ms = if time_ms > 0.0 {
        time_ms
    } else {
        DEFAULT_TRANSITION_MS
    };
    (DEFAULT_TRANSITION_MS / time_ms).clamp(MIN_DURATION_SCALE, MAX_DURATION_SCALE)
}

#[cfg(test)]
#[path = "../../tests/unit/orb/transition.rs"]
mod tests;
