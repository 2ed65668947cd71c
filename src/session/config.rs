use std::path::Path;

use crate::animation::ease::Ease;
use crate::foundation::core::Palette;
use crate::foundation::error::{OrbError, OrbResult};
use crate::orb::state::{DEFAULT_MORPH_SPEED, DEFAULT_RANDOMNESS, DEFAULT_ROTATION_SPEED};
use crate::orb::transition::FRAME_STEP_MS;
use crate::render::synth::RenderThreading;

/// Frame edge length used when none (or an unusable one) is configured.
pub const DEFAULT_SIZE: u32 = 200;

/// Construction-time configuration of an [`Orb`](crate::Orb).
///
/// Every key is optional in JSON; `size` and `colors` are decoded leniently and fall back to
/// their defaults instead of failing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbConfig {
    /// Edge length of the square output frame in pixels.
    #[serde(deserialize_with = "deserialize_size")]
    pub size: u32,
    /// Initial palette.
    #[serde(deserialize_with = "deserialize_palette")]
    pub colors: Palette,
    /// Initial morph speed.
    pub morph_speed: f64,
    /// Initial asymmetry amplitude (clamped to `[0, 1]` when the orb is built).
    pub randomness: f64,
    /// Initial angular velocity.
    pub rotation_speed: f64,
    /// Logical milliseconds per tick for [`Orb::tick`](crate::Orb::tick).
    pub frame_step_ms: f64,
    /// Easing curve for colour and rotation-speed transitions.
    pub ease: Ease,
    /// Row-parallelism for frame synthesis.
    pub threading: RenderThreading,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            colors: Palette::default(),
            morph_speed: DEFAULT_MORPH_SPEED,
            randomness: DEFAULT_RANDOMNESS,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            frame_step_ms: FRAME_STEP_MS,
            ease: Ease::default(),
            threading: RenderThreading::default(),
        }
    }
}

impl OrbConfig {
    /// Parse a configuration from a JSON document.
    pub fn from_json_str(s: &str) -> OrbResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> OrbResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| OrbError::io(format!("read config '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Check values that cannot be defaulted silently.
    pub fn validate(&self) -> OrbResult<()> {
        if self.size == 0 {
            return Err(OrbError::validation("size must be > 0"));
        }
        if !(self.frame_step_ms.is_finite() && self.frame_step_ms > 0.0) {
            return Err(OrbError::validation(
                "frameStepMs must be finite and > 0",
            ));
        }
        if !self.morph_speed.is_finite() {
            return Err(OrbError::validation("morphSpeed must be finite"));
        }
        if !self.rotation_speed.is_finite() {
            return Err(OrbError::validation("rotationSpeed must be finite"));
        }
        if self.threading.threads == Some(0) {
            return Err(OrbError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// Interpret a host-supplied size the way an integer attribute parser would.
///
/// Numbers are truncated toward zero; strings contribute their leading integer (`"150px"` is
/// 150). Anything non-positive or non-numeric yields [`DEFAULT_SIZE`].
pub fn parse_size(value: &serde_json::Value) -> u32 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64().map(f64::trunc),
        serde_json::Value::String(s) => leading_int(s),
        _ => None,
    };
    match parsed {
        Some(v) if v >= 1.0 && v <= f64::from(u32::MAX) => v as u32,
        _ => DEFAULT_SIZE,
    }
}

fn leading_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().map(|v| sign * v)
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_size(&value))
}

fn deserialize_palette<'de, D>(deserializer: D) -> Result<Palette, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Palette::from_json_lenient(&value).unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
