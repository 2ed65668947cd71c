use crate::foundation::core::{Palette, Rgb};
use crate::foundation::error::OrbResult;

/// A runtime parameter change request.
///
/// JSON keys follow the host attribute names (`colors`, `transitionTime`, `morphSpeed`,
/// `randomness`, `rotationSpeed`). A request without a non-empty `colors` list is ignored as a
/// whole, including its scalar fields.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbUpdate {
    /// New target palette. Non-array JSON decodes as `None`; malformed entries become black.
    #[serde(
        default,
        deserialize_with = "deserialize_colors",
        skip_serializing_if = "Option::is_none"
    )]
    pub colors: Option<Vec<Rgb>>,
    /// Transition duration in milliseconds (default 1000).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_time: Option<f64>,
    /// Applied immediately when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morph_speed: Option<f64>,
    /// Applied immediately when set, clamped to `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomness: Option<f64>,
    /// Eased over the transition when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_speed: Option<f64>,
}

impl OrbUpdate {
    /// Request a transition to `colors`.
    pub fn with_colors(colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self {
            colors: Some(colors.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Set the transition duration.
    pub fn transition_time(mut self, ms: f64) -> Self {
        self.transition_time = Some(ms);
        self
    }

    /// Set the morph speed.
    pub fn morph_speed(mut self, v: f64) -> Self {
        self.morph_speed = Some(v);
        self
    }

    /// Set the asymmetry amplitude.
    pub fn randomness(mut self, v: f64) -> Self {
        self.randomness = Some(v);
        self
    }

    /// Set the target rotation speed.
    pub fn rotation_speed(mut self, v: f64) -> Self {
        self.rotation_speed = Some(v);
        self
    }

    /// Parse a request from a JSON document.
    pub fn from_json_str(s: &str) -> OrbResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// The target palette when the request is applicable.
    pub fn palette(&self) -> Option<Palette> {
        let colors = self.colors.as_ref()?;
        Palette::new(colors.clone()).ok()
    }
}

fn deserialize_colors<'de, D>(deserializer: D) -> Result<Option<Vec<Rgb>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize as _;

    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().map(Rgb::from_json_lenient).collect()))
}

#[cfg(test)]
#[path = "../../tests/unit/orb/update.rs"]
mod tests;
