use std::path::Path;

use crate::foundation::error::{OrbError, OrbResult};
use crate::orb::update::OrbUpdate;

/// An update applied right before the tick with index `frame`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduledUpdate {
    /// Tick index (0-based) the update lands on.
    pub frame: u64,
    /// The request itself.
    pub update: OrbUpdate,
}

/// A list of updates keyed by tick index, e.g.
///
/// ```json
/// { "updates": [ { "frame": 30, "update": { "colors": [[255, 0, 0]], "transitionTime": 500 } } ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OrbScript {
    /// Scheduled updates; entries sharing a frame apply in list order.
    #[serde(default)]
    pub updates: Vec<ScheduledUpdate>,
}

impl OrbScript {
    /// Parse a script from a JSON document.
    pub fn from_json_str(s: &str) -> OrbResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON script file.
    pub fn from_path(path: &Path) -> OrbResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| OrbError::io(format!("read script '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Updates scheduled for `frame`, in list order.
    pub fn updates_at(&self, frame: u64) -> impl Iterator<Item = &OrbUpdate> + '_ {
        self.updates
            .iter()
            .filter(move |s| s.frame == frame)
            .map(|s| &s.update)
    }
}
