use crate::foundation::error::{OrbError, OrbResult};
use crate::foundation::math::lerp;

/// Monotonic tick counter assigned by the run loop.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// An RGB colour stop with floating channels, nominally in `[0, 255]`.
///
/// Channels stay floating and unclamped so palettes can be interpolated without banding;
/// clamping to bytes happens only when a pixel is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Opaque black, used for malformed palette entries.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build a colour, replacing non-finite channels with 0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        fn chan(v: f64) -> f64 {
            if v.is_finite() { v } else { 0.0 }
        }
        Self {
            r: chan(r),
            g: chan(g),
            b: chan(b),
        }
    }

    /// Decode one palette entry from JSON.
    ///
    /// Arrays contribute up to their first three numeric channels (missing or non-numeric
    /// channels read as 0); anything else becomes [`Rgb::BLACK`].
    pub fn from_json_lenient(value: &serde_json::Value) -> Self {
        let Some(items) = value.as_array() else {
            return Self::BLACK;
        };
        let chan = |i: usize| items.get(i).and_then(serde_json::Value::as_f64).unwrap_or(0.0);
        Self::new(chan(0), chan(1), chan(2))
    }

    /// Channel-wise linear interpolation.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
        }
    }

    /// Multiply every channel by `k`.
    pub fn scale(self, k: f64) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }

    /// Largest absolute channel difference.
    pub fn max_abs_diff(self, other: Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Colours used when nothing else has been requested.
pub const DEFAULT_COLORS: [[f64; 3]; 3] = [
    [10.0, 124.0, 255.0],
    [170.0, 153.0, 255.0],
    [255.0, 255.0, 255.0],
];

/// Ordered, non-empty list of colour stops.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    /// Build a palette; fails when `colors` is empty.
    pub fn new(colors: Vec<Rgb>) -> OrbResult<Self> {
        if colors.is_empty() {
            return Err(OrbError::validation("palette must contain at least one colour"));
        }
        Ok(Self(colors))
    }

    /// Decode a palette from JSON, returning `None` when `value` is not a non-empty array.
    ///
    /// Individual malformed entries do not reject the palette; they decode as black.
    pub fn from_json_lenient(value: &serde_json::Value) -> Option<Self> {
        let items = value.as_array()?;
        if items.is_empty() {
            return None;
        }
        Some(Self(items.iter().map(Rgb::from_json_lenient).collect()))
    }

    /// Number of colour stops (always at least 1).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the colour stops.
    pub fn colors(&self) -> &[Rgb] {
        &self.0
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Rgb] {
        &mut self.0
    }

    /// Entry `i` with the index wrapped around the palette length.
    pub fn cyclic(&self, i: usize) -> Rgb {
        self.0[i % self.0.len()]
    }

    /// Map `phase` in `[0, 1]` onto the palette treated as equally spaced stops.
    ///
    /// Out-of-range phases are clamped, so lookups never leave `[0, len - 1]`.
    pub fn sample(&self, phase: f64) -> Rgb {
        let last = self.0.len() - 1;
        let idx = phase.clamp(0.0, 1.0) * last as f64;
        let low = (idx.floor() as usize).min(last);
        let high = (low + 1).min(last);
        let mix = idx - low as f64;
        self.0[low].lerp(self.0[high], mix)
    }

    /// `true` when both palettes have the same length and every channel is within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.max_abs_diff(*b) <= tol)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.iter().copied().map(Rgb::from).collect())
    }
}

impl<'de> serde::Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize as _;
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json_lenient(&value)
            .ok_or_else(|| serde::de::Error::custom("palette must be a non-empty array of colours"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
