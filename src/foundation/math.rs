/// Linear interpolation between `a` and `b`; `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Hermite smoothstep of `t` after clamping it to `[0, 1]`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Radial shading factor applied to the palette colour at normalized distance `dist`.
///
/// `dist` is clamped to `[0, 1]`; the factor rises from `0` at the centre to `1` at the rim.
#[inline]
pub fn vignette(dist: f64) -> f64 {
    1.0 - (1.0 - dist.clamp(0.0, 1.0)).powf(2.5)
}

/// Convert a floating channel value to a byte the way a clamped byte array would.
///
/// NaN maps to 0, values are clamped to `[0, 255]` and ties round to even.
#[inline]
pub fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
