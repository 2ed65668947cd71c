use std::f64::consts::TAU;

use kurbo::{Affine, Point};
use rayon::prelude::*;

use crate::foundation::core::Palette;
use crate::foundation::error::{OrbError, OrbResult};
use crate::foundation::math::{smoothstep, to_channel, vignette};
use crate::orb::state::OrbState;
use crate::render::frame::FrameRGBA;

/// Noise-clock advance per rendered frame at unit morph speed.
pub const NOISE_STEP: f64 = 0.02;

// Width of the rim band over which asymmetry fades in, as a fraction of the radius.
const ASYM_FALLOFF: f64 = 0.8;

/// Row-parallelism controls for frame synthesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderThreading {
    /// Shade rows in parallel when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Turns an [`OrbState`] into RGBA pixels.
///
/// Output depends only on the state at call time; the one side effect is advancing the
/// state's noise clock by `NOISE_STEP * morph_speed`.
#[derive(Debug, Default)]
pub struct FrameSynthesizer {
    threading: RenderThreading,
    pool: Option<rayon::ThreadPool>,
}

impl FrameSynthesizer {
    /// Create a synthesizer; fails when `threading.threads` is `Some(0)` or the pool cannot be
    /// built.
    pub fn new(threading: RenderThreading) -> OrbResult<Self> {
        let pool = match threading.threads {
            Some(n) if threading.parallel => Some(build_thread_pool(n)?),
            Some(0) => {
                return Err(OrbError::validation(
                    "render threading 'threads' must be >= 1 when set",
                ));
            }
            _ => None,
        };
        Ok(Self { threading, pool })
    }

    /// The threading controls in use.
    pub fn threading(&self) -> &RenderThreading {
        &self.threading
    }

    /// Render a fresh `size x size` frame.
    pub fn render(&self, state: &mut OrbState, size: u32) -> FrameRGBA {
        let mut frame = FrameRGBA::transparent(size);
        self.render_into(state, &mut frame);
        frame
    }

    /// Render into `frame`, reusing its allocation. The frame keeps its width as edge length.
    #[tracing::instrument(level = "trace", skip_all, fields(size = frame.width))]
    pub fn render_into(&self, state: &mut OrbState, frame: &mut FrameRGBA) {
        state.noise_time += NOISE_STEP * state.morph_speed;

        let size = frame.width;
        frame.reshape(size);
        if size == 0 {
            return;
        }

        let params = FrameParams::new(state, size);
        let row_bytes = size as usize * 4;
        let data = frame.data.as_mut_slice();

        if !self.threading.parallel {
            data.chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| params.shade_row(y, row));
            return;
        }

        match &self.pool {
            Some(pool) => pool.install(|| shade_rows_parallel(data, row_bytes, &params)),
            None => shade_rows_parallel(data, row_bytes, &params),
        }
    }
}

fn shade_rows_parallel(data: &mut [u8], row_bytes: usize, params: &FrameParams<'_>) {
    data.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| params.shade_row(y, row));
}

/// Render one frame with a serial synthesizer.
pub fn render_frame(state: &mut OrbState, size: u32) -> FrameRGBA {
    FrameSynthesizer::default().render(state, size)
}

/// Per-frame constants shared by every pixel.
struct FrameParams<'a> {
    radius: f64,
    unrotate: Affine,
    t: f64,
    randomness: f64,
    rx1: f64,
    ry1: f64,
    rx2: f64,
    ry2: f64,
    palette: &'a Palette,
}

impl<'a> FrameParams<'a> {
    fn new(state: &'a OrbState, size: u32) -> Self {
        let t = state.noise_time;
        Self {
            radius: f64::from(size) / 2.0,
            unrotate: Affine::rotate(-state.rotation_angle),
            t,
            randomness: state.randomness,
            rx1: (t * 0.7 + 13.7).sin() * 3.5,
            ry1: (t * 0.5 + 4.2).cos() * 3.5,
            rx2: (t * 0.9 + 8.9).sin() * 2.7,
            ry2: (t * 0.8 + 2.8).cos() * 2.7,
            palette: &state.current_colors,
        }
    }

    fn shade_row(&self, y: usize, row: &mut [u8]) {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            px.copy_from_slice(&self.shade(x as f64, y as f64));
        }
    }

    fn shade(&self, x: f64, y: f64) -> [u8; 4] {
        let r = self.radius;
        let dx0 = (x - r) / r;
        let dy0 = (y - r) / r;
        let dist = (dx0 * dx0 + dy0 * dy0).sqrt();
        if dist > 1.0 {
            return [0, 0, 0, 0];
        }

        let rot = self.unrotate * Point::new(dx0, dy0);

        // Asymmetry fades out over the outer band and is zero at the rim.
        let asym = smoothstep((1.0 - dist) / ASYM_FALLOFF) * self.randomness;
        let dx = rot.x
            + asym * ((rot.y * 3.0 + self.rx1).sin() * 0.1 + (rot.y * 5.0 + self.rx2).cos() * 0.05);
        let dy = rot.y
            + asym * ((rot.x * 4.0 + self.ry1).sin() * 0.1 + (rot.x * 6.0 + self.ry2).cos() * 0.05);

        let t = self.t;
        let angle = dy.atan2(dx);
        let radial = (dist * 10.0 - t * 1.5).sin() * 0.25 + (dist * 5.5 + t * 1.2).cos() * 0.25;
        let swirl = (angle * 6.0 + t * 0.8).sin() + (angle * 12.0 - t * 0.6).sin() * 0.5;
        let phase = 0.5 + 0.5 * (swirl + radial * TAU).sin();

        let c = self.palette.sample(phase).scale(vignette(dist));
        [to_channel(c.r), to_channel(c.g), to_channel(c.b), 255]
    }
}

fn build_thread_pool(threads: usize) -> OrbResult<rayon::ThreadPool> {
    if threads == 0 {
        return Err(OrbError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| OrbError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
