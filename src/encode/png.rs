use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{OrbError, OrbResult};
use crate::render::frame::FrameRGBA;

/// Write one frame as a PNG file, creating parent directories as needed.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> OrbResult<()> {
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| OrbError::io(format!("write png '{}': {e}", path.display())))
}

fn ensure_parent_dir(path: &Path) -> OrbResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| OrbError::io(format!("create dir '{}': {e}", parent.display())))?;
    }
    Ok(())
}

/// Sink writing each frame to `<dir>/<prefix>_<index>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` with file names starting with `prefix`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: Vec::new(),
        }
    }

    /// Path the frame with index `idx` is written to.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:05}.png", self.prefix, idx.0))
    }

    /// Files written since the last `begin`.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> OrbResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| OrbError::io(format!("create dir '{}': {e}", self.dir.display())))?;
        self.written.clear();
        tracing::debug!(
            dir = %self.dir.display(),
            width = cfg.width,
            height = cfg.height,
            "png sequence started"
        );
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> OrbResult<()> {
        let path = self.path_for(idx);
        write_png(&path, frame)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> OrbResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
