/// A rendered frame as RGBA8 pixels.
///
/// Pixels outside the orb disk are `[0, 0, 0, 0]` and pixels inside are opaque, so the buffer
/// reads the same whether treated as straight or premultiplied alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A fully transparent square frame.
    pub fn transparent(size: u32) -> Self {
        Self {
            width: size,
            height: size,
            data: vec![0; byte_len(size)],
            premultiplied: true,
        }
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub(crate) fn reshape(&mut self, size: u32) {
        self.width = size;
        self.height = size;
        self.data.resize(byte_len(size), 0);
    }
}

fn byte_len(size: u32) -> usize {
    size as usize * size as usize * 4
}
