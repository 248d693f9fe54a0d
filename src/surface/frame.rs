use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{TaijiError, TaijiResult};
use crate::foundation::math::Fnv1a64;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**. Everything the engine paints is opaque, so for a surface
/// created with an opaque background the bytes equal straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Stable 64-bit FNV-1a digest of dimensions and pixel bytes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }

    /// Encode the frame as PNG at `path`, creating parent directories as needed.
    pub fn write_png(&self, path: &Path) -> TaijiResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        if self.data.len() != self.width as usize * self.height as usize * 4 {
            return Err(TaijiError::surface("frame byte length mismatch"));
        }

        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/frame.rs"]
mod tests;
