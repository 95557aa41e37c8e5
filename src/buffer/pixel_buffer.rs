use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{AtlasError, AtlasResult};

/// Number of channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Fixed-size RGBA8 pixel store addressed by `(x, y, channel)`.
///
/// Bytes are tightly packed and row-major, so [`PixelBuffer::as_bytes`] can be handed to an
/// encoder as-is.
///
/// Writes are clipped rather than rejected: [`PixelBuffer::set`] outside `[0, width) x [0, height)`
/// has no effect. Blits and border extrusion rely on this at the atlas edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> AtlasResult<Self> {
        let canvas = Canvas { width, height };
        let len = canvas
            .rgba8_len()
            .filter(|&len| len > 0)
            .ok_or_else(|| AtlasError::invalid_dimensions(width, height))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| AtlasError::invalid_dimensions(width, height))?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Buffer dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Read one channel.
    ///
    /// # Panics
    ///
    /// Panics if `x`, `y` or `c` is out of range.
    pub fn get(&self, x: u32, y: u32, c: usize) -> u8 {
        assert!(
            x < self.width && y < self.height && c < CHANNELS,
            "pixel ({x}, {y}, {c}) out of range for {}x{} buffer",
            self.width,
            self.height
        );
        self.data[self.index(x, y) + c]
    }

    /// Read all four channels of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is out of range.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index_checked(x, y).unwrap_or_else(|| {
            panic!(
                "pixel ({x}, {y}) out of range for {}x{} buffer",
                self.width, self.height
            )
        });
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Write one channel; silently a no-op when `(x, y)` falls outside the buffer.
    ///
    /// `c` must be in `0..4`.
    pub fn set(&mut self, x: i64, y: i64, c: usize, value: u8) {
        debug_assert!(c < CHANNELS, "channel {c} out of range");
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(i) = self.index_checked(x, y) {
            self.data[i + c] = value;
        }
    }

    /// Set every pixel to `rgba`.
    pub fn fill(&mut self, rgba: impl Into<Rgba8>) {
        let px = rgba.into().to_array();
        for (i, v) in self.data.iter_mut().enumerate() {
            *v = px[i % CHANNELS];
        }
    }

    /// Row-major RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its row-major RGBA8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| image::Rgba(self.pixel(x, y)))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS
    }

    fn index_checked(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| self.index(x, y))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/buffer/pixel_buffer.rs"]
mod tests;
