use std::io::Write;

use image::ImageEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;

use crate::buffer::pixel_buffer::PixelBuffer;
use crate::encode::format::OutputFormat;
use crate::foundation::error::{AtlasError, AtlasResult};
use crate::options::export::ExportOptions;

/// JPEG quality used when [`ExportOptions::quality`] is unset.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Consumer of a finished atlas buffer.
///
/// Called at most once per export, after the format has been validated and every placement has
/// been composited.
pub trait AtlasEncoder {
    /// Encode `buffer` as `format`.
    fn encode(
        &mut self,
        buffer: &PixelBuffer,
        format: OutputFormat,
        opts: &ExportOptions,
    ) -> AtlasResult<()>;
}

/// One buffer captured by [`InMemoryEncoder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedAtlas {
    /// Format requested for this export.
    pub format: OutputFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub rgba8: Vec<u8>,
}

/// In-memory encoder for tests and debugging; keeps raw pixels instead of encoding.
#[derive(Debug, Default)]
pub struct InMemoryEncoder {
    captured: Vec<CapturedAtlas>,
}

impl InMemoryEncoder {
    /// Create an empty encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow every captured buffer, oldest first.
    pub fn captured(&self) -> &[CapturedAtlas] {
        &self.captured
    }
}

impl AtlasEncoder for InMemoryEncoder {
    fn encode(
        &mut self,
        buffer: &PixelBuffer,
        format: OutputFormat,
        _opts: &ExportOptions,
    ) -> AtlasResult<()> {
        self.captured.push(CapturedAtlas {
            format,
            width: buffer.width(),
            height: buffer.height(),
            rgba8: buffer.as_bytes().to_vec(),
        });
        Ok(())
    }
}

/// Encoder backed by the `image` codecs, writing the encoded stream into `W`.
pub struct WriterEncoder<W: Write> {
    out: W,
}

impl<W: Write> WriterEncoder<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AtlasEncoder for WriterEncoder<W> {
    fn encode(
        &mut self,
        buffer: &PixelBuffer,
        format: OutputFormat,
        opts: &ExportOptions,
    ) -> AtlasResult<()> {
        let (w, h) = (buffer.width(), buffer.height());
        let rgb;
        let (bytes, color) = if format.has_alpha() {
            (buffer.as_bytes(), image::ExtendedColorType::Rgba8)
        } else {
            rgb = drop_alpha(buffer.as_bytes());
            (rgb.as_slice(), image::ExtendedColorType::Rgb8)
        };
        let res = match format {
            OutputFormat::Png => PngEncoder::new(&mut self.out).write_image(bytes, w, h, color),
            OutputFormat::Jpg | OutputFormat::Jpeg => {
                let quality = opts.quality.unwrap_or(DEFAULT_JPEG_QUALITY);
                JpegEncoder::new_with_quality(&mut self.out, quality)
                    .write_image(bytes, w, h, color)
            }
            OutputFormat::Gif => GifEncoder::new(&mut self.out).encode(bytes, w, h, color),
        };
        res.map_err(|e| AtlasError::encode(format!("{format} {w}x{h}: {e}")))?;
        self.out
            .flush()
            .map_err(|e| AtlasError::encode(format!("flush {format} output: {e}")))
    }
}

fn drop_alpha(rgba8: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba8.len() / 4 * 3);
    for px in rgba8.chunks_exact(4) {
        out.extend_from_slice(&px[..3]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/encoder.rs"]
mod tests;
