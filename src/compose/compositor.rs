use crate::buffer::pixel_buffer::PixelBuffer;
use crate::compose::blit::{blit, is_clipped};
use crate::compose::extrude::extrude;
use crate::encode::encoder::{AtlasEncoder, WriterEncoder};
use crate::encode::format::OutputFormat;
use crate::foundation::core::Canvas;
use crate::foundation::error::AtlasResult;
use crate::options::export::ExportOptions;
use crate::source::raster::SourceImage;

/// A source image recorded at an offset in atlas coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Image to copy.
    pub image: SourceImage,
    /// Left edge in buffer pixels; may be negative.
    pub x: i32,
    /// Top edge in buffer pixels; may be negative.
    pub y: i32,
}

/// Composites placed source images into one fixed-size RGBA8 atlas.
///
/// Placements are applied in insertion order and each one is blitted and then extruded before the
/// next one is touched. A later placement can therefore overwrite the extruded margin of an
/// earlier one; keep neighbours at least [`AtlasCompositor::EXTRUDE_SIZE`] pixels apart.
#[derive(Clone, Debug)]
pub struct AtlasCompositor {
    buffer: PixelBuffer,
    placements: Vec<Placement>,
    extrude_size: i32,
}

impl AtlasCompositor {
    /// Default extrusion margin in pixels.
    pub const EXTRUDE_SIZE: i32 = 4;
    /// Format used when [`ExportOptions::format`] is unset.
    pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Png;
    /// Format names accepted by export.
    pub const SUPPORTED_FORMATS: [&'static str; 4] = OutputFormat::SUPPORTED;

    /// Create a compositor over a transparent `width x height` buffer.
    pub fn new(width: u32, height: u32) -> AtlasResult<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
            placements: Vec::new(),
            extrude_size: Self::EXTRUDE_SIZE,
        })
    }

    /// Override the extrusion margin; `<= 0` disables extrusion.
    pub fn with_extrude_size(mut self, size: i32) -> Self {
        self.extrude_size = size;
        self
    }

    /// Atlas dimensions.
    pub fn canvas(&self) -> Canvas {
        self.buffer.canvas()
    }

    /// Current extrusion margin.
    pub fn extrude_size(&self) -> i32 {
        self.extrude_size
    }

    /// Record `image` at `(x, y)`. Bounds and overlaps are not checked.
    pub fn add_placement(&mut self, image: impl Into<SourceImage>, x: i32, y: i32) {
        self.placements.push(Placement {
            image: image.into(),
            x,
            y,
        });
    }

    /// Placements in application order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Borrow the buffer as last composited.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Validate `opts`, then fill and composite every placement into the buffer.
    ///
    /// Nothing is written when validation fails.
    #[tracing::instrument(skip(self, opts), fields(placements = self.placements.len()))]
    pub fn compose(&mut self, opts: &ExportOptions) -> AtlasResult<&PixelBuffer> {
        opts.validate()?;
        self.composite(opts);
        Ok(&self.buffer)
    }

    /// Composite and hand the buffer to `encoder`.
    ///
    /// The format is validated before any pixel is written and before `encoder` is called.
    #[tracing::instrument(skip(self, opts, encoder), fields(format = ?opts.format))]
    pub fn export<E: AtlasEncoder + ?Sized>(
        &mut self,
        opts: &ExportOptions,
        encoder: &mut E,
    ) -> AtlasResult<()> {
        let format = opts.validate()?;
        self.composite(opts);
        encoder.encode(&self.buffer, format, opts)
    }

    /// Composite and encode into a byte vector with the `image` codecs.
    pub fn export_to_vec(&mut self, opts: &ExportOptions) -> AtlasResult<Vec<u8>> {
        let mut encoder = WriterEncoder::new(Vec::new());
        self.export(opts, &mut encoder)?;
        Ok(encoder.into_inner())
    }

    fn composite(&mut self, opts: &ExportOptions) {
        if let Some(bg) = opts.background {
            self.buffer.fill(bg);
        }

        for (i, p) in self.placements.iter().enumerate() {
            if is_clipped(p.image.width(), p.image.height(), p.x, p.y, &self.buffer) {
                tracing::debug!(
                    placement = i,
                    x = p.x,
                    y = p.y,
                    width = p.image.width(),
                    height = p.image.height(),
                    "placement extends past the atlas; outside pixels are dropped"
                );
            }
            blit(&p.image, p.x, p.y, &mut self.buffer);
            extrude(&p.image, p.x, p.y, &mut self.buffer, self.extrude_size);
        }

        tracing::debug!(
            width = self.buffer.width(),
            height = self.buffer.height(),
            placements = self.placements.len(),
            "atlas composited"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
