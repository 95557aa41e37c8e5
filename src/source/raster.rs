use std::sync::Arc;

use crate::foundation::core::Canvas;
use crate::foundation::error::{AtlasError, AtlasResult};

/// Logical shape of a source image: `(width, height, 4)` or `(frames, width, height, 4)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceShape {
    /// Single still image.
    Static {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
    /// Multi-frame image.
    Animated {
        /// Frame count, at least 1.
        frames: u32,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl SourceShape {
    /// Dimension list in the conventional order, channels last.
    pub fn dims(self) -> Vec<usize> {
        match self {
            Self::Static { width, height } => vec![width as usize, height as usize, 4],
            Self::Animated {
                frames,
                width,
                height,
            } => vec![frames as usize, width as usize, height as usize, 4],
        }
    }
}

/// Still RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticImage {
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl StaticImage {
    /// Wrap row-major RGBA8 bytes; `rgba8.len()` must equal `width * height * 4`.
    pub fn new(width: u32, height: u32, rgba8: Vec<u8>) -> AtlasResult<Self> {
        let expected = frame_len(width, height)?;
        if rgba8.len() != expected {
            return Err(AtlasError::validation(format!(
                "static image {width}x{height} expects {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Build a `width x height` image with every pixel set to `rgba`.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> AtlasResult<Self> {
        let len = frame_len(width, height)?;
        let mut rgba8 = Vec::new();
        rgba8
            .try_reserve_exact(len)
            .map_err(|_| AtlasError::invalid_dimensions(width, height))?;
        for _ in 0..len / 4 {
            rgba8.extend_from_slice(&rgba);
        }
        Self::new(width, height, rgba8)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one channel.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn get(&self, col: u32, row: u32, c: usize) -> u8 {
        self.rgba8[pixel_index(self.width, self.height, col, row, c)]
    }
}

impl From<image::RgbaImage> for StaticImage {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            rgba8: Arc::new(img.into_raw()),
        }
    }
}

impl From<&image::DynamicImage> for StaticImage {
    fn from(img: &image::DynamicImage) -> Self {
        img.to_rgba8().into()
    }
}

/// Multi-frame RGBA8 image, for example a decoded GIF.
///
/// Only frame 0 is observable through [`AnimatedImage::get`]; the compositor never reads the
/// remaining frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatedImage {
    frames: u32,
    width: u32,
    height: u32,
    rgba8: Arc<Vec<u8>>,
}

impl AnimatedImage {
    /// Wrap frame-major, row-major RGBA8 bytes; length must equal `frames * width * height * 4`.
    pub fn new(frames: u32, width: u32, height: u32, rgba8: Vec<u8>) -> AtlasResult<Self> {
        if frames == 0 {
            return Err(AtlasError::validation(
                "animated image must have at least one frame",
            ));
        }
        let expected = frame_len(width, height)?
            .checked_mul(frames as usize)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(|| AtlasError::invalid_dimensions(width, height))?;
        if rgba8.len() != expected {
            return Err(AtlasError::validation(format!(
                "animated image {frames}x{width}x{height} expects {expected} bytes, got {}",
                rgba8.len()
            )));
        }
        Ok(Self {
            frames,
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Collect decoded frames (see [`image::AnimationDecoder`]); all frames must share one size.
    pub fn from_frames(frames: impl IntoIterator<Item = image::Frame>) -> AtlasResult<Self> {
        let mut dims: Option<(u32, u32)> = None;
        let mut count = 0u32;
        let mut rgba8 = Vec::new();
        for frame in frames {
            let buf = frame.into_buffer();
            let (w, h) = buf.dimensions();
            match dims {
                None => dims = Some((w, h)),
                Some(d) if d != (w, h) => {
                    return Err(AtlasError::validation(format!(
                        "animated frame {count} is {w}x{h}, expected {}x{}",
                        d.0, d.1
                    )));
                }
                Some(_) => {}
            }
            rgba8.extend_from_slice(buf.as_raw());
            count = count
                .checked_add(1)
                .ok_or_else(|| AtlasError::validation("too many animation frames"))?;
        }
        let (width, height) =
            dims.ok_or_else(|| AtlasError::validation("animated image has no frames"))?;
        Self::new(count, width, height, rgba8)
    }

    /// Number of frames.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read one channel of frame 0.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn get(&self, col: u32, row: u32, c: usize) -> u8 {
        // Frame 0 starts at byte 0.
        self.rgba8[pixel_index(self.width, self.height, col, row, c)]
    }
}

/// Source image placed into an atlas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceImage {
    /// `(width, height, 4)` source.
    Static(StaticImage),
    /// `(frames, width, height, 4)` source; reads always select frame 0.
    Animated(AnimatedImage),
}

impl SourceImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            Self::Static(img) => img.width(),
            Self::Animated(img) => img.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            Self::Static(img) => img.height(),
            Self::Animated(img) => img.height(),
        }
    }

    /// Logical shape.
    pub fn shape(&self) -> SourceShape {
        match self {
            Self::Static(img) => SourceShape::Static {
                width: img.width(),
                height: img.height(),
            },
            Self::Animated(img) => SourceShape::Animated {
                frames: img.frames(),
                width: img.width(),
                height: img.height(),
            },
        }
    }

    /// Read channel `c` at `(col, row)`, from frame 0 for animated sources.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn get(&self, col: u32, row: u32, c: usize) -> u8 {
        match self {
            Self::Static(img) => img.get(col, row, c),
            Self::Animated(img) => img.get(col, row, c),
        }
    }
}

impl From<StaticImage> for SourceImage {
    fn from(img: StaticImage) -> Self {
        Self::Static(img)
    }
}

impl From<AnimatedImage> for SourceImage {
    fn from(img: AnimatedImage) -> Self {
        Self::Animated(img)
    }
}

impl From<image::RgbaImage> for SourceImage {
    fn from(img: image::RgbaImage) -> Self {
        Self::Static(img.into())
    }
}

fn frame_len(width: u32, height: u32) -> AtlasResult<usize> {
    if width == 0 || height == 0 {
        return Err(AtlasError::invalid_dimensions(width, height));
    }
    Canvas { width, height }
        .rgba8_len()
        .ok_or_else(|| AtlasError::invalid_dimensions(width, height))
}

fn pixel_index(width: u32, height: u32, col: u32, row: u32, c: usize) -> usize {
    assert!(
        col < width && row < height && c < 4,
        "source pixel ({col}, {row}, {c}) out of range for {width}x{height} image"
    );
    ((row as usize) * (width as usize) + (col as usize)) * 4 + c
}

#[cfg(test)]
#[path = "../../tests/unit/source/raster.rs"]
mod tests;
