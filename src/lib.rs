//! Wavyte Atlas composites decoded source images into one fixed-size RGBA8 buffer.
//!
//! - Create an [`AtlasCompositor`] with the atlas size
//! - Record placements with [`AtlasCompositor::add_placement`]
//! - [`AtlasCompositor::export`] fills, blits and extrudes every placement in order, then hands the
//!   buffer to an [`AtlasEncoder`]
//!
//! Placement computation and decoding stay with the caller; the crate never reads files.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// RGBA8 pixel storage.
pub mod buffer;
/// Blit, extrusion and the compositor.
pub mod compose;
/// Encoder hand-off.
pub mod encode;
/// Export configuration.
pub mod options;
/// Decoded source images.
pub mod source;

pub use crate::foundation::core::{Canvas, Rgba8};
pub use crate::foundation::error::{AtlasError, AtlasResult};

pub use crate::buffer::pixel_buffer::PixelBuffer;
pub use crate::compose::blit::blit;
pub use crate::compose::compositor::{AtlasCompositor, Placement};
pub use crate::compose::extrude::extrude;
pub use crate::encode::encoder::{AtlasEncoder, CapturedAtlas, InMemoryEncoder, WriterEncoder};
pub use crate::encode::format::OutputFormat;
pub use crate::options::export::ExportOptions;
pub use crate::source::raster::{AnimatedImage, SourceImage, SourceShape, StaticImage};
