//! Fixed-size RGBA8 pixel store that atlases are composited into.

/// The pixel buffer and its coordinate model.
pub mod pixel_buffer;
