//! Decoded source images consumed by the compositor.
//!
//! Decoding from files stays outside this crate; callers hand in pixels they already have, either
//! as raw RGBA8 bytes or through the `image` adapters.

/// Static and animated source images.
pub mod raster;
