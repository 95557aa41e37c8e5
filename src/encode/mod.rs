//! Hand-off from a composited buffer to an image encoder.
//!
//! The compositor only decides *which* format is requested; byte-level encoding happens behind
//! the [`encoder::AtlasEncoder`] trait.

/// Encoder trait and built-in encoders.
pub mod encoder;
/// Supported output formats.
pub mod format;
