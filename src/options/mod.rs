//! Export configuration.

/// JSON-facing export options.
pub mod export;
