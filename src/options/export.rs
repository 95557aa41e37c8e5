use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::encode::format::OutputFormat;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{AtlasError, AtlasResult};

/// Options recognized by [`crate::AtlasCompositor::export`].
///
/// `format` stays a string until export so that an unsupported value is reported as
/// [`AtlasError::UnsupportedFormat`] at the call that would have encoded it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportOptions {
    /// One of `jpg`, `jpeg`, `png`, `gif`; `png` when unset or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Fill color applied before any placement; transparent black when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8>,
    /// JPEG quality in `1..=100`; ignored by other formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
}

impl ExportOptions {
    /// Default options: PNG, transparent background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the background fill.
    pub fn with_background(mut self, rgba: impl Into<Rgba8>) -> Self {
        self.background = Some(rgba.into());
        self
    }

    /// Set JPEG quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> AtlasResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AtlasError::validation(format!("parse export options JSON: {e}")))
    }

    /// Parse options from a JSON string.
    pub fn from_json_str(s: &str) -> AtlasResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse options from a JSON file on disk.
    ///
    /// Failing to open the file is reported as [`AtlasError::Other`] with the I/O error as source;
    /// malformed contents are [`AtlasError::Validation`].
    pub fn from_path(path: impl AsRef<Path>) -> AtlasResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open export options '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Resolve the requested format, applying the default to an unset or empty name.
    pub fn resolve_format(&self) -> AtlasResult<OutputFormat> {
        match self.format.as_deref() {
            None | Some("") => Ok(OutputFormat::default()),
            Some(name) => name.parse(),
        }
    }

    /// Check every option and return the resolved format.
    pub fn validate(&self) -> AtlasResult<OutputFormat> {
        let format = self.resolve_format()?;
        if let Some(q) = self.quality
            && !(1..=100).contains(&q)
        {
            return Err(AtlasError::validation(format!(
                "quality must be in 1..=100, got {q}"
            )));
        }
        Ok(format)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/export.rs"]
mod tests;
