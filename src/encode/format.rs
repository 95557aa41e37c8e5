use std::fmt;
use std::str::FromStr;

use crate::foundation::error::AtlasError;

/// Output format accepted by export.
///
/// `Jpg` and `Jpeg` encode identically; both are kept so the encoder sees the name the caller
/// asked for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// PNG, lossless with alpha. The default.
    #[default]
    Png,
    /// JPEG under the `jpg` name.
    Jpg,
    /// JPEG under the `jpeg` name.
    Jpeg,
    /// Single-frame GIF.
    Gif,
}

impl OutputFormat {
    /// Every accepted format name.
    pub const SUPPORTED: [&'static str; 4] = ["jpg", "jpeg", "png", "gif"];

    /// Lowercase format name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Whether the format keeps the alpha channel.
    pub fn has_alpha(self) -> bool {
        !matches!(self, Self::Jpg | Self::Jpeg)
    }
}

impl FromStr for OutputFormat {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "gif" => Ok(Self::Gif),
            other => Err(AtlasError::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
