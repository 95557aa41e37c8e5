/// Atlas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Number of bytes an RGBA8 store of this size needs.
    ///
    /// `None` when the length overflows or exceeds the largest possible allocation
    /// (`isize::MAX` bytes).
    pub fn rgba8_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|px| px.checked_mul(4))
            .filter(|&len| len <= isize::MAX as usize)
    }
}

/// Straight-alpha RGBA8 color.
///
/// Deserializes from either `[r, g, b, a]` or `{ "r": .., "g": .., "b": .., "a": .. }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Rgba8Repr")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    fn from(c: Rgba8) -> Self {
        c.to_array()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Rgba8Repr {
    Array([u8; 4]),
    Struct { r: u8, g: u8, b: u8, a: u8 },
}

impl From<Rgba8Repr> for Rgba8 {
    fn from(repr: Rgba8Repr) -> Self {
        match repr {
            Rgba8Repr::Array(px) => px.into(),
            Rgba8Repr::Struct { r, g, b, a } => Self::new(r, g, b, a),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
