//! Atlas composition: placements, blit, and border extrusion.

/// Copy a source image into the buffer at an offset.
pub mod blit;
/// Atlas compositor and placement records.
pub mod compositor;
/// Edge-pixel extrusion around a placed image.
pub mod extrude;
