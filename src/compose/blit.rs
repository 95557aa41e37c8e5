use crate::buffer::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::source::raster::SourceImage;

/// Copy every pixel of `image` into `buffer` with its top-left corner at `(x_offset, y_offset)`.
///
/// Iteration is column-major (column, then row, then channel). Pixels that land outside the
/// buffer are dropped by [`PixelBuffer::set`]. Animated sources contribute frame 0.
pub fn blit(image: &SourceImage, x_offset: i32, y_offset: i32, buffer: &mut PixelBuffer) {
    let (x0, y0) = (i64::from(x_offset), i64::from(y_offset));
    for col in 0..image.width() {
        let x = x0 + i64::from(col);
        for row in 0..image.height() {
            let y = y0 + i64::from(row);
            for c in 0..CHANNELS {
                buffer.set(x, y, c, image.get(col, row, c));
            }
        }
    }
}

/// Whether any part of the `width x height` rectangle at the offset falls outside the buffer.
pub(crate) fn is_clipped(
    width: u32,
    height: u32,
    x_offset: i32,
    y_offset: i32,
    buffer: &PixelBuffer,
) -> bool {
    let right = i64::from(x_offset) + i64::from(width);
    let bottom = i64::from(y_offset) + i64::from(height);
    x_offset < 0
        || y_offset < 0
        || right > i64::from(buffer.width())
        || bottom > i64::from(buffer.height())
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blit.rs"]
mod tests;
