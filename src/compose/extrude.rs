use crate::buffer::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::source::raster::SourceImage;

/// Repeat the outermost rows and columns of a placed image into the pixels just outside it.
///
/// The four edges are handled independently: row 0 is copied to the row above the image, the last
/// row to the row below, column 0 to the column on the left and the last column to the column on
/// the right. The band is one pixel deep for every `size > 0`; `size <= 0` disables extrusion.
/// Corner pixels diagonal to the image are left untouched.
///
/// Writes outside the buffer are dropped, so images on the atlas edge are clipped safely. Callers
/// are responsible for leaving at least `size` pixels of padding between neighbours; overlaps are
/// not detected.
pub fn extrude(
    image: &SourceImage,
    x_offset: i32,
    y_offset: i32,
    buffer: &mut PixelBuffer,
    size: i32,
) {
    if size <= 0 {
        return;
    }

    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return;
    }
    let (x0, y0) = (i64::from(x_offset), i64::from(y_offset));
    let above = y0 - 1;
    let below = y0 + i64::from(h);
    let left = x0 - 1;
    let right = x0 + i64::from(w);

    // top
    for col in 0..w {
        for c in 0..CHANNELS {
            buffer.set(x0 + i64::from(col), above, c, image.get(col, 0, c));
        }
    }
    // bottom
    for col in 0..w {
        for c in 0..CHANNELS {
            buffer.set(x0 + i64::from(col), below, c, image.get(col, h - 1, c));
        }
    }
    // left
    for row in 0..h {
        for c in 0..CHANNELS {
            buffer.set(left, y0 + i64::from(row), c, image.get(0, row, c));
        }
    }
    // right
    for row in 0..h {
        for c in 0..CHANNELS {
            buffer.set(right, y0 + i64::from(row), c, image.get(w - 1, row, c));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/extrude.rs"]
mod tests;
