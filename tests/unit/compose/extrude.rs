use super::*;
use crate::source::raster::StaticImage;

const V: [u8; 4] = [200, 100, 50, 255];

fn solid(w: u32, h: u32, px: [u8; 4]) -> SourceImage {
    StaticImage::solid(w, h, px).unwrap().into()
}

/// 2x3 image whose pixel at (col, row) is `[col, row, 7, 255]`.
fn indexed() -> SourceImage {
    let mut data = Vec::new();
    for row in 0..3u8 {
        for col in 0..2u8 {
            data.extend_from_slice(&[col, row, 7, 255]);
        }
    }
    StaticImage::new(2, 3, data).unwrap().into()
}

#[test]
fn straight_neighbours_get_edge_color_and_corners_do_not() {
    let img = solid(2, 2, V);
    let mut buf = PixelBuffer::new(10, 10).unwrap();
    extrude(&img, 2, 2, &mut buf, 4);

    assert_eq!(buf.pixel(2, 1), V);
    assert_eq!(buf.pixel(3, 1), V);
    assert_eq!(buf.pixel(1, 2), V);
    assert_eq!(buf.pixel(1, 3), V);
    assert_eq!(buf.pixel(4, 2), V);
    assert_eq!(buf.pixel(2, 4), V);

    for (x, y) in [(1, 1), (4, 1), (1, 4), (4, 4)] {
        assert_eq!(buf.pixel(x, y), [0; 4], "corner ({x}, {y})");
    }
}

#[test]
fn band_is_one_pixel_deep_regardless_of_size() {
    let img = solid(2, 2, V);
    for size in [1, 4, 16] {
        let mut buf = PixelBuffer::new(12, 12).unwrap();
        extrude(&img, 5, 5, &mut buf, size);
        assert_eq!(buf.pixel(5, 4), V);
        assert_eq!(buf.pixel(5, 3), [0; 4]);
        assert_eq!(buf.pixel(3, 5), [0; 4]);
        assert_eq!(buf.pixel(8, 5), [0; 4]);
        assert_eq!(buf.pixel(5, 8), [0; 4]);
    }
}

#[test]
fn non_positive_size_is_a_no_op() {
    let img = solid(2, 2, V);
    for size in [0, -3] {
        let mut buf = PixelBuffer::new(6, 6).unwrap();
        extrude(&img, 2, 2, &mut buf, size);
        assert!(buf.as_bytes().iter().all(|&v| v == 0));
    }
}

#[test]
fn each_edge_copies_its_own_source_row_or_column() {
    let img = indexed();
    let mut buf = PixelBuffer::new(8, 8).unwrap();
    extrude(&img, 3, 2, &mut buf, 4);

    // top mirrors row 0, bottom mirrors row 2
    assert_eq!(buf.pixel(3, 1), [0, 0, 7, 255]);
    assert_eq!(buf.pixel(4, 1), [1, 0, 7, 255]);
    assert_eq!(buf.pixel(3, 5), [0, 2, 7, 255]);
    assert_eq!(buf.pixel(4, 5), [1, 2, 7, 255]);
    // left mirrors column 0, right mirrors column 1
    assert_eq!(buf.pixel(2, 3), [0, 1, 7, 255]);
    assert_eq!(buf.pixel(5, 3), [1, 1, 7, 255]);
    // the image area itself is not written
    assert_eq!(buf.pixel(3, 2), [0; 4]);
}

#[test]
fn writes_off_the_buffer_edge_are_clipped() {
    let img = solid(2, 2, V);
    let mut buf = PixelBuffer::new(2, 2).unwrap();
    extrude(&img, 0, 0, &mut buf, 4);
    assert!(buf.as_bytes().iter().all(|&v| v == 0));

    let mut buf = PixelBuffer::new(4, 4).unwrap();
    extrude(&img, -1, -1, &mut buf, 4);
    assert_eq!(buf.pixel(1, 0), V);
    assert_eq!(buf.pixel(0, 1), V);
    assert_eq!(buf.pixel(0, 0), [0; 4]);
    assert_eq!(buf.pixel(2, 0), [0; 4]);
}

#[test]
fn animated_sources_extrude_frame_zero() {
    let mut data = V.repeat(4);
    data.extend([9u8; 16]);
    let img: SourceImage = crate::source::raster::AnimatedImage::new(2, 2, 2, data)
        .unwrap()
        .into();
    let mut buf = PixelBuffer::new(6, 6).unwrap();
    extrude(&img, 2, 2, &mut buf, 4);
    assert_eq!(buf.pixel(2, 1), V);
    assert_eq!(buf.pixel(4, 3), V);
}
