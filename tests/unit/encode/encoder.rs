use super::*;

fn checker(w: u32, h: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            for c in 0..3 {
                buf.set(i64::from(x), i64::from(y), c, v);
            }
            buf.set(i64::from(x), i64::from(y), 3, 255);
        }
    }
    buf
}

#[test]
fn in_memory_captures_raw_pixels() {
    let buf = checker(2, 2);
    let mut enc = InMemoryEncoder::new();
    enc.encode(&buf, OutputFormat::Gif, &ExportOptions::new())
        .unwrap();
    let got = &enc.captured()[0];
    assert_eq!(got.format, OutputFormat::Gif);
    assert_eq!((got.width, got.height), (2, 2));
    assert_eq!(got.rgba8, buf.as_bytes());
}

#[test]
fn png_decodes_back_to_identical_pixels() {
    let buf = checker(4, 3);
    let mut enc = WriterEncoder::new(Vec::new());
    enc.encode(&buf, OutputFormat::Png, &ExportOptions::new())
        .unwrap();
    let bytes = enc.into_inner();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(decoded.as_raw().as_slice(), buf.as_bytes());
}

#[test]
fn jpeg_and_gif_produce_their_magic_bytes() {
    let buf = checker(8, 8);

    for fmt in [OutputFormat::Jpg, OutputFormat::Jpeg] {
        let mut enc = WriterEncoder::new(Vec::new());
        enc.encode(&buf, fmt, &ExportOptions::new().with_quality(90))
            .unwrap();
        assert_eq!(&enc.into_inner()[..2], &[0xFF, 0xD8]);
    }

    let mut enc = WriterEncoder::new(Vec::new());
    enc.encode(&buf, OutputFormat::Gif, &ExportOptions::new())
        .unwrap();
    assert_eq!(&enc.into_inner()[..3], b"GIF");
}

#[test]
fn jpeg_export_discards_alpha() {
    let mut buf = PixelBuffer::new(8, 8).unwrap();
    buf.fill([200, 40, 40, 0]);
    let mut enc = WriterEncoder::new(Vec::new());
    enc.encode(&buf, OutputFormat::Jpeg, &ExportOptions::new().with_quality(100))
        .unwrap();
    let decoded = image::load_from_memory_with_format(&enc.into_inner(), image::ImageFormat::Jpeg)
        .unwrap()
        .to_rgba8();
    let px = decoded.get_pixel(4, 4).0;
    assert_eq!(px[3], 255);
    assert!(px[0] > 150 && px[1] < 90, "color survives: {px:?}");
}

#[test]
fn drop_alpha_keeps_rgb_order() {
    assert_eq!(drop_alpha(&[1, 2, 3, 4, 5, 6, 7, 8]), vec![1, 2, 3, 5, 6, 7]);
}
