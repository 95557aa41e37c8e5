use super::*;

#[test]
fn canvas_len_overflow_is_none() {
    assert_eq!(
        Canvas {
            width: 3,
            height: 2
        }
        .rgba8_len(),
        Some(24)
    );
    assert_eq!(
        Canvas {
            width: u32::MAX,
            height: u32::MAX
        }
        .rgba8_len(),
        None
    );
}

#[test]
fn canvas_len_is_capped_at_isize_max() {
    let canvas = Canvas {
        width: u32::MAX,
        height: 1 << 30,
    };
    assert_eq!(canvas.rgba8_len(), None);
}

#[test]
fn rgba8_deserializes_from_array_and_object() {
    let a: Rgba8 = serde_json::from_str("[1, 2, 3, 4]").unwrap();
    let b: Rgba8 = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":4}"#).unwrap();
    assert_eq!(a, Rgba8::new(1, 2, 3, 4));
    assert_eq!(a, b);
    assert_eq!(a.to_array(), [1, 2, 3, 4]);
}

#[test]
fn rgba8_rejects_out_of_range_channels() {
    assert!(serde_json::from_str::<Rgba8>("[256, 0, 0, 0]").is_err());
    assert!(serde_json::from_str::<Rgba8>("[0, 0, 0]").is_err());
}
