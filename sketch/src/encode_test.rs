use super::*;
use crate::consts::BRUSH_RADIUS;

fn inked_raster() -> Raster {
    let mut raster = Raster::new(32, 32);
    raster.stamp_disc(16.0, 16.0, BRUSH_RADIUS);
    raster
}

// =============================================================
// Payload shape
// =============================================================

#[test]
fn encode_blank_sets_blank_flag() {
    let image = encode(&Raster::new(32, 32)).unwrap();
    assert!(image.blank);
    assert_eq!(image.mime, PNG_MIME);
    assert!(!image.base64.is_empty());
}

#[test]
fn encode_ink_clears_blank_flag() {
    let image = encode(&inked_raster()).unwrap();
    assert!(!image.blank);
}

#[test]
fn data_uri_has_png_prefix() {
    let image = encode(&Raster::new(32, 32)).unwrap();
    assert!(image.data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn payload_decodes_to_png_bytes() {
    let image = encode(&inked_raster()).unwrap();
    let bytes = BASE64.decode(&image.base64).unwrap();
    assert_eq!(bytes[..4], [0x89, b'P', b'N', b'G']);
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn encode_is_deterministic() {
    let a = encode(&inked_raster()).unwrap();
    let b = encode(&inked_raster()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn blank_encoding_is_canonical() {
    let a = encode(&Raster::new(32, 32)).unwrap();
    let b = encode(&Raster::new(32, 32)).unwrap();
    assert_eq!(a, b);
    assert!(a.blank);
}

#[test]
fn ink_changes_the_payload() {
    let blank = encode(&Raster::new(32, 32)).unwrap();
    let inked = encode(&inked_raster()).unwrap();
    assert_ne!(blank.base64, inked.base64);
}
