use super::*;

#[test]
fn transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0]), [10, 20, 30, 255]);
}

#[test]
fn opaque_source_replaces_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 255]), [0, 0, 0, 255]);
}

#[test]
fn half_covered_edge_blends() {
    // 50% black over white.
    let out = over([255, 255, 255, 255], [0, 0, 0, 128]);
    assert_eq!(out[3], 255);
    assert!((126..=128).contains(&out[0]));
}

#[test]
fn in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(over_in_place(&mut dst, &[0u8; 4]).is_err());
    assert!(over_in_place(&mut dst[..7], &[0u8; 7]).is_err());
}

#[test]
fn fill_solid_paints_every_pixel() {
    let mut buf = vec![0u8; 12];
    fill_solid(&mut buf, [1, 2, 3, 4]);
    assert_eq!(buf, vec![1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
}
