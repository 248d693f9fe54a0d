use crate::foundation::error::{TaijiError, TaijiResult};
use crate::foundation::math::{add_sat_u8, mul_div255};

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            let mut out = [0u8; 4];
            for i in 0..4 {
                out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
            }
            out
        }
    }
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> TaijiResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TaijiError::surface(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub(crate) fn fill_solid(dst: &mut [u8], rgba: PremulRgba8) {
    for px in dst.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/composite.rs"]
mod tests;
