//! RGB to luminance reduction.
//!
//! Luminance is the unweighted mean of the three colour channels. Alpha is
//! ignored.
use crate::image::{ImageF64, ImageViewMut, PixelBuffer, CHANNELS};
use crate::parallel::for_each_row_mut;

#[inline]
pub fn to_gray(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

/// Per-pixel gray plane of `buffer`.
pub fn luminance(buffer: &PixelBuffer) -> ImageF64 {
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    let mut out = ImageF64::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let src = buffer.row(y as u32);
        let dst = out.row_mut(y);
        for (dst_px, px) in dst.iter_mut().zip(src.chunks_exact(CHANNELS)) {
            *dst_px = to_gray(px[0], px[1], px[2]);
        }
    }
    out
}

/// RGB replaced by the rounded mean, alpha forced opaque.
pub fn grayscale(buffer: &PixelBuffer) -> PixelBuffer {
    let mut out = buffer.clone();
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |_, row| {
        for px in row.chunks_exact_mut(CHANNELS) {
            let v = to_gray(px[0], px[1], px[2]).round() as u8;
            px[..3].fill(v);
            px[3] = 255;
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_is_plain_mean_not_luma() {
        assert_eq!(to_gray(255, 0, 0), 85.0);
        assert_eq!(to_gray(0, 255, 0), 85.0);
        assert_eq!(to_gray(30, 60, 90), 60.0);
        assert!((to_gray(1, 1, 2) - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn luminance_ignores_alpha() {
        let buf = PixelBuffer::from_fn(2, 1, |x, _| [90, 0, 0, if x == 0 { 0 } else { 255 }]);
        let lum = luminance(&buf);
        assert_eq!(lum.data, vec![30.0, 30.0]);
    }

    #[test]
    fn grayscale_rounds_and_sets_alpha() {
        let buf = PixelBuffer::filled(2, 2, [1, 1, 2, 10]);
        let gray = grayscale(&buf);
        assert_eq!(gray.pixel(1, 1), [1, 1, 1, 255]);
    }
}
