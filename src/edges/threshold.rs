//! Magnitude → binary visualisation.
//!
//! A pixel is an edge (255) iff its magnitude is strictly greater than the
//! threshold; equality is a non-edge. Edge maps are gray RGBA with alpha 255.
use super::grad::GradientField;
use crate::image::{ImageView, PixelBuffer, CHANNELS};
use crate::parallel::for_each_row_mut;

pub const EDGE: u8 = 255;
pub const NON_EDGE: u8 = 0;

#[inline]
pub fn classify(magnitude: f64, threshold: f64) -> u8 {
    if magnitude > threshold {
        EDGE
    } else {
        NON_EDGE
    }
}

/// Write `value` to R, G, B and make the pixel opaque.
#[inline]
pub(crate) fn write_edge(px: &mut [u8], value: u8) {
    px[0] = value;
    px[1] = value;
    px[2] = value;
    px[3] = 255;
}

/// Classify interior pixels of the field. The 1-pixel frame is written as
/// opaque non-edge regardless of the threshold, so a negative threshold never
/// turns the undefined border into edges.
pub fn binarize(field: &GradientField, threshold: f64) -> PixelBuffer {
    let mut out = PixelBuffer::zeroed(field.width, field.height);
    let (w, h) = (field.width as usize, field.height as usize);
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        let mag_row = field.magnitude.row(y);
        let interior_row = y > 0 && y + 1 < h;
        for (x, (px, &mag)) in row.chunks_exact_mut(CHANNELS).zip(mag_row).enumerate() {
            let value = if interior_row && x > 0 && x + 1 < w {
                classify(mag as f64, threshold)
            } else {
                NON_EDGE
            };
            write_edge(px, value);
        }
    });
    out
}

/// Grayscale magnitude map: magnitude rounded and saturated to 255.
pub fn magnitude_map(field: &GradientField) -> PixelBuffer {
    let mut out = PixelBuffer::zeroed(field.width, field.height);
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        let mag_row = field.magnitude.row(y);
        for (px, &mag) in row.chunks_exact_mut(CHANNELS).zip(mag_row) {
            write_edge(px, mag.round().clamp(0.0, 255.0) as u8);
        }
    });
    out
}
