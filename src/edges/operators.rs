//! Complete edge detectors: `(buffer, threshold) -> edge map`.
//!
//! Every detector returns a buffer with the input's dimensions. Sobel and
//! Prewitt write every pixel, the 1-pixel frame as opaque non-edge. Roberts,
//! Laplacian and Canny only write the pixels they evaluate; every other pixel
//! stays fully zero, alpha included.
use super::grad::{gradient_from_luminance, GradientField, GradientKernel};
use super::nms::is_local_maximum;
use super::threshold::{binarize, classify, write_edge, EDGE, NON_EDGE};
use crate::gray::luminance;
use crate::image::{PixelBuffer, CHANNELS};
use crate::kernels::{correlate2x2, correlate3x3, LAPLACIAN, ROBERTS_X, ROBERTS_Y};
use crate::parallel::for_each_row_mut;

fn gradient_detector(buffer: &PixelBuffer, kernel: GradientKernel, threshold: f64) -> PixelBuffer {
    let (kx, ky) = kernel.kernels();
    let field = gradient_from_luminance(&luminance(buffer), kx, ky);
    binarize(&field, threshold)
}

pub fn sobel(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    gradient_detector(buffer, GradientKernel::Sobel, threshold)
}

pub fn prewitt(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    gradient_detector(buffer, GradientKernel::Prewitt, threshold)
}

/// Roberts Cross over every 2×2 block. The last row and last column are
/// never written.
pub fn roberts(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    let gray = luminance(buffer);
    let (w, h) = (gray.w, gray.h);
    let mut out = PixelBuffer::zeroed(buffer.width(), buffer.height());
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        if y + 1 >= h {
            return;
        }
        for x in 0..w.saturating_sub(1) {
            let gx = correlate2x2(&gray, x, y, &ROBERTS_X);
            let gy = correlate2x2(&gray, x, y, &ROBERTS_Y);
            let magnitude = (gx * gx + gy * gy).sqrt();
            write_edge(&mut row[x * CHANNELS..(x + 1) * CHANNELS], classify(magnitude, threshold));
        }
    });
    out
}

/// Absolute response of the 4-neighbour Laplacian on interior pixels.
pub fn laplacian(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    let gray = luminance(buffer);
    let (w, h) = (gray.w, gray.h);
    let mut out = PixelBuffer::zeroed(buffer.width(), buffer.height());
    if w < 3 || h < 3 {
        return out;
    }
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        if y == 0 || y + 1 >= h {
            return;
        }
        for x in 1..w - 1 {
            let magnitude = correlate3x3(&gray, x, y, &LAPLACIAN).abs();
            write_edge(&mut row[x * CHANNELS..(x + 1) * CHANNELS], classify(magnitude, threshold));
        }
    });
    out
}

/// Simplified Canny: Sobel gradients, non-maximum suppression and a single
/// threshold. No hysteresis, no edge linking.
pub fn canny(buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
    let (kx, ky) = GradientKernel::Sobel.kernels();
    let field = gradient_from_luminance(&luminance(buffer), kx, ky);
    suppress_and_threshold(&field, threshold)
}

pub(crate) fn suppress_and_threshold(field: &GradientField, threshold: f64) -> PixelBuffer {
    let mut out = PixelBuffer::zeroed(field.width, field.height);
    if !field.has_interior() {
        return out;
    }
    let (w, h) = (field.width as usize, field.height as usize);
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        if y == 0 || y + 1 >= h {
            return;
        }
        for x in 1..w - 1 {
            let keep = is_local_maximum(field, x, y)
                && classify(field.magnitude_at(x, y) as f64, threshold) == EDGE;
            let value = if keep { EDGE } else { NON_EDGE };
            write_edge(&mut row[x * CHANNELS..(x + 1) * CHANNELS], value);
        }
    });
    out
}
