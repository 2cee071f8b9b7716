//! Separable Gaussian blur over RGBA buffers.
//!
//! The blur runs as two strictly sequential 1-D passes. The horizontal pass
//! reads the input and writes a scratch buffer; the vertical pass reads the
//! scratch buffer and writes a fresh output. Neither pass touches its source,
//! so the caller's buffer is never mutated. Out-of-range taps clamp to the
//! nearest valid row or column. Only R, G, B are filtered; alpha is copied.
//!
//! Each pass stores its result as 8-bit samples (rounded half to even and
//! saturated), so the vertical pass consumes quantised horizontal output.
use crate::image::{PixelBuffer, CHANNELS};
use crate::parallel::for_each_row_mut;

/// 1-D filter taps applied along both axes.
pub trait SeparableFilter {
    /// Taps in left-to-right order; the centre tap sits at `len / 2`.
    fn taps(&self) -> &[f64];

    fn radius(&self) -> usize {
        self.taps().len() / 2
    }
}

/// Normalised Gaussian taps of length `2 * radius + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f64>,
}

impl GaussianKernel {
    /// Kernel with `sigma = radius / 2`.
    pub fn from_radius(radius: usize) -> Self {
        Self::with_sigma(radius, radius as f64 / 2.0)
    }

    pub fn with_sigma(radius: usize, sigma: f64) -> Self {
        if radius == 0 || sigma <= 0.0 {
            let mut taps = vec![0.0; 2 * radius + 1];
            taps[radius] = 1.0;
            return Self { taps };
        }
        let r = radius as isize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f64> = (-r..=r)
            .map(|i| (-((i * i) as f64) / denom).exp())
            .collect();
        let sum: f64 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f64] {
        &self.taps
    }
}

/// Gaussian blur with `sigma = radius / 2`. Radius 0 returns a copy of the input.
pub fn gaussian_blur(buffer: &PixelBuffer, radius: usize) -> PixelBuffer {
    if radius == 0 {
        return buffer.clone();
    }
    separable_blur(buffer, &GaussianKernel::from_radius(radius))
}

/// Horizontal pass into scratch, then vertical pass into the output.
pub fn separable_blur(buffer: &PixelBuffer, filter: &dyn SeparableFilter) -> PixelBuffer {
    let w = buffer.width() as usize;
    let h = buffer.height() as usize;
    if w == 0 || h == 0 {
        return buffer.clone();
    }
    let taps = filter.taps();
    let radius = filter.radius() as isize;
    let stride = buffer.row_stride();

    let mut scratch = PixelBuffer::zeroed(buffer.width(), buffer.height());
    for_each_row_mut(scratch.pixels_mut(), stride, |y, dst_row| {
        let src_row = buffer.row(y as u32);
        for x in 0..w {
            let mut acc = [0.0f64; 3];
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                let px = &src_row[sx * CHANNELS..sx * CHANNELS + 3];
                for (a, &v) in acc.iter_mut().zip(px) {
                    *a += v as f64 * tap;
                }
            }
            store(&mut dst_row[x * CHANNELS..(x + 1) * CHANNELS], acc, src_row[x * CHANNELS + 3]);
        }
    });

    let mut out = PixelBuffer::zeroed(buffer.width(), buffer.height());
    let scratch = &scratch;
    for_each_row_mut(out.pixels_mut(), stride, |y, dst_row| {
        let alpha_row = buffer.row(y as u32);
        for x in 0..w {
            let mut acc = [0.0f64; 3];
            for (k, &tap) in taps.iter().enumerate() {
                let sy = clamp_index(y as isize + k as isize - radius, h);
                let row = scratch.row(sy as u32);
                let px = &row[x * CHANNELS..x * CHANNELS + 3];
                for (a, &v) in acc.iter_mut().zip(px) {
                    *a += v as f64 * tap;
                }
            }
            store(&mut dst_row[x * CHANNELS..(x + 1) * CHANNELS], acc, alpha_row[x * CHANNELS + 3]);
        }
    });
    out
}

#[inline]
fn store(px: &mut [u8], rgb: [f64; 3], alpha: u8) {
    for (dst, v) in px.iter_mut().zip(rgb) {
        *dst = v.round_ties_even().clamp(0.0, 255.0) as u8;
    }
    px[3] = alpha;
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalised_and_symmetric() {
        for radius in 1..6 {
            let k = GaussianKernel::from_radius(radius);
            assert_eq!(k.taps().len(), 2 * radius + 1);
            let sum: f64 = k.taps().iter().sum();
            assert!((sum - 1.0).abs() < 1e-12, "radius {radius} sums to {sum}");
            for i in 0..radius {
                assert!((k.taps()[i] - k.taps()[2 * radius - i]).abs() < 1e-15);
            }
            assert!(k.taps()[radius] > k.taps()[0]);
        }
    }

    #[test]
    fn radius_two_matches_closed_form() {
        let k = GaussianKernel::from_radius(2);
        let raw: Vec<f64> = (-2i32..=2).map(|i| (-(i * i) as f64 / 2.0).exp()).collect();
        let sum: f64 = raw.iter().sum();
        for (tap, r) in k.taps().iter().zip(&raw) {
            assert!((tap - r / sum).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_radius_is_identity() {
        let buf = PixelBuffer::from_fn(4, 4, |x, y| [(x * 60) as u8, (y * 60) as u8, 7, 99]);
        assert_eq!(gaussian_blur(&buf, 0), buf);
    }

    #[test]
    fn flat_image_is_invariant() {
        let buf = PixelBuffer::filled(7, 5, [120, 45, 200, 77]);
        for radius in [1, 2, 3, 9] {
            assert_eq!(gaussian_blur(&buf, radius), buf, "radius {radius}");
        }
    }

    #[test]
    fn alpha_passes_through() {
        let buf = PixelBuffer::from_fn(5, 5, |x, y| [(x * 50) as u8, 0, 0, (y * 40) as u8]);
        let out = gaussian_blur(&buf, 2);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(out.pixel(x, y)[3], buf.pixel(x, y)[3]);
            }
        }
    }

    #[test]
    fn input_is_not_mutated_and_dimensions_kept() {
        let buf = PixelBuffer::from_fn(6, 3, |x, _| if x < 3 { [0, 0, 0, 255] } else { [255; 4] });
        let snapshot = buf.clone();
        let out = gaussian_blur(&buf, 1);
        assert_eq!(buf, snapshot);
        assert_eq!((out.width(), out.height()), (6, 3));
        // Step edge is softened but stays monotonic along the row.
        let row: Vec<u8> = (0..6).map(|x| out.pixel(x, 1)[0]).collect();
        assert!(row.windows(2).all(|p| p[0] <= p[1]), "{row:?}");
        assert!(row[2] > 0 && row[3] < 255, "{row:?}");
    }

    #[test]
    fn vertical_pass_sees_horizontal_output() {
        // Single bright pixel spreads along both axes.
        let buf = PixelBuffer::from_fn(5, 5, |x, y| {
            if x == 2 && y == 2 {
                [255, 255, 255, 255]
            } else {
                [0, 0, 0, 255]
            }
        });
        let out = gaussian_blur(&buf, 1);
        assert!(out.pixel(1, 1)[0] > 0);
        assert_eq!(out.pixel(1, 1), out.pixel(3, 3));
        assert_eq!(out.pixel(2, 1), out.pixel(1, 2));
    }

    #[test]
    fn halfway_sums_round_to_even() {
        let mut px = [0u8; CHANNELS];
        store(&mut px, [0.5, 1.5, 2.5], 9);
        assert_eq!(px, [0, 2, 2, 9]);
        store(&mut px, [-3.0, 254.5, 300.0], 255);
        assert_eq!(px, [0, 254, 255, 255]);
    }
}
