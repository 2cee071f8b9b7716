//! `NativeBackend` built from this crate's own operators.
//!
//! Sobel and Laplacian follow the usual native recipe: luminance, a 3×3
//! Gaussian, the derivative stencil, then absolute values saturated to 8 bits.
//! Sobel combines the axes as `0.5 |gx| + 0.5 |gy|`. Border pixels are opaque
//! black. Canny uses the single-threshold operator with the high threshold.
use super::NativeBackend;
use crate::edges::canny;
use crate::error::{EdgeError, Result};
use crate::filters::{separable_blur, GaussianKernel};
use crate::gray::{grayscale, luminance};
use crate::image::{ImageF64, PixelBuffer, CHANNELS};
use crate::kernels::{correlate3x3, correlate3x3_pair, LAPLACIAN, SOBEL_X, SOBEL_Y};
use crate::parallel::for_each_row_mut;
use log::debug;

const SMOOTHING_KSIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct CoreBackend;

/// Sigma used when the caller passes a non-positive one.
pub fn sigma_for_ksize(ksize: usize) -> f64 {
    0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

fn check_odd_ksize(ksize: usize) -> Result<()> {
    if ksize == 0 || ksize % 2 == 0 {
        return Err(EdgeError::UnsupportedKernelSize(ksize));
    }
    Ok(())
}

fn blur(image: &PixelBuffer, ksize: usize, sigma: f64) -> PixelBuffer {
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_ksize(ksize)
    };
    separable_blur(image, &GaussianKernel::with_sigma(ksize / 2, sigma))
}

#[inline]
fn saturate(v: f64) -> f64 {
    v.abs().round().min(255.0)
}

/// Evaluate `response` on interior pixels of `gray` into an opaque gray map.
fn response_map<F>(gray: &ImageF64, response: F) -> PixelBuffer
where
    F: Fn(usize, usize) -> f64 + Sync + Send,
{
    let (w, h) = (gray.w, gray.h);
    let mut out = PixelBuffer::filled(w as u32, h as u32, [0, 0, 0, 255]);
    if w < 3 || h < 3 {
        return out;
    }
    let stride = out.row_stride();
    for_each_row_mut(out.pixels_mut(), stride, |y, row| {
        if y == 0 || y + 1 >= h {
            return;
        }
        for x in 1..w - 1 {
            let v = response(x, y).round().clamp(0.0, 255.0) as u8;
            row[x * CHANNELS..x * CHANNELS + 3].fill(v);
        }
    });
    out
}

impl NativeBackend for CoreBackend {
    fn build_info(&self) -> String {
        format!(
            "{} {} core backend (parallel: {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            cfg!(feature = "parallel")
        )
    }

    fn grayscale(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        Ok(grayscale(image))
    }

    fn gaussian_blur(&self, image: &PixelBuffer, ksize: usize, sigma: f64) -> Result<PixelBuffer> {
        check_odd_ksize(ksize)?;
        Ok(blur(image, ksize, sigma))
    }

    fn sobel(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer> {
        if ksize != 3 {
            return Err(EdgeError::UnsupportedKernelSize(ksize));
        }
        let gray = luminance(&blur(image, SMOOTHING_KSIZE, 0.0));
        Ok(response_map(&gray, |x, y| {
            let (gx, gy) = correlate3x3_pair(&gray, x, y, &SOBEL_X, &SOBEL_Y);
            0.5 * saturate(gx) + 0.5 * saturate(gy)
        }))
    }

    fn laplacian(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer> {
        // Aperture 1 and 3 share the 4-neighbour stencil.
        if ksize != 1 && ksize != 3 {
            return Err(EdgeError::UnsupportedKernelSize(ksize));
        }
        let gray = luminance(&blur(image, SMOOTHING_KSIZE, 0.0));
        Ok(response_map(&gray, |x, y| {
            saturate(correlate3x3(&gray, x, y, &LAPLACIAN))
        }))
    }

    fn canny(
        &self,
        image: &PixelBuffer,
        low_threshold: f64,
        high_threshold: f64,
    ) -> Result<PixelBuffer> {
        if low_threshold > high_threshold {
            return Err(EdgeError::InvalidThresholds {
                low: low_threshold,
                high: high_threshold,
            });
        }
        debug!(
            "CoreBackend::canny single threshold {high_threshold} (low {low_threshold} unused)"
        );
        Ok(canny(image, high_threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sigma_matches_native_rule() {
        assert!((sigma_for_ksize(3) - 0.8).abs() < 1e-12);
        assert!((sigma_for_ksize(5) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn even_or_zero_kernel_sizes_are_rejected() {
        let img = PixelBuffer::zeroed(4, 4);
        for ksize in [0, 2, 4] {
            let err = CoreBackend.gaussian_blur(&img, ksize, 0.0).unwrap_err();
            assert!(matches!(err, EdgeError::UnsupportedKernelSize(k) if k == ksize));
        }
        assert!(CoreBackend.sobel(&img, 5).is_err());
        assert!(CoreBackend.laplacian(&img, 7).is_err());
    }

    #[test]
    fn flat_image_has_no_response() {
        let img = PixelBuffer::filled(6, 6, [80, 80, 80, 255]);
        let sobel = CoreBackend.sobel(&img, 3).unwrap();
        let lap = CoreBackend.laplacian(&img, 3).unwrap();
        for out in [sobel, lap] {
            assert!(out.pixels().chunks(4).all(|px| px == [0, 0, 0, 255]));
        }
    }

    #[test]
    fn sobel_response_peaks_at_step() {
        let img = PixelBuffer::from_fn(8, 5, |x, _| if x < 4 { [0, 0, 0, 255] } else { [255; 4] });
        let out = CoreBackend.sobel(&img, 3).unwrap();
        // 0.5 * 255 from the saturated horizontal term, nothing vertical.
        assert_eq!(out.pixel(3, 2), [128, 128, 128, 255]);
        assert_eq!(out.pixel(0, 2), [0, 0, 0, 255]);
        assert_eq!(out.pixel(6, 2)[0], 0);
    }

    #[test]
    fn canny_rejects_inverted_thresholds() {
        let img = PixelBuffer::zeroed(3, 3);
        assert!(matches!(
            CoreBackend.canny(&img, 200.0, 100.0),
            Err(EdgeError::InvalidThresholds { .. })
        ));
    }

    #[test]
    fn canny_uses_high_threshold() {
        let img = PixelBuffer::from_fn(5, 5, |x, _| if x < 2 { [0, 0, 0, 255] } else { [255; 4] });
        let out = CoreBackend.canny(&img, 0.0, 1020.0).unwrap();
        assert!(out.pixels().chunks(4).all(|px| px[0] == 0));
        let out = CoreBackend.canny(&img, 0.0, 1019.0).unwrap();
        assert_eq!(out.pixel(1, 2)[0], 255);
    }
}
