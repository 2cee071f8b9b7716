//! Fixed numeric stencils and their correlation with a gray plane.
//!
//! Kernels are indexed `[row][col]`, matching the row-major order of the
//! sampled neighbourhood. The anchor sits at the kernel centre for 3×3 and at
//! the top-left sample for the 2×2 Roberts masks.
use crate::image::ImageF64;

pub type Kernel3 = [[f64; 3]; 3];
pub type Kernel2 = [[f64; 2]; 2];

pub const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

pub const PREWITT_X: Kernel3 = [[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]];
pub const PREWITT_Y: Kernel3 = [[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

pub const LAPLACIAN: Kernel3 = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];

/// `p(x, y) - p(x + 1, y + 1)`
pub const ROBERTS_X: Kernel2 = [[1.0, 0.0], [0.0, -1.0]];
/// `p(x + 1, y) - p(x, y + 1)`
pub const ROBERTS_Y: Kernel2 = [[0.0, 1.0], [-1.0, 0.0]];

/// Build a 3×3 kernel from nine row-major weights.
pub const fn kernel3(w: [f64; 9]) -> Kernel3 {
    [[w[0], w[1], w[2]], [w[3], w[4], w[5]], [w[6], w[7], w[8]]]
}

/// Weighted sum of the 3×3 neighbourhood centred on `(x, y)`.
///
/// `(x, y)` must be an interior pixel: `1 <= x < w - 1`, `1 <= y < h - 1`.
#[inline]
pub fn correlate3x3(plane: &ImageF64, x: usize, y: usize, kernel: &Kernel3) -> f64 {
    debug_assert!(x >= 1 && y >= 1 && x + 1 < plane.w && y + 1 < plane.h);
    let mut sum = 0.0;
    for (ky, k_row) in kernel.iter().enumerate() {
        let base = (y + ky - 1) * plane.stride + x - 1;
        let row = &plane.data[base..base + 3];
        sum += row[0] * k_row[0] + row[1] * k_row[1] + row[2] * k_row[2];
    }
    sum
}

/// Both responses of a kernel pair over the same 3×3 neighbourhood.
#[inline]
pub fn correlate3x3_pair(
    plane: &ImageF64,
    x: usize,
    y: usize,
    kernel_x: &Kernel3,
    kernel_y: &Kernel3,
) -> (f64, f64) {
    debug_assert!(x >= 1 && y >= 1 && x + 1 < plane.w && y + 1 < plane.h);
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for ky in 0..3 {
        let base = (y + ky - 1) * plane.stride + x - 1;
        let row = &plane.data[base..base + 3];
        let kx_row = &kernel_x[ky];
        let ky_row = &kernel_y[ky];
        sum_x += row[0] * kx_row[0] + row[1] * kx_row[1] + row[2] * kx_row[2];
        sum_y += row[0] * ky_row[0] + row[1] * ky_row[1] + row[2] * ky_row[2];
    }
    (sum_x, sum_y)
}

/// Weighted sum of the 2×2 block whose top-left sample is `(x, y)`.
#[inline]
pub fn correlate2x2(plane: &ImageF64, x: usize, y: usize, kernel: &Kernel2) -> f64 {
    debug_assert!(x + 1 < plane.w && y + 1 < plane.h);
    let top = y * plane.stride + x;
    let bottom = top + plane.stride;
    plane.data[top] * kernel[0][0]
        + plane.data[top + 1] * kernel[0][1]
        + plane.data[bottom] * kernel[1][0]
        + plane.data[bottom + 1] * kernel[1][1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(w: usize, h: usize) -> ImageF64 {
        let mut img = ImageF64::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, (x + 10 * y) as f64);
            }
        }
        img
    }

    #[test]
    fn row_major_builder_matches_constants() {
        assert_eq!(kernel3([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0]), SOBEL_X);
        assert_eq!(kernel3([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0]), SOBEL_Y);
        assert_eq!(kernel3([-1.0, 0.0, 1.0, -1.0, 0.0, 1.0, -1.0, 0.0, 1.0]), PREWITT_X);
        assert_eq!(kernel3([-1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]), PREWITT_Y);
        assert_eq!(kernel3([0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0]), LAPLACIAN);
    }

    #[test]
    fn linear_ramp_responses() {
        let img = ramp(5, 5);
        // d/dx = 1, d/dy = 10
        assert_eq!(correlate3x3_pair(&img, 2, 2, &SOBEL_X, &SOBEL_Y), (8.0, 80.0));
        assert_eq!(correlate3x3_pair(&img, 1, 3, &PREWITT_X, &PREWITT_Y), (6.0, 60.0));
        assert_eq!(correlate3x3(&img, 2, 2, &LAPLACIAN), 0.0);
    }

    #[test]
    fn roberts_masks_take_diagonal_differences() {
        let img = ramp(3, 3);
        // p(0,0)=0, p(1,0)=1, p(0,1)=10, p(1,1)=11
        assert_eq!(correlate2x2(&img, 0, 0, &ROBERTS_X), -11.0);
        assert_eq!(correlate2x2(&img, 0, 0, &ROBERTS_Y), -9.0);
    }
}
