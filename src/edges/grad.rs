//! Image gradients (Sobel/Prewitt) with magnitude and direction.
//!
//! - Correlates a 3×3 kernel pair (`X` and `Y`) with the gray plane.
//! - Only interior pixels are computed; the outer frame stays at zero
//!   magnitude and zero direction so it never qualifies as an edge.
//! - `magnitude = sqrt(gx^2 + gy^2)`, `direction = atan2(gy, gx)` in (−π, π].
//!
//! Sums are accumulated in `f64` and stored as `f32`.
use crate::gray::luminance;
use crate::image::{ImageF32, ImageF64, PixelBuffer};
use crate::kernels::{correlate3x3_pair, Kernel3, PREWITT_X, PREWITT_Y, SOBEL_X, SOBEL_Y};
use crate::parallel::for_each_row_pair_mut;
use serde::{Deserialize, Serialize};

/// Named kernel pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKernel {
    Sobel,
    Prewitt,
}

impl GradientKernel {
    pub fn kernels(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            GradientKernel::Sobel => (&SOBEL_X, &SOBEL_Y),
            GradientKernel::Prewitt => (&PREWITT_X, &PREWITT_Y),
        }
    }
}

/// Per-pixel gradient magnitude and direction.
#[derive(Clone, Debug)]
pub struct GradientField {
    pub width: u32,
    pub height: u32,
    /// `sqrt(gx^2 + gy^2)`, zero on the border
    pub magnitude: ImageF32,
    /// `atan2(gy, gx)` in radians, zero on the border
    pub direction: ImageF32,
}

impl GradientField {
    fn zeroed(width: u32, height: u32) -> Self {
        let (w, h) = (width as usize, height as usize);
        Self {
            width,
            height,
            magnitude: ImageF32::new(w, h),
            direction: ImageF32::new(w, h),
        }
    }

    #[inline]
    pub fn magnitude_at(&self, x: usize, y: usize) -> f32 {
        self.magnitude.get(x, y)
    }

    #[inline]
    pub fn direction_at(&self, x: usize, y: usize) -> f32 {
        self.direction.get(x, y)
    }

    /// True when the field has at least one interior pixel.
    pub fn has_interior(&self) -> bool {
        self.width >= 3 && self.height >= 3
    }
}

/// Gradient of `buffer` under an arbitrary 3×3 kernel pair.
pub fn gradient(buffer: &PixelBuffer, kernel_x: &Kernel3, kernel_y: &Kernel3) -> GradientField {
    gradient_from_luminance(&luminance(buffer), kernel_x, kernel_y)
}

pub fn gradient_from_luminance(
    gray: &ImageF64,
    kernel_x: &Kernel3,
    kernel_y: &Kernel3,
) -> GradientField {
    let mut field = GradientField::zeroed(gray.w as u32, gray.h as u32);
    if !field.has_interior() {
        return field;
    }
    let (w, h) = (gray.w, gray.h);
    let GradientField {
        magnitude,
        direction,
        ..
    } = &mut field;
    for_each_row_pair_mut(
        &mut magnitude.data,
        &mut direction.data,
        w,
        |y, mag_row, dir_row| {
            if y == 0 || y + 1 >= h {
                return;
            }
            for x in 1..w - 1 {
                let (gx, gy) = correlate3x3_pair(gray, x, y, kernel_x, kernel_y);
                mag_row[x] = (gx * gx + gy * gy).sqrt() as f32;
                dir_row[x] = gy.atan2(gx) as f32;
            }
        },
    );
    field
}

pub fn sobel_gradients(buffer: &PixelBuffer) -> GradientField {
    gradient(buffer, &SOBEL_X, &SOBEL_Y)
}

pub fn prewitt_gradients(buffer: &PixelBuffer) -> GradientField {
    gradient(buffer, &PREWITT_X, &PREWITT_Y)
}
