//! Owned single-channel plane in row-major layout (stride == width).
//!
//! `ImageF64` carries luminance, `ImageF32` carries gradient magnitude and
//! direction. Both are zero-initialised so unprocessed border pixels read 0.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuf<T> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

pub type ImageF32 = ImageBuf<f32>;
pub type ImageF64 = ImageBuf<f64>;

impl<T: Copy + Default> ImageBuf<T> {
    /// Construct a zero-initialized plane of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![T::default(); w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl<T: Copy> ImageView for ImageBuf<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> ImageViewMut for ImageBuf<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_plane_is_zeroed_and_row_major() {
        let mut img = ImageF32::new(3, 2);
        assert!(img.data.iter().all(|&v| v == 0.0));
        img.set(2, 1, 7.5);
        assert_eq!(img.idx(2, 1), 5);
        assert_eq!(img.row(1), &[0.0, 0.0, 7.5]);
        assert!(img.is_contiguous());
    }
}
