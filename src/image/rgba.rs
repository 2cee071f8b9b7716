//! Owned RGBA raster in row-major order, 4 bytes per pixel.
//!
//! The shape invariant `pixels.len() == width * height * 4` is checked once in
//! [`PixelBuffer::new`]; every other constructor builds a correctly sized
//! buffer, so the numeric stages index without further checks.
use crate::error::{EdgeError, Result};

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes, failing fast when the length does not match.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let actual = pixels.len();
        match byte_len(width, height) {
            Some(expected) if expected == actual => Ok(Self {
                width,
                height,
                pixels,
            }),
            expected => Err(EdgeError::InvalidBufferShape {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual,
            }),
        }
    }

    /// All-zero buffer (transparent black).
    pub fn zeroed(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0; CHANNELS])
    }

    pub fn filled(width: u32, height: u32, rgba: [u8; CHANNELS]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> [u8; CHANNELS],
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// RGBA value at (x, y). Panics when out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; CHANNELS]) {
        let i = self.offset(x, y);
        self.pixels[i..i + CHANNELS].copy_from_slice(&rgba);
    }

    /// Raw bytes of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.pixels[start..start + stride]
    }
}
