//! Boundary with an externally provided, natively compiled vision backend.
//!
//! A backend exposes the same conceptual operations as the core (grayscale,
//! Gaussian blur, Sobel, Laplacian, Canny) over `PixelBuffer`s, but its
//! numerics are its own: no bit-exact agreement with the core is implied.
//!
//! Backends become usable only after a readiness step. [`NativeProcessor`]
//! models this as an explicit two-state handle; every operation issued while
//! `Uninitialized` fails with [`EdgeError::NotInitialized`].
//!
//! ```
//! use edge_detector::native::{CoreBackend, NativeProcessor};
//! use edge_detector::{EdgeError, PixelBuffer};
//!
//! # fn main() -> Result<(), EdgeError> {
//! let image = PixelBuffer::filled(8, 8, [10, 20, 30, 255]);
//! let mut processor = NativeProcessor::<CoreBackend>::new();
//! assert!(matches!(processor.grayscale(&image), Err(EdgeError::NotInitialized)));
//!
//! processor.initialize(|| Ok(CoreBackend::default()))?;
//! let gray = processor.grayscale(&image)?;
//! assert_eq!(gray.pixel(0, 0), [20, 20, 20, 255]);
//! # Ok(())
//! # }
//! ```
mod core_backend;

pub use self::core_backend::{sigma_for_ksize, CoreBackend};

use crate::error::{EdgeError, Result};
use crate::image::PixelBuffer;
use log::debug;

pub const DEFAULT_BLUR_KSIZE: usize = 5;
/// Non-positive sigma lets the backend derive it from the kernel size.
pub const DEFAULT_BLUR_SIGMA: f64 = 0.0;
pub const DEFAULT_SOBEL_KSIZE: usize = 3;
pub const DEFAULT_LAPLACIAN_KSIZE: usize = 3;
pub const DEFAULT_CANNY_LOW: f64 = 50.0;
pub const DEFAULT_CANNY_HIGH: f64 = 150.0;

/// Operations a native vision backend provides once initialized.
pub trait NativeBackend {
    /// Free-form build description of the backend.
    fn build_info(&self) -> String;

    /// Gray image in RGBA layout.
    fn grayscale(&self, image: &PixelBuffer) -> Result<PixelBuffer>;

    fn gaussian_blur(&self, image: &PixelBuffer, ksize: usize, sigma: f64) -> Result<PixelBuffer>;

    /// Gradient magnitude visualisation.
    fn sobel(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer>;

    /// Absolute Laplacian response visualisation.
    fn laplacian(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer>;

    fn canny(&self, image: &PixelBuffer, low_threshold: f64, high_threshold: f64)
        -> Result<PixelBuffer>;
}

/// Handle to a backend that must be initialized before use.
#[derive(Debug)]
pub enum NativeProcessor<B> {
    Uninitialized,
    Ready(B),
}

impl<B> Default for NativeProcessor<B> {
    fn default() -> Self {
        NativeProcessor::Uninitialized
    }
}

impl<B: NativeBackend> NativeProcessor<B> {
    pub fn new() -> Self {
        NativeProcessor::Uninitialized
    }

    /// Run the readiness step. A ready handle keeps its backend and does not
    /// call `loader`; a failing loader leaves the handle uninitialized.
    pub fn initialize<F>(&mut self, loader: F) -> Result<&B>
    where
        F: FnOnce() -> Result<B>,
    {
        if matches!(self, NativeProcessor::Uninitialized) {
            let backend = loader()?;
            debug!("native backend initialized: {}", backend.build_info());
            *self = NativeProcessor::Ready(backend);
        }
        self.backend()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, NativeProcessor::Ready(_))
    }

    pub fn backend(&self) -> Result<&B> {
        match self {
            NativeProcessor::Ready(backend) => Ok(backend),
            NativeProcessor::Uninitialized => Err(EdgeError::NotInitialized),
        }
    }

    pub fn build_info(&self) -> String {
        match self {
            NativeProcessor::Ready(backend) => backend.build_info(),
            NativeProcessor::Uninitialized => "not initialized".to_string(),
        }
    }

    pub fn grayscale(&self, image: &PixelBuffer) -> Result<PixelBuffer> {
        self.backend()?.grayscale(image)
    }

    pub fn gaussian_blur(&self, image: &PixelBuffer, ksize: usize, sigma: f64) -> Result<PixelBuffer> {
        self.backend()?.gaussian_blur(image, ksize, sigma)
    }

    pub fn sobel(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer> {
        self.backend()?.sobel(image, ksize)
    }

    pub fn laplacian(&self, image: &PixelBuffer, ksize: usize) -> Result<PixelBuffer> {
        self.backend()?.laplacian(image, ksize)
    }

    pub fn canny(
        &self,
        image: &PixelBuffer,
        low_threshold: f64,
        high_threshold: f64,
    ) -> Result<PixelBuffer> {
        self.backend()?.canny(image, low_threshold, high_threshold)
    }
}
