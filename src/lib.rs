#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod native;

// Numeric building blocks.
pub mod edges;
pub mod filters;
pub mod gray;
pub mod kernels;

mod parallel;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{EdgeDetector, EdgeParams, Operator};
pub use crate::diagnostics::DetectionReport;
pub use crate::error::EdgeError;
pub use crate::image::PixelBuffer;

pub use crate::edges::{canny, laplacian, prewitt, roberts, sobel, GradientField};
pub use crate::filters::gaussian_blur;
pub use crate::gray::to_gray;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::image::PixelBuffer;
    pub use crate::{DetectionReport, EdgeDetector, EdgeParams, Operator};
}
