//! Edge operators over RGBA buffers.
//!
//! - Gradient computation (Sobel/Prewitt) producing per-pixel magnitude and
//!   direction on interior pixels. The 1-pixel frame is left at zero.
//! - Thresholding of a magnitude plane into a binary 0/255 visualisation.
//! - Direction-aligned non-maximum suppression over four sectors.
//! - Complete detectors: Sobel, Prewitt, Roberts Cross, Laplacian and a
//!   single-threshold Canny.

pub mod grad;
pub mod nms;
pub mod operators;
pub mod threshold;

pub use grad::{
    gradient, gradient_from_luminance, prewitt_gradients, sobel_gradients, GradientField,
    GradientKernel,
};
pub use nms::{is_local_maximum, quantize_degrees, DirectionSector};
pub use operators::{canny, laplacian, prewitt, roberts, sobel};
pub use threshold::{binarize, classify, magnitude_map};
