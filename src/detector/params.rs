//! Parameter types configuring the detector pipeline.
//!
//! Defaults match the common interactive setting: Sobel at threshold 50 with
//! no preprocessing blur.
use crate::edges::{canny, laplacian, prewitt, roberts, sobel};
use crate::image::PixelBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge operator selected for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    Sobel,
    Prewitt,
    Roberts,
    Laplacian,
    Canny,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Sobel,
        Operator::Prewitt,
        Operator::Roberts,
        Operator::Laplacian,
        Operator::Canny,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Sobel => "sobel",
            Operator::Prewitt => "prewitt",
            Operator::Roberts => "roberts",
            Operator::Laplacian => "laplacian",
            Operator::Canny => "canny",
        }
    }

    /// Run the operator on `buffer`.
    pub fn apply(self, buffer: &PixelBuffer, threshold: f64) -> PixelBuffer {
        match self {
            Operator::Sobel => sobel(buffer, threshold),
            Operator::Prewitt => prewitt(buffer, threshold),
            Operator::Roberts => roberts(buffer, threshold),
            Operator::Laplacian => laplacian(buffer, threshold),
            Operator::Canny => canny(buffer, threshold),
        }
    }

    /// Whether the outer 1-pixel frame is guaranteed non-edge.
    pub fn clears_border(self) -> bool {
        !matches!(self, Operator::Roberts)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    pub operator: Operator,
    /// Magnitudes strictly above this value are edges.
    pub threshold: f64,
    /// Gaussian preprocessing radius; 0 disables the blur.
    pub blur_radius: usize,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            operator: Operator::Sobel,
            threshold: 50.0,
            blur_radius: 0,
        }
    }
}
