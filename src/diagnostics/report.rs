use super::TimingBreakdown;
use crate::detector::Operator;
use crate::image::{PixelBuffer, CHANNELS};
use serde::Serialize;

/// Result produced by [`EdgeDetector::process`](crate::EdgeDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub operator: Operator,
    pub threshold: f64,
    pub blur_radius: usize,
    pub width: u32,
    pub height: u32,
    /// Number of pixels classified as edge (255).
    pub edge_count: usize,
    pub timing: TimingBreakdown,
    #[serde(skip)]
    pub output: PixelBuffer,
}

/// Count opaque pixels whose red channel is 255.
pub fn count_edges(map: &PixelBuffer) -> usize {
    map.pixels()
        .chunks_exact(CHANNELS)
        .filter(|px| px[0] == 255 && px[3] == 255)
        .count()
}
