//! Detector pipeline: optional Gaussian blur followed by one edge operator.
//!
//! Typical usage:
//! ```no_run
//! use edge_detector::{EdgeDetector, EdgeParams, Operator, PixelBuffer};
//!
//! # fn example(image: PixelBuffer) {
//! let detector = EdgeDetector::new(EdgeParams {
//!     operator: Operator::Laplacian,
//!     threshold: 30.0,
//!     blur_radius: 2,
//! });
//! let report = detector.process(&image);
//! println!("edges: {}", report.edge_count);
//! # }
//! ```
use super::params::EdgeParams;
use crate::diagnostics::{count_edges, timed, DetectionReport, TimingBreakdown};
use crate::filters::gaussian_blur;
use crate::image::PixelBuffer;
use log::debug;
use std::borrow::Cow;
use std::time::Instant;

/// Stateless edge detector; every call works on its own buffers.
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    params: EdgeParams,
}

impl EdgeDetector {
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Blur `image` when a radius is configured, borrowing it otherwise.
    pub fn preprocess<'a>(&self, image: &'a PixelBuffer) -> Cow<'a, PixelBuffer> {
        if self.params.blur_radius == 0 {
            Cow::Borrowed(image)
        } else {
            Cow::Owned(gaussian_blur(image, self.params.blur_radius))
        }
    }

    /// Run the configured pipeline and collect timings.
    pub fn process(&self, image: &PixelBuffer) -> DetectionReport {
        let total_start = Instant::now();
        let params = &self.params;
        let mut timing = TimingBreakdown::default();

        let (source, blur_ms) = timed(|| self.preprocess(image));
        if params.blur_radius > 0 {
            timing.push("blur", blur_ms);
        }

        let (output, detect_ms) = timed(|| params.operator.apply(&source, params.threshold));
        timing.push(params.operator.as_str(), detect_ms);

        let edge_count = count_edges(&output);
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "EdgeDetector::process {}x{} operator={} threshold={} blur_radius={} edges={} total_ms={:.3}",
            image.width(),
            image.height(),
            params.operator,
            params.threshold,
            params.blur_radius,
            edge_count,
            timing.total_ms
        );

        DetectionReport {
            operator: params.operator,
            threshold: params.threshold,
            blur_radius: params.blur_radius,
            width: image.width(),
            height: image.height(),
            edge_count,
            timing,
            output,
        }
    }
}
