//! Edge detector facade.
//!
//! - [`params`] – configuration types used by the detector and CLI.
//! - `pipeline` – the [`EdgeDetector`] driving blur and operator stages.

pub mod params;
mod pipeline;

pub use params::{EdgeParams, Operator};
pub use pipeline::EdgeDetector;
