//! JSON configuration for the `edge_tool` binary.
pub mod edge;

pub use edge::{load_config, parse_config, EdgeOutputConfig, EdgeToolConfig, RawImageConfig};
