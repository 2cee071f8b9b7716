use crate::detector::EdgeParams;
use crate::error::{EdgeError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: RawImageConfig,
    #[serde(default)]
    pub edge: EdgeParams,
    pub output: EdgeOutputConfig,
}

/// Raw RGBA input; the file must hold exactly `width * height * 4` bytes.
#[derive(Debug, Deserialize)]
pub struct RawImageConfig {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    #[serde(rename = "edges_image")]
    pub edges_image: PathBuf,
    /// Optional Sobel magnitude visualisation of the (blurred) input.
    #[serde(default)]
    pub magnitude_image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn parse_config(data: &str) -> Result<EdgeToolConfig> {
    serde_json::from_str(data).map_err(|e| EdgeError::Config(format!("failed to parse config: {e}")))
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig> {
    let data = fs::read_to_string(path)
        .map_err(|e| EdgeError::Config(format!("failed to read config {}: {e}", path.display())))?;
    parse_config(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::Operator;

    #[test]
    fn edge_section_defaults_when_missing() {
        let cfg = parse_config(
            r#"{
                "input": { "path": "in.rgba", "width": 4, "height": 3 },
                "output": { "edges_image": "out.rgba", "report_json": "out.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.edge, EdgeParams::default());
        assert_eq!(cfg.input.width, 4);
        assert!(cfg.output.magnitude_image.is_none());
    }

    #[test]
    fn partial_edge_section_keeps_other_defaults() {
        let cfg = parse_config(
            r#"{
                "input": { "path": "in.rgba", "width": 4, "height": 3 },
                "edge": { "operator": "canny", "blur_radius": 2 },
                "output": {
                    "edges_image": "out.rgba",
                    "magnitude_image": "mag.rgba",
                    "report_json": "out.json"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.edge.operator, Operator::Canny);
        assert_eq!(cfg.edge.blur_radius, 2);
        assert_eq!(cfg.edge.threshold, 50.0);
        assert_eq!(cfg.output.magnitude_image, Some(PathBuf::from("mag.rgba")));
    }

    #[test]
    fn unknown_operator_is_a_config_error() {
        let err = parse_config(
            r#"{
                "input": { "path": "in.rgba", "width": 1, "height": 1 },
                "edge": { "operator": "scharr" },
                "output": { "edges_image": "o", "report_json": "r" }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EdgeError::Config(_)));
    }
}
