//! I/O helpers for raw RGBA buffers and JSON.
//!
//! - `load_rgba_raw`: read `width * height * 4` bytes into a `PixelBuffer`.
//! - `save_rgba_raw`: write a `PixelBuffer` as raw bytes.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! No image codec is involved; callers decode and encode elsewhere.
use super::PixelBuffer;
use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load raw RGBA bytes; the length is validated by [`PixelBuffer::new`].
pub fn load_rgba_raw(path: &Path, width: u32, height: u32) -> Result<PixelBuffer> {
    let data = fs::read(path)?;
    PixelBuffer::new(width, height, data)
}

pub fn save_rgba_raw(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, buffer.pixels())?;
    Ok(())
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgeError;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("edge-detector-io-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn raw_buffer_survives_disk() {
        let path = scratch_path("roundtrip.rgba");
        let buf = PixelBuffer::from_fn(4, 3, |x, y| [x as u8, y as u8, 42, 255]);
        save_rgba_raw(&buf, &path).unwrap();
        let loaded = load_rgba_raw(&path, 4, 3).unwrap();
        assert_eq!(loaded, buf);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn wrong_dimensions_fail_at_load() {
        let path = scratch_path("short.rgba");
        save_rgba_raw(&PixelBuffer::zeroed(2, 2), &path).unwrap();
        let err = load_rgba_raw(&path, 3, 3).unwrap_err();
        assert!(matches!(err, EdgeError::InvalidBufferShape { .. }));
        let _ = fs::remove_file(&path);
    }
}
