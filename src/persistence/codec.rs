//! JSON files and binary snapshots.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::{GameError, Result};

fn io_error(path: &Path, source: std::io::Error) -> GameError {
    GameError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Serialize to pretty-printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| GameError::format(e.to_string()))
}

/// Parse JSON text.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| GameError::format(e.to_string()))
}

/// Write `value` as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    let json = to_json(value)?;
    fs::write(path, json).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), "saved");
    Ok(())
}

/// Read and parse a JSON file.
///
/// A missing file is an `Io` error; malformed content is `Format`.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let value = from_json(&json)?;
    debug!(path = %path.display(), "loaded");
    Ok(value)
}

/// Compact binary encoding for in-memory snapshots.
pub fn encode_snapshot<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| GameError::format(e.to_string()))
}

/// Decode a snapshot produced by `encode_snapshot`.
pub fn decode_snapshot<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| GameError::format(e.to_string()))
}
