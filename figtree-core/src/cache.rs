use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const SNAPSHOT_FILE: &str = "data.json";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Snapshot IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Wipe and recreate the snapshot directory. Every run starts from an
/// empty directory; nothing in it is ever reused.
pub fn reset_snapshot_dir(dir: &Path) -> Result<(), CacheError> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write the full raw response, pretty-printed, for later inspection.
pub fn write_snapshot(dir: &Path, data: &Value) -> Result<PathBuf, CacheError> {
    let path = dir.join(SNAPSHOT_FILE);
    fs::write(&path, serde_json::to_string_pretty(data)?)?;
    debug!("Snapshot written to {}", path.display());
    Ok(path)
}
