//! Whole-document JSON persistence shared by the file-backed adapters

use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

/// Read a JSON document. A missing or blank file reads as `T::default()`.
pub async fn read_json<T: DeserializeOwned + Default>(path: &Path) -> std::io::Result<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e),
    };

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&content).map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))
}

/// Write a JSON document through a temp file and rename, so readers never
/// observe a half-written file.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_string_pretty(value)
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await
}
