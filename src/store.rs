//! Shared persistence plumbing for the on-disk stores.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub fn path_rel_home(rel: &str) -> Result<PathBuf> {
    dirs::home_dir()
        .map(|p| p.join(rel))
        .ok_or(anyhow!("Could not find home directory"))
}

/// Full-file rewrite of a store.
pub async fn write_full(path: &Path, contents: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            anyhow!(
                "Could not create directory `{}`: {}",
                parent.to_string_lossy(),
                e
            )
        })?;
    }

    // Create a temporary file in the same directory.
    let tmp_path = path.with_extension("json.new");

    tokio::fs::write(&tmp_path, contents).await.map_err(|e| {
        anyhow!(
            "Could not write store to temporary file `{}`: {}",
            tmp_path.to_string_lossy(),
            e
        )
    })?;

    // Atomically rename the temporary file over the target file.
    tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
        anyhow!(
            "Could not rename temporary file `{}` to `{}`: {}",
            tmp_path.to_string_lossy(),
            path.to_string_lossy(),
            e
        )
    })?;

    Ok(())
}
