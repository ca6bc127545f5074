//! Local persistence of provisioned nodes.
//!
//! A node is written as pretty-printed JSON to `info.json` inside its
//! destination directory (see [`Config::node_dir`](crate::config::Config::node_dir)).

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::NodeRecord;

/// Node file name inside the destination directory
pub const NODE_FILE: &str = "info.json";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize node: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write `node` to `destination_dir/info.json`, creating the directory tree
/// as needed. Returns the path of the written file.
pub fn save(node: &NodeRecord, destination_dir: &Path) -> Result<PathBuf, StorageError> {
    let contents = serde_json::to_vec_pretty(node)?;

    std::fs::create_dir_all(destination_dir).map_err(|source| StorageError::CreateDir {
        path: destination_dir.to_path_buf(),
        source,
    })?;

    let path = destination_dir.join(NODE_FILE);
    std::fs::write(&path, contents).map_err(|source| StorageError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), node_id = %node.id, "Node saved");
    Ok(path)
}
