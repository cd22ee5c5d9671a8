use std::path::{Path, PathBuf};

/// Absolutize a path lexically, without requiring it to exist
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
