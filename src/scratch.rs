//! Temporary directories for tests that touch the file system.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Empty directory under the system temporary directory, removed again when dropped.
pub(crate) struct ScratchDir {
    /// Location of the directory.
    path: PathBuf,
}

impl ScratchDir {
    /// Creates a fresh directory whose name is unique to `name` and the running process.
    pub(crate) fn new(name: &str) -> Self {
        let path = env::temp_dir().join(format!("wavemaze-{name}-{}", std::process::id()));
        if path.exists() {
            fs::remove_dir_all(&path).expect("stale scratch directory should be removable");
        }
        fs::create_dir_all(&path).expect("scratch directory should be creatable");

        Self { path }
    }

    /// Returns the location of the directory.
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(error) = fs::remove_dir_all(&self.path) {
            eprintln!("failed to remove {}: {error}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_dir_is_removed_on_drop() {
        let dir = ScratchDir::new("scratch-drop");
        let path = dir.path().to_path_buf();
        fs::write(path.join("left.maze"), "#").expect("file should be written");

        drop(dir);

        assert!(!path.exists());
    }
}
